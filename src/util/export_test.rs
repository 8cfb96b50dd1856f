use super::*;

fn product() -> Product {
    Product {
        title: "velvet sofa XL".to_owned(),
        price: 899.5,
        kind: "sofa".to_owned(),
        quantity: 3.0,
        discount: 10.0,
        main_image: "uploads\\sofa.jpg".to_owned(),
        ..Product::default()
    }
}

#[test]
fn product_row_formats_like_the_table() {
    let row = product_row(0, &product());
    assert_eq!(row[0], "1");
    assert_eq!(row[1], "Velvet sofa XL");
    assert_eq!(row[2], "$899.5");
    assert_eq!(row[3], "Sofa");
    assert_eq!(row[4], "/dev-api/uploads/sofa.jpg");
}

#[test]
fn row_numbers_are_one_based() {
    assert_eq!(product_row(4, &product())[0], "5");
    assert_eq!(user_row(2, &User::default())[0], "3");
}

#[test]
fn missing_main_image_exports_a_placeholder() {
    let mut product = product();
    product.main_image = String::new();
    assert_eq!(product_row(0, &product)[4], "No Image");
}

#[test]
fn user_row_combines_capitalized_names_and_groups_the_phone() {
    let user = User {
        first_name: "ada".to_owned(),
        last_name: "LOVELACE".to_owned(),
        email: "ada@mail.io".to_owned(),
        number: "5551234567".to_owned(),
        ..User::default()
    };
    assert_eq!(user_row(0, &user), [
        "1".to_owned(),
        "Ada Lovelace".to_owned(),
        "ada@mail.io".to_owned(),
        "555-1234-567".to_owned(),
    ]);
}

#[test]
fn workbooks_serialize_to_zip_containers() {
    let bytes = products_workbook(&[product()]).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let bytes = users_workbook(&[User::default()]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn headers_and_widths_stay_in_step() {
    assert_eq!(PRODUCT_HEADERS.len(), PRODUCT_WIDTHS.len());
    assert_eq!(USER_HEADERS.len(), USER_WIDTHS.len());
}
