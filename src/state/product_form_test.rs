use super::*;

fn valid_form() -> ProductForm {
    ProductForm {
        title: "Oak Chair".to_owned(),
        price: Some(120.0),
        discount: Some(0.0),
        quantity: Some(4.0),
        description: "Solid oak".to_owned(),
        category: "chair".to_owned(),
    }
}

#[test]
fn valid_form_passes() {
    assert_eq!(valid_form().validate(), None);
}

#[test]
fn every_field_is_required() {
    let mut form = valid_form();
    form.title = "  ".to_owned();
    assert_eq!(form.validate(), Some("Title is required"));

    let mut form = valid_form();
    form.price = None;
    assert_eq!(form.validate(), Some("Price is required"));

    let mut form = valid_form();
    form.discount = None;
    assert_eq!(form.validate(), Some("Discount is required"));

    let mut form = valid_form();
    form.quantity = None;
    assert_eq!(form.validate(), Some("Quantity is required"));

    let mut form = valid_form();
    form.description = String::new();
    assert_eq!(form.validate(), Some("Description is required"));

    let mut form = valid_form();
    form.category = String::new();
    assert_eq!(form.validate(), Some("Category is required"));
}

#[test]
fn price_and_quantity_must_be_positive() {
    let mut form = valid_form();
    form.price = Some(0.0);
    assert_eq!(form.validate(), Some("Price must be greater than zero"));

    let mut form = valid_form();
    form.quantity = Some(-1.0);
    assert_eq!(form.validate(), Some("Quantity must be greater than zero"));
}

#[test]
fn discount_allows_zero_but_not_negative() {
    let mut form = valid_form();
    form.discount = Some(0.0);
    assert_eq!(form.validate(), None);
    form.discount = Some(-5.0);
    assert_eq!(form.validate(), Some("Discount cannot be negative"));
}

#[test]
fn from_product_round_trips_existing_fields() {
    let product = crate::net::types::Product {
        title: "Velvet Sofa".to_owned(),
        price: 899.5,
        discount: 10.0,
        quantity: 2.0,
        description: "Three-seater".to_owned(),
        kind: "sofa".to_owned(),
        ..crate::net::types::Product::default()
    };
    let form = ProductForm::from_product(&product);
    assert_eq!(form.title, "Velvet Sofa");
    assert_eq!(form.price, Some(899.5));
    assert_eq!(form.category, "sofa");
    assert_eq!(form.validate(), None);
}

#[test]
fn field_pairs_use_wire_names_and_plain_numbers() {
    let pairs = valid_form().field_pairs();
    assert_eq!(pairs[0], ("title", "Oak Chair".to_owned()));
    assert_eq!(pairs[1], ("price", "120".to_owned()));
    assert_eq!(pairs[3], ("discount", "0".to_owned()));
    assert_eq!(pairs[4], ("quantity", "4".to_owned()));
    assert_eq!(pairs[5], ("type", "chair".to_owned()));
}

#[test]
fn parse_number_accepts_decimals_and_rejects_junk() {
    assert_eq!(parse_number("12.5"), Some(12.5));
    assert_eq!(parse_number(" 7 "), Some(7.0));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("abc"), None);
}
