use super::*;

#[test]
fn base_api_defaults_to_dev_proxy_path() {
    assert_eq!(base_api(), "/dev-api");
}

#[test]
fn product_endpoints_format_expected_paths() {
    assert_eq!(products_endpoint(), "/dev-api/products/getProducts");
    assert_eq!(product_endpoint("p1"), "/dev-api/products/getProduct/p1");
    assert_eq!(product_add_endpoint(), "/dev-api/products/add");
    assert_eq!(product_update_endpoint("p1"), "/dev-api/products/update/p1");
    assert_eq!(product_delete_endpoint("p1"), "/dev-api/products/delete/p1");
}

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(login_endpoint(), "/dev-api/auth/login");
    assert_eq!(users_endpoint(), "/dev-api/auth/users");
    assert_eq!(user_endpoint("u1"), "/dev-api/auth/getUser/u1");
    assert_eq!(user_delete_endpoint("u1"), "/dev-api/auth/deleteUser/u1");
}

#[test]
fn message_endpoints_format_expected_paths() {
    assert_eq!(messages_endpoint(), "/dev-api/messages/allMessages");
    assert_eq!(message_endpoint("m1"), "/dev-api/messages/getMessage/m1");
    assert_eq!(message_delete_endpoint("m1"), "/dev-api/messages/deleteMessage/m1");
}

#[test]
fn image_fields_pair_each_slot_with_replace_and_old_names() {
    assert_eq!(IMAGE_FIELDS[0], ("MainImage", "replaceMainImage", "oldMainImage"));
    assert_eq!(IMAGE_FIELDS[1], ("image2", "replaceImage2", "oldImage2"));
    assert_eq!(IMAGE_FIELDS[2], ("image3", "replaceImage3", "oldImage3"));
    assert_eq!(IMAGE_FIELDS[3], ("image4", "replaceImage4", "oldImage4"));
}
