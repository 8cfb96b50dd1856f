use super::*;

#[test]
fn product_decodes_renamed_and_default_fields() {
    let raw = r#"{
        "products": [{
            "_id": "64f1c0ffee0ddba11ca7e511",
            "title": "oak chair",
            "price": 129.5,
            "discount": 10,
            "quantity": 4,
            "description": "solid oak",
            "type": "chair",
            "MainImage": "uploads/chair.png",
            "createdAt": "2025-03-01T10:15:00.000Z"
        }]
    }"#;
    let envelope: ProductsResponse = serde_json::from_str(raw).unwrap();
    let product = &envelope.products[0];
    assert_eq!(product.id, "64f1c0ffee0ddba11ca7e511");
    assert_eq!(product.kind, "chair");
    assert_eq!(product.main_image, "uploads/chair.png");
    // image2..image4 were absent and default to empty.
    assert_eq!(product.image2, "");
    assert_eq!(product.image4, "");
}

#[test]
fn product_images_are_in_slot_order() {
    let product = Product {
        main_image: "a.png".to_owned(),
        image3: "c.png".to_owned(),
        ..Product::default()
    };
    assert_eq!(product.images(), ["a.png", "", "c.png", ""]);
}

#[test]
fn user_decodes_with_missing_optional_fields() {
    let raw = r#"{
        "user": {
            "_id": "64f1c0ffee0ddba11ca7e512",
            "firstName": "jane",
            "lastName": "doe",
            "email": "j@x.com"
        }
    }"#;
    let envelope: UserResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.user.first_name, "jane");
    assert_eq!(envelope.user.number, "");
    assert_eq!(envelope.user.role, "");
}

#[test]
fn message_body_maps_from_message_field() {
    let raw = r#"{
        "message": {
            "_id": "64f1c0ffee0ddba11ca7e513",
            "name": "Sam",
            "email": "sam@example.com",
            "subject": "Delivery",
            "message": "When will my sofa arrive?",
            "createdAt": "2025-04-02T08:00:00.000Z",
            "updatedAt": "2025-04-02T08:00:00.000Z"
        }
    }"#;
    let envelope: MessageResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.message.body, "When will my sofa arrive?");
    assert_eq!(envelope.message.subject, "Delivery");
}

#[test]
fn login_response_carries_token_and_user() {
    let raw = r#"{"token": "abc.def.ghi", "user": {"_id": "1", "email": "a@b.c", "role": "admin"}}"#;
    let login: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(login.token, "abc.def.ghi");
    assert_eq!(login.user.role, "admin");
}

#[test]
fn update_response_success_defaults_to_false() {
    let ack: UpdateResponse = serde_json::from_str("{}").unwrap();
    assert!(!ack.success);
    let ack: UpdateResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(ack.success);
}
