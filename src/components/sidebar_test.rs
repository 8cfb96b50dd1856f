use super::is_active;

#[test]
fn links_claim_their_detail_routes() {
    assert!(is_active("/products-list", "/products-list"));
    assert!(is_active("/product-detail/64f1", "/products-list"));
    assert!(is_active("/user-detail/64f1", "/users-list"));
    assert!(is_active("/emails/64f1", "/emails"));
}

#[test]
fn links_stay_inactive_elsewhere() {
    assert!(!is_active("/emails", "/users-list"));
    assert!(!is_active("/", "/products-list"));
    assert!(!is_active("/users-list", "/emails"));
}
