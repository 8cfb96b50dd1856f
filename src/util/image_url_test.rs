use super::*;

#[test]
fn absolute_urls_are_left_untouched() {
    assert_eq!(normalize("https://cdn.example.com/chair.jpg"), "https://cdn.example.com/chair.jpg");
    assert_eq!(normalize("http://localhost:5000/uploads/a.png"), "http://localhost:5000/uploads/a.png");
}

#[test]
fn relative_paths_join_the_api_base() {
    assert_eq!(normalize("uploads/chair.jpg"), "/dev-api/uploads/chair.jpg");
    assert_eq!(normalize("/uploads/chair.jpg"), "/dev-api/uploads/chair.jpg");
}

#[test]
fn backslash_paths_are_flattened() {
    assert_eq!(normalize("uploads\\2024\\chair.jpg"), "/dev-api/uploads/2024/chair.jpg");
}

#[test]
fn empty_path_stays_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("  "), "");
}

#[test]
fn has_image_rejects_blank_slots() {
    assert!(has_image("uploads/a.jpg"));
    assert!(!has_image(""));
    assert!(!has_image("   "));
}
