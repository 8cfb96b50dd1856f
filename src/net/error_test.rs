use super::*;

#[test]
fn from_status_maps_404_to_not_found() {
    assert_eq!(ApiError::from_status(404), ApiError::NotFound);
}

#[test]
fn from_status_keeps_other_statuses() {
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    assert_eq!(ApiError::from_status(401), ApiError::Status(401));
}

#[test]
fn is_not_found_only_for_not_found() {
    assert!(ApiError::NotFound.is_not_found());
    assert!(!ApiError::Status(404).is_not_found());
    assert!(!ApiError::Network("offline".to_owned()).is_not_found());
}

#[test]
fn display_messages_are_stable() {
    assert_eq!(ApiError::NotFound.to_string(), "not found");
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(
        ApiError::Decode("missing field".to_owned()).to_string(),
        "invalid response: missing field"
    );
}
