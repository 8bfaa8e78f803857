use super::*;

#[test]
fn default_source_targets_api_slots() {
    let source = GlooSlotSource::default();
    assert_eq!(source.request_path("2024-05-01"), "/api/slots?date=2024-05-01");
}

#[test]
fn custom_endpoint_is_kept() {
    let source = GlooSlotSource::new("/booking/api/slots");
    assert_eq!(source.request_path("2024-05-01"), "/booking/api/slots?date=2024-05-01");
}

#[test]
fn request_path_escapes_date() {
    let source = GlooSlotSource::default();
    assert_eq!(source.request_path("1 May"), "/api/slots?date=1+May");
}

#[test]
fn unavailable_message_mentions_browser() {
    assert!(unavailable_message().contains("browser"));
}
