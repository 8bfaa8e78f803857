use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = SlotsConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, SlotsConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.endpoint_path, "/api/slots");
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.stale_policy, StalePolicy::DiscardStale);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = SlotsConfig::from_lookup(lookup_from(&[
        ("SLOTS_BASE_URL", "https://booking.example.test/"),
        ("SLOTS_ENDPOINT_PATH", "v2/slots"),
        ("SLOTS_REQUEST_TIMEOUT_SECS", "5"),
        ("SLOTS_CONNECT_TIMEOUT_SECS", "2"),
        ("SLOTS_STALE_POLICY", "last_wins"),
    ]))
    .unwrap();

    assert_eq!(cfg.base_url, "https://booking.example.test");
    assert_eq!(cfg.endpoint_path, "/v2/slots");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 5, connect_secs: 2 });
    assert_eq!(cfg.stale_policy, StalePolicy::LastResponseWins);
}

#[test]
fn invalid_timeouts_fall_back_to_defaults() {
    let cfg = SlotsConfig::from_lookup(lookup_from(&[
        ("SLOTS_REQUEST_TIMEOUT_SECS", "soon"),
        ("SLOTS_CONNECT_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn unknown_stale_policy_is_rejected() {
    let err = SlotsConfig::from_lookup(lookup_from(&[("SLOTS_STALE_POLICY", "newest")])).unwrap_err();
    assert!(err.to_string().contains("newest"));
}

#[test]
fn parse_stale_policy_defaults_when_absent() {
    assert_eq!(parse_stale_policy(None).unwrap(), StalePolicy::DiscardStale);
    assert_eq!(parse_stale_policy(Some(" discard ")).unwrap(), StalePolicy::DiscardStale);
}

#[test]
fn request_url_joins_base_endpoint_and_query() {
    let cfg = SlotsConfig::default().with_base_url("http://localhost:8080/");
    assert_eq!(cfg.request_url("2024-05-01"), "http://localhost:8080/api/slots?date=2024-05-01");
}

#[test]
fn builders_normalize_inputs() {
    let cfg = SlotsConfig::default()
        .with_base_url(" http://host ")
        .with_endpoint_path("slots")
        .with_stale_policy(StalePolicy::LastResponseWins);
    assert_eq!(cfg.base_url, "http://host");
    assert_eq!(cfg.endpoint_path, "/slots");
    assert_eq!(cfg.stale_policy, StalePolicy::LastResponseWins);
}
