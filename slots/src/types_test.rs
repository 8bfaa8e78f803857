use super::*;

#[test]
fn from_json_reads_slot_list_in_order() {
    let resp = SlotsResponse::from_json(br#"{"slots":["09:00","10:00"]}"#).unwrap();
    assert_eq!(resp.into_slots(), vec!["09:00".to_owned(), "10:00".to_owned()]);
}

#[test]
fn from_json_missing_slots_is_empty() {
    let resp = SlotsResponse::from_json(b"{}").unwrap();
    assert_eq!(resp.slots, None);
    assert!(resp.into_slots().is_empty());
}

#[test]
fn from_json_null_slots_is_empty() {
    let resp = SlotsResponse::from_json(br#"{"slots":null}"#).unwrap();
    assert!(resp.into_slots().is_empty());
}

#[test]
fn from_json_ignores_unknown_fields() {
    let resp = SlotsResponse::from_json(br#"{"slots":["08:00"],"date":"2024-05-01"}"#).unwrap();
    assert_eq!(resp.into_slots(), vec!["08:00".to_owned()]);
}

#[test]
fn from_json_rejects_html_body() {
    let err = SlotsResponse::from_json(b"<html>500 Internal Server Error</html>").unwrap_err();
    assert!(matches!(err, SlotError::Decode(_)));
}

#[test]
fn from_json_rejects_non_string_slots() {
    let err = SlotsResponse::from_json(br#"{"slots":[9,10]}"#).unwrap_err();
    assert!(matches!(err, SlotError::Decode(_)));
}

#[test]
fn from_json_top_level_array_has_no_slots() {
    assert_eq!(SlotsResponse::from_json(b"[]").unwrap(), SlotsResponse::default());
    assert_eq!(SlotsResponse::from_json(br#"["09:00"]"#).unwrap(), SlotsResponse::default());
}

#[test]
fn from_json_top_level_scalars_have_no_slots() {
    let bodies: [&[u8]; 3] = [b"42", br#""x""#, b"true"];
    for body in bodies {
        assert_eq!(SlotsResponse::from_json(body).unwrap(), SlotsResponse::default());
    }
}

#[test]
fn from_json_rejects_top_level_null() {
    let err = SlotsResponse::from_json(b"null").unwrap_err();
    assert!(matches!(err, SlotError::Decode(_)));
}

#[test]
fn from_json_falsy_slots_are_empty() {
    let bodies: [&[u8]; 3] = [br#"{"slots":0}"#, br#"{"slots":false}"#, br#"{"slots":""}"#];
    for body in bodies {
        assert!(SlotsResponse::from_json(body).unwrap().into_slots().is_empty());
    }
}

#[test]
fn from_json_rejects_non_list_slots() {
    let bodies: [&[u8]; 3] = [br#"{"slots":"09:00"}"#, br#"{"slots":5}"#, br#"{"slots":{}}"#];
    for body in bodies {
        let err = SlotsResponse::from_json(body).unwrap_err();
        assert!(matches!(err, SlotError::Decode(_)));
    }
}

#[test]
fn from_json_rejects_empty_body() {
    assert!(SlotsResponse::from_json(b"").is_err());
}

#[test]
fn slot_option_uses_slot_for_value_and_label() {
    let opt = SelectOption::slot("14:00");
    assert_eq!(opt.value, "14:00");
    assert_eq!(opt.label, "14:00");
}

#[test]
fn placeholder_option_has_empty_value() {
    let opt = SelectOption::placeholder("No slots available");
    assert!(opt.value.is_empty());
    assert_eq!(opt.label, "No slots available");
}
