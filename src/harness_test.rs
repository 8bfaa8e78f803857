use super::*;
use slots::{SlotError, SlotsResponse, StalePolicy};

struct EchoSource;

#[async_trait::async_trait(?Send)]
impl SlotSource for EchoSource {
    async fn fetch(&self, date: &str) -> Result<SlotsResponse, SlotError> {
        match date {
            "" => Err(SlotError::Request("empty date".into())),
            "closed" => Ok(SlotsResponse::default()),
            other => Ok(SlotsResponse { slots: Some(vec![format!("{other} 09:00")]) }),
        }
    }
}

#[tokio::test]
async fn replay_rejects_empty_date_list() {
    let loader = SlotLoader::new(EchoSource);
    let err = replay_changes(&loader, &[]).await.unwrap_err();
    assert!(matches!(err, HarnessError::NoDates));
}

#[tokio::test]
async fn replay_single_date_renders_slots() {
    let loader = SlotLoader::new(EchoSource);
    let select = replay_changes(&loader, &["2024-05-01".to_owned()]).await.unwrap();
    assert_eq!(select.labels(), vec!["2024-05-01 09:00"]);
    assert_eq!(select.mutation_count(), 2);
}

#[tokio::test]
async fn replay_ends_on_last_dispatched_date() {
    let loader = SlotLoader::new(EchoSource).with_policy(StalePolicy::DiscardStale);
    let dates = vec!["2024-05-01".to_owned(), "closed".to_owned()];
    let select = replay_changes(&loader, &dates).await.unwrap();
    assert_eq!(select.labels(), vec!["No slots available"]);
}

#[tokio::test]
async fn replay_error_renders_error_placeholder() {
    let loader = SlotLoader::new(EchoSource);
    let select = replay_changes(&loader, &[String::new()]).await.unwrap();
    assert_eq!(select.labels(), vec!["Error loading"]);
}

#[test]
fn render_plain_prints_one_label_per_line() {
    let options = vec![SelectOption::slot("09:00"), SelectOption::slot("10:00")];
    assert_eq!(render_plain(&options), "09:00\n10:00");
}

#[test]
fn render_plain_empty_is_empty_string() {
    assert_eq!(render_plain(&[]), "");
}

#[test]
fn render_json_includes_values_and_labels() {
    let options = vec![SelectOption::placeholder("No slots available")];
    let json: serde_json::Value = serde_json::from_str(&render_json(&options).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!([{ "value": "", "label": "No slots available" }]));
}
