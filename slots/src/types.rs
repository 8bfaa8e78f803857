//! Wire and render DTOs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::num::FpCategory;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SlotError;

/// Body returned by the slots endpoint.
///
/// `slots` may be missing entirely; callers treat that the same as an empty
/// list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub slots: Option<Vec<String>>,
}

impl SlotsResponse {
    /// Decode a response body.
    ///
    /// Any JSON document is accepted as long as it does not carry an unusable
    /// `slots` value:
    ///
    /// - a top-level array, number, string or boolean has no `slots` and
    ///   reads as empty;
    /// - an object whose `slots` is missing, `null`, `false`, `0` or `""`
    ///   reads as empty;
    /// - an object whose `slots` is an array of strings yields that list.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Decode`] when the body is not JSON, is a bare
    /// `null`, carries any other `slots` value, or lists a non-string slot.
    pub fn from_json(body: &[u8]) -> Result<Self, SlotError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(SlotError::Decode("response body is null".to_owned())),
            Value::Object(mut fields) => Self::from_slots_field(fields.remove("slots")),
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => Ok(Self::default()),
        }
    }

    fn from_slots_field(field: Option<Value>) -> Result<Self, SlotError> {
        let entries = match field {
            None => return Ok(Self::default()),
            Some(value) if is_falsy(&value) => return Ok(Self::default()),
            Some(Value::Array(entries)) => entries,
            Some(other) => return Err(SlotError::Decode(format!("`slots` is not a list: {other}"))),
        };

        let slots = entries
            .into_iter()
            .map(|entry| match entry {
                Value::String(slot) => Ok(slot),
                other => Err(SlotError::Decode(format!("slot entry is not a string: {other}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { slots: Some(slots) })
    }

    /// Slots as a list, with a missing field read as empty.
    #[must_use]
    pub fn into_slots(self) -> Vec<String> {
        self.slots.unwrap_or_default()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// One `<option>` of the time-select control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Option whose value and label are both the slot string.
    #[must_use]
    pub fn slot(slot: &str) -> Self {
        Self { value: slot.to_owned(), label: slot.to_owned() }
    }

    /// Placeholder option with an empty value.
    #[must_use]
    pub fn placeholder(label: &str) -> Self {
        Self { value: String::new(), label: label.to_owned() }
    }
}
