//! Request path construction for the slots endpoint.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use url::form_urlencoded;

pub const DEFAULT_SLOTS_ENDPOINT: &str = "/api/slots";
pub const DATE_QUERY_PARAM: &str = "date";

/// Build `<endpoint>?date=<value>` with the date form-urlencoded.
///
/// Date-picker values (`YYYY-MM-DD`) pass through byte-for-byte; anything
/// else is escaped so it cannot inject extra query parameters.
#[must_use]
pub fn slots_request_path(endpoint: &str, date: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(DATE_QUERY_PARAM, date)
        .finish();
    format!("{endpoint}?{query}")
}
