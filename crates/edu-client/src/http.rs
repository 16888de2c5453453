//! Response normalization shared by every call.
//!
//! Reads the body as text first so a non-JSON or empty body never turns
//! into a parse failure, then maps the status onto an [`ApiOutcome`].

use serde_json::{Value, json};

use crate::outcome::ApiOutcome;

/// Parse a response body. Empty → `Null`; not JSON → `{"raw": text}`.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// User-facing message for an error status: `detail`, then `message`, then
/// `HTTP {status}`.
pub(crate) fn error_message(status: u16, body: &Value) -> String {
    ["detail", "message"]
        .iter()
        .find_map(|key| {
            body.get(key)
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
        })
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}

/// Turn a received response into an outcome without failing.
pub(crate) async fn read_outcome(resp: reqwest::Response) -> ApiOutcome {
    let status = resp.status();
    let text = match resp.text().await {
        Ok(text) => text,
        Err(error) => {
            return ApiOutcome::Unavailable {
                reason: format!("failed to read response body: {error}"),
            };
        }
    };
    let body = parse_body(&text);

    if status.is_success() {
        ApiOutcome::Success(body)
    } else {
        ApiOutcome::Rejected {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        }
    }
}
