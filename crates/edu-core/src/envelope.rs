//! Loose reading of the backend's response wrapper.
//!
//! Endpoints answer with some subset of `{type, data, success, message,
//! mensaje, detail, resultado}`, and a few list endpoints answer with a bare
//! array instead. [`Envelope::from_value`] accepts all of these without
//! failing; typed decoding happens only when a caller asks for `data`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    /// The `type` discriminator used by `/chat` and the enrollment endpoints.
    pub kind: Option<String>,
    /// `data`, or the whole payload when it is a bare array. Never `Null`.
    pub data: Option<Value>,
    pub success: Option<bool>,
    /// `message`, falling back to `mensaje`.
    pub message: Option<String>,
    pub detail: Option<String>,
    /// `resultado` of the enrollment endpoints.
    pub result: Option<String>,
}

impl Envelope {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self {
                data: Some(value.clone()),
                ..Self::default()
            },
            Value::Object(map) => {
                let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
                Self {
                    kind: text("type"),
                    data: map.get("data").filter(|data| !data.is_null()).cloned(),
                    success: map.get("success").and_then(Value::as_bool),
                    message: text("message").or_else(|| text("mensaje")),
                    detail: text("detail"),
                    result: text("resultado"),
                }
            }
            _ => Self::default(),
        }
    }

    /// Whether the `type` discriminator equals `kind`.
    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    /// First human-readable outcome text: `resultado`, then `message`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.result.as_deref().or(self.message.as_deref())
    }

    /// Decode `data` into `T`. `Ok(None)` when there is no `data`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Decode`] when `data` is present but does not
    /// match the shape of `T`.
    pub fn decode_data<T: DeserializeOwned>(&self, what: &str) -> Result<Option<T>, CoreError> {
        self.data
            .as_ref()
            .map(|data| {
                serde_json::from_value(data.clone()).map_err(|error| CoreError::Decode {
                    what: what.to_string(),
                    reason: error.to_string(),
                })
            })
            .transpose()
    }
}
