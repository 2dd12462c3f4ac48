use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// JSON envelope wrapping every API payload
///
/// Success bodies carry `data`, failures carry `error`; `code` repeats the
/// HTTP status.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            code: status.as_u16(),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Status plus enveloped JSON body
pub fn reply<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (status, Json(Envelope::data(status, data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_envelope_omits_error() {
        let value = serde_json::to_value(Envelope::data(StatusCode::OK, vec![1, 2])).unwrap();
        assert_eq!(value, json!({"code": 200, "data": [1, 2]}));
    }

    #[test]
    fn error_envelope_omits_data() {
        let value =
            serde_json::to_value(Envelope::error(StatusCode::NOT_FOUND, "user not found: 3"))
                .unwrap();
        assert_eq!(value, json!({"code": 404, "error": "user not found: 3"}));
    }
}
