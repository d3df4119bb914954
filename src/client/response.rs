//! Response validation shared by every Dashboard request

use serde_json::Value;

use crate::error::{ApiError, Result};

/// Validate a raw Dashboard response and return the decoded payload.
///
/// The body must be JSON whatever the status. 200, 201 and 204 pass the
/// payload through unchanged. A 400 whose first error message starts with
/// `Email` is also passed through so admin callers can see the conflict.
/// Decoding runs before the status check, so an empty 204 is `InvalidJson`.
pub fn handle_response(status: u16, body: &str) -> Result<Value> {
    let payload: Value =
        serde_json::from_str(body).map_err(|_| ApiError::InvalidJson { status })?;

    match status {
        200 | 201 | 204 => Ok(payload),
        400 if is_email_error(&payload) => Ok(payload),
        _ => {
            log::debug!("Rejected response {}: {}", status, payload);
            Err(ApiError::UnexpectedStatus {
                status,
                message: payload.to_string(),
            }
            .into())
        }
    }
}

fn is_email_error(payload: &Value) -> bool {
    payload
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(Value::as_str)
        .is_some_and(|first| first.starts_with("Email"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn api_err(result: Result<Value>) -> ApiError {
        match result {
            Err(Error::Api(err)) => err,
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_success_statuses_pass_payload_through() {
        for status in [200, 201, 204] {
            let payload = handle_response(status, r#"[{"id": 1}]"#).unwrap();
            assert_eq!(payload[0]["id"], 1);
        }
    }

    #[test]
    fn test_non_json_body_is_response_error_for_any_status() {
        for status in [200, 201, 204, 400, 500] {
            let err = api_err(handle_response(status, "<html>Bad gateway</html>"));
            assert!(matches!(err, ApiError::InvalidJson { status: s } if s == status));
        }
    }

    #[test]
    fn test_email_conflict_is_returned() {
        let body = r#"{"errors": ["Email has already been taken"]}"#;
        let payload = handle_response(400, body).unwrap();
        assert_eq!(payload["errors"][0], "Email has already been taken");
    }

    #[test]
    fn test_other_bad_request_fails() {
        let err = api_err(handle_response(400, r#"{"errors": ["Name can't be blank"]}"#));
        match err {
            ApiError::UnexpectedStatus { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("Name can't be blank"));
            }
            other => panic!("Expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_email_prefix_only_applies_to_400() {
        let err = api_err(handle_response(
            422,
            r#"{"errors": ["Email has already been taken"]}"#,
        ));
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_bad_request_without_errors_key_fails() {
        let err = api_err(handle_response(400, r#"{"message": "Email"}"#));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_empty_no_content_is_invalid_json() {
        let err = api_err(handle_response(204, ""));
        assert!(matches!(err, ApiError::InvalidJson { status: 204 }));
    }

    #[test]
    fn test_empty_ok_body_is_invalid_json() {
        let err = api_err(handle_response(200, ""));
        assert!(matches!(err, ApiError::InvalidJson { status: 200 }));
    }
}
