//! Core `CorrectionClient` trait and the wire types shared by all backends.
//!
//! The remote contract is deliberately small:
//!
//! ```text
//! request  { "text": "..." }
//! response { "correctedText": "..." }   success
//!          { "error": "..." }           handled, application-level failure
//! ```
//!
//! Anything else (connection refused, non-2xx status, undecodable body) is a
//! [`CorrectionError`], i.e. a transport failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// CorrectionError
// ---------------------------------------------------------------------------

/// Transport-level failures of a correction call.
///
/// None of these are shown to the user verbatim; the orchestrator logs them
/// and displays a fixed generic message.
#[derive(Debug, Error)]
pub enum CorrectionError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("correction request timed out")]
    Timeout,

    /// The service answered with a non-success HTTP status.
    #[error("correction service returned HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("failed to parse correction response: {0}")]
    Parse(String),

    /// The service answered but the corrected text was empty.
    #[error("correction service returned an empty text")]
    EmptyResponse,
}

impl From<reqwest::Error> for CorrectionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CorrectionError::Timeout
        } else if e.is_decode() {
            CorrectionError::Parse(e.to_string())
        } else {
            CorrectionError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// Payload sent to the correction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionRequest {
    pub text: String,
}

impl CorrectionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A well-formed answer from the correction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionResponse {
    /// The corrected text.
    Corrected(String),
    /// The service handled the request but refused it; the message is meant
    /// for the user.
    Rejected(String),
}

/// Raw JSON body.  The Python reference server spells the success field in
/// snake_case, so both spellings are accepted.
#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    #[serde(default, rename = "correctedText", alias = "corrected_text")]
    corrected_text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl CorrectionResponse {
    /// Decode a JSON response body.
    ///
    /// A non-empty `error` takes precedence over `correctedText`.  A body with
    /// neither field, or with a blank `correctedText`, is a transport error.
    ///
    /// ```
    /// use text_corrector::correction::CorrectionResponse;
    ///
    /// let ok = CorrectionResponse::from_json(r#"{"correctedText":"Hola mundo."}"#).unwrap();
    /// assert_eq!(ok, CorrectionResponse::Corrected("Hola mundo.".into()));
    ///
    /// let rejected = CorrectionResponse::from_json(r#"{"error":"rate limited"}"#).unwrap();
    /// assert_eq!(rejected, CorrectionResponse::Rejected("rate limited".into()));
    /// ```
    pub fn from_json(body: &str) -> Result<Self, CorrectionError> {
        let body: ResponseBody =
            serde_json::from_str(body).map_err(|e| CorrectionError::Parse(e.to_string()))?;

        if let Some(message) = body.error.filter(|m| !m.is_empty()) {
            return Ok(CorrectionResponse::Rejected(message));
        }

        match body.corrected_text {
            Some(text) if !text.trim().is_empty() => Ok(CorrectionResponse::Corrected(text)),
            Some(_) => Err(CorrectionError::EmptyResponse),
            None => Err(CorrectionError::Parse(
                "response has neither `correctedText` nor `error`".into(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// CorrectionClient trait
// ---------------------------------------------------------------------------

/// Async trait implemented by every correction backend.
///
/// Implementors must be `Send + Sync` so they can be shared with the tokio
/// runtime as `Arc<dyn CorrectionClient>`.
#[async_trait]
pub trait CorrectionClient: Send + Sync {
    /// Send `request` to the service.
    ///
    /// `Ok(Rejected(_))` is a handled failure; `Err(_)` means the call itself
    /// failed.
    async fn correct(
        &self,
        request: &CorrectionRequest,
    ) -> Result<CorrectionResponse, CorrectionError>;

    /// Short backend name for logging.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialises_as_text_object() {
        let json = serde_json::to_value(CorrectionRequest::new("hola")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hola" }));
    }

    #[test]
    fn decodes_corrected_text() {
        let resp = CorrectionResponse::from_json(r#"{"correctedText":"Hola mundo."}"#).unwrap();
        assert_eq!(resp, CorrectionResponse::Corrected("Hola mundo.".into()));
    }

    #[test]
    fn accepts_snake_case_alias() {
        let resp =
            CorrectionResponse::from_json(r#"{"corrected_text":"Buenos días."}"#).unwrap();
        assert_eq!(resp, CorrectionResponse::Corrected("Buenos días.".into()));
    }

    #[test]
    fn keeps_corrected_text_verbatim() {
        let resp = CorrectionResponse::from_json(r#"{"correctedText":"  Hola.\n"}"#).unwrap();
        assert_eq!(resp, CorrectionResponse::Corrected("  Hola.\n".into()));
    }

    #[test]
    fn error_field_wins() {
        let resp = CorrectionResponse::from_json(
            r#"{"correctedText":"ignored","error":"rate limited"}"#,
        )
        .unwrap();
        assert_eq!(resp, CorrectionResponse::Rejected("rate limited".into()));
    }

    #[test]
    fn empty_error_field_is_ignored() {
        let resp =
            CorrectionResponse::from_json(r#"{"correctedText":"Sí.","error":""}"#).unwrap();
        assert_eq!(resp, CorrectionResponse::Corrected("Sí.".into()));
    }

    #[test]
    fn null_error_is_ignored() {
        let resp =
            CorrectionResponse::from_json(r#"{"correctedText":"Sí.","error":null}"#).unwrap();
        assert_eq!(resp, CorrectionResponse::Corrected("Sí.".into()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let resp = CorrectionResponse::from_json(
            r#"{"correctedText":"Vale.","model":"x","usage":{"tokens":3}}"#,
        )
        .unwrap();
        assert_eq!(resp, CorrectionResponse::Corrected("Vale.".into()));
    }

    #[test]
    fn blank_corrected_text_is_empty_response() {
        let err = CorrectionResponse::from_json(r#"{"correctedText":"   "}"#).unwrap_err();
        assert!(matches!(err, CorrectionError::EmptyResponse));
    }

    #[test]
    fn missing_fields_is_parse_error() {
        let err = CorrectionResponse::from_json(r#"{"foo":1}"#).unwrap_err();
        assert!(matches!(err, CorrectionError::Parse(_)));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = CorrectionResponse::from_json("<html>502</html>").unwrap_err();
        assert!(matches!(err, CorrectionError::Parse(_)));
    }

    #[test]
    fn client_trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CorrectionClient>();
    }
}
