//! `ChatClient`: corrects text through an OpenAI-compatible
//! `/v1/chat/completions` endpoint.
//!
//! Works with OpenAI, Groq, Ollama (OpenAI mode), Gemini's OpenAI layer or any
//! provider that speaks the chat-completions wire format.  The client applies
//! the same request checks as the hosted function, so the orchestrator sees
//! identical `Rejected` messages whichever backend is configured.

use async_trait::async_trait;

use crate::config::ServiceConfig;
use crate::correction::client::{
    CorrectionClient, CorrectionError, CorrectionRequest, CorrectionResponse,
};
use crate::correction::prompt;

/// Returned as a handled rejection when the text is blank.
pub const NO_TEXT_MESSAGE: &str = "No se proporcionó texto";

/// Returned as a handled rejection when an API key is required but missing.
pub const MISSING_KEY_MESSAGE: &str =
    "API key no configurada. Por favor configura `service.api_key` en settings.toml.";

/// Chat-completions backed corrector.
pub struct ChatClient {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl ChatClient {
    /// Build a `ChatClient` from the service config.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.endpoint_url.trim_end_matches('/')
        )
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Pull `choices[0].message.content` out of a chat-completions response.
fn extract_content(json: &serde_json::Value) -> Result<String, CorrectionError> {
    let content = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(CorrectionError::EmptyResponse)?
        .trim()
        .to_string();

    if content.is_empty() {
        return Err(CorrectionError::EmptyResponse);
    }
    Ok(content)
}

#[async_trait]
impl CorrectionClient for ChatClient {
    async fn correct(
        &self,
        request: &CorrectionRequest,
    ) -> Result<CorrectionResponse, CorrectionError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Ok(CorrectionResponse::Rejected(NO_TEXT_MESSAGE.into()));
        }

        let key = self.api_key();
        if self.config.require_api_key && key.is_none() {
            return Ok(CorrectionResponse::Rejected(MISSING_KEY_MESSAGE.into()));
        }

        let (system_msg, user_msg) = prompt::build_chat(text);

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream": false,
            "temperature": self.config.temperature
        });

        let mut req = self.client.post(self.completions_url()).json(&body);
        if let Some(key) = key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorrectionError::Status(status.as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CorrectionError::Parse(e.to_string()))?;

        extract_content(&json).map(CorrectionResponse::Corrected)
    }

    fn name(&self) -> &str {
        "chat"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorrectionBackend;

    fn make_config(api_key: Option<&str>, require_api_key: bool) -> ServiceConfig {
        ServiceConfig {
            backend: CorrectionBackend::OpenAiCompatible,
            endpoint_url: "http://127.0.0.1:9/".into(),
            api_key: api_key.map(|s| s.to_string()),
            require_api_key,
            timeout_secs: 2,
            ..ServiceConfig::default()
        }
    }

    #[test]
    fn completions_url_strips_trailing_slash() {
        let client = ChatClient::from_config(&make_config(None, false));
        assert_eq!(client.completions_url(), "http://127.0.0.1:9/v1/chat/completions");
    }

    #[tokio::test]
    async fn blank_text_is_rejected_without_a_request() {
        let client = ChatClient::from_config(&make_config(None, false));
        let resp = client.correct(&CorrectionRequest::new(" \n\t ")).await.unwrap();
        assert_eq!(resp, CorrectionResponse::Rejected(NO_TEXT_MESSAGE.into()));
    }

    #[tokio::test]
    async fn missing_required_key_is_rejected() {
        let client = ChatClient::from_config(&make_config(Some(""), true));
        let resp = client.correct(&CorrectionRequest::new("hola")).await.unwrap();
        assert_eq!(resp, CorrectionResponse::Rejected(MISSING_KEY_MESSAGE.into()));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let client = ChatClient::from_config(&make_config(Some("sk-test"), true));
        assert!(client.correct(&CorrectionRequest::new("hola")).await.is_err());
    }

    #[test]
    fn extracts_trimmed_content() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "  Hola mundo.\n" } }]
        });
        assert_eq!(extract_content(&json).unwrap(), "Hola mundo.");
    }

    #[test]
    fn missing_choices_is_empty_response() {
        let json = serde_json::json!({ "choices": [] });
        assert!(matches!(
            extract_content(&json),
            Err(CorrectionError::EmptyResponse)
        ));
    }

    #[test]
    fn blank_content_is_empty_response() {
        let json = serde_json::json!({
            "choices": [{ "message": { "content": "   " } }]
        });
        assert!(matches!(
            extract_content(&json),
            Err(CorrectionError::EmptyResponse)
        ));
    }
}
