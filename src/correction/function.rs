//! `FunctionClient`: calls the hosted `correct-text` edge function.
//!
//! The function takes `{ "text" }` and answers with `{ "correctedText" }` or
//! `{ "error" }`.  All connection details come from [`ServiceConfig`].

use async_trait::async_trait;

use crate::config::ServiceConfig;
use crate::correction::client::{
    CorrectionClient, CorrectionError, CorrectionRequest, CorrectionResponse,
};

/// HTTP client for a JSON-in / JSON-out correction function.
pub struct FunctionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl FunctionClient {
    /// Build a `FunctionClient` from the service config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is used if the builder fails.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: config.endpoint_url.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        }
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CorrectionClient for FunctionClient {
    /// POST the request as JSON.
    ///
    /// When an API key is configured it is attached both as a bearer token
    /// and as the `apikey` header, which hosted edge functions require.
    async fn correct(
        &self,
        request: &CorrectionRequest,
    ) -> Result<CorrectionResponse, CorrectionError> {
        let mut req = self.client.post(&self.endpoint).json(request);

        if let Some(key) = self.api_key.as_deref() {
            req = req.bearer_auth(key).header("apikey", key);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorrectionError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        CorrectionResponse::from_json(&body)
    }

    fn name(&self) -> &str {
        "function"
    }
}
