//! Remote text correction.
//!
//! This module provides:
//! * [`CorrectionClient`]: async trait implemented by all backends.
//! * [`FunctionClient`]: the hosted `correct-text` function (default).
//! * [`ChatClient`]: direct OpenAI-compatible chat-completions backend.
//! * [`CorrectionRequest`] / [`CorrectionResponse`]: the wire contract.
//! * [`CorrectionError`]: transport failures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use text_corrector::config::AppConfig;
//! use text_corrector::correction::{build_client, CorrectionRequest, CorrectionResponse};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let client = build_client(&config.service);
//!
//!     let request = CorrectionRequest::new("este es un texto con herorres");
//!     match client.correct(&request).await {
//!         Ok(CorrectionResponse::Corrected(text)) => println!("{text}"),
//!         Ok(CorrectionResponse::Rejected(message)) => eprintln!("{message}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

pub mod chat;
pub mod client;
pub mod function;
pub mod prompt;

use std::sync::Arc;

use crate::config::{CorrectionBackend, ServiceConfig};

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use chat::ChatClient;
pub use client::{CorrectionClient, CorrectionError, CorrectionRequest, CorrectionResponse};
pub use function::FunctionClient;

/// Build the backend selected by `config.backend`.
pub fn build_client(config: &ServiceConfig) -> Arc<dyn CorrectionClient> {
    match config.backend {
        CorrectionBackend::Function => Arc::new(FunctionClient::from_config(config)),
        CorrectionBackend::OpenAiCompatible => Arc::new(ChatClient::from_config(config)),
    }
}
