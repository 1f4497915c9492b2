//! AI Text Corrector: Spanish grammar correction through a remote service.
//!
//! * [`config`]: `settings.toml` and platform paths.
//! * [`correction`]: the remote correction backends.
//! * [`orchestrator`]: input/result state and the request lifecycle.
//! * [`notify`], [`clipboard`], [`download`]: capabilities the orchestrator
//!   reports to and acts through.
//! * [`app`]: the egui window.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod correction;
pub mod download;
pub mod notify;
pub mod orchestrator;
