//! Correction orchestrator.
//!
//! The single stateful component of the application: it holds the input
//! text, the last corrected text and the request status, and exposes the
//! three user actions (submit, copy, download).
//!
//! # Architecture
//!
//! ```text
//! egui update()  ──begin_submit()──▶ PendingCorrection
//!                                        │ spawned on tokio
//!                                        ▼
//!                               CorrectionClient::correct
//!                                        │ mpsc
//!                                        ▼
//! egui update()  ◀──finish_submit(outcome)
//!
//! every outcome ──▶ Notifier (toasts)
//! copy_result   ──▶ Clipboard + CopyFeedback deadline
//! download      ──▶ AssetDownloader
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{CorrectionOrchestrator, CorrectionOutcome, PendingCorrection};
pub use state::{CopyFeedback, RequestStatus, COPY_FEEDBACK_DURATION};
