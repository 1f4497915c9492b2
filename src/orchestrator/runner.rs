//! Correction orchestrator: owns the input, the result and the request
//! lifecycle, and turns every outcome into a notification.
//!
//! # Flow
//!
//! ```text
//! begin_submit()
//!   ├─ in flight already  → ignored
//!   ├─ blank input        → "ingresa algún texto" toast, no request
//!   └─ otherwise          → InFlight, result cleared, PendingCorrection
//!
//! PendingCorrection::run()  (on the tokio runtime)
//!   └─▶ CorrectionClient::correct
//!
//! finish_submit(outcome)
//!   ├─ Corrected(text) → result = text, Succeeded, success toast
//!   ├─ Rejected(msg)   → Failed, toast with msg
//!   └─ Err(e)          → Failed, generic toast, e logged
//! ```
//!
//! The UI owns the orchestrator and drives it from the egui update loop;
//! [`CorrectionOrchestrator::submit`] runs the whole cycle in one `await` for
//! callers that can block on the result.

use std::sync::Arc;
use std::time::Instant;

use crate::clipboard::Clipboard;
use crate::correction::{CorrectionClient, CorrectionError, CorrectionRequest, CorrectionResponse};
use crate::download::{AssetDownloader, ReferenceAsset, REFERENCE_SCRIPT};
use crate::notify::{Notification, Notifier};

use super::state::{CopyFeedback, RequestStatus};

/// Result of one correction call, as delivered back to the UI thread.
pub type CorrectionOutcome = Result<CorrectionResponse, CorrectionError>;

// ---------------------------------------------------------------------------
// PendingCorrection
// ---------------------------------------------------------------------------

/// A dispatched request that has not been sent yet.
///
/// Produced by [`CorrectionOrchestrator::begin_submit`]; `run` is `Send` so it
/// can be spawned on a runtime while the orchestrator stays on the UI thread.
pub struct PendingCorrection {
    client: Arc<dyn CorrectionClient>,
    request: CorrectionRequest,
}

impl PendingCorrection {
    pub fn request(&self) -> &CorrectionRequest {
        &self.request
    }

    /// Send the request and wait for the answer.
    ///
    /// The call runs in its own tokio task, so a panicking backend still
    /// yields an outcome (`CorrectionError::Request`) and the orchestrator
    /// leaves `InFlight`.  Must be awaited inside a tokio runtime.
    pub async fn run(self) -> CorrectionOutcome {
        let Self { client, request } = self;
        match tokio::spawn(async move { client.correct(&request).await }).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Correction task aborted: {e}");
                Err(CorrectionError::Request(e.to_string()))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CorrectionOrchestrator
// ---------------------------------------------------------------------------

/// Single owner of the corrector's state.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use text_corrector::clipboard::SystemClipboard;
/// use text_corrector::config::AppConfig;
/// use text_corrector::correction::build_client;
/// use text_corrector::download::FileAssetDownloader;
/// use text_corrector::notify::ToastQueue;
/// use text_corrector::orchestrator::CorrectionOrchestrator;
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let toasts = ToastQueue::new(Duration::from_secs(4));
/// let mut orchestrator = CorrectionOrchestrator::new(
///     build_client(&config.service),
///     Arc::new(toasts.clone()),
///     Arc::new(SystemClipboard::new()),
///     Arc::new(FileAssetDownloader::new(config.download.resolve_dir())),
/// );
///
/// orchestrator.set_input("este es un texto con herorres");
/// orchestrator.submit().await;
/// println!("{:?}", orchestrator.result());
/// # }
/// ```
pub struct CorrectionOrchestrator {
    input: String,
    result: Option<String>,
    status: RequestStatus,
    copy_feedback: CopyFeedback,

    client: Arc<dyn CorrectionClient>,
    notifier: Arc<dyn Notifier>,
    clipboard: Arc<dyn Clipboard>,
    downloader: Arc<dyn AssetDownloader>,
    asset: ReferenceAsset,
}

impl CorrectionOrchestrator {
    /// Create an idle orchestrator with empty input and no result.
    pub fn new(
        client: Arc<dyn CorrectionClient>,
        notifier: Arc<dyn Notifier>,
        clipboard: Arc<dyn Clipboard>,
        downloader: Arc<dyn AssetDownloader>,
    ) -> Self {
        Self {
            input: String::new(),
            result: None,
            status: RequestStatus::Idle,
            copy_feedback: CopyFeedback::default(),
            client,
            notifier,
            clipboard,
            downloader,
            asset: REFERENCE_SCRIPT,
        }
    }

    /// Offer a different bundled file from [`download_reference`](Self::download_reference).
    pub fn with_asset(mut self, asset: ReferenceAsset) -> Self {
        self.asset = asset;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The last corrected text, `None` until a request succeeds.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.status.is_busy() && !self.input.trim().is_empty()
    }

    pub fn copy_feedback_active(&self) -> bool {
        self.copy_feedback_active_at(Instant::now())
    }

    pub fn copy_feedback_active_at(&self, now: Instant) -> bool {
        self.copy_feedback.is_shown(now)
    }

    /// Time until the copy feedback resets, for repaint scheduling.
    pub fn copy_feedback_remaining(&self, now: Instant) -> Option<std::time::Duration> {
        self.copy_feedback.remaining(now)
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Replace the input text (user edit).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Validate the input and move to `InFlight`.
    ///
    /// Returns `None` when nothing should be sent: the input is blank (a
    /// validation toast is shown) or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingCorrection> {
        if self.status.is_busy() {
            log::debug!("Submit ignored: a correction is already in flight");
            return None;
        }

        if self.input.trim().is_empty() {
            self.notifier.notify(Notification::empty_input());
            return None;
        }

        self.status = RequestStatus::InFlight;
        self.result = None;

        log::info!(
            "Requesting correction ({} chars) via {} backend",
            self.input.chars().count(),
            self.client.name()
        );

        Some(PendingCorrection {
            client: Arc::clone(&self.client),
            request: CorrectionRequest::new(self.input.clone()),
        })
    }

    /// Apply the outcome of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// Always leaves `InFlight`.  An outcome that arrives with no request in
    /// flight is discarded.
    pub fn finish_submit(&mut self, outcome: CorrectionOutcome) {
        if !self.status.is_busy() {
            log::warn!("Discarding correction outcome: no request in flight");
            return;
        }

        match outcome {
            Ok(CorrectionResponse::Corrected(text)) => {
                log::info!("Correction succeeded ({} chars)", text.chars().count());
                self.result = Some(text);
                self.status = RequestStatus::Succeeded;
                self.notifier.notify(Notification::corrected());
            }
            Ok(CorrectionResponse::Rejected(message)) => {
                log::warn!("Correction rejected by service: {message}");
                self.status = RequestStatus::Failed;
                self.notifier.notify(Notification::rejected(message));
            }
            Err(e) => {
                log::error!("Error correcting text: {e}");
                self.status = RequestStatus::Failed;
                self.notifier.notify(Notification::correction_failed());
            }
        }
    }

    /// Run a full correction cycle: validate, call the service, apply.
    pub async fn submit(&mut self) {
        if let Some(pending) = self.begin_submit() {
            let outcome = pending.run().await;
            self.finish_submit(outcome);
        }
    }

    /// Copy the result to the clipboard and show the "Copiado" feedback.
    ///
    /// Does nothing when there is no result.
    pub fn copy_result(&mut self) {
        self.copy_result_at(Instant::now());
    }

    pub fn copy_result_at(&mut self, now: Instant) {
        let Some(text) = self.result.as_deref() else {
            return;
        };

        if let Err(e) = self.clipboard.write_text(text) {
            log::warn!("Clipboard write failed: {e}");
            return;
        }

        self.copy_feedback.arm(now);
        self.notifier.notify(Notification::copied());
    }

    /// Reset the copy feedback once it has expired; call once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.copy_feedback.tick(now);
    }

    /// Save the bundled reference file and tell the user.
    pub fn download_reference(&self) {
        match self.downloader.download(&self.asset) {
            Ok(path) => {
                log::info!("Reference file downloaded to {}", path.display());
                self.notifier
                    .notify(Notification::downloading(self.asset.file_name));
            }
            Err(e) => {
                log::error!("Reference download failed: {e}");
                self.notifier
                    .notify(Notification::download_failed(self.asset.file_name));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
