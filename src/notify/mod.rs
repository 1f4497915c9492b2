//! Notification surface.
//!
//! The orchestrator reports every user-visible outcome through the
//! [`Notifier`] trait.  The window implements it with a [`ToastQueue`]; tests
//! implement it with a recording double.
//!
//! All user-facing wording lives here so the orchestrator never builds
//! strings itself.

pub mod toast;

pub use toast::{Toast, ToastQueue};

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// Presentation style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Error-styled presentation.
    Destructive,
}

/// A single fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

const ERROR_TITLE: &str = "Error";

/// Shown when the user submits blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Por favor, ingresa algún texto para corregir.";

/// Shown for every transport failure; the real cause is only logged.
pub const CORRECTION_FAILED_MESSAGE: &str = "No se pudo corregir el texto. Intenta nuevamente.";

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    // ── Messages used by the orchestrator ────────────────────────────────

    pub fn empty_input() -> Self {
        Self::destructive(ERROR_TITLE, EMPTY_INPUT_MESSAGE)
    }

    /// The service refused the request; `message` comes from the service.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::destructive(ERROR_TITLE, message)
    }

    pub fn correction_failed() -> Self {
        Self::destructive(ERROR_TITLE, CORRECTION_FAILED_MESSAGE)
    }

    pub fn corrected() -> Self {
        Self::new("¡Texto corregido!", "Tu texto ha sido corregido exitosamente.")
    }

    pub fn copied() -> Self {
        Self::new("¡Copiado!", "Texto copiado al portapapeles.")
    }

    pub fn downloading(file_name: &str) -> Self {
        Self::new(
            "¡Descargando!",
            format!("El archivo {file_name} se está descargando."),
        )
    }

    pub fn download_failed(file_name: &str) -> Self {
        Self::destructive(
            ERROR_TITLE,
            format!("No se pudo descargar el archivo {file_name}."),
        )
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Something that can show a [`Notification`] to the user.
///
/// Calls must not block; the return value is never consumed.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
