/*! Error types for desktop operations. */

/// Errors that can occur during desktop operations.
///
/// Window lifecycle operations never fail on an unknown window id; those are
/// silent no-ops. Errors are reserved for input that cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
  #[error("Unknown application type: {0}")]
  UnknownApplication(String),

  #[error("Unknown action: {0}")]
  UnknownAction(String),

  #[error("Invalid input for {target}: {reason}")]
  InvalidInput { target: String, reason: String },
}

impl DesktopError {
  pub(crate) fn invalid_input(target: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::InvalidInput {
      target: target.into(),
      reason: reason.into(),
    }
  }
}

/// Result type for desktop operations.
pub type DesktopResult<T> = Result<T, DesktopError>;
