/*! Input to application windows. */

use super::Desktop;
use crate::apps::AppInput;
use crate::types::{DesktopResult, WindowId};

impl Desktop {
  /// Send input to the application in a window.
  ///
  /// Unknown windows are ignored. Input meant for a different application
  /// than the window's, or otherwise invalid for it, is an
  /// [`InvalidInput`](crate::DesktopError::InvalidInput) error and changes
  /// nothing.
  pub fn app_input(&self, id: &WindowId, input: AppInput) -> DesktopResult<()> {
    let notices = self
      .write(|s| s.handle_input(id, input))
      .inspect_err(|e| log::warn!("input to {id} rejected: {e}"))?;

    let Some(notices) = notices else {
      log::trace!("input for unknown window {id} ignored");
      return Ok(());
    };
    for (title, message) in notices {
      self.notify(title, message);
    }
    Ok(())
  }
}
