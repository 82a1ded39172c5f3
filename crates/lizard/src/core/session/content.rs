/*! Routing input to per-window application state. */

use super::Session;
use crate::apps::{AppEffect, AppInput};
use crate::types::{AppKind, DesktopResult, Event, WindowId};

/// A notification an application asked for, shown by the caller once the
/// session lock is released.
pub(crate) type PendingNotice = (String, String);

impl Session {
  /// Apply input to a window's content.
  ///
  /// Returns `Ok(None)` for unknown windows, otherwise the notifications the
  /// application raised.
  pub(crate) fn handle_input(
    &mut self,
    id: &WindowId,
    input: AppInput,
  ) -> DesktopResult<Option<Vec<PendingNotice>>> {
    let Some(window) = self.windows.get_mut(id) else {
      return Ok(None);
    };
    let effects = window.content.handle(input)?;

    let mut notices = Vec::new();
    for effect in effects {
      match effect {
        AppEffect::Notify { title, message } => notices.push((title, message)),
        AppEffect::SetWallpaper(index) => {
          if self.shell.wallpaper != index {
            self.shell.wallpaper = index;
            self.emit_shell_changed();
          }
        }
        AppEffect::ToggleContrast => {
          self.shell.high_contrast = !self.shell.high_contrast;
          self.emit_shell_changed();
        }
        AppEffect::Download {
          file_name,
          contents,
        } => self.emit(Event::Download {
          file_name,
          contents,
        }),
      }
    }

    self.emit_content_changed(id);
    Ok(Some(notices))
  }

  pub(super) fn emit_content_changed(&self, id: &WindowId) {
    if let Some(view) = self.content(id) {
      self.emit(Event::ContentChanged {
        window_id: id.clone(),
        view,
      });
    }
  }

  /// Re-send the content of `app`'s window, if open (its view depends on
  /// other desktop state).
  pub(super) fn refresh_views(&self, app: AppKind) {
    self.emit_content_changed(&WindowId::for_app(app));
  }
}
