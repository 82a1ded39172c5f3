/*! Window lifecycle operations: launch, focus, minimize, maximize, close, drag. */

use super::session::Opened;
use super::Desktop;
use crate::types::{AppKind, DesktopResult, Point, WindowId};

impl Desktop {
  /// Launch an application by its key (`calculator`, `text-editor`, ...).
  ///
  /// If the application already has a window, that window is brought forward
  /// (restored if minimized) and its id returned. Unknown keys are an error
  /// and leave the session untouched.
  pub fn launch(&self, app: &str) -> DesktopResult<WindowId> {
    let app = app.parse::<AppKind>().inspect_err(|e| log::warn!("{e}"))?;
    Ok(self.launch_app(app))
  }

  /// Launch a known application. See [`Desktop::launch`].
  pub fn launch_app(&self, app: AppKind) -> WindowId {
    match self.write(|s| s.open(app)) {
      Opened::Created(id) => {
        log::debug!("launched {app} as {id}");
        self.notify("Application Launched", format!("{} is now running", app.title()));
        id
      }
      Opened::Existing(id) => {
        log::debug!("{app} already open, focusing {id}");
        id
      }
    }
  }

  /// Raise a window and give it focus. No-op for unknown or minimized windows.
  pub fn focus(&self, id: &WindowId) {
    if !self.write(|s| s.focus(id)) {
      log::trace!("focus ignored for {id}");
    }
  }

  /// Hide a window. It keeps its taskbar entry and can be restored.
  pub fn minimize(&self, id: &WindowId) {
    if self.write(|s| s.minimize(id)) {
      log::debug!("minimized {id}");
    }
  }

  /// Show a minimized window again and focus it.
  pub fn restore(&self, id: &WindowId) {
    if self.write(|s| s.restore(id)) {
      log::debug!("restored {id}");
    }
  }

  /// Maximize a window, or return it to its geometry from before maximizing.
  pub fn toggle_maximize(&self, id: &WindowId) {
    self.write(|s| {
      if s.toggle_maximize(id) {
        let maximized = s.window(id).is_some_and(|w| w.maximized);
        log::debug!("{id} maximized={maximized}");
      }
    });
  }

  /// Close a window, dropping its content state.
  pub fn close(&self, id: &WindowId) {
    if let Some(app) = self.write(|s| s.close(id)) {
      log::debug!("closed {id} ({app})");
    }
  }

  /// Start dragging a window. `offset` is where the pointer grabbed the
  /// window, relative to its top-left corner.
  pub fn start_drag(&self, id: &WindowId, offset: Point) {
    if self.write(|s| s.start_drag(id, offset)) {
      log::trace!("drag started on {id}");
    }
  }

  /// Follow the pointer with the dragged window, if any.
  pub fn update_drag(&self, pointer: Point) {
    self.write(|s| s.update_drag(pointer));
  }

  /// Finish the current drag. Safe to call at any time.
  pub fn end_drag(&self) {
    if self.write(|s| s.end_drag()) {
      log::trace!("drag ended");
    }
  }

  /// Taskbar button click: restore a minimized window, focus a visible one,
  /// or launch the application if it has no window.
  pub fn activate_taskbar(&self, app: AppKind) -> WindowId {
    let id = WindowId::for_app(app);
    if self.write(|s| s.restore(&id)) {
      return id;
    }
    self.launch_app(app)
  }
}
