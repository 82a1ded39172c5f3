/*! Window lifecycle: open, focus, minimize, restore, maximize, close. */

use super::{ManagedWindow, Session};
use crate::apps::AppState;
use crate::types::{AppKind, Event, TaskbarState, WindowId, WindowRecord};

/// Outcome of [`Session::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Opened {
  Created(WindowId),
  /// The application already had a window; it was brought forward instead.
  Existing(WindowId),
}

impl Opened {
  pub(crate) fn into_id(self) -> WindowId {
    match self {
      Opened::Created(id) | Opened::Existing(id) => id,
    }
  }
}

impl Session {
  /// Open a window for `app`, or bring its existing window forward.
  pub(crate) fn open(&mut self, app: AppKind) -> Opened {
    let id = WindowId::for_app(app);
    if self.windows.contains_key(&id) {
      self.restore(&id);
      return Opened::Existing(id);
    }

    let geometry = self.config.initial_geometry(self.windows.len());
    let z_index = self.next_z();
    let record = WindowRecord::new(app, geometry, z_index);
    self.windows.insert(
      id.clone(),
      ManagedWindow {
        record: record.clone(),
        content: AppState::new(app),
      },
    );
    self.touch_recency(&id);

    self.emit(Event::WindowOpened { window: record });
    self.set_taskbar(app, TaskbarState::Foreground);
    self.set_focused(Some(id.clone()));
    self.refresh_views(AppKind::TaskManager);

    Opened::Created(id)
  }

  /// Raise a visible window to the top and give it focus.
  /// Returns false for unknown or minimized windows.
  pub(crate) fn focus(&mut self, id: &WindowId) -> bool {
    let z_index = match self.windows.get(id) {
      Some(window) if window.record.visible => self.z_counter.saturating_add(1),
      _ => return false,
    };
    self.z_counter = z_index;
    if let Some(window) = self.windows.get_mut(id) {
      window.record.z_index = z_index;
    }
    self.touch_recency(id);
    self.emit_window_changed(id);
    self.set_focused(Some(id.clone()));
    true
  }

  /// Hide a window. Returns false for unknown or already minimized windows.
  pub(crate) fn minimize(&mut self, id: &WindowId) -> bool {
    let Some(window) = self.windows.get_mut(id) else {
      return false;
    };
    if !window.record.visible {
      return false;
    }
    window.record.visible = false;
    let app = window.record.app;

    if self.focused.as_ref() == Some(id) {
      self.set_focused(None);
    }
    self.cancel_drag_of(id);
    self.emit_window_changed(id);
    self.set_taskbar(app, TaskbarState::Background);
    true
  }

  /// Show a minimized window again and focus it. Focuses an already visible
  /// window. Returns false for unknown windows.
  pub(crate) fn restore(&mut self, id: &WindowId) -> bool {
    let Some(window) = self.windows.get_mut(id) else {
      return false;
    };
    if !window.record.visible {
      window.record.visible = true;
      let app = window.record.app;
      self.set_taskbar(app, TaskbarState::Foreground);
    }
    self.focus(id)
  }

  /// Maximize to the full viewport, or restore the saved geometry.
  /// Returns false for unknown windows.
  pub(crate) fn toggle_maximize(&mut self, id: &WindowId) -> bool {
    let maximized = self.config.maximized_geometry();
    let Some(window) = self.windows.get_mut(id) else {
      return false;
    };
    let record = &mut window.record;

    if record.maximized {
      if let Some(saved) = record.saved_geometry.take() {
        record.set_geometry(saved);
      }
      record.maximized = false;
    } else {
      record.saved_geometry = Some(record.geometry());
      record.set_geometry(maximized);
      record.maximized = true;
      self.cancel_drag_of(id);
    }

    self.emit_window_changed(id);
    true
  }

  /// Remove a window. Its id is free for a new window of the same application.
  /// Returns the closed window's application, or None for unknown windows.
  pub(crate) fn close(&mut self, id: &WindowId) -> Option<AppKind> {
    let window = self.windows.remove(id)?;
    let app = window.record.app;
    self.recency.retain(|w| w != id);

    if self.focused.as_ref() == Some(id) {
      self.set_focused(None);
    }
    self.cancel_drag_of(id);
    self.emit(Event::WindowClosed {
      window_id: id.clone(),
      app,
    });
    self.set_taskbar(app, TaskbarState::Closed);
    self.refresh_views(AppKind::TaskManager);
    Some(app)
  }
}
