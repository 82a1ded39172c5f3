/*! Read-only views of the session. Everything returned is an owned copy. */

use super::Desktop;
use crate::apps::AppView;
use crate::types::{
  DragSession, Notification, Point, PowerState, ShellState, Snapshot, TaskbarEntry, WindowId,
  WindowRecord,
};

impl Desktop {
  /// Full desktop state, windows back to front.
  pub fn snapshot(&self) -> Snapshot {
    self.read(super::Session::snapshot)
  }

  pub fn window(&self, id: &WindowId) -> Option<WindowRecord> {
    self.read(|s| s.window(id).cloned())
  }

  /// Open windows, back to front.
  pub fn windows(&self) -> Vec<WindowRecord> {
    self.read(|s| s.windows_by_z().into_iter().cloned().collect())
  }

  pub fn focused_window(&self) -> Option<WindowId> {
    self.read(|s| s.focused_window().cloned())
  }

  pub fn drag(&self) -> Option<DragSession> {
    self.read(|s| s.drag().cloned())
  }

  pub fn taskbar(&self) -> Vec<TaskbarEntry> {
    self.read(|s| s.taskbar().entries().to_vec())
  }

  /// Notifications currently on screen, oldest first.
  pub fn notifications(&self) -> Vec<Notification> {
    self.read(|s| s.notifications().visible().to_vec())
  }

  /// What a window is showing. None for unknown windows.
  pub fn content(&self, id: &WindowId) -> Option<AppView> {
    self.read(|s| s.content(id))
  }

  /// Topmost visible window under a point (hit testing).
  pub fn window_at(&self, point: Point) -> Option<WindowRecord> {
    self.read(|s| s.window_at(point).cloned())
  }

  pub fn shell(&self) -> ShellState {
    self.read(|s| s.shell().clone())
  }

  pub fn power_state(&self) -> PowerState {
    self.read(super::Session::power)
  }
}
