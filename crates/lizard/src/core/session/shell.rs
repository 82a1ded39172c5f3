/*! Shell chrome, notifications, power state and reset. */

use super::Session;
use crate::types::{AppKind, Event, Notification, NotificationId, Point, PowerState, ShellState};

impl Session {
  pub(super) fn emit_shell_changed(&self) {
    self.emit(Event::ShellChanged {
      shell: self.shell.clone(),
    });
  }

  /// Open or close the start menu. Returns the new state.
  pub(crate) fn set_start_menu(&mut self, open: bool) -> bool {
    if self.shell.start_menu_open != open {
      self.shell.start_menu_open = open;
      self.emit_shell_changed();
    }
    open
  }

  pub(crate) fn toggle_start_menu(&mut self) -> bool {
    let open = !self.shell.start_menu_open;
    self.set_start_menu(open)
  }

  pub(crate) fn set_context_menu(&mut self, at: Option<Point>) {
    if self.shell.context_menu != at {
      self.shell.context_menu = at;
      self.emit_shell_changed();
    }
  }

  pub(crate) fn select_icon(&mut self, app: Option<AppKind>) {
    if self.shell.selected_icon != app {
      self.shell.selected_icon = app;
      self.emit_shell_changed();
    }
  }

  pub(crate) fn push_notification(&mut self, title: String, message: String) -> Notification {
    let notification = self.notifications.push(title, message);
    self.emit(Event::NotificationShown {
      notification: notification.clone(),
    });
    notification
  }

  pub(crate) fn dismiss_notification(&mut self, id: NotificationId) -> bool {
    if !self.notifications.dismiss(id) {
      return false;
    }
    self.emit(Event::NotificationDismissed {
      notification_id: id,
    });
    true
  }

  pub(crate) fn set_power(&mut self, state: PowerState) {
    if self.power == state {
      return;
    }
    log::info!("power: {:?} -> {state:?}", self.power);
    self.power = state;
    self.emit(Event::PowerChanged { state });
  }

  /// Close every window and return to a freshly booted desktop.
  /// The z-index counter restarts and the epoch advances.
  pub(crate) fn reset(&mut self) {
    let ids: Vec<_> = self.recency.clone();
    for id in &ids {
      self.close(id);
    }
    self.end_drag();
    self.set_focused(None);

    let visible: Vec<_> = self.notifications.visible().iter().map(|n| n.id).collect();
    for id in visible {
      self.dismiss_notification(id);
    }
    self.notifications.clear();
    self.taskbar.clear();

    if self.shell != ShellState::default() {
      self.shell = ShellState::default();
      self.emit_shell_changed();
    }

    self.z_counter = 0;
    self.epoch += 1;
    self.set_power(PowerState::Booting);
  }
}
