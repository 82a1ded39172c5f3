/*! On-screen notifications. Several may be visible at once; no queuing. */

use crate::types::{Notification, NotificationId};

#[derive(Debug)]
pub(crate) struct NotificationCenter {
  next_id: u32,
  visible: Vec<Notification>,
}

impl Default for NotificationCenter {
  fn default() -> Self {
    Self {
      next_id: 1,
      visible: Vec::new(),
    }
  }
}

impl NotificationCenter {
  pub(crate) fn push(&mut self, title: String, message: String) -> Notification {
    let id = NotificationId(self.next_id);
    self.next_id = self.next_id.wrapping_add(1).max(1);
    let notification = Notification { id, title, message };
    self.visible.push(notification.clone());
    notification
  }

  /// Remove a notification. Returns false if it was already gone.
  pub(crate) fn dismiss(&mut self, id: NotificationId) -> bool {
    let before = self.visible.len();
    self.visible.retain(|n| n.id != id);
    self.visible.len() != before
  }

  pub(crate) fn visible(&self) -> &[Notification] {
    &self.visible
  }

  pub(crate) fn clear(&mut self) {
    self.visible.clear();
  }
}
