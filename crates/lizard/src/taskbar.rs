/*! Taskbar: which applications are running and which are shown. */

use crate::types::{AppKind, TaskbarEntry, TaskbarState};

/// Running applications in launch order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Taskbar {
  entries: Vec<TaskbarEntry>,
}

impl Taskbar {
  pub(crate) fn entries(&self) -> &[TaskbarEntry] {
    &self.entries
  }

  pub(crate) fn entry(&self, app: AppKind) -> Option<&TaskbarEntry> {
    self.entries.iter().find(|e| e.app == app)
  }

  /// Record a state change. Returns false if nothing changed.
  pub(crate) fn set(&mut self, app: AppKind, state: TaskbarState) -> bool {
    let position = self.entries.iter().position(|e| e.app == app);
    match (state, position) {
      (TaskbarState::Closed, Some(index)) => {
        self.entries.remove(index);
        true
      }
      (TaskbarState::Closed, None) => false,
      (TaskbarState::Foreground | TaskbarState::Background, Some(index)) => {
        let active = state == TaskbarState::Foreground;
        self.entries.get_mut(index).is_some_and(|entry| {
          let changed = entry.active != active;
          entry.active = active;
          changed
        })
      }
      (TaskbarState::Foreground | TaskbarState::Background, None) => {
        self.entries.push(TaskbarEntry {
          app,
          active: state == TaskbarState::Foreground,
        });
        true
      }
    }
  }

  pub(crate) fn clear(&mut self) {
    self.entries.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn launch_adds_active_entry() {
    let mut taskbar = Taskbar::default();
    assert!(taskbar.set(AppKind::Calculator, TaskbarState::Foreground));
    assert_eq!(
      taskbar.entry(AppKind::Calculator),
      Some(&TaskbarEntry {
        app: AppKind::Calculator,
        active: true
      })
    );
  }

  #[test]
  fn background_clears_indicator() {
    let mut taskbar = Taskbar::default();
    taskbar.set(AppKind::Games, TaskbarState::Foreground);
    assert!(taskbar.set(AppKind::Games, TaskbarState::Background));
    assert!(!taskbar.entries()[0].active);
    assert!(
      !taskbar.set(AppKind::Games, TaskbarState::Background),
      "repeated state is not a change"
    );
  }

  #[test]
  fn close_removes_entry() {
    let mut taskbar = Taskbar::default();
    taskbar.set(AppKind::Settings, TaskbarState::Foreground);
    taskbar.set(AppKind::Games, TaskbarState::Foreground);
    assert!(taskbar.set(AppKind::Settings, TaskbarState::Closed));
    assert_eq!(taskbar.entries().len(), 1);
    assert!(!taskbar.set(AppKind::Settings, TaskbarState::Closed));
  }

  #[test]
  fn entries_keep_launch_order() {
    let mut taskbar = Taskbar::default();
    for app in [AppKind::TaskManager, AppKind::Calculator, AppKind::WebBrowser] {
      taskbar.set(app, TaskbarState::Foreground);
    }
    let apps: Vec<_> = taskbar.entries().iter().map(|e| e.app).collect();
    assert_eq!(
      apps,
      [AppKind::TaskManager, AppKind::Calculator, AppKind::WebBrowser]
    );
  }
}
