/*! Task manager: one row for the system plus one per open window. */

use crate::types::{AppKind, WindowRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A row in the task manager's process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessRow {
  pub name: String,
  pub icon: String,
  /// CPU share in percent.
  pub cpu: u8,
  pub memory_mb: u32,
}

/// Nominal (cpu %, memory MB) figures shown for each application.
const fn usage(app: AppKind) -> (u8, u32) {
  match app {
    AppKind::FileManager => (1, 32),
    AppKind::WebBrowser => (5, 256),
    AppKind::Games => (3, 96),
    AppKind::TaskManager => (1, 24),
    AppKind::Settings | AppKind::TextEditor => (0, 16),
    AppKind::Calculator => (0, 8),
  }
}

pub(crate) fn rows<'a>(windows: impl IntoIterator<Item = &'a WindowRecord>) -> Vec<ProcessRow> {
  let mut rows = vec![ProcessRow {
    name: "LizardOS System".to_owned(),
    icon: "🦎".to_owned(),
    cpu: 2,
    memory_mb: 128,
  }];
  rows.extend(windows.into_iter().map(|window| {
    let (cpu, memory_mb) = usage(window.app);
    ProcessRow {
      name: window.title.clone(),
      icon: window.icon.clone(),
      cpu,
      memory_mb,
    }
  }));
  rows
}
