/*! Taskbar entry types. */

use super::AppKind;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One running application on the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaskbarEntry {
  pub app: AppKind,
  /// Drives the "active" indicator: true while the window is shown.
  pub active: bool,
}

/// Taskbar notification sent to the renderer, keyed by application type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TaskbarState {
  /// Running and shown.
  Foreground,
  /// Running but minimized.
  Background,
  Closed,
}
