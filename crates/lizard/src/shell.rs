/*! Desktop shell commands: keyboard shortcuts, context menu, power menu. */

use crate::types::{DesktopError, KeyChord};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

/// A recognized keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
  /// Alt+Tab.
  WindowSwitcher,
  /// The Windows/Meta key.
  StartMenu,
  /// Ctrl+Alt+Delete.
  TaskManager,
}

impl Shortcut {
  pub(crate) fn from_chord(chord: &KeyChord) -> Option<Self> {
    match chord.key.as_str() {
      "Tab" if chord.alt => Some(Shortcut::WindowSwitcher),
      "Meta" | "OS" => Some(Shortcut::StartMenu),
      "Delete" if chord.ctrl && chord.alt => Some(Shortcut::TaskManager),
      _ => None,
    }
  }
}

/// Desktop right-click menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ContextAction {
  /// Reload the whole desktop.
  Refresh,
  NewFolder,
  Paste,
  Settings,
}

impl FromStr for ContextAction {
  type Err = DesktopError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "refresh" => Ok(ContextAction::Refresh),
      "new-folder" => Ok(ContextAction::NewFolder),
      "paste" => Ok(ContextAction::Paste),
      "settings" => Ok(ContextAction::Settings),
      other => Err(DesktopError::UnknownAction(other.to_owned())),
    }
  }
}

/// Start menu power buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PowerAction {
  Shutdown,
  Restart,
}

impl FromStr for PowerAction {
  type Err = DesktopError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "shutdown" => Ok(PowerAction::Shutdown),
      "restart" => Ok(PowerAction::Restart),
      other => Err(DesktopError::UnknownAction(other.to_owned())),
    }
  }
}
