/*! Desktop shell state: start menu, context menu, wallpaper, power. */

use super::{AppKind, Point};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shell chrome around the windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShellState {
  pub start_menu_open: bool,
  /// Where the desktop context menu is shown, if it is open.
  pub context_menu: Option<Point>,
  /// Desktop icon currently highlighted by a single click.
  pub selected_icon: Option<AppKind>,
  /// Index into the wallpaper list.
  pub wallpaper: usize,
  pub high_contrast: bool,
}

/// A selectable desktop background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wallpaper {
  pub name: String,
  /// CSS gradient the renderer paints the desktop with.
  pub gradient: String,
}

/// Lifecycle of the simulated machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PowerState {
  /// Boot splash is showing.
  #[default]
  Booting,
  Running,
  ShuttingDown,
  Restarting,
  /// Shutdown finished; the renderer shows a blank screen.
  Off,
}

/// A key press with its modifier state, as forwarded by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyChord {
  /// DOM `KeyboardEvent.key` value (`Tab`, `Delete`, `Meta`, ...).
  pub key: String,
  #[serde(default)]
  pub alt: bool,
  #[serde(default)]
  pub ctrl: bool,
}

impl KeyChord {
  pub fn new(key: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      ..Self::default()
    }
  }

  #[must_use]
  pub const fn with_alt(mut self) -> Self {
    self.alt = true;
    self
  }

  #[must_use]
  pub const fn with_ctrl(mut self) -> Self {
    self.ctrl = true;
    self
  }
}
