/*! Event types for state changes and synchronization. */

use super::{
  AppKind, Notification, NotificationId, Point, PowerState, ShellState, TaskbarEntry,
  TaskbarState, Wallpaper, WindowId, WindowRecord,
};
use crate::apps::{AppView, WindowContent};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The single in-progress window drag, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DragSession {
  pub window_id: WindowId,
  /// Pointer position relative to the window's top-left corner at drag start.
  pub offset: Point,
}

/// Full state sent on connection.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Snapshot {
  /// Open windows, back to front.
  pub windows: Vec<WindowRecord>,
  pub focused_window: Option<WindowId>,
  pub drag: Option<DragSession>,
  pub taskbar: Vec<TaskbarEntry>,
  pub notifications: Vec<Notification>,
  pub shell: ShellState,
  pub wallpapers: Vec<Wallpaper>,
  pub power: PowerState,
  /// Application content for every open window.
  pub content: Vec<WindowContent>,
}

impl Snapshot {
  pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
    self.windows.iter().find(|w| &w.id == id)
  }
}

/// Events emitted when state changes.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  // Initial sync (on connection)
  #[serde(rename = "sync:init")]
  SyncInit(Box<Snapshot>),

  // Window lifecycle
  #[serde(rename = "window:opened")]
  WindowOpened { window: WindowRecord },
  #[serde(rename = "window:changed")]
  WindowChanged { window: WindowRecord },
  #[serde(rename = "window:closed")]
  WindowClosed { window_id: WindowId, app: AppKind },

  #[serde(rename = "focus:window")]
  FocusWindow { window_id: Option<WindowId> },

  #[serde(rename = "drag:changed")]
  DragChanged { drag: Option<DragSession> },

  #[serde(rename = "taskbar:changed")]
  TaskbarChanged { app: AppKind, state: TaskbarState },

  // Per-window application content
  #[serde(rename = "content:changed")]
  ContentChanged { window_id: WindowId, view: AppView },

  #[serde(rename = "notification:shown")]
  NotificationShown { notification: Notification },
  #[serde(rename = "notification:dismissed")]
  NotificationDismissed { notification_id: NotificationId },

  #[serde(rename = "shell:changed")]
  ShellChanged { shell: ShellState },

  #[serde(rename = "power:changed")]
  PowerChanged { state: PowerState },

  /// One-shot client-side download (the text editor's "save").
  #[serde(rename = "file:download")]
  Download { file_name: String, contents: String },
}
