/*!
Session - the single source of truth for desktop state.

All fields are private. Mutations go through methods that maintain invariants
and emit events. This guarantees:
- at most one window per application type
- the focused window always holds the highest z-index
- every change reaches subscribers as an [`Event`]

## Module Structure

- `mod.rs` - Session struct, emission, queries, snapshot
- `windows.rs` - open, focus, minimize, restore, maximize, close
- `drag.rs` - the single global drag slot
- `content.rs` - routing input to per-window application state
- `shell.rs` - start menu, context menu, notifications, power, reset
*/

mod content;
mod drag;
mod shell;
mod windows;

pub(crate) use windows::Opened;

use async_broadcast::Sender;
use std::collections::HashMap;

use crate::apps::{self, AppState, AppView, ViewContext, WindowContent};
use crate::config::DesktopConfig;
use crate::notifications::NotificationCenter;
use crate::taskbar::Taskbar;
use crate::types::{
  AppKind, DragSession, Event, Point, PowerState, ShellState, Snapshot, TaskbarState, WindowId,
  WindowRecord,
};

/// An open window: the record the renderer draws plus its application state.
#[derive(Debug)]
pub(crate) struct ManagedWindow {
  pub(crate) record: WindowRecord,
  pub(crate) content: AppState,
}

/// Internal state storage with automatic event emission.
pub(crate) struct Session {
  // Event emission
  events_tx: Sender<Event>,
  config: DesktopConfig,

  // Windows
  windows: HashMap<WindowId, ManagedWindow>,
  /// Open window ids, least recently focused first.
  recency: Vec<WindowId>,
  z_counter: u32,
  focused: Option<WindowId>,
  drag: Option<DragSession>,

  // Collaborators
  taskbar: Taskbar,
  notifications: NotificationCenter,
  shell: ShellState,
  power: PowerState,

  /// Bumped on every reset so stale deferred actions can recognize themselves.
  epoch: u64,
}

impl Session {
  pub(crate) fn new(events_tx: Sender<Event>, config: DesktopConfig) -> Self {
    Self {
      events_tx,
      config,
      windows: HashMap::new(),
      recency: Vec::new(),
      z_counter: 0,
      focused: None,
      drag: None,
      taskbar: Taskbar::default(),
      notifications: NotificationCenter::default(),
      shell: ShellState::default(),
      power: PowerState::default(),
      epoch: 0,
    }
  }

  /// Emit an event.
  pub(super) fn emit(&self, event: Event) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Event channel overflow - events are being dropped. \
           Consider increasing EVENT_CHANNEL_CAPACITY or processing events faster."
        );
      }
    }
  }

  /// Emit `WindowChanged` for a window, if it exists.
  fn emit_window_changed(&self, id: &WindowId) {
    if let Some(window) = self.windows.get(id) {
      self.emit(Event::WindowChanged {
        window: window.record.clone(),
      });
    }
  }

  /// Next value of the monotonic z-index counter.
  fn next_z(&mut self) -> u32 {
    self.z_counter = self.z_counter.saturating_add(1);
    self.z_counter
  }

  /// Set focused window. Emits `FocusWindow` if changed.
  fn set_focused(&mut self, id: Option<WindowId>) {
    if self.focused == id {
      return;
    }
    self.focused = id.clone();
    self.emit(Event::FocusWindow { window_id: id });
  }

  /// Update the taskbar. Emits `TaskbarChanged` if the entry changed.
  fn set_taskbar(&mut self, app: AppKind, state: TaskbarState) {
    if self.taskbar.set(app, state) {
      self.emit(Event::TaskbarChanged { app, state });
    }
  }

  fn touch_recency(&mut self, id: &WindowId) {
    self.recency.retain(|w| w != id);
    self.recency.push(id.clone());
  }
}

// Queries
impl Session {
  pub(crate) fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
    self.windows.get(id).map(|w| &w.record)
  }

  /// Open windows, back to front.
  pub(crate) fn windows_by_z(&self) -> Vec<&WindowRecord> {
    let mut windows: Vec<_> = self.windows.values().map(|w| &w.record).collect();
    windows.sort_by_key(|w| w.z_index);
    windows
  }

  /// Open window ids, least recently focused first.
  pub(crate) fn recency(&self) -> &[WindowId] {
    &self.recency
  }

  pub(crate) const fn focused_window(&self) -> Option<&WindowId> {
    self.focused.as_ref()
  }

  pub(crate) const fn drag(&self) -> Option<&DragSession> {
    self.drag.as_ref()
  }

  pub(crate) fn taskbar(&self) -> &Taskbar {
    &self.taskbar
  }

  pub(crate) fn notifications(&self) -> &NotificationCenter {
    &self.notifications
  }

  pub(crate) const fn shell(&self) -> &ShellState {
    &self.shell
  }

  pub(crate) const fn power(&self) -> PowerState {
    self.power
  }

  pub(crate) const fn epoch(&self) -> u64 {
    self.epoch
  }

  /// Topmost visible window containing the point.
  pub(crate) fn window_at(&self, point: Point) -> Option<&WindowRecord> {
    self
      .windows_by_z()
      .into_iter()
      .rev()
      .find(|w| w.visible && w.bounds().contains(point))
  }

  fn view_context(&self) -> ViewContext<'_> {
    ViewContext {
      shell: &self.shell,
      windows: self.windows_by_z(),
    }
  }

  /// Current content of a window.
  pub(crate) fn content(&self, id: &WindowId) -> Option<AppView> {
    let window = self.windows.get(id)?;
    Some(window.content.view(&self.view_context()))
  }

  pub(crate) fn snapshot(&self) -> Snapshot {
    let ctx = self.view_context();
    let windows: Vec<WindowRecord> = ctx.windows.iter().map(|w| (*w).clone()).collect();
    let content = windows
      .iter()
      .filter_map(|record| {
        let window = self.windows.get(&record.id)?;
        Some(WindowContent {
          window_id: record.id.clone(),
          view: window.content.view(&ctx),
        })
      })
      .collect();

    Snapshot {
      windows,
      focused_window: self.focused.clone(),
      drag: self.drag.clone(),
      taskbar: self.taskbar.entries().to_vec(),
      notifications: self.notifications.visible().to_vec(),
      shell: self.shell.clone(),
      wallpapers: apps::wallpapers(),
      power: self.power,
      content,
    }
  }
}
