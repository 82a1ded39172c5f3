/*!
The drag slot. Only one drag gesture exists desktop-wide; starting a new one
replaces the previous.
*/

use super::Session;
use crate::types::{DragSession, Event, Point, WindowId};

impl Session {
  /// Begin dragging a window by its header. `offset` is the pointer position
  /// relative to the window's top-left corner.
  ///
  /// Ignored for unknown, minimized or maximized windows.
  pub(crate) fn start_drag(&mut self, id: &WindowId, offset: Point) -> bool {
    match self.windows.get(id) {
      Some(window) if window.record.visible && !window.record.maximized => {}
      _ => return false,
    }
    self.set_drag(Some(DragSession {
      window_id: id.clone(),
      offset,
    }));
    true
  }

  /// Move the dragged window so the grab point follows the pointer. The new
  /// top-left is clamped to non-negative coordinates; right and bottom edges
  /// are not clamped.
  pub(crate) fn update_drag(&mut self, pointer: Point) -> bool {
    let Some(drag) = &self.drag else {
      return false;
    };
    let id = drag.window_id.clone();
    let position = pointer.relative_to(drag.offset).clamp_non_negative();

    let Some(window) = self.windows.get_mut(&id) else {
      self.set_drag(None);
      return false;
    };
    if window.record.position == position {
      return false;
    }
    window.record.position = position;
    self.emit_window_changed(&id);
    true
  }

  /// Finish the drag gesture. Safe to call when no drag is active.
  pub(crate) fn end_drag(&mut self) -> bool {
    if self.drag.is_none() {
      return false;
    }
    self.set_drag(None);
    true
  }

  /// Drop the drag if it targets `id` (the window is going away or changing mode).
  pub(super) fn cancel_drag_of(&mut self, id: &WindowId) {
    if self.drag.as_ref().is_some_and(|d| &d.window_id == id) {
      self.set_drag(None);
    }
  }

  fn set_drag(&mut self, drag: Option<DragSession>) {
    if self.drag == drag {
      return;
    }
    self.drag = drag.clone();
    self.emit(Event::DragChanged { drag });
  }
}
