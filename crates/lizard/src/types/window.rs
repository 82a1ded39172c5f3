/*! Window record: the session's state for one open application instance. */

use super::{AppKind, Bounds, Geometry, Point, Size, WindowId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An open application window as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowRecord {
  pub id: WindowId,
  pub app: AppKind,
  pub title: String,
  pub icon: String,
  /// False while minimized.
  pub visible: bool,
  pub maximized: bool,
  /// Stacking order: higher is drawn on top.
  pub z_index: u32,
  pub position: Point,
  pub size: Size,
  /// Geometry to restore when leaving the maximized state.
  pub saved_geometry: Option<Geometry>,
}

impl WindowRecord {
  pub(crate) fn new(app: AppKind, geometry: Geometry, z_index: u32) -> Self {
    let descriptor = app.descriptor();
    Self {
      id: WindowId::for_app(app),
      app,
      title: descriptor.title.to_owned(),
      icon: descriptor.icon.to_owned(),
      visible: true,
      maximized: false,
      z_index,
      position: geometry.position,
      size: geometry.size,
      saved_geometry: None,
    }
  }

  pub const fn geometry(&self) -> Geometry {
    Geometry::new(self.position, self.size)
  }

  pub const fn bounds(&self) -> Bounds {
    self.geometry().bounds()
  }

  pub(crate) fn set_geometry(&mut self, geometry: Geometry) {
    self.position = geometry.position;
    self.size = geometry.size;
  }
}
