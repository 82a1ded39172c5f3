/*! Desktop configuration. Set through [`crate::DesktopBuilder`]. */

use crate::types::{Geometry, Point, Size};
use std::time::Duration;

const DEFAULT_VIEWPORT: Size = Size::new(1920.0, 1080.0);
const DEFAULT_WINDOW_ORIGIN: Point = Point::new(100.0, 50.0);
const DEFAULT_WINDOW_SIZE: Size = Size::new(600.0, 400.0);
const DEFAULT_STAGGER: f64 = 30.0;
const DEFAULT_NOTIFICATION_MS: u64 = 3000;
const DEFAULT_BOOT_DELAY_MS: u64 = 3500;
const DEFAULT_POWER_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DesktopConfig {
  /// Area a maximized window fills.
  pub(crate) viewport: Size,
  /// Top-left of the first window opened on an empty desktop.
  pub(crate) window_origin: Point,
  pub(crate) window_size: Size,
  /// Offset per already-open window, so new windows do not fully overlap.
  pub(crate) stagger: f64,
  pub(crate) notification_ms: u64,
  pub(crate) boot_delay_ms: u64,
  pub(crate) power_delay_ms: u64,
}

impl Default for DesktopConfig {
  fn default() -> Self {
    Self {
      viewport: DEFAULT_VIEWPORT,
      window_origin: DEFAULT_WINDOW_ORIGIN,
      window_size: DEFAULT_WINDOW_SIZE,
      stagger: DEFAULT_STAGGER,
      notification_ms: DEFAULT_NOTIFICATION_MS,
      boot_delay_ms: DEFAULT_BOOT_DELAY_MS,
      power_delay_ms: DEFAULT_POWER_DELAY_MS,
    }
  }
}

impl DesktopConfig {
  /// Geometry for a new window when `open_windows` are already on screen.
  pub(crate) fn initial_geometry(&self, open_windows: usize) -> Geometry {
    #[allow(clippy::cast_precision_loss)]
    let offset = self.stagger * open_windows as f64;
    Geometry::new(
      Point::new(self.window_origin.x + offset, self.window_origin.y + offset),
      self.window_size,
    )
  }

  /// Geometry of a maximized window.
  pub(crate) const fn maximized_geometry(&self) -> Geometry {
    Geometry::new(Point::ORIGIN, self.viewport)
  }

  pub(crate) const fn notification_duration(&self) -> Duration {
    Duration::from_millis(self.notification_ms)
  }

  pub(crate) const fn boot_delay(&self) -> Duration {
    Duration::from_millis(self.boot_delay_ms)
  }

  pub(crate) const fn power_delay(&self) -> Duration {
    Duration::from_millis(self.power_delay_ms)
  }
}
