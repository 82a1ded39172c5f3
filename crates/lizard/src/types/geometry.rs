/*! Geometry types for viewport coordinates. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A 2D point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const ORIGIN: Point = Point::new(0.0, 0.0);

  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Offset of this point relative to `origin`.
  pub fn relative_to(self, origin: Point) -> Point {
    Point::new(self.x - origin.x, self.y - origin.y)
  }

  /// Clamp both coordinates to be non-negative. NaN collapses to 0.
  pub fn clamp_non_negative(self) -> Point {
    Point::new(self.x.max(0.0), self.y.max(0.0))
  }
}

/// Width and height of a window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Size {
  pub width: f64,
  pub height: f64,
}

impl Size {
  pub const fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }
}

/// Position plus size, saved before maximizing so it can be restored exactly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Geometry {
  pub position: Point,
  pub size: Size,
}

impl Geometry {
  pub const fn new(position: Point, size: Size) -> Self {
    Self { position, size }
  }

  pub const fn bounds(&self) -> Bounds {
    Bounds {
      x: self.position.x,
      y: self.position.y,
      w: self.size.width,
      h: self.size.height,
    }
  }
}

/// Rectangle bounds in viewport coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Bounds {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Bounds {
  /// Check if a point is contained within these bounds (edges inclusive).
  pub fn contains(&self, point: Point) -> bool {
    point.x >= self.x
      && point.x <= self.x + self.w
      && point.y >= self.y
      && point.y <= self.y + self.h
  }
}
