/*! Core types for the desktop session.

Regenerate TypeScript types: `cargo test -p lizard export_bindings`
*/

#![allow(missing_docs)]

mod app;
mod desktop;
mod error;
mod event;
mod geometry;
mod ids;
mod notification;
mod taskbar;
mod window;

pub use app::{AppDescriptor, AppKind};
pub use desktop::{KeyChord, PowerState, ShellState, Wallpaper};
pub use error::{DesktopError, DesktopResult};
pub use event::{DragSession, Event, Snapshot};
pub use geometry::{Bounds, Geometry, Point, Size};
pub use ids::{NotificationId, WindowId};
pub use notification::Notification;
pub use taskbar::{TaskbarEntry, TaskbarState};
pub use window::WindowRecord;
