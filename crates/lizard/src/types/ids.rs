/*! Branded ID types for type-safe entity references. */

use super::AppKind;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Window identifier, derived from the application type (`window-<type>`).
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS, Display, From, Into,
)]
#[serde(transparent)]
#[ts(export)]
pub struct WindowId(pub String);

impl WindowId {
  /// The identifier a window of `app` is opened under.
  pub fn for_app(app: AppKind) -> Self {
    Self(format!("window-{app}"))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for WindowId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}

/// Notification identifier. Starts at 1 (0 could be confused with "null").
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display, From, Into,
)]
#[ts(export)]
pub struct NotificationId(pub u32);
