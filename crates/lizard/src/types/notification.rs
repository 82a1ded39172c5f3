/*! Transient toast notifications. */

use super::NotificationId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
  pub id: NotificationId,
  pub title: String,
  pub message: String,
}
