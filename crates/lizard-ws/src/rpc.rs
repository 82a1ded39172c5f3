/*!
RPC request/response types and dispatch.

Every request maps onto one [`Desktop`] method. Lifecycle requests on unknown
window ids succeed with `null`, mirroring the desktop's silent no-ops.
*/

#![allow(missing_docs)]

use lizard::apps::{AppInput, AppView};
use lizard::{
  AppKind, Desktop, KeyChord, NotificationId, Point, PowerAction, Snapshot, WindowId,
  WindowRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use ts_rs::TS;

/// RPC request.
#[derive(Debug, Deserialize, TS)]
#[serde(tag = "method", content = "args", rename_all = "snake_case")]
#[ts(export)]
pub enum RpcRequest {
  /// Get a snapshot of current state.
  Snapshot,
  /// Get a single window record.
  Window { window_id: WindowId },
  /// Topmost visible window at viewport coordinates.
  WindowAt { x: f64, y: f64 },
  /// Current content of a window.
  Content { window_id: WindowId },

  /// Launch an application by key, or focus its open window.
  Launch { app: String },
  Focus { window_id: WindowId },
  Minimize { window_id: WindowId },
  Restore { window_id: WindowId },
  ToggleMaximize { window_id: WindowId },
  Close { window_id: WindowId },

  /// Pointer down on a window header. `offset` is relative to the window's top-left.
  StartDrag { window_id: WindowId, offset: Point },
  /// Pointer moved while dragging.
  UpdateDrag { pointer: Point },
  /// Pointer released.
  EndDrag,

  /// Taskbar button click.
  ActivateTaskbar { app: AppKind },
  /// Input for a window's application.
  AppInput { window_id: WindowId, input: AppInput },

  /// Show a notification.
  Notify { title: String, message: String },
  DismissNotification { notification_id: NotificationId },

  ToggleStartMenu,
  LaunchFromStartMenu { app: String },
  /// Desktop icon single click.
  SelectIcon { app: String },
  /// Desktop icon double click.
  ActivateIcon { app: String },
  ShowContextMenu { x: f64, y: f64 },
  HideContextMenu,
  ContextAction { action: String },
  /// Global keyboard shortcut.
  Shortcut { chord: KeyChord },
  Power { action: PowerAction },
  /// Return to the boot screen and boot again.
  Reset,
}

/// RPC response.
#[derive(Debug, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RpcResponse {
  /// Full state snapshot.
  Snapshot(Box<Snapshot>),
  /// Optional window.
  OptionalWindow(Option<Box<WindowRecord>>),
  /// Optional window content.
  OptionalContent(Option<Box<AppView>>),
  /// Id of the launched or focused window.
  WindowId(WindowId),
  NotificationId(NotificationId),
  Bool(bool),
  /// No data.
  Null,
}

/// One text frame from a client: a correlation id plus the request itself.
#[derive(Debug, Deserialize)]
pub struct RpcMessage {
  #[serde(default)]
  pub id: JsonValue,
  #[serde(flatten)]
  pub request: RpcRequest,
}

#[derive(Deserialize)]
struct IdOnly {
  #[serde(default)]
  id: JsonValue,
}

impl RpcMessage {
  /// Parse a client frame. On failure, returns the error reply to send back,
  /// carrying the id when the frame was at least a JSON object with one.
  pub fn parse(text: &str) -> Result<Self, RpcReply> {
    serde_json::from_str(text).map_err(|e| {
      if e.is_data() {
        let id = serde_json::from_str::<IdOnly>(text)
          .map(|m| m.id)
          .unwrap_or_default();
        log::warn!("[rpc] Invalid request {id}: {e}");
        RpcReply::error(id, format!("Invalid request: {e}"))
      } else {
        log::warn!("[rpc] Invalid JSON: {e}");
        RpcReply::error(JsonValue::Null, format!("Invalid JSON: {e}"))
      }
    })
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcOutcome {
  Result(RpcResponse),
  Error(String),
}

/// Reply frame: `{ "id", "result" }` or `{ "id", "error" }`.
#[derive(Debug, Serialize)]
pub struct RpcReply {
  pub id: JsonValue,
  #[serde(flatten)]
  pub outcome: RpcOutcome,
}

impl RpcReply {
  pub fn new(id: JsonValue, result: Result<RpcResponse, String>) -> Self {
    match result {
      Ok(response) => Self {
        id,
        outcome: RpcOutcome::Result(response),
      },
      Err(e) => {
        log::warn!("[rpc] request {id} failed: {e}");
        Self::error(id, e)
      }
    }
  }

  pub fn error(id: JsonValue, message: impl Into<String>) -> Self {
    Self {
      id,
      outcome: RpcOutcome::Error(message.into()),
    }
  }
}

pub fn dispatch(desktop: &Desktop, request: RpcRequest) -> Result<RpcResponse, String> {
  match request {
    RpcRequest::Snapshot => Ok(RpcResponse::Snapshot(Box::new(desktop.snapshot()))),

    RpcRequest::Window { window_id } => Ok(RpcResponse::OptionalWindow(
      desktop.window(&window_id).map(Box::new),
    )),

    RpcRequest::WindowAt { x, y } => Ok(RpcResponse::OptionalWindow(
      desktop.window_at(Point::new(x, y)).map(Box::new),
    )),

    RpcRequest::Content { window_id } => Ok(RpcResponse::OptionalContent(
      desktop.content(&window_id).map(Box::new),
    )),

    RpcRequest::Launch { app } => {
      let id = desktop.launch(&app).map_err(|e| e.to_string())?;
      Ok(RpcResponse::WindowId(id))
    }

    RpcRequest::Focus { window_id } => {
      desktop.focus(&window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::Minimize { window_id } => {
      desktop.minimize(&window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::Restore { window_id } => {
      desktop.restore(&window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::ToggleMaximize { window_id } => {
      desktop.toggle_maximize(&window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::Close { window_id } => {
      desktop.close(&window_id);
      Ok(RpcResponse::Null)
    }

    RpcRequest::StartDrag { window_id, offset } => {
      desktop.start_drag(&window_id, offset);
      Ok(RpcResponse::Null)
    }

    RpcRequest::UpdateDrag { pointer } => {
      desktop.update_drag(pointer);
      Ok(RpcResponse::Null)
    }

    RpcRequest::EndDrag => {
      desktop.end_drag();
      Ok(RpcResponse::Null)
    }

    RpcRequest::ActivateTaskbar { app } => {
      Ok(RpcResponse::WindowId(desktop.activate_taskbar(app)))
    }

    RpcRequest::AppInput { window_id, input } => {
      desktop
        .app_input(&window_id, input)
        .map_err(|e| e.to_string())?;
      Ok(RpcResponse::Null)
    }

    RpcRequest::Notify { title, message } => {
      Ok(RpcResponse::NotificationId(desktop.notify(title, message)))
    }

    RpcRequest::DismissNotification { notification_id } => Ok(RpcResponse::Bool(
      desktop.dismiss_notification(notification_id),
    )),

    RpcRequest::ToggleStartMenu => Ok(RpcResponse::Bool(desktop.toggle_start_menu())),

    RpcRequest::LaunchFromStartMenu { app } => {
      let id = desktop
        .launch_from_start_menu(&app)
        .map_err(|e| e.to_string())?;
      Ok(RpcResponse::WindowId(id))
    }

    RpcRequest::SelectIcon { app } => {
      desktop.select_icon(&app).map_err(|e| e.to_string())?;
      Ok(RpcResponse::Null)
    }

    RpcRequest::ActivateIcon { app } => {
      let id = desktop.activate_icon(&app).map_err(|e| e.to_string())?;
      Ok(RpcResponse::WindowId(id))
    }

    RpcRequest::ShowContextMenu { x, y } => {
      desktop.show_context_menu(Point::new(x, y));
      Ok(RpcResponse::Null)
    }

    RpcRequest::HideContextMenu => {
      desktop.hide_context_menu();
      Ok(RpcResponse::Null)
    }

    RpcRequest::ContextAction { action } => {
      desktop.context_action(&action).map_err(|e| e.to_string())?;
      Ok(RpcResponse::Null)
    }

    RpcRequest::Shortcut { chord } => Ok(RpcResponse::Bool(desktop.handle_shortcut(&chord))),

    RpcRequest::Power { action } => {
      desktop.power_action(action);
      Ok(RpcResponse::Null)
    }

    RpcRequest::Reset => {
      desktop.reset();
      desktop.boot();
      Ok(RpcResponse::Null)
    }
  }
}
