/*!
WebSocket transport for a desktop session.

Each client receives a `sync:init` snapshot on connect, then every desktop
event as JSON. Text frames are RPC requests, `{ "id", "method", "args" }`,
answered with `{ "id", "result" }` or `{ "id", "error" }`. A client that falls
behind the event stream is resynchronised with a fresh snapshot.
*/

use crate::rpc::{self, RpcMessage, RpcReply};
use axum::{
  extract::{
    ws::{Message, WebSocket, WebSocketUpgrade},
    State,
  },
  response::Response,
  routing::get,
  Router,
};
use lizard::{Desktop, Event};
use std::io;
use tokio::sync::broadcast::{self, error::RecvError};
use tower_http::cors::{Any, CorsLayer};

/// Default WebSocket server port.
pub const DEFAULT_WS_PORT: u16 = 3030;
const EVENT_BUFFER: usize = 1000;

/// Shared by every connection: the desktop and its serialized event stream.
#[derive(Clone)]
pub struct WebSocketState {
  desktop: Desktop,
  events: broadcast::Sender<String>,
  port: u16,
}

impl std::fmt::Debug for WebSocketState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WebSocketState")
      .field("port", &self.port)
      .finish_non_exhaustive()
  }
}

impl WebSocketState {
  /// Serve `desktop` on [`DEFAULT_WS_PORT`].
  pub fn new(desktop: Desktop) -> Self {
    Self::with_port(desktop, DEFAULT_WS_PORT)
  }

  /// Serve `desktop` on `port`.
  pub fn with_port(desktop: Desktop, port: u16) -> Self {
    let (events, _) = broadcast::channel(EVENT_BUFFER);
    Self {
      desktop,
      events,
      port,
    }
  }
}

/// Bind to `127.0.0.1:<port>` and serve `/ws` until the listener fails.
pub async fn start_server(state: WebSocketState) -> io::Result<()> {
  spawn_event_forwarder(&state);

  let addr = format!("127.0.0.1:{}", state.port);
  let listener = tokio::net::TcpListener::bind(&addr).await?;
  log::info!("WebSocket server: ws://{addr}/ws");

  axum::serve(listener, router(state)).await
}

fn router(state: WebSocketState) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .route("/ws", get(upgrade))
    .layer(cors)
    .with_state(state)
}

/// Serialize desktop events once and fan them out to every connection.
fn spawn_event_forwarder(state: &WebSocketState) {
  let events = state.events.clone();
  let mut rx = state.desktop.subscribe();
  tokio::spawn(async move {
    while let Ok(event) = rx.recv().await {
      match serde_json::to_string(&event) {
        // No connections yet is not an error.
        Ok(json) => drop(events.send(json)),
        Err(e) => log::error!("[ws] failed to serialize event: {e}"),
      }
    }
  });
}

async fn upgrade(ws: WebSocketUpgrade, State(state): State<WebSocketState>) -> Response {
  ws.on_upgrade(|socket| serve_client(socket, state))
}

async fn serve_client(mut socket: WebSocket, state: WebSocketState) {
  let mut events = state.events.subscribe();
  if send_sync_init(&mut socket, &state.desktop).await.is_err() {
    return;
  }

  loop {
    tokio::select! {
      frame = socket.recv() => match frame {
        Some(Ok(Message::Text(text))) => {
          let reply = handle_frame(&text, &state.desktop).await;
          // Events caused by the request go out before its reply.
          while let Ok(event) = events.try_recv() {
            if socket.send(Message::Text(event)).await.is_err() {
              return;
            }
          }
          if socket.send(Message::Text(reply)).await.is_err() {
            return;
          }
        }
        Some(Ok(Message::Close(_))) | None => {
          log::info!("[ws] client disconnected");
          return;
        }
        Some(Ok(_)) => {}
        Some(Err(e)) => {
          log::warn!("[ws] socket error: {e}");
          return;
        }
      },

      event = events.recv() => match event {
        Ok(event) => {
          if socket.send(Message::Text(event)).await.is_err() {
            return;
          }
        }
        Err(RecvError::Lagged(missed)) => {
          log::warn!("[ws] client missed {missed} events, resending snapshot");
          if send_sync_init(&mut socket, &state.desktop).await.is_err() {
            return;
          }
        }
        Err(RecvError::Closed) => return,
      },
    }
  }
}

/// Send the full session state as a `sync:init` event.
async fn send_sync_init(socket: &mut WebSocket, desktop: &Desktop) -> Result<(), ()> {
  let desktop = desktop.clone();
  let snapshot = tokio::task::spawn_blocking(move || desktop.snapshot())
    .await
    .map_err(|e| log::error!("[ws] snapshot task failed: {e}"))?;
  let json = serde_json::to_string(&Event::SyncInit(Box::new(snapshot)))
    .map_err(|e| log::error!("[ws] failed to serialize snapshot: {e}"))?;
  socket.send(Message::Text(json)).await.map_err(drop)
}

/// Parse one request frame, run it off the async runtime and serialize the reply.
async fn handle_frame(text: &str, desktop: &Desktop) -> String {
  let reply = match RpcMessage::parse(text) {
    Ok(RpcMessage { id, request }) => {
      let desktop = desktop.clone();
      match tokio::task::spawn_blocking(move || rpc::dispatch(&desktop, request)).await {
        Ok(result) => RpcReply::new(id, result),
        Err(e) => {
          log::error!("[rpc] request {id} panicked: {e}");
          RpcReply::error(id, "RPC task panicked")
        }
      }
    }
    Err(reply) => reply,
  };

  serde_json::to_string(&reply).unwrap_or_else(|e| {
    log::error!("[rpc] failed to serialize reply: {e}");
    serde_json::json!({ "id": null, "error": format!("Failed to serialize reply: {e}") })
      .to_string()
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::{json, Value};

  async fn frame(desktop: &Desktop, text: &str) -> Value {
    let reply = handle_frame(text, desktop).await;
    serde_json::from_str(&reply).unwrap()
  }

  #[tokio::test]
  async fn request_frame_gets_typed_reply() {
    let desktop = Desktop::new();
    let reply = frame(
      &desktop,
      r#"{"id":3,"method":"launch","args":{"app":"settings"}}"#,
    )
    .await;
    assert_eq!(reply, json!({ "id": 3, "result": "window-settings" }));
    assert!(desktop.window(&"window-settings".into()).is_some());
  }

  #[tokio::test]
  async fn desktop_errors_become_error_replies() {
    let desktop = Desktop::new();
    let reply = frame(
      &desktop,
      r#"{"id":"x","method":"launch","args":{"app":"paint"}}"#,
    )
    .await;
    assert_eq!(
      reply,
      json!({ "id": "x", "error": "Unknown application type: paint" })
    );
  }

  #[tokio::test]
  async fn garbage_frame_gets_error_reply() {
    let desktop = Desktop::new();
    let reply = frame(&desktop, "hello").await;
    assert_eq!(reply["id"], Value::Null);
    assert!(reply["error"].as_str().is_some_and(|e| e.starts_with("Invalid JSON")));
  }

  #[tokio::test]
  async fn forwarder_serializes_desktop_events() {
    let state = WebSocketState::new(Desktop::new());
    let mut events = state.events.subscribe();
    spawn_event_forwarder(&state);
    state.desktop.notify("Hi", "there");

    let json = events.recv().await.unwrap();
    let event: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(event["event"], "notification:shown");
    assert_eq!(event["data"]["notification"]["title"], "Hi");
  }
}
