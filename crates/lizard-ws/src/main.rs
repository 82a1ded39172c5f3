/*!
`lizard-ws` - serve a LizardOS desktop session over WebSocket.

Usage: `lizard-ws [PORT]`. The port can also come from `LIZARD_WS_PORT`.
*/

use lizard::Desktop;
use lizard_ws::{start_server, WebSocketState, DEFAULT_WS_PORT};

const PORT_ENV: &str = "LIZARD_WS_PORT";

fn port() -> u16 {
  let raw = std::env::args()
    .nth(1)
    .or_else(|| std::env::var(PORT_ENV).ok());
  match raw {
    Some(raw) => raw.parse().unwrap_or_else(|e| {
      log::warn!("Ignoring invalid port {raw:?} ({e}), using {DEFAULT_WS_PORT}");
      DEFAULT_WS_PORT
    }),
    None => DEFAULT_WS_PORT,
  }
}

#[tokio::main]
async fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let desktop = Desktop::new();
  desktop.boot();

  if let Err(e) = start_server(WebSocketState::with_port(desktop, port())).await {
    log::error!("WebSocket server failed: {e}");
    std::process::exit(1);
  }
}
