// Shared imports and the Dioxus webview implementation of the sandbox host.
use dioxus::prelude::*;
use futures_util::future::{FutureExt, LocalBoxFuture};
use serde::Deserialize;
use serde_json::Value;

use crate::bridge::{
    ActionSlot, BridgeController, HostError, PlayerAction, PlayerConfig, PlayerState,
    SandboxHost, StateCell, BRIDGE_SCHEME,
};

/// DOM id of the iframe that hosts the player document.
pub const PLAYER_FRAME_ID: &str = "tubebridge-player";

/// Forwards player addresses posted by the frame to the Rust side.
const NOTIFICATION_LISTENER_JS: &str = r#"
const prefix = "ytplayer://";
window.addEventListener("message", (event) => {
  const data = event ? event.data : null;
  const address = data && typeof data.__tubebridge === "string" ? data.__tubebridge : null;
  if (address && address.startsWith(prefix)) {
    dioxus.send(address);
  }
});
await new Promise(() => {});
"#;

#[derive(Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum EvalReply {
    Value { value: Value },
    Unsupported,
    Exception { message: String },
    Unavailable { message: String },
}

/// Sandbox host backed by an `<iframe srcdoc>` inside the app webview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebviewHost {
    frame_id: &'static str,
}

impl WebviewHost {
    pub fn new(frame_id: &'static str) -> Self {
        Self { frame_id }
    }

    fn frame_literal(&self) -> String {
        serde_json::to_string(self.frame_id).unwrap_or_else(|_| "\"\"".to_string())
    }

    /// Deliver every reserved-scheme address the player emits to
    /// `on_address` until the webview tears the listener down.
    pub async fn listen(self, mut on_address: impl FnMut(String) + 'static) {
        let scheme_prefix = format!("{BRIDGE_SCHEME}://");
        let mut listener = document::eval(NOTIFICATION_LISTENER_JS);
        loop {
            match listener.recv::<String>().await {
                Ok(address) if address.starts_with(&scheme_prefix) => on_address(address),
                Ok(address) => log::debug!("ignoring foreign address {address}"),
                Err(err) => {
                    log::warn!("player notification listener stopped: {err}");
                    break;
                }
            }
        }
    }
}

impl SandboxHost for WebviewHost {
    fn load_markup(&self, markup: &str) {
        let frame = self.frame_literal();
        let markup = match serde_json::to_string(markup) {
            Ok(markup) => markup,
            Err(err) => {
                log::warn!("player markup could not be encoded: {err}");
                return;
            }
        };
        let script = format!(
            r#"(function () {{
                const frame = document.getElementById({frame});
                if (!frame) return false;
                frame.srcdoc = {markup};
                return true;
            }})();"#
        );
        let _ = document::eval(&script);
    }

    fn evaluate(&self, script: String) -> LocalBoxFuture<'static, Result<Value, HostError>> {
        let frame = self.frame_literal();
        let source = serde_json::to_string(&script).unwrap_or_else(|_| "\"\"".to_string());
        let wrapped = format!(
            r#"return (function () {{
                const frame = document.getElementById({frame});
                const target = frame ? frame.contentWindow : null;
                if (!target) {{
                  return {{ outcome: "unavailable", message: "player frame is not mounted" }};
                }}
                try {{
                  const value = target.eval({source});
                  if (value === undefined || typeof value === "function") {{
                    return {{ outcome: "unsupported" }};
                  }}
                  return {{ outcome: "value", value }};
                }} catch (err) {{
                  return {{ outcome: "exception", message: String(err) }};
                }}
            }})();"#
        );
        let eval = document::eval(&wrapped);
        async move {
            match eval.join::<EvalReply>().await {
                Ok(EvalReply::Value { value }) => Ok(value),
                Ok(EvalReply::Unsupported) => Err(HostError::UnsupportedResultType),
                Ok(EvalReply::Exception { message }) => Err(HostError::Exception(message)),
                Ok(EvalReply::Unavailable { message }) => Err(HostError::Unavailable(message)),
                Err(err) => Err(HostError::Unavailable(err.to_string())),
            }
        }
        .boxed_local()
    }
}
