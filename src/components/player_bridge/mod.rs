//! Player Bridge - binds the sandboxed player to Dioxus signals.
//! The webview is the sandbox host; signals are the action slot and state record.

// Shared imports and the webview sandbox host.
include!("webview_host.rs");
// Signal-backed action slot and state record.
include!("signal_bindings.rs");
// Player component wiring controller, listener and iframe together.
include!("player_view.rs");
