//! The components module contains the Dioxus side of the bridge: the
//! player component and the demo shell around it.

mod app;
mod player_bridge;

pub use app::*;
pub use player_bridge::*;
