//! Player bridge - drives a sandboxed IFrame API player through a
//! command channel (script evaluation) and reads it back through a
//! notification channel (reserved-scheme addresses).

pub mod action;
pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod gateway;
pub mod link;
pub mod notification;
pub mod params;
pub mod reconciler;
pub mod state;
pub mod translator;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{ActionSlot, PlayerAction};
pub use config::{ConfigError, PlayerConfig, BRIDGE_SCHEME};
pub use controller::BridgeController;
pub use gateway::{CallOutcome, HostError, RemoteCallGateway, SandboxHost};
pub use link::video_id_from_link;
pub use notification::{decode, Notification, NotificationKind};
pub use params::{ParamValue, PlayerParams};
pub use reconciler::StateReconciler;
pub use state::{
    BridgeError, PlaybackQuality, PlaybackStatus, PlayerErrorCode, PlayerState, StateCell,
};
pub use translator::{translate, Directive, RemoteCommand, ResultTarget};
