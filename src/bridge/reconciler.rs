//! Applies notifications and remote-call results to the state record.
use serde_json::Value;

use super::notification::{Notification, NotificationKind};
use super::state::{BridgeError, PlaybackQuality, PlaybackStatus, PlayerErrorCode, PlayerState, StateCell};
use super::translator::ResultTarget;

/// Next record for `notification`, or `None` when it changes nothing or
/// its payload does not parse.
pub fn reduce_notification(state: &PlayerState, notification: &Notification) -> Option<PlayerState> {
    let payload = notification.payload.as_deref();
    match notification.kind {
        NotificationKind::ApiReady => Some(PlayerState {
            iframe_api_ready: true,
            ..state.clone()
        }),
        NotificationKind::Ready => Some(PlayerState {
            ready: true,
            ..state.clone()
        }),
        NotificationKind::StatusChange => {
            let status = PlaybackStatus::from_code(payload?)?;
            Some(PlayerState {
                status,
                ..state.clone()
            })
        }
        NotificationKind::QualityChange => {
            let quality = PlaybackQuality::from_code(payload?)?;
            Some(PlayerState {
                quality,
                ..state.clone()
            })
        }
        NotificationKind::PlayerError => {
            let code = PlayerErrorCode::from_code(payload?)?;
            Some(PlayerState {
                error: Some(BridgeError::Player(code)),
                ..state.clone()
            })
        }
    }
}

/// Next record for a query result. Non-numeric values are ignored.
pub fn reduce_result(state: &PlayerState, target: ResultTarget, value: &Value) -> Option<PlayerState> {
    let seconds = value.as_f64()?;
    Some(match target {
        ResultTarget::Duration => PlayerState {
            duration: Some(seconds),
            ..state.clone()
        },
        ResultTarget::CurrentTime => PlayerState {
            current_time: Some(seconds),
            ..state.clone()
        },
    })
}

/// Sole writer of the state record.
#[derive(Debug, Clone)]
pub struct StateReconciler<S> {
    cell: S,
}

impl<S: StateCell> StateReconciler<S> {
    pub fn new(cell: S) -> Self {
        Self { cell }
    }

    pub fn snapshot(&self) -> PlayerState {
        self.cell.snapshot()
    }

    /// Returns whether the record changed.
    pub fn apply_notification(&self, notification: &Notification) -> bool {
        let changed = self
            .cell
            .update(|state| reduce_notification(state, notification));
        if !changed {
            log::debug!(
                "notification {} left state unchanged (payload {:?})",
                notification.kind.token(),
                notification.payload
            );
        }
        changed
    }

    pub fn apply_result(&self, target: ResultTarget, value: &Value) -> bool {
        let changed = self.cell.update(|state| reduce_result(state, target, value));
        if value.as_f64().is_none() {
            log::debug!("ignoring non-numeric {target:?} result: {value}");
        }
        changed
    }

    pub fn record_error(&self, error: BridgeError) {
        log::warn!("player bridge error: {error}");
        self.cell.update(|state| {
            Some(PlayerState {
                error: Some(error),
                ..state.clone()
            })
        });
    }
}
