use std::cell::RefCell;
use std::rc::Rc;

/// High-level request written into the action slot by the host UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlayerAction {
    #[default]
    Idle,
    LoadLink(String),
    LoadVideo(String),
    LoadPlaylist(String),
    Mute,
    Unmute,
    Play,
    Pause,
    Stop,
    Clear,
    Seek {
        position: f64,
        allow_seek_ahead: bool,
    },
    QueryDuration,
    QueryCurrentTime,
    Previous,
    Next,
}

impl PlayerAction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Single-slot inbound channel. The bridge is its only consumer.
pub trait ActionSlot {
    fn peek_action(&self) -> PlayerAction;

    fn reset(&self);

    /// Take the pending action, leaving `Idle` behind. An idle slot is
    /// not written to.
    fn take(&self) -> PlayerAction {
        let action = self.peek_action();
        if !action.is_idle() {
            self.reset();
        }
        action
    }
}

impl ActionSlot for Rc<RefCell<PlayerAction>> {
    fn peek_action(&self) -> PlayerAction {
        self.borrow().clone()
    }

    fn reset(&self) {
        *self.borrow_mut() = PlayerAction::Idle;
    }
}
