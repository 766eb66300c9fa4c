// Signal-backed action slot and state record.
// Reads go through `peek` so the bridge never subscribes the caller's scope.
impl StateCell for Signal<PlayerState> {
    fn snapshot(&self) -> PlayerState {
        self.peek().clone()
    }

    fn replace(&self, next: PlayerState) {
        let mut signal = *self;
        signal.set(next);
    }
}

impl ActionSlot for Signal<PlayerAction> {
    fn peek_action(&self) -> PlayerAction {
        self.peek().clone()
    }

    fn reset(&self) {
        let mut signal = *self;
        signal.set(PlayerAction::Idle);
    }
}
