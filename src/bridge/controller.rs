//! Orchestrates translator, gateway, encoder and reconciler for one player.
use futures_util::future::{FutureExt, LocalBoxFuture};

use super::action::{ActionSlot, PlayerAction};
use super::config::PlayerConfig;
use super::gateway::{CallOutcome, RemoteCallGateway, SandboxHost};
use super::notification::decode;
use super::params::PlayerParams;
use super::reconciler::StateReconciler;
use super::state::{BridgeError, PlayerState, StateCell};
use super::translator::{translate, Directive};

#[derive(Debug, Clone)]
pub struct BridgeController<H, S> {
    gateway: RemoteCallGateway<H>,
    reconciler: StateReconciler<S>,
    config: PlayerConfig,
}

impl<H: SandboxHost, S: StateCell> BridgeController<H, S> {
    pub fn new(host: H, state: S, config: PlayerConfig) -> Self {
        Self {
            gateway: RemoteCallGateway::new(host),
            reconciler: StateReconciler::new(state),
            config,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.reconciler.snapshot()
    }

    /// The sandbox host carrying both the command and notification channels.
    pub fn host(&self) -> &H {
        self.gateway.host()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Load the empty player so the IFrame API is warm before any video.
    pub fn bootstrap(&self) {
        self.reload(PlayerParams::defaults(&self.config));
    }

    /// Take the pending action out of `slot` and run it. The slot is back
    /// to `Idle` before this returns.
    pub fn consume(&self, slot: &impl ActionSlot) -> Option<LocalBoxFuture<'static, ()>> {
        let action = slot.take();
        self.dispatch(action)
    }

    /// Run one action. A remote call comes back as a future for the
    /// caller's executor; reloads and failures are applied immediately.
    pub fn dispatch(&self, action: PlayerAction) -> Option<LocalBoxFuture<'static, ()>> {
        match translate(&action, &self.config) {
            Directive::Idle => None,
            Directive::Reload(params) => {
                self.reload(params);
                None
            }
            Directive::Fail(error) => {
                self.reconciler.record_error(error);
                None
            }
            Directive::Remote { command, on_result } => {
                log::debug!("executing remote command {command}");
                let pending = self.gateway.execute(&command);
                let reconciler = self.reconciler.clone();
                Some(
                    async move {
                        match pending.await {
                            CallOutcome::Value(value) => {
                                if let Some(target) = on_result {
                                    reconciler.apply_result(target, &value);
                                }
                            }
                            CallOutcome::NoValue => {}
                            CallOutcome::Failed(source) => {
                                reconciler.record_error(BridgeError::RemoteCall {
                                    command: command.to_string(),
                                    source,
                                });
                            }
                        }
                    }
                    .boxed_local(),
                )
            }
        }
    }

    /// Feed one intercepted address through the decoder and reconciler.
    pub fn handle_address(&self, address: &str) {
        match decode(address) {
            Some(notification) => {
                self.reconciler.apply_notification(&notification);
            }
            None => log::debug!("discarding unrecognised player address {address}"),
        }
    }

    fn reload(&self, params: PlayerParams) {
        match params.render_bootstrap() {
            Ok(markup) => {
                log::info!("reloading player sandbox");
                self.gateway.host().load_markup(&markup);
            }
            Err(error) => self.reconciler.record_error(error),
        }
    }
}
