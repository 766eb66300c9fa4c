//! Remote call gateway over the sandbox's evaluate-script primitive.
use futures_util::future::{FutureExt, LocalBoxFuture};
use serde_json::Value;
use thiserror::Error;

use super::config::PLAYER_RECEIVER;
use super::translator::RemoteCommand;

/// Failure reported by the sandbox host for one script evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// The script ran but produced nothing the host can hand back
    /// (`undefined`, a function, ...). Commands such as `playVideo()` end
    /// up here on every call.
    #[error("script result has an unsupported type")]
    UnsupportedResultType,
    #[error("script raised an exception: {0}")]
    Exception(String),
    #[error("sandbox unavailable: {0}")]
    Unavailable(String),
}

/// External sandbox collaborator.
pub trait SandboxHost: Clone + 'static {
    /// Replace the sandbox document and re-run its bootstrap script.
    fn load_markup(&self, markup: &str);

    /// Evaluate `script` inside the sandbox. Resolves exactly once.
    fn evaluate(&self, script: String) -> LocalBoxFuture<'static, Result<Value, HostError>>;
}

/// Result of one remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Value(Value),
    NoValue,
    Failed(HostError),
}

#[derive(Debug, Clone)]
pub struct RemoteCallGateway<H> {
    host: H,
}

impl<H: SandboxHost> RemoteCallGateway<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Script text submitted for `command`, scoped to the player receiver.
    pub fn script_for(command: &RemoteCommand) -> String {
        format!("{PLAYER_RECEIVER}.{command};")
    }

    pub fn execute(&self, command: &RemoteCommand) -> LocalBoxFuture<'static, CallOutcome> {
        let pending = self.host.evaluate(Self::script_for(command));
        async move {
            match pending.await {
                Ok(Value::Null) => CallOutcome::NoValue,
                Ok(value) => CallOutcome::Value(value),
                Err(HostError::UnsupportedResultType) => CallOutcome::NoValue,
                Err(err) => CallOutcome::Failed(err),
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::MockHost;

    #[test]
    fn script_is_scoped_to_receiver() {
        let script = RemoteCallGateway::<MockHost>::script_for(&RemoteCommand::new("playVideo()"));
        assert_eq!(script, "player.playVideo();");
    }

    #[tokio::test]
    async fn value_results_are_decoded() {
        let host = MockHost::default();
        host.push_reply(Ok(serde_json::json!(257.3)));
        let gateway = RemoteCallGateway::new(host.clone());

        let outcome = gateway.execute(&RemoteCommand::new("getDuration()")).await;

        assert_eq!(outcome, CallOutcome::Value(serde_json::json!(257.3)));
        assert_eq!(host.scripts(), vec!["player.getDuration();".to_string()]);
    }

    #[tokio::test]
    async fn unsupported_result_is_no_value() {
        let host = MockHost::default();
        host.push_reply(Err(HostError::UnsupportedResultType));
        let gateway = RemoteCallGateway::new(host);

        let outcome = gateway.execute(&RemoteCommand::new("playVideo()")).await;

        assert_eq!(outcome, CallOutcome::NoValue);
    }

    #[tokio::test]
    async fn other_errors_are_failures() {
        let host = MockHost::default();
        host.push_reply(Err(HostError::Exception(
            "TypeError: player.stopVideo is not a function".to_string(),
        )));
        let gateway = RemoteCallGateway::new(host);

        let outcome = gateway.execute(&RemoteCommand::new("stopVideo()")).await;

        assert!(matches!(outcome, CallOutcome::Failed(HostError::Exception(_))));
    }
}
