//! Maps high-level player actions onto remote commands or reloads.
use std::fmt;

use super::action::PlayerAction;
use super::config::PlayerConfig;
use super::link::video_id_from_link;
use super::params::PlayerParams;
use super::state::BridgeError;

/// Script fragment invoked on the player receiver, e.g. `playVideo()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand(String);

impl RemoteCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State field a query result is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTarget {
    Duration,
    CurrentTime,
}

/// What the controller has to do for one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Idle,
    Remote {
        command: RemoteCommand,
        on_result: Option<ResultTarget>,
    },
    Reload(PlayerParams),
    Fail(BridgeError),
}

fn remote(command: &str) -> Directive {
    Directive::Remote {
        command: RemoteCommand::new(command),
        on_result: None,
    }
}

fn query(command: &str, target: ResultTarget) -> Directive {
    Directive::Remote {
        command: RemoteCommand::new(command),
        on_result: Some(target),
    }
}

/// Number literal as the sandbox's script engine reads it.
fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

pub fn translate(action: &PlayerAction, config: &PlayerConfig) -> Directive {
    match action {
        PlayerAction::Idle => Directive::Idle,
        PlayerAction::LoadLink(link) => match video_id_from_link(link) {
            Some(video_id) => {
                Directive::Reload(PlayerParams::defaults(config).with_video(&video_id))
            }
            None => Directive::Fail(BridgeError::MalformedLink(link.clone())),
        },
        PlayerAction::LoadVideo(video_id) => {
            Directive::Reload(PlayerParams::defaults(config).with_video(video_id))
        }
        PlayerAction::LoadPlaylist(playlist_id) => {
            Directive::Reload(PlayerParams::defaults(config).with_playlist(playlist_id))
        }
        PlayerAction::Mute => remote("mute()"),
        PlayerAction::Unmute => remote("unMute()"),
        PlayerAction::Play => remote("playVideo()"),
        PlayerAction::Pause => remote("pauseVideo()"),
        PlayerAction::Stop => remote("stopVideo()"),
        PlayerAction::Clear => remote("clearVideo()"),
        PlayerAction::Previous => remote("previousVideo()"),
        PlayerAction::Next => remote("nextVideo()"),
        PlayerAction::Seek {
            position,
            allow_seek_ahead,
        } => remote(&format!(
            "seekTo({}, {allow_seek_ahead})",
            js_number(*position)
        )),
        PlayerAction::QueryDuration => query("getDuration()", ResultTarget::Duration),
        PlayerAction::QueryCurrentTime => query("getCurrentTime()", ResultTarget::CurrentTime),
    }
}
