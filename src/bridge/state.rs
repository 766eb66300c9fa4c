//! Externally observable player state and the caller-visible error type.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::gateway::HostError;

/// Playback status as reported by the IFrame API `onStateChange` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Queued,
}

impl PlaybackStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "-1" => Some(Self::Unstarted),
            "0" => Some(Self::Ended),
            "1" => Some(Self::Playing),
            "2" => Some(Self::Paused),
            "3" => Some(Self::Buffering),
            "5" => Some(Self::Queued),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unstarted => "unstarted",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Queued => "queued",
        }
    }
}

/// Resolution class reported by `onPlaybackQualityChange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackQuality {
    #[default]
    Small,
    Medium,
    Large,
    Hd720,
    Hd1080,
    HighRes,
}

impl PlaybackQuality {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "hd720" => Some(Self::Hd720),
            "hd1080" => Some(Self::Hd1080),
            "highres" => Some(Self::HighRes),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Hd720 => "hd720",
            Self::Hd1080 => "hd1080",
            Self::HighRes => "highres",
        }
    }
}

/// Error codes delivered through the player's `onError` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerErrorCode {
    InvalidParameter,
    Html5Error,
    VideoNotFound,
    EmbedNotAllowed,
    Other(i64),
}

impl PlayerErrorCode {
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().parse::<i64>().ok()?;
        Some(match code {
            2 => Self::InvalidParameter,
            5 => Self::Html5Error,
            100 => Self::VideoNotFound,
            // 150 is the same restriction reported under a different code.
            101 | 150 => Self::EmbedNotAllowed,
            other => Self::Other(other),
        })
    }
}

impl fmt::Display for PlayerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "the request contained an invalid parameter"),
            Self::Html5Error => write!(f, "the video cannot be played in the HTML5 player"),
            Self::VideoNotFound => write!(f, "the video was not found or was removed"),
            Self::EmbedNotAllowed => write!(f, "the owner does not allow embedded playback"),
            Self::Other(code) => write!(f, "unknown player error {code}"),
        }
    }
}

/// Failure descriptor surfaced through `PlayerState::error`.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    #[error("malformed link: {0}")]
    MalformedLink(String),
    #[error("remote call `{command}` failed: {source}")]
    RemoteCall {
        command: String,
        #[source]
        source: HostError,
    },
    #[error("player parameters could not be serialized: {0}")]
    Serialization(String),
    #[error("player error: {0}")]
    Player(PlayerErrorCode),
}

// Descriptors compare by message, not by identity.
impl PartialEq for BridgeError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// The single reconciled state record exposed to observers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    pub ready: bool,
    pub status: PlaybackStatus,
    pub quality: PlaybackQuality,
    pub duration: Option<f64>,
    pub current_time: Option<f64>,
    pub error: Option<BridgeError>,
    pub iframe_api_ready: bool,
}

/// Exclusive-access holder of the state record.
///
/// Every write is a whole-record replacement computed from a snapshot, so
/// observers never see a record with only some fields updated.
pub trait StateCell: Clone + 'static {
    fn snapshot(&self) -> PlayerState;

    fn replace(&self, next: PlayerState);

    /// Compute the next record from the current one and store it if it
    /// differs. Returning `None` leaves the record untouched.
    fn update(&self, f: impl FnOnce(&PlayerState) -> Option<PlayerState>) -> bool {
        let current = self.snapshot();
        match f(&current) {
            Some(next) if next != current => {
                self.replace(next);
                true
            }
            _ => false,
        }
    }
}

impl StateCell for Rc<RefCell<PlayerState>> {
    fn snapshot(&self) -> PlayerState {
        self.borrow().clone()
    }

    fn replace(&self, next: PlayerState) {
        *self.borrow_mut() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(PlaybackStatus::from_code("-1"), Some(PlaybackStatus::Unstarted));
        assert_eq!(PlaybackStatus::from_code("0"), Some(PlaybackStatus::Ended));
        assert_eq!(PlaybackStatus::from_code("1"), Some(PlaybackStatus::Playing));
        assert_eq!(PlaybackStatus::from_code("2"), Some(PlaybackStatus::Paused));
        assert_eq!(PlaybackStatus::from_code("3"), Some(PlaybackStatus::Buffering));
        assert_eq!(PlaybackStatus::from_code("5"), Some(PlaybackStatus::Queued));
        assert_eq!(PlaybackStatus::from_code("4"), None);
        assert_eq!(PlaybackStatus::from_code("9"), None);
        assert_eq!(PlaybackStatus::from_code("playing"), None);
    }

    #[test]
    fn quality_codes_map_to_variants() {
        assert_eq!(PlaybackQuality::from_code("hd720"), Some(PlaybackQuality::Hd720));
        assert_eq!(PlaybackQuality::from_code("highres"), Some(PlaybackQuality::HighRes));
        assert_eq!(PlaybackQuality::from_code("4k"), None);
    }

    #[test]
    fn errors_compare_by_message() {
        let a = BridgeError::MalformedLink("https://example.com/nothing".to_string());
        let b = BridgeError::MalformedLink("https://example.com/nothing".to_string());
        let c = BridgeError::MalformedLink("https://example.com/other".to_string());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(
            BridgeError::Player(PlayerErrorCode::from_code("101").unwrap()),
            BridgeError::Player(PlayerErrorCode::EmbedNotAllowed)
        );
    }

    #[test]
    fn unchanged_update_does_not_write() {
        let cell = Rc::new(RefCell::new(PlayerState::default()));
        assert!(!cell.update(|state| Some(state.clone())));
        assert!(!cell.update(|_| None));
        assert!(cell.update(|state| Some(PlayerState {
            ready: true,
            ..state.clone()
        })));
        assert!(cell.snapshot().ready);
    }
}
