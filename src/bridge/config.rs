use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Custom scheme the bootstrap script uses to talk back to the host.
pub const BRIDGE_SCHEME: &str = "ytplayer";

/// Global the bootstrap script stores the IFrame API player under.
pub const PLAYER_RECEIVER: &str = "player";

/// Token inside the bootstrap template replaced by the serialized parameters.
pub const PARAMS_PLACEHOLDER: &str = "{{PLAYER_PARAMS}}";

/// Callback table handed to the IFrame API: event name -> script function name.
pub const CALLBACK_NAMES: [(&str, &str); 4] = [
    ("onReady", "onReady"),
    ("onStateChange", "onStateChange"),
    ("onPlaybackQualityChange", "onPlaybackQualityChange"),
    ("onError", "onPlayerError"),
];

/// Base player configuration used to build the default parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub plays_inline: bool,
    pub show_controls: bool,
    pub show_info: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            plays_inline: true,
            show_controls: true,
            show_info: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid player config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PlayerConfig {
    /// Parse a config document. Missing fields fall back to the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_plays_inline_without_info() {
        let config = PlayerConfig::default();
        assert!(config.plays_inline);
        assert!(config.show_controls);
        assert!(!config.show_info);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = PlayerConfig::from_json(r#"{"show_controls": false}"#).unwrap();
        assert!(config.plays_inline);
        assert!(!config.show_controls);
        assert!(!config.show_info);
    }

    #[test]
    fn config_survives_serialization() {
        let config = PlayerConfig {
            plays_inline: false,
            show_controls: false,
            show_info: true,
        };
        let raw = serde_json::to_string(&config).unwrap();
        assert_eq!(PlayerConfig::from_json(&raw).unwrap(), config);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(PlayerConfig::from_json("not json").is_err());
    }
}
