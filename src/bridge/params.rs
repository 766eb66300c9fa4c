//! Player parameter set and its rendering into the bootstrap document.
use std::collections::BTreeMap;

use serde::Serialize;

use super::bootstrap::PLAYER_BOOTSTRAP_HTML;
use super::config::{PlayerConfig, CALLBACK_NAMES, PARAMS_PLACEHOLDER};
use super::state::BridgeError;

/// Leaf or nested value accepted by the IFrame API constructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Object(BTreeMap<String, ParamValue>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

fn flag_text(enabled: bool) -> ParamValue {
    ParamValue::from(if enabled { "1" } else { "0" })
}

/// Parameters handed to `new YT.Player(...)` inside the sandbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerParams(BTreeMap<String, ParamValue>);

impl PlayerParams {
    /// Default set: fill the container, wire the callback table, and carry
    /// the configured player variables.
    pub fn defaults(config: &PlayerConfig) -> Self {
        let events = CALLBACK_NAMES
            .iter()
            .map(|(event, function)| (event.to_string(), ParamValue::from(*function)))
            .collect();

        let mut player_vars = BTreeMap::new();
        player_vars.insert("playsinline".to_string(), flag_text(config.plays_inline));
        player_vars.insert("controls".to_string(), flag_text(config.show_controls));
        player_vars.insert("showinfo".to_string(), flag_text(config.show_info));

        let mut params = BTreeMap::new();
        params.insert("height".to_string(), ParamValue::from("100%"));
        params.insert("width".to_string(), ParamValue::from("100%"));
        params.insert("events".to_string(), ParamValue::Object(events));
        params.insert("playerVars".to_string(), ParamValue::Object(player_vars));
        Self(params)
    }

    pub fn with_video(mut self, video_id: &str) -> Self {
        self.0
            .insert("videoId".to_string(), ParamValue::from(video_id));
        self
    }

    pub fn with_playlist(mut self, playlist_id: &str) -> Self {
        self.set_player_var("listType", ParamValue::from("playlist"));
        self.set_player_var("list", ParamValue::from(playlist_id));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn player_var(&self, key: &str) -> Option<&ParamValue> {
        match self.0.get("playerVars") {
            Some(ParamValue::Object(vars)) => vars.get(key),
            _ => None,
        }
    }

    fn set_player_var(&mut self, key: &str, value: ParamValue) {
        let vars = self
            .0
            .entry("playerVars".to_string())
            .or_insert_with(|| ParamValue::Object(BTreeMap::new()));
        match vars {
            ParamValue::Object(vars) => {
                vars.insert(key.to_string(), value);
            }
            other => {
                let mut fresh = BTreeMap::new();
                fresh.insert(key.to_string(), value);
                *other = ParamValue::Object(fresh);
            }
        }
    }

    /// Canonical JSON text. Keys come out sorted.
    pub fn to_canonical_text(&self) -> Result<String, BridgeError> {
        serde_json::to_string(self).map_err(|err| BridgeError::Serialization(err.to_string()))
    }

    /// Bootstrap document with the parameter placeholder filled in.
    pub fn render_bootstrap(&self) -> Result<String, BridgeError> {
        let encoded = self.to_canonical_text()?;
        Ok(PLAYER_BOOTSTRAP_HTML.replacen(PARAMS_PLACEHOLDER, &encoded, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_params(markup: &str) -> serde_json::Value {
        let start = markup.find("var params = ").unwrap() + "var params = ".len();
        let end = start + markup[start..].find(";\n").unwrap();
        serde_json::from_str(&markup[start..end]).unwrap()
    }

    #[test]
    fn template_carries_exactly_one_placeholder() {
        assert_eq!(PLAYER_BOOTSTRAP_HTML.matches(PARAMS_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn rendered_template_reproduces_player_vars() {
        let config = PlayerConfig {
            plays_inline: true,
            show_controls: false,
            show_info: false,
        };
        let markup = PlayerParams::defaults(&config).render_bootstrap().unwrap();
        assert!(!markup.contains(PARAMS_PLACEHOLDER));

        let params = extract_params(&markup);
        assert_eq!(
            params["playerVars"],
            serde_json::json!({ "playsinline": "1", "controls": "0", "showinfo": "0" })
        );
        assert_eq!(params["height"], "100%");
        assert_eq!(params["width"], "100%");
        assert_eq!(params["events"]["onError"], "onPlayerError");
        assert_eq!(params["events"]["onStateChange"], "onStateChange");
        assert!(params.get("videoId").is_none());
    }

    #[test]
    fn video_overlay_sets_video_id() {
        let params = PlayerParams::defaults(&PlayerConfig::default()).with_video("abc123");
        assert_eq!(params.get("videoId"), Some(&ParamValue::from("abc123")));
        assert_eq!(params.player_var("list"), None);
    }

    #[test]
    fn playlist_overlay_keeps_player_vars() {
        let params = PlayerParams::defaults(&PlayerConfig::default()).with_playlist("PL42");
        assert_eq!(params.get("videoId"), None);
        assert_eq!(params.player_var("listType"), Some(&ParamValue::from("playlist")));
        assert_eq!(params.player_var("list"), Some(&ParamValue::from("PL42")));
        assert_eq!(params.player_var("playsinline"), Some(&ParamValue::from("1")));
    }

    #[test]
    fn canonical_text_is_stable() {
        let params = PlayerParams::defaults(&PlayerConfig::default());
        let first = params.to_canonical_text().unwrap();
        let second = params.clone().to_canonical_text().unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with(r#"{"events":"#));
    }
}
