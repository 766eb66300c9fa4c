//! Decoder for the addresses the sandbox emits to talk back to the host.
use std::collections::HashMap;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    ApiReady,
    Ready,
    StatusChange,
    QualityChange,
    PlayerError,
}

impl NotificationKind {
    const TOKENS: [(&'static str, NotificationKind); 5] = [
        ("onYouTubeIframeAPIReady", NotificationKind::ApiReady),
        ("onReady", NotificationKind::Ready),
        ("onStateChange", NotificationKind::StatusChange),
        ("onPlaybackQualityChange", NotificationKind::QualityChange),
        ("onError", NotificationKind::PlayerError),
    ];

    /// Hosts may lowercase the authority, so tokens match case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|(_, kind)| *kind)
    }

    pub fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub payload: Option<String>,
}

/// Split `a=1&b=2` into a map. Pairs without an `=` are skipped and values
/// are percent-decoded when possible.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next()?;
            let value = urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some((key.to_string(), value))
        })
        .collect()
}

/// Decode one intercepted address such as `ytplayer://onStateChange?data=1`.
/// Unknown kinds and unparseable addresses yield `None`.
pub fn decode(address: &str) -> Option<Notification> {
    let url = Url::parse(address).ok()?;
    let kind = NotificationKind::from_token(url.host_str()?)?;
    let payload = url
        .query()
        .and_then(|query| parse_query(query).remove("data"));
    Some(Notification { kind, payload })
}
