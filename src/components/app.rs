use crate::bridge::{PlayerAction, PlayerConfig, PlayerState};
use crate::components::YouTubePlayer;
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "TUBEBRIDGE_CONFIG";

/// Player config from the JSON file named by `TUBEBRIDGE_CONFIG`, or defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_player_config() -> PlayerConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return PlayerConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(raw) => match PlayerConfig::from_json(&raw) {
            Ok(config) => {
                log::info!("loaded player config from {path}");
                config
            }
            Err(err) => {
                log::warn!("{err} in {path}, using defaults");
                PlayerConfig::default()
            }
        },
        Err(err) => {
            log::warn!("failed to read player config {path}: {err}");
            PlayerConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_player_config() -> PlayerConfig {
    PlayerConfig::default()
}

pub fn format_seconds(seconds: Option<f64>) -> String {
    match seconds {
        Some(value) if value.is_finite() && value >= 0.0 => {
            let whole = value.round() as u64;
            format!("{}:{:02}", whole / 60, whole % 60)
        }
        _ => "--:--".to_string(),
    }
}

#[component]
pub fn App() -> Element {
    let action = use_signal(|| PlayerAction::Idle);
    let state = use_signal(PlayerState::default);
    let config = use_hook(load_player_config);

    use_context_provider(|| action);
    use_context_provider(|| state);

    rsx! {
        main { class: "min-h-screen bg-zinc-950 text-white p-6 flex flex-col gap-6 max-w-4xl mx-auto",
            YouTubePlayer { action, state, config }
            LinkForm {}
            TransportBar {}
            StatePanel {}
        }
    }
}

#[component]
fn LinkForm() -> Element {
    let action = use_context::<Signal<PlayerAction>>();
    let mut link = use_signal(String::new);
    let mut playlist = use_signal(String::new);

    let on_load_link = move |_| {
        let value = link().trim().to_string();
        if value.is_empty() {
            return;
        }
        let mut action = action;
        action.set(PlayerAction::LoadLink(value));
    };

    let on_load_playlist = move |_| {
        let value = playlist().trim().to_string();
        if value.is_empty() {
            return;
        }
        let mut action = action;
        action.set(PlayerAction::LoadPlaylist(value));
    };

    rsx! {
        div { class: "flex flex-col gap-3",
            div { class: "flex gap-2",
                input {
                    class: "flex-1 px-3 py-2 bg-zinc-800 border border-zinc-700 rounded-lg",
                    placeholder: "https://youtu.be/...",
                    value: link,
                    oninput: move |e| link.set(e.value()),
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-emerald-600 hover:bg-emerald-500 rounded-lg",
                    onclick: on_load_link,
                    "Load link"
                }
            }
            div { class: "flex gap-2",
                input {
                    class: "flex-1 px-3 py-2 bg-zinc-800 border border-zinc-700 rounded-lg",
                    placeholder: "Playlist id",
                    value: playlist,
                    oninput: move |e| playlist.set(e.value()),
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-zinc-700 hover:bg-zinc-600 rounded-lg",
                    onclick: on_load_playlist,
                    "Load playlist"
                }
            }
        }
    }
}

#[component]
fn TransportButton(label: String, request: PlayerAction) -> Element {
    let action = use_context::<Signal<PlayerAction>>();
    rsx! {
        button {
            r#type: "button",
            class: "px-3 py-2 bg-zinc-800 hover:bg-zinc-700 rounded-lg text-sm",
            onclick: move |_| {
                let mut action = action;
                action.set(request.clone());
            },
            "{label}"
        }
    }
}

#[component]
fn TransportBar() -> Element {
    let action = use_context::<Signal<PlayerAction>>();
    let mut seek_seconds = use_signal(|| 0.0f64);

    let on_seek = move |_| {
        let mut action = action;
        action.set(PlayerAction::Seek {
            position: seek_seconds().max(0.0),
            allow_seek_ahead: true,
        });
    };

    rsx! {
        div { class: "flex flex-wrap gap-2 items-center",
            TransportButton { label: "Previous".to_string(), request: PlayerAction::Previous }
            TransportButton { label: "Play".to_string(), request: PlayerAction::Play }
            TransportButton { label: "Pause".to_string(), request: PlayerAction::Pause }
            TransportButton { label: "Stop".to_string(), request: PlayerAction::Stop }
            TransportButton { label: "Next".to_string(), request: PlayerAction::Next }
            TransportButton { label: "Mute".to_string(), request: PlayerAction::Mute }
            TransportButton { label: "Unmute".to_string(), request: PlayerAction::Unmute }
            TransportButton { label: "Clear".to_string(), request: PlayerAction::Clear }
            TransportButton { label: "Duration".to_string(), request: PlayerAction::QueryDuration }
            TransportButton { label: "Position".to_string(), request: PlayerAction::QueryCurrentTime }
            input {
                r#type: "number",
                min: "0",
                step: "0.5",
                class: "w-24 px-2 py-2 bg-zinc-800 border border-zinc-700 rounded-lg text-sm",
                value: "{seek_seconds}",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse::<f64>() {
                        seek_seconds.set(value);
                    }
                },
            }
            button {
                r#type: "button",
                class: "px-3 py-2 bg-zinc-800 hover:bg-zinc-700 rounded-lg text-sm",
                onclick: on_seek,
                "Seek"
            }
        }
    }
}

#[component]
fn StatePanel() -> Element {
    let state = use_context::<Signal<PlayerState>>();
    let current = state();
    let api_loaded = if current.iframe_api_ready { "yes" } else { "no" };
    let ready = if current.ready { "yes" } else { "no" };
    let status = current.status.label();
    let quality = current.quality.label();
    let duration = format_seconds(current.duration);
    let position = format_seconds(current.current_time);
    let error = current.error.as_ref().map(|err| err.to_string());

    rsx! {
        dl { class: "grid grid-cols-2 gap-x-6 gap-y-1 text-sm text-zinc-300",
            dt { "API loaded" }
            dd { "{api_loaded}" }
            dt { "Ready" }
            dd { "{ready}" }
            dt { "Status" }
            dd { "{status}" }
            dt { "Quality" }
            dd { "{quality}" }
            dt { "Duration" }
            dd { "{duration}" }
            dt { "Position" }
            dd { "{position}" }
        }
        {error.map(|message| rsx! {
            p { class: "text-sm text-red-400", "{message}" }
        })}
    }
}
