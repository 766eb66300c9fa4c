// Player component: owns the controller, consumes the action slot and
// listens for player notifications.
/// Embedded player bound to an action slot and a state record.
#[component]
pub fn YouTubePlayer(
    action: Signal<PlayerAction>,
    state: Signal<PlayerState>,
    #[props(default)] config: PlayerConfig,
) -> Element {
    let controller =
        use_hook(|| BridgeController::new(WebviewHost::new(PLAYER_FRAME_ID), state, config));

    // One-time setup: load the empty player and start the notification listener.
    {
        let controller = controller.clone();
        use_effect(move || {
            controller.bootstrap();
            let host = *controller.host();
            let controller = controller.clone();
            spawn(async move {
                host.listen(move |address| controller.handle_address(&address))
                    .await;
            });
        });
    }

    // Consume each action written into the slot.
    {
        let controller = controller.clone();
        use_effect(move || {
            let _ = action();
            if let Some(pending) = controller.consume(&action) {
                spawn(pending);
            }
        });
    }

    rsx! {
        div { class: "relative w-full aspect-video bg-black rounded-lg overflow-hidden",
            iframe {
                id: PLAYER_FRAME_ID,
                class: "absolute inset-0 w-full h-full border-0",
                "allow": "autoplay; encrypted-media; fullscreen",
            }
        }
    }
}
