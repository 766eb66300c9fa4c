//! Bootstrap document loaded into the player sandbox.
//!
//! The page builds the IFrame API player from the serialized parameters and
//! reports lifecycle events as `ytplayer://<kind>?data=<value>` addresses.
//! Inside a frame the address is posted to the parent window; as a top-level
//! document it is navigated to so that a native host can intercept the scheme.
pub const PLAYER_BOOTSTRAP_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">
  <style>
    html, body { margin: 0; padding: 0; width: 100%; height: 100%; background-color: #000000; overflow: hidden; }
    #player { position: absolute; top: 0; left: 0; width: 100%; height: 100%; }
  </style>
</head>
<body>
  <div id="player"></div>
  <script src="https://www.youtube.com/iframe_api"></script>
  <script>
    var player;

    function notify(kind, data) {
      var address = "ytplayer://" + kind;
      if (data !== undefined && data !== null) {
        address += "?data=" + encodeURIComponent(String(data));
      }
      if (window.parent && window.parent !== window) {
        window.parent.postMessage({ __tubebridge: address }, "*");
      } else {
        window.location.href = address;
      }
    }

    function onReady(event) {
      notify("onReady", null);
    }

    function onStateChange(event) {
      notify("onStateChange", event.data);
    }

    function onPlaybackQualityChange(event) {
      notify("onPlaybackQualityChange", event.data);
    }

    function onPlayerError(event) {
      notify("onError", event.data);
    }

    function onYouTubeIframeAPIReady() {
      notify("onYouTubeIframeAPIReady", null);
      var params = {{PLAYER_PARAMS}};
      var events = {};
      Object.keys(params.events || {}).forEach(function (name) {
        var handler = window[params.events[name]];
        if (typeof handler === "function") {
          events[name] = handler;
        }
      });
      params.events = events;
      player = new YT.Player("player", params);
    }
  </script>
</body>
</html>
"#;
