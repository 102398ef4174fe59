//! Background music control around the page's single `<audio>` element.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use crate::config;
use crate::playlist;
use crate::rng::Rng;

use super::boot::Capabilities;

/// Begin playback after the opening gesture. Volume is only touched where the
/// platform honors programmatic control; some mobile platforms reject it.
pub fn start_playback(audio: &HtmlAudioElement, caps: &Capabilities) {
    if caps.volume_control {
        audio.set_volume(config::AUDIO_VOLUME);
    }
    play_logged(audio, "initial playback");
}

/// Switch to a different track than the one currently loaded.
pub fn change_track(audio: &HtmlAudioElement, rng: &mut Rng) {
    let src = audio.src();
    let current = src.rsplit('/').next().filter(|name| !name.is_empty());
    let next = playlist::next_track(&playlist::TRACKS, current, rng);
    log::info!("switching track to {next}");

    audio.pause().ok();
    audio.set_src(next);
    audio.load();
    play_logged(audio, "track change");
}

/// Fire the play() promise and log a rejection instead of surfacing it; the
/// page stays interactive either way.
fn play_logged(audio: &HtmlAudioElement, what: &'static str) {
    match audio.play() {
        Ok(promise) => {
            spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("{what} rejected: {err:?}");
                }
            });
        }
        Err(err) => {
            log::warn!("{what} failed to start: {err:?}");
        }
    }
}
