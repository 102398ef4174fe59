//! Gesture gate and page transition.
//!
//! Browsers refuse autoplaying audio, so everything starts from a click (or
//! touch) on the landing button: music first, then the page swap and scene
//! construction after a short delay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlAudioElement, HtmlElement, Window};

use crate::config;
use crate::rng::Rng;

use super::{app, audio};

const MUSIC_LABEL: &str = "\u{1F3B5} Cambiar M\u{FA}sica";
const MUSIC_FEEDBACK_LABEL: &str = "\u{2728} Reproduciendo...";

/// What the current platform supports, probed once at startup.
#[derive(Clone, Copy)]
pub struct Capabilities {
    pub touch: bool,
    /// Some mobile platforms ignore or reject programmatic volume changes.
    pub volume_control: bool,
}

impl Capabilities {
    pub fn detect(window: &Window) -> Self {
        let touch =
            js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        Self {
            touch,
            volume_control: !touch,
        }
    }
}

/// Wire the landing button. Both listeners are once-only and share a started
/// flag, so a click racing a touchstart still triggers the sequence once.
pub fn install_gesture_gate(window: &Window, document: &Document) -> Result<(), JsValue> {
    let button: HtmlElement = document
        .get_element_by_id("btn-start")
        .ok_or("missing #btn-start")?
        .dyn_into()?;
    let audio: HtmlAudioElement = document
        .get_element_by_id("audio-bg")
        .ok_or("missing #audio-bg")?
        .dyn_into()?;

    let caps = Capabilities::detect(window);
    let started = Rc::new(Cell::new(false));

    let handler = {
        let window = window.clone();
        let document = document.clone();
        let started = started.clone();
        Closure::<dyn FnMut()>::new(move || {
            if started.replace(true) {
                return;
            }
            begin(&window, &document, &audio, caps);
        })
    };

    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    button.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        handler.as_ref().unchecked_ref(),
        &opts,
    )?;
    if caps.touch {
        let opts = AddEventListenerOptions::new();
        opts.set_once(true);
        button.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            handler.as_ref().unchecked_ref(),
            &opts,
        )?;
    }
    handler.forget();
    Ok(())
}

/// The gesture arrived: start the music now, swap pages after the delay.
fn begin(window: &Window, document: &Document, audio: &HtmlAudioElement, caps: Capabilities) {
    audio::start_playback(audio, &caps);

    let document = document.clone();
    let swap = Closure::once_into_js(move || {
        if let Err(err) = reveal_galaxy(&document, caps) {
            log::error!("scene startup failed: {err:?}");
        }
    });
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        swap.unchecked_ref(),
        config::TRANSITION_DELAY_MS,
    ) {
        log::error!("failed to schedule page transition: {err:?}");
    }
}

fn reveal_galaxy(document: &Document, caps: Capabilities) -> Result<(), JsValue> {
    if let Some(landing) = document.get_element_by_id("page-landing") {
        let landing: HtmlElement = landing.dyn_into()?;
        landing.style().set_property("display", "none")?;
    }
    if let Some(page) = document.get_element_by_id("page-galaxy") {
        let page: HtmlElement = page.dyn_into()?;
        page.style().set_property("display", "block")?;
    }
    install_music_button(document)?;
    app::start(document, caps)
}

/// Floating button that hops to a different playlist track, with a short
/// label change as feedback.
fn install_music_button(document: &Document) -> Result<(), JsValue> {
    let audio: HtmlAudioElement = document
        .get_element_by_id("audio-bg")
        .ok_or("missing #audio-bg")?
        .dyn_into()?;

    let button: HtmlElement = document.create_element("button")?.dyn_into()?;
    button.set_id("btn-music");
    button.set_inner_text(MUSIC_LABEL);
    let style = button.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "20px")?;
    style.set_property("right", "20px")?;
    style.set_property("z-index", "10")?;
    style.set_property("padding", "10px 18px")?;
    style.set_property("border", "1px solid #FFB6C1")?;
    style.set_property("border-radius", "999px")?;
    style.set_property("background", "rgba(0, 0, 0, 0.6)")?;
    style.set_property("color", "#FFB6C1")?;
    style.set_property("cursor", "pointer")?;
    document.body().ok_or("no body")?.append_child(&button)?;

    let window = web_sys::window().ok_or("no window")?;
    let rng = Rc::new(RefCell::new(Rng::new(js_sys::Date::now() as u64 | 1)));

    let handler = {
        let button = button.clone();
        Closure::<dyn FnMut()>::new(move || {
            audio::change_track(&audio, &mut rng.borrow_mut());
            button.set_inner_text(MUSIC_FEEDBACK_LABEL);

            let button = button.clone();
            let revert = Closure::once_into_js(move || {
                button.set_inner_text(MUSIC_LABEL);
            });
            if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                revert.unchecked_ref(),
                config::BUTTON_FEEDBACK_MS,
            ) {
                log::warn!("failed to schedule label revert: {err:?}");
            }
        })
    };
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
