#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! A personal-greeting galaxy: a particle star field, a cratered moon,
//! drifting comets and floating phrases, rendered in the browser behind a
//! music-starting gesture gate.
//!
//! Scene state and math live in the top-level modules and compile on every
//! target so they can be tested on the host; everything that touches the DOM,
//! WebGL or audio sits behind `cfg(target_arch = "wasm32")`.

pub mod camera;
pub mod config;
pub mod playlist;
pub mod rng;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod app;
    pub mod audio;
    pub mod boot;
    pub mod render;
    mod controls;
    mod fonts;
    mod texture;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        boot::install_gesture_gate(&window, &document)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
