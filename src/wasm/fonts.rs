//! Display font loading and text layer construction.
//!
//! The scene starts without any text; once the font resolves, every line is
//! rasterized, uploaded as a texture, and installed into the scene in one
//! shot. A failed load leaves the galaxy running silently without text.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, FontFace};

use crate::config;
use crate::rng::Rng;
use crate::scene::text::{
    self, Billboard, Sprite, TextLayer, HEART_EMOJI, PHRASES, PIG_EMOJI, SUB_LINES, TITLE,
};

use super::app::App;
use super::texture;

const FONT_FAMILY: &str = "Poppins";
const FONT_URL: &str =
    "url(https://fonts.gstatic.com/s/poppins/v21/pxiByp8kv8JHgFVrLGT9Z1xlFd2JQEk.woff2)";

/// Pixel heights used when rasterizing each class of text.
const TITLE_PX: u32 = 96;
const SUBLINE_PX: u32 = 48;
const PHRASE_PX: u32 = 48;

/// Kick off the async font load; on completion, build and install the text
/// layer. Errors are logged and swallowed so the animation keeps running.
pub fn load_and_install(document: Document, app: Rc<RefCell<App>>) {
    spawn_local(async move {
        match load_font(&document).await {
            Ok(()) => {
                if let Err(err) = install_layer(&document, &app) {
                    log::warn!("text layer construction failed: {err:?}");
                }
            }
            Err(err) => {
                log::warn!("font load failed, continuing without text: {err:?}");
            }
        }
    });
}

async fn load_font(document: &Document) -> Result<(), JsValue> {
    let font = FontFace::new_with_str(FONT_FAMILY, FONT_URL)?;
    JsFuture::from(font.load()?).await?;
    document.fonts().add(&font)?;
    log::info!("display font ready");
    Ok(())
}

fn install_layer(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let mut app = app.borrow_mut();
    let App {
        scene, renderer, ..
    } = &mut *app;

    let mut upload = |line: &str, px: u32| -> Result<(usize, f32), JsValue> {
        let (canvas, aspect) = texture::rasterize_text(document, line, px, FONT_FAMILY)?;
        let slot = renderer.add_canvas_texture(&canvas)?;
        Ok((slot, aspect))
    };

    let (slot, aspect) = upload(TITLE, TITLE_PX)?;
    let title = Billboard::new(text::title_pos(), config::TITLE_HEIGHT, aspect, slot);

    let mut sub_lines = Vec::with_capacity(SUB_LINES.len());
    for (i, line) in SUB_LINES.iter().enumerate() {
        let (slot, aspect) = upload(line, SUBLINE_PX)?;
        sub_lines.push(Billboard::new(
            text::sub_line_pos(i),
            config::SUBLINE_HEIGHT,
            aspect,
            slot,
        ));
    }

    // Phrase placement uses its own stream so scene replay is unaffected by
    // when the font happens to resolve.
    let mut rng = Rng::new(js_sys::Date::now() as u64 | 1);
    let mut phrases = Vec::with_capacity(PHRASES.len());
    for phrase in PHRASES {
        let (slot, aspect) = upload(phrase, PHRASE_PX)?;
        phrases.push(Billboard::new(
            text::phrase_pos(&mut rng),
            config::PHRASE_HEIGHT,
            aspect,
            slot,
        ));
    }

    let [pig_pos, heart_pos] = text::sprite_positions();
    let mut sprites = Vec::with_capacity(2);
    for (glyph, pos) in [(PIG_EMOJI, pig_pos), (HEART_EMOJI, heart_pos)] {
        let canvas = texture::rasterize_emoji(document, glyph)?;
        let slot = renderer.add_canvas_texture(&canvas)?;
        sprites.push(Sprite {
            pos,
            size: config::EMOJI_SIZE,
            texture: slot,
        });
    }

    scene.install_text(TextLayer {
        title,
        sub_lines,
        phrases,
        sprites,
    });
    log::info!("text layer installed ({} phrases)", PHRASES.len());
    Ok(())
}
