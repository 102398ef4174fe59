//! Canvas-2d rasterization: the procedural moon surface and text/emoji glyphs
//! are painted into offscreen canvases and uploaded as WebGL textures.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::config;
use crate::scene::moon::MoonSurface;

fn offscreen_canvas(
    document: &Document,
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;
    Ok((canvas, ctx))
}

/// Paint the moon surface into a canvas: a grey base gradient, dark crater
/// bowls with a light rim, then soft maria shadows on top.
pub fn bake_moon(document: &Document, surface: &MoonSurface) -> Result<HtmlCanvasElement, JsValue> {
    let (canvas, ctx) = offscreen_canvas(document, config::MOON_TEX_WIDTH, config::MOON_TEX_HEIGHT)?;
    let w = config::MOON_TEX_WIDTH as f64;
    let h = config::MOON_TEX_HEIGHT as f64;

    let base = ctx.create_linear_gradient(0.0, 0.0, w, 0.0);
    base.add_color_stop(0.0, "#8A8A8A")?;
    base.add_color_stop(0.5, "#B0B0B0")?;
    base.add_color_stop(1.0, "#8A8A8A")?;
    ctx.set_fill_style_canvas_gradient(&base);
    ctx.fill_rect(0.0, 0.0, w, h);

    for crater in &surface.craters {
        let (x, y, r) = (crater.x as f64, crater.y as f64, crater.radius as f64);
        let bowl = ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
        bowl.add_color_stop(0.0, "#4A4A4A")?;
        bowl.add_color_stop(0.7, "#6A6A6A")?;
        bowl.add_color_stop(1.0, "rgba(106, 106, 106, 0)")?;
        ctx.set_fill_style_canvas_gradient(&bowl);
        ctx.begin_path();
        ctx.arc(x, y, r, 0.0, std::f64::consts::TAU)?;
        ctx.fill();

        // Offset rim highlight suggests raking light.
        ctx.set_stroke_style_str("rgba(200, 200, 200, 0.3)");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.arc(x + r * 0.2, y - r * 0.2, r * 0.9, 0.0, std::f64::consts::TAU)?;
        ctx.stroke();
    }

    for shadow in &surface.shadows {
        ctx.set_fill_style_str(&format!("rgba(90, 90, 90, {})", shadow.alpha));
        ctx.begin_path();
        ctx.arc(
            shadow.x as f64,
            shadow.y as f64,
            shadow.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
    }

    Ok(canvas)
}

/// Render a line of text at the given pixel height into a tight canvas.
/// Returns the canvas and its width/height aspect ratio so the billboard quad
/// can be scaled without distortion.
pub fn rasterize_text(
    document: &Document,
    text: &str,
    px: u32,
    font_family: &str,
) -> Result<(HtmlCanvasElement, f32), JsValue> {
    let (canvas, ctx) = offscreen_canvas(document, 16, 16)?;
    let font = format!("{px}px \"{font_family}\", sans-serif");

    ctx.set_font(&font);
    let metrics = ctx.measure_text(text)?;
    let width = (metrics.width().ceil() as u32).max(1) + px / 2;
    let height = px * 2;

    // Resizing resets all 2d state, so the font is set again below.
    canvas.set_width(width);
    canvas.set_height(height);
    ctx.set_font(&font);
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("#FFFFFF");
    ctx.fill_text(text, (px / 4) as f64, (height / 2) as f64)?;

    Ok((canvas, width as f32 / height as f32))
}

/// Render a single emoji glyph centered in a square canvas.
pub fn rasterize_emoji(document: &Document, glyph: &str) -> Result<HtmlCanvasElement, JsValue> {
    let (canvas, ctx) = offscreen_canvas(document, 128, 128)?;
    ctx.set_font("100px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(glyph, 64.0, 64.0)?;
    Ok(canvas)
}
