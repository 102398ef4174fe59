//! Scene construction and the animation loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::camera::OrbitCamera;
use crate::scene::Scene;

use super::boot::Capabilities;
use super::render::Renderer;
use super::{controls, fonts, texture};

/// Everything the animation loop mutates each frame.
pub struct App {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub renderer: Renderer,
}

/// Build the scene, renderer and camera, wire input, kick off the font load
/// and start the animation loop. A WebGL2 failure aborts construction.
pub fn start(document: &Document, caps: Capabilities) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let (width, height) = viewport_size(&window)?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);
    match document.get_element_by_id("galaxy-container") {
        Some(container) => container.append_child(&canvas)?,
        None => {
            log::warn!("#galaxy-container missing, attaching canvas to body");
            document.body().ok_or("no body")?.append_child(&canvas)?
        }
    };

    let scene = Scene::generate(js_sys::Date::now() as u64 | 1);
    let mut renderer = Renderer::new(canvas.clone(), &scene)?;

    let moon_canvas = texture::bake_moon(document, &scene.moon.surface)?;
    let moon_slot = renderer.add_canvas_texture(&moon_canvas)?;
    renderer.set_moon_texture(moon_slot);

    let camera = OrbitCamera::new(width as f32 / height as f32);

    let app = Rc::new(RefCell::new(App {
        scene,
        camera,
        renderer,
    }));

    controls::attach(&canvas, app.clone(), caps)?;
    install_resize(&window, &canvas, app.clone())?;
    fonts::load_and_install(document.clone(), app.clone());

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let window = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let App {
                    scene,
                    camera,
                    renderer,
                } = &mut *app.borrow_mut();
                scene.tick(camera.eye());
                camera.update();
                renderer.draw(scene, camera);
            }

            // schedule next
            if let Some(frame) = f.borrow().as_ref() {
                if let Err(err) =
                    window.request_animation_frame(frame.as_ref().unchecked_ref())
                {
                    log::error!("requestAnimationFrame failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut()>));
    }
    window.request_animation_frame(
        g.borrow().as_ref().ok_or("frame closure missing")?.as_ref().unchecked_ref(),
    )?;

    log::info!("galaxy running");
    Ok(())
}

fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("bad innerWidth")? as u32;
    let height = window.inner_height()?.as_f64().ok_or("bad innerHeight")? as u32;
    Ok((width.max(1), height.max(1)))
}

/// Keep the canvas and projection matched to the viewport.
fn install_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    app: Rc<RefCell<App>>,
) -> Result<(), JsValue> {
    let resize_closure = {
        let window = window.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Ok((w, h)) = viewport_size(&window) {
                canvas.set_width(w);
                canvas.set_height(h);
                app.borrow_mut().camera.set_aspect(w as f32 / h as f32);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    Ok(())
}
