//! Pointer input: mouse drag to orbit, shift-drag to pan, wheel and pinch to
//! zoom. Handlers only mutate camera goals; damping happens in the tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent};

use super::app::App;
use super::boot::Capabilities;

#[derive(Default)]
struct PointerState {
    dragging: bool,
    panning: bool,
    last_x: f32,
    last_y: f32,
    /// Distance between two fingers while pinching.
    pinch: Option<f32>,
}

pub fn attach(
    canvas: &HtmlCanvasElement,
    app: Rc<RefCell<App>>,
    caps: Capabilities,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let state = Rc::new(RefCell::new(PointerState::default()));

    {
        let state = state.clone();
        let on_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let mut state = state.borrow_mut();
            state.dragging = true;
            state.panning = event.shift_key();
            state.last_x = event.client_x() as f32;
            state.last_y = event.client_y() as f32;
        });
        canvas.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
        on_down.forget();
    }

    {
        let state = state.clone();
        let app = app.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let mut state = state.borrow_mut();
            if !state.dragging {
                return;
            }
            let x = event.client_x() as f32;
            let y = event.client_y() as f32;
            let dx = x - state.last_x;
            let dy = y - state.last_y;
            state.last_x = x;
            state.last_y = y;
            let camera = &mut app.borrow_mut().camera;
            if state.panning {
                camera.pan(dx, dy);
            } else {
                camera.rotate(dx, dy);
            }
        });
        // Window-level so a drag that leaves the canvas keeps tracking.
        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let state = state.clone();
        let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            state.borrow_mut().dragging = false;
        });
        window.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        on_up.forget();
    }

    {
        let app = app.clone();
        let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            event.prevent_default();
            app.borrow_mut().camera.zoom(-event.delta_y() as f32 / 100.0);
        });
        canvas.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
        on_wheel.forget();
    }

    if !caps.touch {
        return Ok(());
    }

    {
        let state = state.clone();
        let on_touch_start = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let touches = event.touches();
            let mut state = state.borrow_mut();
            match touches.length() {
                1 => {
                    if let Some(touch) = touches.get(0) {
                        state.dragging = true;
                        state.pinch = None;
                        state.last_x = touch.client_x() as f32;
                        state.last_y = touch.client_y() as f32;
                    }
                }
                2 => {
                    state.dragging = false;
                    state.pinch = pinch_distance(&event);
                }
                _ => {}
            }
        });
        canvas.add_event_listener_with_callback(
            "touchstart",
            on_touch_start.as_ref().unchecked_ref(),
        )?;
        on_touch_start.forget();
    }

    {
        let state = state.clone();
        let app = app.clone();
        let on_touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            event.prevent_default();
            let touches = event.touches();
            let mut state = state.borrow_mut();
            if touches.length() == 1 && state.dragging {
                if let Some(touch) = touches.get(0) {
                    let x = touch.client_x() as f32;
                    let y = touch.client_y() as f32;
                    let dx = x - state.last_x;
                    let dy = y - state.last_y;
                    state.last_x = x;
                    state.last_y = y;
                    app.borrow_mut().camera.rotate(dx, dy);
                }
            } else if touches.length() == 2 {
                if let (Some(now), Some(prev)) = (pinch_distance(&event), state.pinch) {
                    if prev > 1.0 {
                        // Spreading the fingers zooms in.
                        app.borrow_mut().camera.zoom((now / prev).ln() * 4.0);
                    }
                    state.pinch = Some(now);
                }
            }
        });
        canvas.add_event_listener_with_callback(
            "touchmove",
            on_touch_move.as_ref().unchecked_ref(),
        )?;
        on_touch_move.forget();
    }

    {
        let on_touch_end = Closure::<dyn FnMut(TouchEvent)>::new(move |_event: TouchEvent| {
            let mut state = state.borrow_mut();
            state.dragging = false;
            state.pinch = None;
        });
        canvas.add_event_listener_with_callback(
            "touchend",
            on_touch_end.as_ref().unchecked_ref(),
        )?;
        on_touch_end.forget();
    }

    Ok(())
}

fn pinch_distance(event: &TouchEvent) -> Option<f32> {
    let touches = event.touches();
    let a = touches.get(0)?;
    let b = touches.get(1)?;
    let dx = (a.client_x() - b.client_x()) as f32;
    let dy = (a.client_y() - b.client_y()) as f32;
    Some((dx * dx + dy * dy).sqrt())
}
