#![cfg(target_arch = "wasm32")]

use glam::Vec3;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use galaxy_wasm::config;
use galaxy_wasm::scene::Scene;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build the landing/galaxy DOM the gesture gate expects.
fn install_page_fixture() {
    let document = document();
    let body = document.body().unwrap();
    body.set_inner_html(
        r#"
        <div id="page-landing"><button id="btn-start">start</button></div>
        <div id="page-galaxy" style="display: none"><div id="galaxy-container"></div></div>
        <audio id="audio-bg" src="luna.mp3" loop></audio>
        "#,
    );
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn gesture_gate_swaps_pages_once() {
    install_page_fixture();
    let window = web_sys::window().unwrap();
    let document = document();

    galaxy_wasm::wasm::boot::install_gesture_gate(&window, &document).unwrap();

    let button: web_sys::HtmlElement = document
        .get_element_by_id("btn-start")
        .unwrap()
        .dyn_into()
        .unwrap();
    // Double activation must collapse to a single startup.
    button.click();
    button.click();

    sleep_ms(config::TRANSITION_DELAY_MS + 200).await;

    let landing: web_sys::HtmlElement = document
        .get_element_by_id("page-landing")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(
        landing.style().get_property_value("display").unwrap(),
        "none"
    );

    let galaxy: web_sys::HtmlElement = document
        .get_element_by_id("page-galaxy")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(
        galaxy.style().get_property_value("display").unwrap(),
        "block"
    );

    assert_eq!(
        document.query_selector_all("#btn-music").unwrap().length(),
        1,
        "music button must be created exactly once"
    );

    let container = document.get_element_by_id("galaxy-container").unwrap();
    assert_eq!(
        container.query_selector_all("canvas").unwrap().length(),
        1,
        "scene canvas must be attached"
    );
}

#[wasm_bindgen_test]
fn gesture_gate_requires_its_elements() {
    let document = document();
    document.body().unwrap().set_inner_html("");
    let window = web_sys::window().unwrap();
    assert!(galaxy_wasm::wasm::boot::install_gesture_gate(&window, &document).is_err());
}

#[wasm_bindgen_test]
fn scene_ticks_in_the_browser() {
    let mut scene = Scene::generate(7);
    for _ in 0..120 {
        scene.tick(Vec3::new(0.0, config::CAMERA_START_Y, config::CAMERA_START_Z));
    }
    assert_eq!(scene.starfield.len(), config::PARTICLE_COUNT);
    assert_eq!(scene.comets.len(), config::COMET_SLOTS);
    assert!((scene.time - 1.2).abs() < 1e-3);
}
