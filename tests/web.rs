//! Browser tests for the DOM-facing pieces: canvas fitting, the window
//! resize fan-out and the toast countdown. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gekko_dashboard::components::chart::fit_canvas_to_container;
use gekko_dashboard::state::{GlobalState, PlotCollection, ResizeHub};
use gekko_dashboard::DashboardConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::SignalGetUntracked;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn sized_canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container
        .set_attribute("style", &format!("width: {}px; height: {}px;", width, height))
        .unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    container.append_child(&canvas).unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_fits_container() {
    let canvas = sized_canvas(640, 320);
    assert!(fit_canvas_to_container(&canvas));
    assert_eq!(canvas.width(), 640);
    assert_eq!(canvas.height(), 320);

    // Already fitted
    assert!(!fit_canvas_to_container(&canvas));
}

#[wasm_bindgen_test]
fn window_resize_skips_unmounted_plots() {
    let window = web_sys::window().unwrap();
    let hub = ResizeHub::new();

    let mut plots = PlotCollection::initialize();
    let first = plots.entries()[0].id;
    let second = plots.add();

    let first_hits = Rc::new(Cell::new(0));
    let second_hits = Rc::new(Cell::new(0));
    let first_counter = Rc::clone(&first_hits);
    let second_counter = Rc::clone(&second_hits);
    let _first = hub.subscribe(first, move || first_counter.set(first_counter.get() + 1));
    let removed = hub.subscribe(second, move || second_counter.set(second_counter.get() + 1));

    let listener_hub = hub.clone();
    let listener = Closure::<dyn Fn()>::new(move || {
        listener_hub.broadcast();
    });
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .unwrap();

    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    drop(removed);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();

    window
        .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .unwrap();

    assert_eq!(first_hits.get(), 2);
    assert_eq!(second_hits.get(), 1);
}

#[wasm_bindgen_test]
async fn newer_error_restarts_toast_countdown() {
    let config = DashboardConfig::from_json(r#"{ "toast_timeout_ms": 200 }"#).unwrap();
    let state = GlobalState::new(config);

    state.show_error("plot 1: offline");
    TimeoutFuture::new(120).await;
    state.show_error("plot 2: offline");

    // Past the first message's deadline, inside the second's
    TimeoutFuture::new(120).await;
    assert_eq!(state.error.get_untracked().as_deref(), Some("plot 2: offline"));

    TimeoutFuture::new(150).await;
    assert_eq!(state.error.get_untracked(), None);
}
