use crate::dom;
use orb_core::{FrameDriver, PointerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub driver: Rc<RefCell<FrameDriver>>,
    pub max_pixel_ratio: f32,
}

pub fn wire_all(w: EventWiring) {
    wire_mousemove(&w);
    wire_touchmove(&w);
    wire_pointer_end(&w, "mouseleave");
    wire_pointer_end(&w, "touchend");
    wire_resize(&w);
    wire_visibility(&w);
}

// The container may have scrolled since the last event, so its rect is re-read first.
fn pointer_moved(w: &EventWiring, x: i32, y: i32) {
    let mut driver = w.driver.borrow_mut();
    if let Ok(rect) = dom::target_rect(&w.container) {
        driver.set_target_rect(rect);
    }
    driver.handle_pointer(PointerEvent::Moved {
        x: x as f32,
        y: y as f32,
    });
}

fn wire_mousemove(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        pointer_moved(&w, ev.client_x(), ev.client_y());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            pointer_moved(&w, touch.client_x(), touch.client_y());
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &options,
        );
    }
    closure.forget();
}

fn wire_pointer_end(w: &EventWiring, event_name: &str) {
    let driver = w.driver.clone();
    let closure = Closure::wrap(Box::new(move || {
        driver.borrow_mut().handle_pointer(PointerEvent::Ended);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        match dom::sync_canvas_backing_size(&w.canvas, &w.container, w.max_pixel_ratio) {
            Ok(size) => {
                let mut driver = w.driver.borrow_mut();
                driver.resize(size);
                if let Ok(rect) = dom::target_rect(&w.container) {
                    driver.set_target_rect(rect);
                }
            }
            Err(e) => log::warn!("[resize] ignored: {}", e),
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_visibility(w: &EventWiring) {
    let driver = w.driver.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(document) = dom::window_document() {
            driver.borrow_mut().set_hidden(document.hidden());
        }
    }) as Box<dyn FnMut()>);
    if let Some(document) = dom::window_document() {
        _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
