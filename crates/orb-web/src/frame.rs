use orb_core::{FrameDriver, FrameStatus};
use orb_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive the frame driver from `requestAnimationFrame` until it reports stopped.
pub fn start_loop(driver: Rc<RefCell<FrameDriver>>, gpu: Rc<RefCell<GpuState<'static>>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let result = driver.borrow_mut().run_frame(&mut *gpu.borrow_mut());
        let status = match result {
            Ok(status) => status,
            Err(e) => {
                log::warn!("[frame] dropped: {:?}", e);
                FrameStatus::Skipped
            }
        };
        if !status.keep_running() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(closure)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
