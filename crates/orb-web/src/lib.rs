#![cfg(target_arch = "wasm32")]
use orb_core::{FrameDriver, InteractionSmoother, OrbConfig, OrbError};
use orb_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;

/// Id of the element the orb canvas is appended to.
pub const ORB_CONTAINER_ID: &str = "orb-container";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = document
        .get_element_by_id(ORB_CONTAINER_ID)
        .ok_or_else(|| OrbError::MissingRenderTarget(format!("#{ORB_CONTAINER_ID}")))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = OrbConfig::default();
    let canvas = dom::create_canvas(&document, &container)?;
    let size = dom::sync_canvas_backing_size(&canvas, &container, config.max_pixel_ratio)?;
    let rect = dom::target_rect(&container)?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let gpu = GpuState::new(
        &instance,
        surface,
        size,
        config.clone(),
        wgpu::Color::TRANSPARENT,
    )
    .await?;

    let driver = Rc::new(RefCell::new(FrameDriver::new(
        InteractionSmoother::new(config.smoothing.clone()),
        rect,
    )));
    // A page opened in a background tab never fires visibilitychange on load
    driver.borrow_mut().set_hidden(document.hidden());
    if driver.borrow().is_hidden() {
        log::info!("[visibility] starting hidden");
    }
    events::wire_all(events::EventWiring {
        container,
        canvas,
        driver: driver.clone(),
        max_pixel_ratio: config.max_pixel_ratio,
    });
    frame::start_loop(driver, Rc::new(RefCell::new(gpu)));
    Ok(())
}
