use orb_core::{OrbError, SurfaceSize, TargetRect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Append a canvas filling `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let style = canvas.style();
    let _ = style.set_property("display", "block");
    let _ = style.set_property("width", "100%");
    let _ = style.set_property("height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

/// Match the canvas backing store to the container's CSS size times the
/// capped device pixel ratio.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    max_pixel_ratio: f32,
) -> Result<SurfaceSize, OrbError> {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let size = SurfaceSize::from_logical(
        container.client_width() as f64,
        container.client_height() as f64,
        dpr,
        max_pixel_ratio,
    )?;
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    Ok(size)
}

/// Viewport placement of the container, in CSS pixels.
pub fn target_rect(container: &web::HtmlElement) -> Result<TargetRect, OrbError> {
    let rect = container.get_bounding_client_rect();
    TargetRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
