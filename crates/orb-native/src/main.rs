use orb_core::{
    FrameDriver, FrameStatus, InteractionSmoother, OrbConfig, PointerEvent, SurfaceSize,
    TargetRect,
};
use orb_render::GpuState;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::*,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

/// The whole client area hosts the orb, measured in logical pixels.
fn target_rect(window: &Window) -> anyhow::Result<TargetRect> {
    let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
    Ok(TargetRect::new(0.0, 0.0, logical.width, logical.height)?)
}

fn pointer_moved(window: &Window, position: PhysicalPosition<f64>) -> PointerEvent {
    let p = position.to_logical::<f32>(window.scale_factor());
    PointerEvent::Moved { x: p.x, y: p.y }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = OrbConfig::default();
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Orb (native)")
        .with_inner_size(LogicalSize::new(640.0, 640.0))
        .build(&event_loop)?;
    let window = &window;

    let inner = window.inner_size();
    let size = SurfaceSize::new(inner.width, inner.height, window.scale_factor() as f32)?;
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window)?;
    let mut gpu = pollster::block_on(GpuState::new(
        &instance,
        surface,
        size,
        config.clone(),
        wgpu::Color {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        },
    ))?;
    let mut driver = FrameDriver::new(
        InteractionSmoother::new(config.smoothing.clone()),
        target_rect(window)?,
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                driver.stop();
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                match SurfaceSize::new(size.width, size.height, window.scale_factor() as f32) {
                    Ok(size) => driver.resize(size),
                    Err(e) => log::warn!("[resize] ignored: {}", e),
                }
                if let Ok(rect) = target_rect(window) {
                    driver.set_target_rect(rect);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                driver.handle_pointer(pointer_moved(window, position));
            }
            WindowEvent::CursorLeft { .. } => driver.handle_pointer(PointerEvent::Ended),
            WindowEvent::Touch(touch) => match touch.phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    driver.handle_pointer(pointer_moved(window, touch.location));
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    driver.handle_pointer(PointerEvent::Ended);
                }
            },
            WindowEvent::Occluded(hidden) => driver.set_hidden(hidden),
            _ => {}
        },
        Event::AboutToWait => match driver.run_frame(&mut gpu) {
            Ok(FrameStatus::Drawn) => window.request_redraw(),
            Ok(FrameStatus::Skipped) => {}
            Ok(FrameStatus::Stopped) => elwt.exit(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                driver.stop();
                elwt.exit();
            }
            Err(e) => {
                log::warn!("[frame] dropped: {:?}", e);
                window.request_redraw();
            }
        },
        _ => {}
    })?;
    Ok(())
}
