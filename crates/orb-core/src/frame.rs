use crate::clock::Clock;
use crate::interaction::{InteractionSmoother, PointerEvent, TargetRect};
use crate::state::SurfaceSize;
use glam::Vec2;
use instant::Instant;

/// Everything the shaders need for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameParameters {
    pub time: f32,
    pub pointer_dir: Vec2,
    pub pointer_strength: f32,
    pub offset: Vec2,
}

impl FrameParameters {
    pub fn from_smoother(time: f32, smoother: &InteractionSmoother) -> Self {
        let p = smoother.pointer();
        Self {
            time,
            pointer_dir: p.smoothed,
            pointer_strength: p.smoothed_strength.clamp(0.0, 1.0),
            offset: smoother.offset(),
        }
    }
}

/// The drawing collaborator. Implemented by the wgpu renderer and by test doubles.
pub trait OrbRenderer {
    type Error;

    fn resize(&mut self, size: SurfaceSize);
    fn draw(&mut self, frame: &FrameParameters) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Parameters were handed to the renderer.
    Drawn,
    /// Surface hidden; nothing advanced. Schedule again.
    Skipped,
    /// Torn down; do not schedule again.
    Stopped,
}

impl FrameStatus {
    pub fn keep_running(self) -> bool {
        !matches!(self, FrameStatus::Stopped)
    }
}

/// Sequences one animation step per externally scheduled tick.
#[derive(Debug)]
pub struct FrameDriver {
    clock: Clock,
    smoother: InteractionSmoother,
    target_rect: TargetRect,
    pending_resize: Option<SurfaceSize>,
    hidden: bool,
    stopped: bool,
    frames_drawn: u64,
}

impl FrameDriver {
    pub fn new(smoother: InteractionSmoother, target_rect: TargetRect) -> Self {
        Self::new_at(smoother, target_rect, Instant::now())
    }

    pub fn new_at(smoother: InteractionSmoother, target_rect: TargetRect, now: Instant) -> Self {
        Self {
            clock: Clock::started_at(now),
            smoother,
            target_rect,
            pending_resize: None,
            hidden: false,
            stopped: false,
            frames_drawn: 0,
        }
    }

    pub fn smoother(&self) -> &InteractionSmoother {
        &self.smoother
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Input callbacks land here; only smoothing targets change.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.smoother.handle(event, &self.target_rect);
    }

    /// Layout moved or resized the host element.
    pub fn set_target_rect(&mut self, rect: TargetRect) {
        self.target_rect = rect;
    }

    /// Queue a surface resize; applied before the next draw.
    pub fn resize(&mut self, size: SurfaceSize) {
        log::info!("[resize] {}x{} @{:.2}", size.width, size.height, size.pixel_ratio);
        self.pending_resize = Some(size);
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.set_hidden_at(hidden, Instant::now());
    }

    pub fn set_hidden_at(&mut self, hidden: bool, now: Instant) {
        if hidden == self.hidden {
            return;
        }
        self.hidden = hidden;
        if hidden {
            self.clock.stop_at(now);
            log::info!("[visibility] hidden, clock paused at {:.3}s", self.clock.elapsed_at(now));
        } else {
            self.clock.start_at(now);
            log::info!("[visibility] visible, clock resumed at {:.3}s", self.clock.elapsed_at(now));
        }
    }

    /// Stop scheduling further frames.
    pub fn stop(&mut self) {
        if !self.stopped {
            log::info!("[frame] stopping after {} frames", self.frames_drawn);
        }
        self.stopped = true;
    }

    pub fn run_frame<R: OrbRenderer>(&mut self, renderer: &mut R) -> Result<FrameStatus, R::Error> {
        self.run_frame_at(renderer, Instant::now())
    }

    pub fn run_frame_at<R: OrbRenderer>(
        &mut self,
        renderer: &mut R,
        now: Instant,
    ) -> Result<FrameStatus, R::Error> {
        if self.stopped {
            return Ok(FrameStatus::Stopped);
        }
        if self.hidden {
            return Ok(FrameStatus::Skipped);
        }
        if let Some(size) = self.pending_resize.take() {
            renderer.resize(size);
        }

        let elapsed = self.clock.elapsed_at(now) as f32;
        self.smoother.update();
        let params = FrameParameters::from_smoother(elapsed, &self.smoother);
        renderer.draw(&params)?;

        if self.frames_drawn == 0 {
            log::info!("[frame] first frame at t={:.3}s", elapsed);
        }
        self.frames_drawn += 1;
        Ok(FrameStatus::Drawn)
    }
}
