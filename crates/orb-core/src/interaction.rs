//! Pointer/touch smoothing.
//!
//! Input callbacks only write the *target* fields; [`InteractionSmoother::update`]
//! is the single place that moves the smoothed fields, once per rendered frame.

use crate::config::SmoothingConfig;
use crate::error::OrbError;
use glam::Vec2;

/// Raw input as delivered by the platform, in input-device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    /// Pointer left the window or the touch was lifted.
    Ended,
}

/// Screen-space placement of the element hosting the orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetRect {
    center: Vec2,
    half_extent: Vec2,
}

impl TargetRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, OrbError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(OrbError::ZeroSizedTarget { width, height });
        }
        let half_extent = Vec2::new(width, height) * 0.5;
        Ok(Self {
            center: Vec2::new(left, top) + half_extent,
            half_extent,
        })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    /// Position relative to the center in half extents, y pointing up.
    pub fn normalize(&self, pos: Vec2) -> Vec2 {
        let d = pos - self.center;
        Vec2::new(d.x / self.half_extent.x, -d.y / self.half_extent.y)
    }
}

/// Linear falloff: 1 at the center, 0 at `proximity` and beyond.
#[inline]
pub fn proximity_strength(distance: f32, proximity: f32) -> f32 {
    (1.0 - distance / proximity).clamp(0.0, 1.0)
}

/// Single-pole low-pass step.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
    pub strength_target: f32,
    pub smoothed: Vec2,
    pub smoothed_strength: f32,
}

#[derive(Clone, Debug)]
pub struct InteractionSmoother {
    pointer: PointerState,
    offset: Vec2,
    config: SmoothingConfig,
}

impl Default for InteractionSmoother {
    fn default() -> Self {
        Self::new(SmoothingConfig::default())
    }
}

impl InteractionSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            pointer: PointerState::default(),
            offset: Vec2::ZERO,
            config,
        }
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Rendered translation of the orb (object space).
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Update targets from a raw event. Direction targets are kept when the
    /// pointer moves out of range, so the shape fades out in place.
    pub fn handle(&mut self, event: PointerEvent, rect: &TargetRect) {
        match event {
            PointerEvent::Moved { x, y } => {
                let pos = Vec2::new(x, y);
                let distance = pos.distance(rect.center());
                if distance < self.config.proximity_px {
                    self.pointer.target = rect.normalize(pos);
                    self.pointer.strength_target =
                        proximity_strength(distance, self.config.proximity_px);
                } else {
                    self.pointer.strength_target = 0.0;
                }
            }
            PointerEvent::Ended => {
                self.pointer.strength_target = 0.0;
            }
        }
    }

    /// Advance every smoothed value by one frame.
    pub fn update(&mut self) {
        let c = &self.config;
        let p = &mut self.pointer;
        p.smoothed.x = approach(p.smoothed.x, p.target.x, c.direction);
        p.smoothed.y = approach(p.smoothed.y, p.target.y, c.direction);
        p.smoothed_strength = approach(p.smoothed_strength, p.strength_target, c.strength);

        let repel = -p.smoothed * p.smoothed_strength * c.repel_distance;
        self.offset.x = approach(self.offset.x, repel.x, c.offset);
        self.offset.y = approach(self.offset.y, repel.y, c.offset);
    }
}
