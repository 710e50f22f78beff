//! Visual-side state types shared with the frontends.
//!
//! These types avoid platform-specific APIs and are used on both native and
//! web targets to build camera matrices and size the drawing surface.

use crate::error::OrbError;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// View matrix composed with the orb's in-plane translation.
    pub fn model_view_matrix(&self, offset: Vec2) -> Mat4 {
        self.view_matrix() * Mat4::from_translation(offset.extend(0.0))
    }
}

/// Physical size of the drawing surface.
///
/// The device pixel ratio is capped so high-density screens do not multiply
/// fragment work beyond `max_ratio`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Result<Self, OrbError> {
        if width == 0 || height == 0 {
            return Err(OrbError::ZeroSizedTarget {
                width: width as f32,
                height: height as f32,
            });
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Backing size for an element of `css_width` x `css_height` logical pixels.
    pub fn from_logical(
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
        max_ratio: f32,
    ) -> Result<Self, OrbError> {
        let ratio = device_pixel_ratio.clamp(0.0, max_ratio as f64);
        let width = (css_width * ratio) as u32;
        let height = (css_height * ratio) as u32;
        Self::new(width, height, ratio as f32)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
