//! Typed configuration. Defaults mirror [`crate::constants`].

use crate::constants::*;
use crate::state::Camera;
use glam::Vec3;

/// Leaky-integrator factors and the pointer catchment radius.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingConfig {
    pub proximity_px: f32,
    pub direction: f32,
    pub strength: f32,
    pub offset: f32,
    pub repel_distance: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            proximity_px: PROXIMITY_PX,
            direction: POINTER_DIR_SMOOTHING,
            strength: POINTER_STRENGTH_SMOOTHING,
            offset: OFFSET_SMOOTHING,
            repel_distance: REPEL_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbConfig {
    pub smoothing: SmoothingConfig,
    pub camera_z: f32,
    pub fovy_degrees: f32,
    pub mesh_detail: u32,
    pub max_pixel_ratio: f32,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            camera_z: CAMERA_Z,
            fovy_degrees: CAMERA_FOVY_DEG,
            mesh_detail: MESH_DETAIL,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

impl OrbConfig {
    /// Camera on +z looking at the orb for a viewport of the given aspect.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, self.camera_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fovy_degrees.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
