use crate::frame::FrameParameters;
use crate::state::Camera;

/// Uniform block consumed by `shaders/orb.wgsl` (144 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OrbUniforms {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub pointer: [f32; 2],
    pub time: f32,
    pub pointer_strength: f32,
}

impl OrbUniforms {
    pub fn new(frame: &FrameParameters, camera: &Camera) -> Self {
        Self {
            projection: camera.projection_matrix().to_cols_array_2d(),
            model_view: camera.model_view_matrix(frame.offset).to_cols_array_2d(),
            pointer: frame.pointer_dir.to_array(),
            time: frame.time,
            pointer_strength: frame.pointer_strength,
        }
    }
}
