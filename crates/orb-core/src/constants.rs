// Shared tuning constants used by both web and native frontends.

// Interaction
pub const PROXIMITY_PX: f32 = 120.0; // pointer reacts only within this distance of the orb center
pub const POINTER_DIR_SMOOTHING: f32 = 0.12; // direction tracks faster than strength
pub const POINTER_STRENGTH_SMOOTHING: f32 = 0.08;
pub const OFFSET_SMOOTHING: f32 = 0.08;
pub const REPEL_DISTANCE: f32 = 0.2; // object-space push away from the pointer at full strength

// Deformation
pub const POINTER_Z_BIAS: f32 = 0.4; // lifts the influence cone off the view plane
pub const INDENT_AMOUNT: f32 = -0.15;
pub const BULGE_AMOUNT: f32 = 0.08;
pub const SIDE_BULGE_AMOUNT: f32 = 0.06;

// Shading
pub const SHADE_TIME_SCALE: f32 = 0.3;
pub const ORB_ALPHA: f32 = 0.96;
pub const FRESNEL_DARKEN: f32 = 0.3;

/// Row-major 4x4 Bayer threshold table, in sixteenths.
pub const BAYER4: [u8; 16] = [0, 8, 2, 10, 12, 4, 14, 6, 3, 11, 1, 9, 15, 7, 13, 5];

// Scene layout
pub const CAMERA_Z: f32 = 4.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Surface
pub const MESH_DETAIL: u32 = 128; // subdivisions per icosahedron edge
pub const MAX_PIXEL_RATIO: f32 = 2.0;
