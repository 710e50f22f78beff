//! Per-vertex radial displacement of the orb surface.
//!
//! Every term is added, never multiplied, so no single layer dominates the
//! silhouette. The WGSL vertex stage mirrors [`displacement`] line for line.

use crate::constants::{BULGE_AMOUNT, INDENT_AMOUNT, POINTER_Z_BIAS, SIDE_BULGE_AMOUNT};
use crate::noise::noise3;
use glam::{Vec2, Vec3};

/// GLSL-style Hermite ramp. Also valid with `edge0 > edge1` (falling ramp).
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Idle motion: three crossed waves, a slow wobble, noise and breathing.
pub fn ambient_displacement(direction: Vec3, time: f32) -> f32 {
    let p = direction;
    let t = time;

    let wave1 = (p.x * 0.9 + t * 1.1).sin() * (p.y * 1.0 + t * 0.9).sin() * 0.045;
    let wave2 = (p.y * 1.1 + t * 1.3).sin() * (p.z * 0.8 + t * 1.0).sin() * 0.04;
    let wave3 = (p.z * 1.0 + t * 0.8).sin() * (p.x * 1.2 + t * 1.2).sin() * 0.035;
    let big_wobble = (t * 0.5 + p.x * 0.5).sin() * (t * 0.4 + p.y * 0.6).sin() * 0.03;
    let noise = noise3(direction * 1.2 + Vec3::splat(t * 0.4)) * 0.025;
    let breathe = (t * 0.7).sin() * 0.015;

    wave1 + wave2 + wave3 + big_wobble + noise + breathe
}

/// Unit axis of the pointer influence cone.
#[inline]
pub fn pointer_axis(pointer_dir: Vec2) -> Vec3 {
    // z bias is non-zero, so the vector never degenerates
    Vec3::new(pointer_dir.x, pointer_dir.y, POINTER_Z_BIAS).normalize()
}

/// Indent toward the pointer, bulge on the far side and around the rim.
///
/// Returns exactly `0.0` when `strength` is zero.
pub fn pointer_displacement(direction: Vec3, pointer_dir: Vec2, strength: f32) -> f32 {
    if strength == 0.0 {
        return 0.0;
    }
    let facing = direction.dot(pointer_axis(pointer_dir));
    let indent = smoothstep(-0.3, 1.0, facing) * strength * INDENT_AMOUNT;
    let bulge_out = smoothstep(0.3, -1.0, facing) * strength * BULGE_AMOUNT;
    let side_bulge = (1.0 - facing.abs()) * strength * SIDE_BULGE_AMOUNT;
    indent + bulge_out + side_bulge
}

/// Total radial displacement for a unit `direction` at `time`.
pub fn displacement(direction: Vec3, time: f32, pointer_dir: Vec2, pointer_strength: f32) -> f32 {
    ambient_displacement(direction, time)
        + pointer_displacement(direction, pointer_dir, pointer_strength)
}

/// Move `position` along its own direction by [`displacement`].
pub fn deform_vertex(position: Vec3, time: f32, pointer_dir: Vec2, pointer_strength: f32) -> Vec3 {
    let direction = position.normalize();
    position + direction * displacement(direction, time, pointer_dir, pointer_strength)
}
