//! Monochrome halftone shading.
//!
//! Two noise fields spin in independent frames and cross-fade slowly; the
//! result is darkened toward the silhouette and then thresholded against a
//! 4x4 Bayer matrix, so every pixel is pure black or pure white.

use crate::constants::{BAYER4, FRESNEL_DARKEN, ORB_ALPHA, SHADE_TIME_SCALE};
use crate::error::OrbError;
use crate::noise::noise3;
use glam::{Vec3, Vec4};

/// Normal rotated about z by `angle`.
#[inline]
pub fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z)
}

/// Normal rotated about x by `angle`.
#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c)
}

/// Blend weight between the two flow fields, oscillating in \[0.15, 0.85\].
#[inline]
pub fn flow_mix(time: f32) -> f32 {
    0.5 + (time * SHADE_TIME_SCALE * 0.4).sin() * 0.35
}

/// Flowing pattern in \[0, 1\] before fresnel darkening.
pub fn flow(normal: Vec3, time: f32) -> f32 {
    let t = time * SHADE_TIME_SCALE;
    let rot1 = rotate_z(normal, t * 0.6);
    let rot2 = rotate_x(normal, -(t * 0.45));

    let blob1 = noise3(rot1 * 0.8) * 0.5 + 0.5;
    let blob2 = noise3(rot2 * 0.6 + Vec3::splat(1.5)) * 0.5 + 0.5;

    let k = flow_mix(time);
    blob1 + (blob2 - blob1) * k
}

/// Grey level the halftone approximates, clamped to \[0, 1\].
pub fn intensity(normal: Vec3, fresnel: f32, time: f32) -> f32 {
    let value = flow(normal, time) * 0.7 + 0.15 - fresnel * FRESNEL_DARKEN;
    value.clamp(0.0, 1.0)
}

/// Ordered-dither threshold for a pixel; periodic with period 4 on both axes.
#[inline]
pub fn bayer4(x: u32, y: u32) -> f32 {
    let index = (x % 4 + (y % 4) * 4) as usize;
    BAYER4[index] as f32 / 16.0
}

/// Binary shade for one pixel: `1.0` (white) iff intensity exceeds the threshold.
pub fn shade(normal: Vec3, fresnel: f32, time: f32, pixel: [u32; 2]) -> f32 {
    if intensity(normal, fresnel, time) > bayer4(pixel[0], pixel[1]) {
        1.0
    } else {
        0.0
    }
}

/// [`shade`] expanded to the RGBA the fragment stage writes.
pub fn shade_rgba(normal: Vec3, fresnel: f32, time: f32, pixel: [u32; 2]) -> Vec4 {
    let bw = shade(normal, fresnel, time, pixel);
    Vec4::new(bw, bw, bw, ORB_ALPHA)
}

/// View-angle term: 0 facing the camera, 1 at grazing angles.
///
/// `normal` must be unit length and `view_pos` non-zero; use
/// [`checked_fresnel`] when that is not guaranteed.
#[inline]
pub fn fresnel(normal: Vec3, view_pos: Vec3) -> f32 {
    let to_eye = (-view_pos).normalize();
    (1.0 - to_eye.dot(normal).max(0.0)).powi(2)
}

pub fn checked_fresnel(normal: Vec3, view_pos: Vec3) -> Result<f32, OrbError> {
    let n = normal
        .try_normalize()
        .ok_or(OrbError::DegenerateVector("normal"))?;
    let to_eye = (-view_pos)
        .try_normalize()
        .ok_or(OrbError::DegenerateVector("view position"))?;
    Ok((1.0 - to_eye.dot(n).max(0.0)).powi(2))
}
