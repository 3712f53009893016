//! Bounded trigonometry for `no_std` targets.
//!
//! `micromath` approximations can overshoot `[-1, 1]` by about 0.1%. Every
//! periodic function in the engine is scaled straight into a `u8` channel or
//! a pixel radius, so the result is clamped to keep those ranges exact.

#[inline]
pub fn sin(x: f32) -> f32 { micromath::F32(x).sin().0.clamp(-1.0, 1.0) }

#[inline]
pub fn cos(x: f32) -> f32 { micromath::F32(x).cos().0.clamp(-1.0, 1.0) }
