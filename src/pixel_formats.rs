// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! CPU-side pixel values that can be bound to an emulated sampler.
//!
//! Translated code constructs each sampler from whatever value the host
//! application binds to the shader resource.  This module accepts the common
//! shapes of such values and turns them into sampler payloads:
//!
//! - [`Float4`] - linear float color, copied component-wise into a `Vec4`
//! - [`Unorm4`] - 8-bit normalized color, mapped 0-255 to 0.0-1.0
//! - [`f16`] - half-precision depth, widened into a shadow sampler's `f32`
//!
//! # Examples
//!
//! ```
//! use glsl_sampler::bindings::sampler::{Sampler2D, Sampler2DShadow};
//! use glsl_sampler::pixel_formats::{f16, Float4, Unorm4};
//! use glsl_sampler::glam::Vec4;
//!
//! let from_float: Sampler2D = Float4 { r: 1.0, g: 0.5, b: 0.25, a: 1.0 }.into();
//! assert_eq!(from_float.data, Vec4::new(1.0, 0.5, 0.25, 1.0));
//!
//! let from_unorm: Sampler2D = Unorm4 { r: 255, g: 0, b: 51, a: 255 }.into();
//! assert_eq!(from_unorm.data, Vec4::new(1.0, 0.0, 0.2, 1.0));
//!
//! let depth: Sampler2DShadow = f16::from_f32(0.5).into();
//! assert_eq!(depth.data, 0.5);
//! ```

use crate::bindings::sampler::SamplerBase;
use glam::Vec4;

pub use half::f16;

/// Four-channel floating point color.
///
/// Values are linear (not gamma corrected).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Float4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<Float4> for Vec4 {
    fn from(f: Float4) -> Self {
        Vec4::new(f.r, f.g, f.b, f.a)
    }
}

/// RGBA pixel with 8-bit normalized unsigned values.
///
/// Values range from 0-255 and are interpreted as 0.0-1.0.
///
/// ```
/// use glsl_sampler::pixel_formats::{Float4, Unorm4};
///
/// let unorm_color = Unorm4 { r: 255, g: 0, b: 0, a: 255 };
/// assert_eq!(unorm_color.to_floats(), Float4 { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unorm4 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Unorm4 {
    /// Convert to normalized float values by dividing each channel by 255.
    pub fn to_floats(self) -> Float4 {
        Float4 {
            r: self.r as f32 / 255.0,
            g: self.g as f32 / 255.0,
            b: self.b as f32 / 255.0,
            a: self.a as f32 / 255.0,
        }
    }
}

impl From<Float4> for SamplerBase<Vec4> {
    fn from(color: Float4) -> Self {
        SamplerBase::new(color.into())
    }
}

impl From<Unorm4> for SamplerBase<Vec4> {
    fn from(color: Unorm4) -> Self {
        color.to_floats().into()
    }
}

impl From<f16> for SamplerBase<f32> {
    fn from(depth: f16) -> Self {
        SamplerBase::new(depth.to_f32())
    }
}
