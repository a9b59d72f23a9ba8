// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Payload shapes a sampler can hold.
//!
//! Every emulated sampler stores exactly one value.  Color samplers store a
//! [`Vec4`], depth/shadow samplers store an [`f32`].  The shape is part of the
//! sampler's type, so a call that mixes shapes never type-checks.
//!
//! Each shape carries its own arithmetic rule, implemented once here.  The
//! coordinate promotion and the intrinsic aliases are written generically over
//! [`Payload`] and never duplicated per shape.
//!
//! # Arithmetic
//!
//! | Shape   | Result                                                 |
//! |---------|--------------------------------------------------------|
//! | `Vec4`  | `payload * coordinate * bias * lod * offset` (per lane) |
//! | `f32`   | `payload * coordinate.x * bias * lod * offset.x`        |
//!
//! Nothing here performs spatial addressing.  The offset is one more
//! multiplicative factor, and an all-ones offset is the identity.
//!
//! ```
//! use glsl_sampler::payload::Payload;
//! use glsl_sampler::glam::{IVec4, Vec4};
//!
//! let v = Vec4::splat(2.0).modulate(Vec4::new(3.0, 4.0, 1.0, 1.0), 1.0, 1.0, IVec4::ONE);
//! assert_eq!(v, Vec4::new(6.0, 8.0, 2.0, 2.0));
//!
//! let s = 5.0f32.modulate(Vec4::new(3.0, 4.0, 9.0, 9.0), 1.0, 1.0, IVec4::ONE);
//! assert_eq!(s, 15.0);
//! ```

use glam::{IVec4, Vec4};
use std::fmt::Debug;

/// Sealed traits for payload type safety.
///
/// Only the two shapes defined in this crate may be stored in a sampler.
pub(crate) mod sealed {
    pub trait Sealed {}
    impl Sealed for glam::Vec4 {}
    impl Sealed for f32 {}
}

/// Whether a payload is a color vector or a depth/shadow scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// A 4-component color value.
    Vector,
    /// A single depth or comparison value.
    Scalar,
}

/// A value a sampler can hold.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Payload: sealed::Sealed + Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Shape tag for this payload.
    const SHAPE: PayloadShape;

    /// Applies the sampling arithmetic for this shape.
    ///
    /// `coordinate` and `offset` have already been promoted to 4 components.
    /// `bias` and `lod` are the two modulation slots, applied in that order.
    fn modulate(self, coordinate: Vec4, bias: f32, lod: f32, offset: IVec4) -> Self;
}

impl Payload for Vec4 {
    const SHAPE: PayloadShape = PayloadShape::Vector;

    #[inline]
    fn modulate(self, coordinate: Vec4, bias: f32, lod: f32, offset: IVec4) -> Self {
        let mut v = self * coordinate;
        v *= bias;
        v *= lod;
        v *= offset.as_vec4();
        v
    }
}

impl Payload for f32 {
    const SHAPE: PayloadShape = PayloadShape::Scalar;

    #[inline]
    fn modulate(self, coordinate: Vec4, bias: f32, lod: f32, offset: IVec4) -> Self {
        let mut v = self * coordinate.x;
        v *= bias;
        v *= lod;
        v *= offset.x as f32;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::{Payload, PayloadShape};
    use glam::{IVec4, Vec4};

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn vector_multiplies_every_lane() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0).modulate(
            Vec4::new(2.0, 2.0, 2.0, 2.0),
            0.5,
            3.0,
            IVec4::new(1, 2, 3, 4),
        );
        assert_eq!(v, Vec4::new(3.0, 12.0, 27.0, 48.0));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn scalar_reads_first_lane_only() {
        let a = 2.0f32.modulate(Vec4::new(3.0, 0.0, 0.0, 0.0), 1.0, 1.0, IVec4::new(4, 0, 0, 0));
        let b = 2.0f32.modulate(Vec4::new(3.0, 7.0, -1.0, 100.0), 1.0, 1.0, IVec4::new(4, 9, 9, 9));
        assert_eq!(a, 24.0);
        assert_eq!(a, b);
    }

    #[test]
    fn shapes() {
        assert_eq!(<Vec4 as Payload>::SHAPE, PayloadShape::Vector);
        assert_eq!(<f32 as Payload>::SHAPE, PayloadShape::Scalar);
    }
}
