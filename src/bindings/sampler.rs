// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
The emulated sampler container and the GLSL sampler type vocabulary.

A [`SamplerBase`] stands in for a bound texture resource.  It stores one
payload value, supplied by whoever binds the resource, and sampling reads it
without modification.

The aliases below mirror GLSL's sampler types, so a translated declaration such
as `uniform sampler2DShadow shadow_map;` binds to [`Sampler2DShadow`] by name.

```
use glsl_sampler::bindings::sampler::{Sampler2D, Sampler2DShadow};
use glsl_sampler::glam::Vec4;

let albedo = Sampler2D::new(Vec4::splat(0.5));
let shadow_map = Sampler2DShadow::new(0.25);
assert_eq!(albedo.data(), Vec4::splat(0.5));
assert_eq!(shadow_map.data(), 0.25);
```
*/

use crate::error::Error;
use crate::payload::{Payload, PayloadShape};
use glam::Vec4;
use std::fmt::Display;
use std::str::FromStr;

/// A sampler holding a single payload value.
///
/// Immutable once constructed.  It behaves as a value type and can be copied
/// freely or shared read-only between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SamplerBase<P> {
    /// The stored payload.
    pub data: P,
}

impl<P> SamplerBase<P> {
    /// Creates a sampler holding `data`.
    #[inline]
    pub const fn new(data: P) -> Self {
        Self { data }
    }
}

impl<P: Payload> SamplerBase<P> {
    /// Returns the stored payload.
    #[inline]
    pub fn data(&self) -> P {
        self.data
    }

    /// Returns the payload shape fixed by this sampler's type.
    #[inline]
    pub const fn shape(&self) -> PayloadShape {
        P::SHAPE
    }
}

impl<P: Payload> From<P> for SamplerBase<P> {
    fn from(data: P) -> Self {
        Self::new(data)
    }
}

pub type Sampler1D = SamplerBase<Vec4>;
pub type Sampler2D = SamplerBase<Vec4>;
pub type Sampler3D = SamplerBase<Vec4>;
pub type SamplerCube = SamplerBase<Vec4>;
pub type Sampler2DRect = SamplerBase<Vec4>;

pub type Sampler1DArray = SamplerBase<Vec4>;
pub type Sampler2DArray = SamplerBase<Vec4>;
pub type SamplerCubeArray = SamplerBase<Vec4>;

pub type Sampler1DShadow = SamplerBase<f32>;
pub type Sampler2DShadow = SamplerBase<f32>;
pub type SamplerCubeShadow = SamplerBase<f32>;
pub type Sampler2DRectShadow = SamplerBase<f32>;

pub type Sampler1DArrayShadow = SamplerBase<f32>;
pub type Sampler2DArrayShadow = SamplerBase<f32>;
pub type SamplerCubeArrayShadow = SamplerBase<f32>;

/// The GLSL sampler type names this crate provides an alias for.
///
/// A translator that resolves declarations at runtime can parse the GLSL
/// spelling and ask which payload shape the alias carries.
///
/// ```
/// use glsl_sampler::bindings::sampler::SamplerKind;
/// use glsl_sampler::payload::PayloadShape;
///
/// let kind: SamplerKind = "samplerCubeArrayShadow".parse().unwrap();
/// assert_eq!(kind, SamplerKind::CubeArrayShadow);
/// assert_eq!(kind.payload_shape(), PayloadShape::Scalar);
/// assert!(kind.is_array());
/// assert!("sampler5D".parse::<SamplerKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    Sampler1D,
    Sampler2D,
    Sampler3D,
    Cube,
    Rect,
    Sampler1DArray,
    Sampler2DArray,
    CubeArray,
    Sampler1DShadow,
    Sampler2DShadow,
    CubeShadow,
    RectShadow,
    Sampler1DArrayShadow,
    Sampler2DArrayShadow,
    CubeArrayShadow,
}

impl SamplerKind {
    /// Every supported sampler type.
    pub const ALL: [SamplerKind; 15] = [
        SamplerKind::Sampler1D,
        SamplerKind::Sampler2D,
        SamplerKind::Sampler3D,
        SamplerKind::Cube,
        SamplerKind::Rect,
        SamplerKind::Sampler1DArray,
        SamplerKind::Sampler2DArray,
        SamplerKind::CubeArray,
        SamplerKind::Sampler1DShadow,
        SamplerKind::Sampler2DShadow,
        SamplerKind::CubeShadow,
        SamplerKind::RectShadow,
        SamplerKind::Sampler1DArrayShadow,
        SamplerKind::Sampler2DArrayShadow,
        SamplerKind::CubeArrayShadow,
    ];

    /// The type name as written in GLSL source.
    pub const fn as_glsl_name(self) -> &'static str {
        match self {
            SamplerKind::Sampler1D => "sampler1D",
            SamplerKind::Sampler2D => "sampler2D",
            SamplerKind::Sampler3D => "sampler3D",
            SamplerKind::Cube => "samplerCube",
            SamplerKind::Rect => "sampler2DRect",
            SamplerKind::Sampler1DArray => "sampler1DArray",
            SamplerKind::Sampler2DArray => "sampler2DArray",
            SamplerKind::CubeArray => "samplerCubeArray",
            SamplerKind::Sampler1DShadow => "sampler1DShadow",
            SamplerKind::Sampler2DShadow => "sampler2DShadow",
            SamplerKind::CubeShadow => "samplerCubeShadow",
            SamplerKind::RectShadow => "sampler2DRectShadow",
            SamplerKind::Sampler1DArrayShadow => "sampler1DArrayShadow",
            SamplerKind::Sampler2DArrayShadow => "sampler2DArrayShadow",
            SamplerKind::CubeArrayShadow => "samplerCubeArrayShadow",
        }
    }

    /// Shadow samplers hold a scalar, everything else a vector.
    pub const fn payload_shape(self) -> PayloadShape {
        match self {
            SamplerKind::Sampler1DShadow
            | SamplerKind::Sampler2DShadow
            | SamplerKind::CubeShadow
            | SamplerKind::RectShadow
            | SamplerKind::Sampler1DArrayShadow
            | SamplerKind::Sampler2DArrayShadow
            | SamplerKind::CubeArrayShadow => PayloadShape::Scalar,
            _ => PayloadShape::Vector,
        }
    }

    pub const fn is_array(self) -> bool {
        matches!(
            self,
            SamplerKind::Sampler1DArray
                | SamplerKind::Sampler2DArray
                | SamplerKind::CubeArray
                | SamplerKind::Sampler1DArrayShadow
                | SamplerKind::Sampler2DArrayShadow
                | SamplerKind::CubeArrayShadow
        )
    }
}

impl Display for SamplerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_glsl_name())
    }
}

impl FromStr for SamplerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SamplerKind::ALL
            .into_iter()
            .find(|kind| kind.as_glsl_name() == s)
            .ok_or_else(|| Error::UnknownSamplerType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn glsl_names_round_trip() {
        for kind in SamplerKind::ALL {
            assert_eq!(kind.as_glsl_name().parse::<SamplerKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_glsl_name());
        }
    }

    #[test]
    fn shadow_kinds_are_scalar() {
        let scalar = SamplerKind::ALL
            .into_iter()
            .filter(|k| k.payload_shape() == PayloadShape::Scalar)
            .count();
        assert_eq!(scalar, 7);
        assert!(SamplerKind::ALL.into_iter().all(|k| {
            (k.payload_shape() == PayloadShape::Scalar) == k.as_glsl_name().ends_with("Shadow")
        }));
    }

    #[test]
    fn aliases_carry_declared_shape() {
        assert_eq!(Sampler3D::new(Vec4::ONE).shape(), PayloadShape::Vector);
        assert_eq!(SamplerCubeArray::default().shape(), PayloadShape::Vector);
        assert_eq!(Sampler2DRectShadow::new(1.0).shape(), PayloadShape::Scalar);
        assert_eq!(SamplerBase::from(3.0f32), Sampler1DArrayShadow::new(3.0));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            "image2D".parse::<SamplerKind>(),
            Err(Error::UnknownSamplerType("image2D".to_owned()))
        );
    }
}
