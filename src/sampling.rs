// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Canonical sampling functions.

These are the single implementation behind every GLSL sampling intrinsic this
crate emulates.  Each one promotes its coordinate (and offset) to 4 components
and applies the payload's arithmetic rule; see [`crate::payload`].

GLSL's optional trailing scalars (bias, lod, comparison value) are modeled by
[`Modulation`] on the `_with` variants.  When omitted, each factor is `1`.

# Examples

```
use glsl_sampler::bindings::sampler::{Sampler2D, Sampler2DShadow};
use glsl_sampler::sampling::{texture, texture_offset, texture_with};
use glsl_sampler::glam::{IVec2, Vec2, Vec4};

let albedo = Sampler2D::new(Vec4::splat(2.0));

// (3, 4) is promoted to (3, 4, 1, 1)
assert_eq!(texture(&albedo, Vec2::new(3.0, 4.0)), Vec4::new(6.0, 8.0, 2.0, 2.0));

// bias 2 and lod 0.5 cancel out
assert_eq!(
    texture_with(&albedo, Vec2::new(3.0, 4.0), (2.0f32, 0.5f32)),
    Vec4::new(6.0, 8.0, 2.0, 2.0)
);

// the offset is a further per-lane factor
assert_eq!(
    texture_offset(&albedo, Vec4::ONE, IVec2::new(2, 1)),
    Vec4::new(4.0, 2.0, 2.0, 2.0)
);

// shadow samplers only look at the first coordinate component
let shadow_map = Sampler2DShadow::new(5.0);
assert_eq!(texture(&shadow_map, Vec4::new(3.0, 4.0, 1.0, 1.0)), 15.0);
```

The result always has the sampler's payload shape.  Reading a color out of a
shadow sampler does not compile:

```compile_fail
use glsl_sampler::bindings::sampler::Sampler2DShadow;
use glsl_sampler::sampling::texture;
use glsl_sampler::glam::Vec4;

let v: Vec4 = texture(&Sampler2DShadow::new(1.0), Vec4::ONE);
```
*/

use crate::bindings::coordinates::{Coordinate, Offset};
use crate::bindings::sampler::SamplerBase;
use crate::payload::Payload;
use glam::{IVec4, Vec4};

/// The two trailing scalar factors of a sampling call.
///
/// GLSL gives them distinct meanings (bias, explicit lod, depth comparison),
/// but this emulation treats both purely as multiplicative factors.  The
/// field names only record which slot a call site fills.
///
/// ```
/// use glsl_sampler::sampling::Modulation;
///
/// assert_eq!(Modulation::default(), Modulation { bias: 1.0, lod: 1.0 });
/// // a single trailing scalar fills the first slot
/// assert_eq!(Modulation::from(0.5f32), Modulation { bias: 0.5, lod: 1.0 });
/// assert_eq!(Modulation::from((0.5f32, 2.0f32)), Modulation::new(0.5, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulation {
    /// First slot, applied first.
    pub bias: f32,
    /// Second slot, applied after `bias`.
    pub lod: f32,
}

impl Modulation {
    /// Both factors at their neutral value.
    pub const NEUTRAL: Modulation = Modulation { bias: 1.0, lod: 1.0 };

    #[inline]
    pub const fn new(bias: f32, lod: f32) -> Self {
        Self { bias, lod }
    }
}

impl Default for Modulation {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f32> for Modulation {
    fn from(bias: f32) -> Self {
        Self { bias, lod: 1.0 }
    }
}

impl From<(f32, f32)> for Modulation {
    fn from((bias, lod): (f32, f32)) -> Self {
        Self { bias, lod }
    }
}

/// Shared arithmetic entry for every variant.
///
/// Plain `texture` arrives here with an all-ones offset, which is the
/// multiplicative identity.
#[inline]
fn sample<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: Vec4,
    modulation: Modulation,
    offset: IVec4,
) -> P {
    sampler
        .data
        .modulate(coordinate, modulation.bias, modulation.lod, offset)
}

/// GLSL `texture(sampler, P)`.
#[inline]
pub fn texture<P: Payload>(sampler: &SamplerBase<P>, coordinate: impl Coordinate) -> P {
    texture_with(sampler, coordinate, Modulation::NEUTRAL)
}

/// GLSL `texture(sampler, P, s0)` and the two-scalar form.
///
/// Pass an `f32` to fill the first slot, a `(f32, f32)` to fill both, or a
/// [`Modulation`].
#[inline]
pub fn texture_with<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    modulation: impl Into<Modulation>,
) -> P {
    sample(sampler, coordinate.promote(), modulation.into(), IVec4::ONE)
}

/// GLSL `textureOffset(sampler, P, offset)`.
#[inline]
pub fn texture_offset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    offset: impl Offset,
) -> P {
    texture_offset_with(sampler, coordinate, offset, 1.0)
}

/// GLSL `textureOffset(sampler, P, offset, bias)`.
#[inline]
pub fn texture_offset_with<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    offset: impl Offset,
    bias: f32,
) -> P {
    sample(
        sampler,
        coordinate.promote(),
        Modulation::new(bias, 1.0),
        offset.promote(),
    )
}

/// GLSL `textureLodOffset(sampler, P, lod, offset)`.
///
/// `lod` fills the second modulation slot; the first stays at `1`.
#[inline]
pub fn texture_lod_offset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
    offset: impl Offset,
) -> P {
    texture_lod_offset_with(sampler, coordinate, lod, offset, 1.0)
}

/// [`texture_lod_offset`] with an explicit bias in the first slot.
#[inline]
pub fn texture_lod_offset_with<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
    offset: impl Offset,
    bias: f32,
) -> P {
    sample(
        sampler,
        coordinate.promote(),
        Modulation::new(bias, lod),
        offset.promote(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::sampler::{Sampler1D, Sampler3D, SamplerCubeShadow};
    use glam::{IVec2, IVec3, Vec2, Vec3};

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn plain_texture_is_elementwise_product() {
        let s = Sampler3D::new(Vec4::new(1.0, 2.0, 3.0, 4.0));
        let c = Vec4::new(0.5, 0.25, 2.0, -1.0);
        assert_eq!(texture(&s, c), Vec4::new(0.5, 0.5, 6.0, -4.0));
    }

    #[test]
    fn plain_texture_matches_offset_path_with_unit_offset() {
        let s = Sampler3D::new(Vec4::new(1.5, 2.5, 3.5, 4.5));
        let c = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(texture(&s, c), texture_offset(&s, c, IVec4::ONE));
        assert_eq!(texture(&s, c), texture_offset(&s, c, 1));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn one_dimensional_calls() {
        let s = Sampler1D::new(Vec4::splat(3.0));
        assert_eq!(texture(&s, 2.0f32), Vec4::new(6.0, 3.0, 3.0, 3.0));
        assert_eq!(texture_offset(&s, 2.0f32, -1), Vec4::new(-6.0, 3.0, 3.0, 3.0));
    }

    #[test]
    fn bias_goes_in_first_slot_for_offset_variant() {
        let s = Sampler3D::new(Vec4::ONE);
        assert_eq!(
            texture_offset_with(&s, Vec2::ONE, IVec2::ONE, 4.0),
            texture_with(&s, Vec2::ONE, 4.0f32)
        );
    }

    #[test]
    fn lod_offset_matches_offset_with_lod_factor() {
        let s = Sampler3D::new(Vec4::new(1.0, 2.0, 3.0, 4.0));
        let c = Vec2::new(2.0, 3.0);
        let o = IVec3::new(1, 2, 3);
        assert_eq!(
            texture_lod_offset(&s, c, 0.5, o),
            texture_offset(&s, c, o) * 0.5
        );
        assert_eq!(
            texture_lod_offset_with(&s, c, 0.5, o, 2.0),
            texture_offset(&s, c, o)
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn shadow_ignores_trailing_components() {
        let s = SamplerCubeShadow::new(2.0);
        let a = texture_lod_offset(&s, Vec4::new(3.0, 0.0, 0.0, 0.0), 0.5, IVec4::new(2, 0, 0, 0));
        let b = texture_lod_offset(&s, Vec4::new(3.0, 8.0, 9.0, 10.0), 0.5, IVec4::new(2, 5, 6, 7));
        assert_eq!(a, 6.0);
        assert_eq!(a, b);
    }
}
