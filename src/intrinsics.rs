// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Projective and explicit-lod intrinsic spellings.

GLSL's `textureProj`, `textureLod` and their offset forms are distinct
intrinsics, but in this emulation projection and explicit lod have no effect
beyond ordinary scalar modulation.  Each alias here forwards to its canonical
counterpart in [`crate::sampling`] and returns a bit-identical result.

| Intrinsic              | Canonical          |
|------------------------|--------------------|
| `textureProj`          | `texture`          |
| `textureLod`           | `texture`          |
| `textureProjLod`       | `texture`          |
| `textureProjOffset`    | `textureOffset`    |
| `textureProjLodOffset` | `textureLodOffset` |

Translated code that keeps GLSL's camelCase names can use [`glsl`] instead.
Code that resolves intrinsics by name at runtime can use [`Intrinsic`].

```
use glsl_sampler::bindings::sampler::Sampler2D;
use glsl_sampler::intrinsics::{texture_proj_lod, texture_proj_lod_offset};
use glsl_sampler::sampling::{texture_lod_offset, texture_with};
use glsl_sampler::glam::{IVec4, Vec3, Vec4};

let s = Sampler2D::new(Vec4::new(0.1, 0.2, 0.3, 0.4));
let c = Vec3::new(0.7, 0.9, 1.3);
assert_eq!(texture_proj_lod(&s, c, 0.25), texture_with(&s, c, 0.25f32));
assert_eq!(texture_proj_lod(&s, c, 0.25), texture_lod_offset(&s, c, 0.25, IVec4::ONE));
assert_eq!(
    texture_proj_lod_offset(&s, c, 0.25, IVec4::new(1, 2, 3, 4)),
    texture_lod_offset(&s, c, 0.25, IVec4::new(1, 2, 3, 4)),
);
```
*/

use crate::bindings::coordinates::{Coordinate, Offset};
use crate::bindings::sampler::SamplerBase;
use crate::error::Error;
use crate::payload::Payload;
use crate::sampling::{self, Modulation};
use std::fmt::Display;
use std::str::FromStr;

pub mod glsl;

/// GLSL `textureProj(sampler, P)`.
#[inline]
pub fn texture_proj<P: Payload>(sampler: &SamplerBase<P>, coordinate: impl Coordinate) -> P {
    sampling::texture(sampler, coordinate)
}

/// GLSL `textureProj(sampler, P, bias)`.
#[inline]
pub fn texture_proj_with<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    modulation: impl Into<Modulation>,
) -> P {
    sampling::texture_with(sampler, coordinate, modulation)
}

/// GLSL `textureLod(sampler, P, lod)`.
///
/// `lod` is the single trailing scalar of `texture`, so it lands in the first
/// modulation slot.
#[inline]
pub fn texture_lod<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
) -> P {
    sampling::texture_with(sampler, coordinate, lod)
}

/// GLSL `textureProjLod(sampler, P, lod)`.
#[inline]
pub fn texture_proj_lod<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
) -> P {
    sampling::texture_with(sampler, coordinate, lod)
}

/// GLSL `textureProjOffset(sampler, P, offset)`.
#[inline]
pub fn texture_proj_offset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    offset: impl Offset,
) -> P {
    sampling::texture_offset(sampler, coordinate, offset)
}

/// GLSL `textureProjOffset(sampler, P, offset, bias)`.
#[inline]
pub fn texture_proj_offset_with<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    offset: impl Offset,
    bias: f32,
) -> P {
    sampling::texture_offset_with(sampler, coordinate, offset, bias)
}

/// GLSL `textureProjLodOffset(sampler, P, lod, offset)`.
#[inline]
pub fn texture_proj_lod_offset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
    offset: impl Offset,
) -> P {
    sampling::texture_lod_offset(sampler, coordinate, lod, offset)
}

/// GLSL `textureProjLodOffset(sampler, P, lod, offset, bias)`.
#[inline]
pub fn texture_proj_lod_offset_with<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
    offset: impl Offset,
    bias: f32,
) -> P {
    sampling::texture_lod_offset_with(sampler, coordinate, lod, offset, bias)
}

/// Every sampling intrinsic this crate emulates, keyed by GLSL name.
///
/// ```
/// use glsl_sampler::intrinsics::Intrinsic;
///
/// let i: Intrinsic = "textureProjLodOffset".parse().unwrap();
/// assert_eq!(i.canonical(), Intrinsic::TextureLodOffset);
/// assert!(i.is_alias());
/// assert!(i.takes_lod() && i.takes_offset());
/// assert_eq!(i.to_string(), "textureProjLodOffset");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    Texture,
    TextureProj,
    TextureLod,
    TextureProjLod,
    TextureOffset,
    TextureProjOffset,
    TextureLodOffset,
    TextureProjLodOffset,
}

impl Intrinsic {
    pub const ALL: [Intrinsic; 8] = [
        Intrinsic::Texture,
        Intrinsic::TextureProj,
        Intrinsic::TextureLod,
        Intrinsic::TextureProjLod,
        Intrinsic::TextureOffset,
        Intrinsic::TextureProjOffset,
        Intrinsic::TextureLodOffset,
        Intrinsic::TextureProjLodOffset,
    ];

    /// The intrinsic's name as written in GLSL source.
    pub const fn as_glsl_name(self) -> &'static str {
        match self {
            Intrinsic::Texture => "texture",
            Intrinsic::TextureProj => "textureProj",
            Intrinsic::TextureLod => "textureLod",
            Intrinsic::TextureProjLod => "textureProjLod",
            Intrinsic::TextureOffset => "textureOffset",
            Intrinsic::TextureProjOffset => "textureProjOffset",
            Intrinsic::TextureLodOffset => "textureLodOffset",
            Intrinsic::TextureProjLodOffset => "textureProjLodOffset",
        }
    }

    /// The intrinsic this one is a synonym of.  Canonical intrinsics map to themselves.
    pub const fn canonical(self) -> Intrinsic {
        match self {
            Intrinsic::Texture
            | Intrinsic::TextureProj
            | Intrinsic::TextureLod
            | Intrinsic::TextureProjLod => Intrinsic::Texture,
            Intrinsic::TextureOffset | Intrinsic::TextureProjOffset => Intrinsic::TextureOffset,
            Intrinsic::TextureLodOffset | Intrinsic::TextureProjLodOffset => {
                Intrinsic::TextureLodOffset
            }
        }
    }

    pub const fn is_alias(self) -> bool {
        !matches!(
            self,
            Intrinsic::Texture | Intrinsic::TextureOffset | Intrinsic::TextureLodOffset
        )
    }

    /// Whether the GLSL signature has an offset parameter.
    pub const fn takes_offset(self) -> bool {
        matches!(
            self,
            Intrinsic::TextureOffset
                | Intrinsic::TextureProjOffset
                | Intrinsic::TextureLodOffset
                | Intrinsic::TextureProjLodOffset
        )
    }

    /// Whether the GLSL signature has a required lod parameter.
    pub const fn takes_lod(self) -> bool {
        matches!(
            self,
            Intrinsic::TextureLod
                | Intrinsic::TextureProjLod
                | Intrinsic::TextureLodOffset
                | Intrinsic::TextureProjLodOffset
        )
    }
}

impl Display for Intrinsic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_glsl_name())
    }
}

impl FromStr for Intrinsic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intrinsic::ALL
            .into_iter()
            .find(|i| i.as_glsl_name() == s)
            .ok_or_else(|| Error::UnknownIntrinsic(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::sampler::{Sampler2D, Sampler2DArrayShadow};
    use crate::sampling::{texture, texture_lod_offset, texture_offset, texture_offset_with};
    use glam::{IVec2, Vec2, Vec4};

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn aliases_agree_with_canonical() {
        let s = Sampler2D::new(Vec4::new(1.25, -2.0, 0.3, 7.0));
        let c = Vec2::new(0.6, 1.7);
        let o = IVec2::new(-3, 2);
        assert_eq!(texture_proj(&s, c), texture(&s, c));
        assert_eq!(
            texture_proj_with(&s, c, (0.3f32, 0.9f32)),
            sampling::texture_with(&s, c, (0.3f32, 0.9f32))
        );
        assert_eq!(texture_lod(&s, c, 0.7), sampling::texture_with(&s, c, 0.7f32));
        assert_eq!(texture_proj_offset(&s, c, o), texture_offset(&s, c, o));
        assert_eq!(texture_proj_offset_with(&s, c, o, 1.5), texture_offset_with(&s, c, o, 1.5));
        assert_eq!(texture_proj_lod_offset(&s, c, 0.2, o), texture_lod_offset(&s, c, 0.2, o));
        assert_eq!(
            texture_proj_lod_offset_with(&s, c, 0.2, o, 3.0),
            sampling::texture_lod_offset_with(&s, c, 0.2, o, 3.0)
        );
    }

    #[test]
    fn shadow_aliases() {
        let s = Sampler2DArrayShadow::new(0.5);
        let c = Vec4::new(4.0, 9.0, 9.0, 9.0);
        assert_eq!(texture_proj(&s, c), 2.0);
        assert_eq!(texture_lod(&s, c, 3.0), 6.0);
        assert_eq!(texture_proj_lod_offset(&s, c, 3.0, 2i32), 12.0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn names_round_trip() {
        for i in Intrinsic::ALL {
            assert_eq!(i.as_glsl_name().parse::<Intrinsic>(), Ok(i));
            assert_eq!(i.canonical().canonical(), i.canonical());
            assert_eq!(i.is_alias(), i.canonical() != i);
            assert_eq!(i.takes_offset(), i.canonical() != Intrinsic::Texture);
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            "texelFetch".parse::<Intrinsic>(),
            Err(Error::UnknownIntrinsic("texelFetch".to_owned()))
        );
        // GLSL names are case sensitive
        assert!("TextureLod".parse::<Intrinsic>().is_err());
    }
}
