// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
GLSL spellings of the sampling intrinsics.

Translated shader code can `use glsl_sampler::intrinsics::glsl::*` and keep its
call sites verbatim:

```
#![allow(non_snake_case)]
use glsl_sampler::bindings::sampler::{Sampler2D, Sampler2DShadow};
use glsl_sampler::intrinsics::glsl::*;
use glsl_sampler::glam::{IVec2, Vec2, Vec4};

let uTexture = Sampler2D::new(Vec4::ONE);
let uShadow = Sampler2DShadow::new(0.5);
let vUv = Vec2::new(0.25, 0.75);

let color = textureLodOffset(&uTexture, vUv, 2.0, IVec2::new(1, 1));
let depth = textureProj(&uShadow, Vec4::new(0.5, 0.0, 0.0, 1.0));
assert_eq!(color, Vec4::new(0.5, 1.5, 2.0, 2.0));
assert_eq!(depth, 0.25);
```

GLSL's optional trailing scalars have no spelling here, because Rust has no
default arguments.  Those call sites use the `_with` functions in
[`crate::sampling`] and [`crate::intrinsics`].
*/
#![allow(non_snake_case)]

use crate::bindings::coordinates::{Coordinate, Offset};
use crate::bindings::sampler::SamplerBase;
use crate::payload::Payload;

#[inline]
pub fn texture<P: Payload>(sampler: &SamplerBase<P>, coordinate: impl Coordinate) -> P {
    crate::sampling::texture(sampler, coordinate)
}

#[inline]
pub fn textureProj<P: Payload>(sampler: &SamplerBase<P>, coordinate: impl Coordinate) -> P {
    super::texture_proj(sampler, coordinate)
}

#[inline]
pub fn textureLod<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
) -> P {
    super::texture_lod(sampler, coordinate, lod)
}

#[inline]
pub fn textureProjLod<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
) -> P {
    super::texture_proj_lod(sampler, coordinate, lod)
}

#[inline]
pub fn textureOffset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    offset: impl Offset,
) -> P {
    crate::sampling::texture_offset(sampler, coordinate, offset)
}

#[inline]
pub fn textureProjOffset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    offset: impl Offset,
) -> P {
    super::texture_proj_offset(sampler, coordinate, offset)
}

#[inline]
pub fn textureLodOffset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
    offset: impl Offset,
) -> P {
    crate::sampling::texture_lod_offset(sampler, coordinate, lod, offset)
}

#[inline]
pub fn textureProjLodOffset<P: Payload>(
    sampler: &SamplerBase<P>,
    coordinate: impl Coordinate,
    lod: f32,
    offset: impl Offset,
) -> P {
    super::texture_proj_lod_offset(sampler, coordinate, lod, offset)
}
