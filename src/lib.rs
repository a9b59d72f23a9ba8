// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! glsl_sampler lets GLSL shader code that has been mechanically translated to Rust
compile and run on the CPU, without a texture unit.

Every GLSL sampler becomes a [`SamplerBase`] holding one value, and every sampling
intrinsic becomes plain vector arithmetic on that value.  The result is deterministic,
not visually meaningful: the point is that translated code builds and executes.

| GLSL                                 | Rust                                                   | Payload            |
|--------------------------------------|--------------------------------------------------------|--------------------|
| `sampler1D` ... `samplerCubeArray`   | [`Sampler1D`] ... [`SamplerCubeArray`]                 | [`glam::Vec4`]     |
| `sampler1DShadow` ... `samplerCubeArrayShadow` | [`Sampler1DShadow`] ... [`SamplerCubeArrayShadow`] | `f32`       |
| `texture`, `textureOffset`, `textureLodOffset` | [`texture`], [`texture_offset`], [`texture_lod_offset`] | same as sampler |
| `textureProj`, `textureLod`, `textureProjLod`  | [`texture_proj`], [`texture_lod`], [`texture_proj_lod`] | same as sampler |
| `textureProjOffset`, `textureProjLodOffset`    | [`texture_proj_offset`], [`texture_proj_lod_offset`]    | same as sampler |

# Arithmetic

Coordinates and offsets of 1 to 4 components are padded to 4 with `1`.  Then:

```text
color:  payload * coordinate * bias * lod * offset      (per component)
shadow: payload * coordinate.x * bias * lod * offset.x
```

`bias` and `lod` default to `1`; see [`sampling::Modulation`].

# Example

```
use glsl_sampler::*;
use glsl_sampler::glam::{IVec2, Vec2, Vec4};

let diffuse = Sampler2D::new(Vec4::splat(2.0));
assert_eq!(texture(&diffuse, Vec2::new(3.0, 4.0)), Vec4::new(6.0, 8.0, 2.0, 2.0));
assert_eq!(
    texture_proj_offset(&diffuse, Vec4::ONE, IVec2::new(2, 1)),
    Vec4::new(4.0, 2.0, 2.0, 2.0)
);

let shadow = Sampler2DShadow::new(5.0);
assert_eq!(texture_lod(&shadow, Vec4::new(3.0, 4.0, 1.0, 1.0), 1.0), 15.0);
```

# Failure

A coordinate or offset wider than 4 components, or a call mixing payload shapes, does
not compile.  There is no runtime failure in the typed API.  The [`dynamic`] module
performs the same checks at runtime for callers that hold names and arguments as data,
and reports them as [`Error`].
*/

pub mod bindings;
pub mod dynamic;
pub mod error;
pub mod intrinsics;
pub mod payload;
pub mod pixel_formats;
pub mod sampling;

pub use glam;

pub use bindings::coordinates::{Coordinate, Offset};
pub use bindings::sampler::*;
pub use error::{Error, Result};
pub use intrinsics::{
    Intrinsic, texture_lod, texture_proj, texture_proj_lod, texture_proj_lod_offset,
    texture_proj_lod_offset_with, texture_proj_offset, texture_proj_offset_with, texture_proj_with,
};
pub use payload::{Payload, PayloadShape};
pub use sampling::{
    Modulation, texture, texture_lod_offset, texture_lod_offset_with, texture_offset,
    texture_offset_with, texture_with,
};
