// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Runtime-dispatched sampling.

The typed API in [`crate::sampling`] resolves everything at compile time.  An
interpreter, or a translator that evaluates constant expressions, may instead
hold intrinsic names as strings and coordinates as slices.  This module takes
those, performs the dimension and signature checks the compiler would have
performed, and forwards to the same typed functions, so results are identical.

```
use glsl_sampler::dynamic::{evaluate_named, AnySampler, Call, Sampled};
use glsl_sampler::bindings::sampler::Sampler2D;
use glsl_sampler::glam::Vec4;

let sampler = AnySampler::from(Sampler2D::new(Vec4::splat(2.0)));
let call = Call::new(&[1.0, 1.0, 1.0, 1.0]).with_offset(&[2, 1]);
let sampled = evaluate_named("textureProjOffset", &sampler, &call).unwrap();
assert_eq!(sampled, Sampled::Color(Vec4::new(4.0, 2.0, 2.0, 2.0)));

// 5 components would not compile in the typed API; here it is an error
let too_wide = Call::new(&[1.0, 2.0, 3.0, 4.0, 5.0]);
assert!(evaluate_named("texture", &sampler, &too_wide).is_err());
```
*/

use crate::bindings::coordinates::{Coordinate, Offset};
use crate::bindings::sampler::SamplerBase;
use crate::error::{Error, Result};
use crate::intrinsics::Intrinsic;
use crate::payload::{Payload, PayloadShape};
use crate::sampling::{self, Modulation};
use glam::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};
use logwise::privacy::LogIt;

/// A sampler whose payload shape is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnySampler {
    Color(SamplerBase<Vec4>),
    Shadow(SamplerBase<f32>),
}

impl AnySampler {
    pub const fn shape(&self) -> PayloadShape {
        match self {
            AnySampler::Color(_) => PayloadShape::Vector,
            AnySampler::Shadow(_) => PayloadShape::Scalar,
        }
    }
}

impl From<SamplerBase<Vec4>> for AnySampler {
    fn from(sampler: SamplerBase<Vec4>) -> Self {
        AnySampler::Color(sampler)
    }
}

impl From<SamplerBase<f32>> for AnySampler {
    fn from(sampler: SamplerBase<f32>) -> Self {
        AnySampler::Shadow(sampler)
    }
}

/// The result of a dynamic sampling call; same shape as the sampler's payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampled {
    Color(Vec4),
    Shadow(f32),
}

impl Sampled {
    pub const fn color(self) -> Option<Vec4> {
        match self {
            Sampled::Color(v) => Some(v),
            Sampled::Shadow(_) => None,
        }
    }

    pub const fn shadow(self) -> Option<f32> {
        match self {
            Sampled::Shadow(v) => Some(v),
            Sampled::Color(_) => None,
        }
    }
}

/// Arguments of one sampling call, as runtime data.
///
/// Which optional arguments are legal depends on the intrinsic:
///
/// * `offset` is required by the offset intrinsics and rejected elsewhere.
/// * `lod` is required by the lod intrinsics and rejected elsewhere.
/// * `bias` is accepted everywhere except `textureLod` and `textureProjLod`.
/// * `compare` fills the second scalar slot of `texture` and `textureProj`
///   and is rejected elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Call<'a> {
    pub coordinate: &'a [f32],
    pub offset: Option<&'a [i32]>,
    pub lod: Option<f32>,
    pub bias: Option<f32>,
    pub compare: Option<f32>,
}

impl<'a> Call<'a> {
    pub fn new(coordinate: &'a [f32]) -> Self {
        Self {
            coordinate,
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: &'a [i32]) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_lod(mut self, lod: f32) -> Self {
        self.lod = Some(lod);
        self
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = Some(bias);
        self
    }

    pub fn with_compare(mut self, compare: f32) -> Self {
        self.compare = Some(compare);
        self
    }
}

/// Promotes a coordinate of 1 to 4 components, like [`Coordinate::promote`].
pub fn promote_coordinate(components: &[f32]) -> Result<Vec4> {
    match *components {
        [x] => Ok(x.promote()),
        [x, y] => Ok(Vec2::new(x, y).promote()),
        [x, y, z] => Ok(Vec3::new(x, y, z).promote()),
        [x, y, z, w] => Ok(Vec4::new(x, y, z, w)),
        _ => Err(Error::UnsupportedDimension {
            argument: "coordinate",
            found: components.len(),
        }),
    }
}

/// Promotes an offset of 1 to 4 components, like [`Offset::promote`].
pub fn promote_offset(components: &[i32]) -> Result<IVec4> {
    match *components {
        [x] => Ok(x.promote()),
        [x, y] => Ok(IVec2::new(x, y).promote()),
        [x, y, z] => Ok(IVec3::new(x, y, z).promote()),
        [x, y, z, w] => Ok(IVec4::new(x, y, z, w)),
        _ => Err(Error::UnsupportedDimension {
            argument: "offset",
            found: components.len(),
        }),
    }
}

/// A call resolved onto one of the three canonical functions.
#[derive(Debug, Clone, Copy)]
enum Canonical {
    Texture(Modulation),
    Offset { offset: IVec4, bias: f32 },
    LodOffset { lod: f32, offset: IVec4, bias: f32 },
}

fn reject(intrinsic: Intrinsic, argument: &'static str, present: bool) -> Result<()> {
    if present {
        Err(Error::UnexpectedArgument {
            intrinsic,
            argument,
        })
    } else {
        Ok(())
    }
}

fn resolve(intrinsic: Intrinsic, call: &Call<'_>) -> Result<Canonical> {
    let offset = if intrinsic.takes_offset() {
        let offset = call.offset.ok_or(Error::MissingArgument {
            intrinsic,
            argument: "offset",
        })?;
        Some(promote_offset(offset)?)
    } else {
        reject(intrinsic, "offset", call.offset.is_some())?;
        None
    };
    let lod = if intrinsic.takes_lod() {
        Some(call.lod.ok_or(Error::MissingArgument {
            intrinsic,
            argument: "lod",
        })?)
    } else {
        reject(intrinsic, "lod", call.lod.is_some())?;
        None
    };
    let bias = call.bias.unwrap_or(1.0);
    Ok(match (offset, lod) {
        (None, None) => Canonical::Texture(Modulation::new(bias, call.compare.unwrap_or(1.0))),
        (None, Some(lod)) => {
            reject(intrinsic, "bias", call.bias.is_some())?;
            reject(intrinsic, "compare", call.compare.is_some())?;
            Canonical::Texture(Modulation::from(lod))
        }
        (Some(offset), None) => {
            reject(intrinsic, "compare", call.compare.is_some())?;
            Canonical::Offset { offset, bias }
        }
        (Some(offset), Some(lod)) => {
            reject(intrinsic, "compare", call.compare.is_some())?;
            Canonical::LodOffset { lod, offset, bias }
        }
    })
}

fn run<P: Payload>(sampler: &SamplerBase<P>, coordinate: Vec4, canonical: Canonical) -> P {
    match canonical {
        Canonical::Texture(modulation) => sampling::texture_with(sampler, coordinate, modulation),
        Canonical::Offset { offset, bias } => {
            sampling::texture_offset_with(sampler, coordinate, offset, bias)
        }
        Canonical::LodOffset { lod, offset, bias } => {
            sampling::texture_lod_offset_with(sampler, coordinate, lod, offset, bias)
        }
    }
}

/// Evaluates `intrinsic` against `sampler` with the runtime arguments in `call`.
pub fn evaluate(intrinsic: Intrinsic, sampler: &AnySampler, call: &Call<'_>) -> Result<Sampled> {
    let shape = sampler.shape();
    let dimension = call.coordinate.len();
    logwise::trace_sync!(
        "evaluate {intrinsic} on {shape} sampler with {dimension}-component coordinate",
        intrinsic = LogIt(&intrinsic),
        shape = LogIt(&shape),
        dimension = LogIt(&dimension)
    );
    let result = promote_coordinate(call.coordinate).and_then(|coordinate| {
        let canonical = resolve(intrinsic, call)?;
        Ok(match sampler {
            AnySampler::Color(s) => Sampled::Color(run(s, coordinate, canonical)),
            AnySampler::Shadow(s) => Sampled::Shadow(run(s, coordinate, canonical)),
        })
    });
    if let Err(err) = &result {
        logwise::warn_sync!(
            "rejected {intrinsic} call: {err}",
            intrinsic = LogIt(&intrinsic),
            err = LogIt(err)
        );
    }
    result
}

/// [`evaluate`], looking the intrinsic up by its GLSL name first.
pub fn evaluate_named(name: &str, sampler: &AnySampler, call: &Call<'_>) -> Result<Sampled> {
    let intrinsic: Intrinsic = name.parse()?;
    evaluate(intrinsic, sampler, call)
}
