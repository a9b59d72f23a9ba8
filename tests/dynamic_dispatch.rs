// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Runtime dispatch agrees with the typed API and rejects what would not compile.
#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use glsl_sampler::dynamic::{AnySampler, Call, Sampled, evaluate, evaluate_named};
use glsl_sampler::glam::{IVec2, Vec3, Vec4};
use glsl_sampler::*;

fn typed_color(intrinsic: Intrinsic, s: &Sampler2D, c: Vec3, lod: f32, o: IVec2) -> Vec4 {
    match intrinsic {
        Intrinsic::Texture => texture(s, c),
        Intrinsic::TextureProj => texture_proj(s, c),
        Intrinsic::TextureLod => texture_lod(s, c, lod),
        Intrinsic::TextureProjLod => texture_proj_lod(s, c, lod),
        Intrinsic::TextureOffset => texture_offset(s, c, o),
        Intrinsic::TextureProjOffset => texture_proj_offset(s, c, o),
        Intrinsic::TextureLodOffset => texture_lod_offset(s, c, lod, o),
        Intrinsic::TextureProjLodOffset => texture_proj_lod_offset(s, c, lod, o),
    }
}

fn call_for<'a>(
    intrinsic: Intrinsic,
    coordinate: &'a [f32],
    offset: &'a [i32],
    lod: f32,
) -> Call<'a> {
    let mut call = Call::new(coordinate);
    if intrinsic.takes_offset() {
        call = call.with_offset(offset);
    }
    if intrinsic.takes_lod() {
        call = call.with_lod(lod);
    }
    call
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn every_intrinsic_matches_typed_call() {
    let typed = Sampler2D::new(Vec4::new(0.3, -1.5, 2.0, 0.9));
    let sampler = AnySampler::from(typed);
    let coordinate = [0.25f32, 1.75, -3.0];
    let offset = [2i32, -1];
    let lod = 0.6;
    for intrinsic in Intrinsic::ALL {
        let call = call_for(intrinsic, &coordinate, &offset, lod);
        let expected = typed_color(
            intrinsic,
            &typed,
            Vec3::from_array(coordinate),
            lod,
            IVec2::from_array(offset),
        );
        assert_eq!(
            evaluate_named(intrinsic.as_glsl_name(), &sampler, &call),
            Ok(Sampled::Color(expected)),
            "{intrinsic}"
        );
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn shadow_sampler_yields_scalar() {
    let sampler = AnySampler::from(SamplerCubeShadow::new(5.0));
    let call = Call::new(&[3.0, 4.0, 1.0, 1.0]);
    let sampled = evaluate(Intrinsic::Texture, &sampler, &call);
    assert_eq!(sampled, Ok(Sampled::Shadow(15.0)));
    assert_eq!(sampled.ok().and_then(Sampled::shadow), Some(15.0));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn rejects_unsupported_dimensions() {
    let sampler = AnySampler::from(Sampler3D::new(Vec4::ONE));
    assert_eq!(
        evaluate(Intrinsic::Texture, &sampler, &Call::new(&[])),
        Err(Error::UnsupportedDimension {
            argument: "coordinate",
            found: 0
        })
    );
    assert_eq!(
        evaluate(Intrinsic::TextureProj, &sampler, &Call::new(&[1.0, 2.0, 3.0, 4.0, 5.0])),
        Err(Error::UnsupportedDimension {
            argument: "coordinate",
            found: 5
        })
    );
    let wide_offset = Call::new(&[1.0]).with_offset(&[1, 1, 1, 1, 1]);
    assert_eq!(
        evaluate(Intrinsic::TextureOffset, &sampler, &wide_offset),
        Err(Error::UnsupportedDimension {
            argument: "offset",
            found: 5
        })
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn missing_arguments() {
    let sampler = AnySampler::from(Sampler2D::new(Vec4::ONE));
    let bare = Call::new(&[1.0, 1.0]);
    assert_eq!(
        evaluate(Intrinsic::TextureProjOffset, &sampler, &bare),
        Err(Error::MissingArgument {
            intrinsic: Intrinsic::TextureProjOffset,
            argument: "offset"
        })
    );
    assert_eq!(
        evaluate(Intrinsic::TextureLodOffset, &sampler, &bare.with_offset(&[1])),
        Err(Error::MissingArgument {
            intrinsic: Intrinsic::TextureLodOffset,
            argument: "lod"
        })
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn unknown_name_is_reported() {
    let sampler = AnySampler::from(Sampler2D::new(Vec4::ONE));
    let err = evaluate_named("textureGrad", &sampler, &Call::new(&[1.0])).unwrap_err();
    assert_eq!(err, Error::UnknownIntrinsic("textureGrad".to_owned()));
    assert!(err.to_string().contains("textureGrad"));
}
