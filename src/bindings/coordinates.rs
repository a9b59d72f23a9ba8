// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Coordinate and offset promotion.

GLSL has one sampling intrinsic per sampler dimensionality, so translated call
sites pass 1- to 4-component coordinates.  Every sampling function here accepts
any of them and pads to the canonical 4-component form before doing arithmetic:

```text
  f32      x          ─▶ (x, 1, 1, 1)
  Vec2     (x, y)     ─▶ (x, y, 1, 1)
  Vec3     (x, y, z)  ─▶ (x, y, z, 1)
  Vec4     (x,y,z,w)  ─▶ unchanged
```

Offsets follow the same rule with integer components.  The filler is `1`
because every factor in this emulation is multiplicative.

Promotion is the only dimension conversion.  Nothing is ever truncated, and
there is no implementation for wider inputs, so they fail to compile:

```compile_fail
use glsl_sampler::bindings::sampler::Sampler2D;
use glsl_sampler::sampling::texture;
use glsl_sampler::glam::Vec4;

let s = Sampler2D::new(Vec4::ONE);
let _ = texture(&s, [1.0f32; 5]);
```

```compile_fail
use glsl_sampler::bindings::sampler::Sampler2D;
use glsl_sampler::sampling::texture_offset;
use glsl_sampler::glam::Vec4;

let s = Sampler2D::new(Vec4::ONE);
let _ = texture_offset(&s, Vec4::ONE, [1i32; 5]);
```

Both traits are sealed, so other crates cannot add a wider type either:

```compile_fail
use glsl_sampler::bindings::coordinates::Coordinate;
use glsl_sampler::glam::Vec4;

#[derive(Clone, Copy)]
struct Vec5([f32; 5]);

impl Coordinate for Vec5 {
    const DIMENSION: u8 = 5;
    fn promote(self) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], self.0[2], self.0[3])
    }
}
```
*/

use glam::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

/// Sealed traits for argument type safety.
///
/// Only the 1- to 4-component types listed here may be passed as coordinates
/// or offsets.
pub(crate) mod sealed {
    use glam::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

    pub trait SealedCoordinate {}
    impl SealedCoordinate for f32 {}
    impl SealedCoordinate for Vec2 {}
    impl SealedCoordinate for Vec3 {}
    impl SealedCoordinate for Vec4 {}
    impl SealedCoordinate for [f32; 1] {}
    impl SealedCoordinate for [f32; 2] {}
    impl SealedCoordinate for [f32; 3] {}
    impl SealedCoordinate for [f32; 4] {}

    pub trait SealedOffset {}
    impl SealedOffset for i32 {}
    impl SealedOffset for IVec2 {}
    impl SealedOffset for IVec3 {}
    impl SealedOffset for IVec4 {}
    impl SealedOffset for [i32; 1] {}
    impl SealedOffset for [i32; 2] {}
    impl SealedOffset for [i32; 3] {}
    impl SealedOffset for [i32; 4] {}
}

/// A float coordinate of dimension 1 to 4.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Coordinate: sealed::SealedCoordinate + Copy {
    /// Number of components before promotion.
    const DIMENSION: u8;

    /// Pads to 4 components with trailing `1.0`.
    fn promote(self) -> Vec4;
}

/// An integer offset of dimension 1 to 4.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Offset: sealed::SealedOffset + Copy {
    /// Number of components before promotion.
    const DIMENSION: u8;

    /// Pads to 4 components with trailing `1`.
    fn promote(self) -> IVec4;
}

impl Coordinate for f32 {
    const DIMENSION: u8 = 1;
    #[inline]
    fn promote(self) -> Vec4 {
        Vec4::new(self, 1.0, 1.0, 1.0)
    }
}

impl Coordinate for Vec2 {
    const DIMENSION: u8 = 2;
    #[inline]
    fn promote(self) -> Vec4 {
        self.extend(1.0).extend(1.0)
    }
}

impl Coordinate for Vec3 {
    const DIMENSION: u8 = 3;
    #[inline]
    fn promote(self) -> Vec4 {
        self.extend(1.0)
    }
}

impl Coordinate for Vec4 {
    const DIMENSION: u8 = 4;
    #[inline]
    fn promote(self) -> Vec4 {
        self
    }
}

impl Coordinate for [f32; 1] {
    const DIMENSION: u8 = 1;
    #[inline]
    fn promote(self) -> Vec4 {
        self[0].promote()
    }
}

impl Coordinate for [f32; 2] {
    const DIMENSION: u8 = 2;
    #[inline]
    fn promote(self) -> Vec4 {
        Vec2::from_array(self).promote()
    }
}

impl Coordinate for [f32; 3] {
    const DIMENSION: u8 = 3;
    #[inline]
    fn promote(self) -> Vec4 {
        Vec3::from_array(self).promote()
    }
}

impl Coordinate for [f32; 4] {
    const DIMENSION: u8 = 4;
    #[inline]
    fn promote(self) -> Vec4 {
        Vec4::from_array(self)
    }
}

impl Offset for i32 {
    const DIMENSION: u8 = 1;
    #[inline]
    fn promote(self) -> IVec4 {
        IVec4::new(self, 1, 1, 1)
    }
}

impl Offset for IVec2 {
    const DIMENSION: u8 = 2;
    #[inline]
    fn promote(self) -> IVec4 {
        self.extend(1).extend(1)
    }
}

impl Offset for IVec3 {
    const DIMENSION: u8 = 3;
    #[inline]
    fn promote(self) -> IVec4 {
        self.extend(1)
    }
}

impl Offset for IVec4 {
    const DIMENSION: u8 = 4;
    #[inline]
    fn promote(self) -> IVec4 {
        self
    }
}

impl Offset for [i32; 1] {
    const DIMENSION: u8 = 1;
    #[inline]
    fn promote(self) -> IVec4 {
        self[0].promote()
    }
}

impl Offset for [i32; 2] {
    const DIMENSION: u8 = 2;
    #[inline]
    fn promote(self) -> IVec4 {
        IVec2::from_array(self).promote()
    }
}

impl Offset for [i32; 3] {
    const DIMENSION: u8 = 3;
    #[inline]
    fn promote(self) -> IVec4 {
        IVec3::from_array(self).promote()
    }
}

impl Offset for [i32; 4] {
    const DIMENSION: u8 = 4;
    #[inline]
    fn promote(self) -> IVec4 {
        IVec4::from_array(self)
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn coordinates_pad_with_one() {
    assert_eq!(2.0f32.promote(), Vec4::new(2.0, 1.0, 1.0, 1.0));
    assert_eq!(Vec2::new(3.0, 4.0).promote(), Vec4::new(3.0, 4.0, 1.0, 1.0));
    assert_eq!(Vec3::new(3.0, 4.0, 5.0).promote(), Vec4::new(3.0, 4.0, 5.0, 1.0));
    assert_eq!(Vec4::new(3.0, 4.0, 5.0, 6.0).promote(), Vec4::new(3.0, 4.0, 5.0, 6.0));
    assert_eq!([3.0f32, 4.0].promote(), Vec2::new(3.0, 4.0).promote());
    assert_eq!([0.5f32].promote(), 0.5f32.promote());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn offsets_pad_with_one() {
    assert_eq!(7i32.promote(), IVec4::new(7, 1, 1, 1));
    assert_eq!(IVec2::new(2, -1).promote(), IVec4::new(2, -1, 1, 1));
    assert_eq!(IVec3::new(2, -1, 0).promote(), IVec4::new(2, -1, 0, 1));
    assert_eq!([2i32, 3, 4, 5].promote(), IVec4::new(2, 3, 4, 5));
}

#[test]
fn dimensions() {
    assert_eq!(<f32 as Coordinate>::DIMENSION, 1);
    assert_eq!(<Vec3 as Coordinate>::DIMENSION, 3);
    assert_eq!(<[f32; 4] as Coordinate>::DIMENSION, 4);
    assert_eq!(<IVec2 as Offset>::DIMENSION, 2);
    assert_eq!(<[i32; 1] as Offset>::DIMENSION, 1);
}
