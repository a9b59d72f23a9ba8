// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Errors from name lookup and dynamic evaluation.
//!
//! The typed sampling API cannot fail: unsupported dimensions and mismatched
//! payload shapes are rejected by the compiler.  These errors only arise when
//! intrinsic names, sampler type names or argument lists arrive as runtime data.

use crate::intrinsics::Intrinsic;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Unknown sampling intrinsic {0:?}")]
    UnknownIntrinsic(String),
    #[error("Unknown sampler type {0:?}")]
    UnknownSamplerType(String),
    #[error("{argument} has {found} components, expected 1 to 4")]
    UnsupportedDimension {
        argument: &'static str,
        found: usize,
    },
    #[error("{intrinsic} requires a {argument} argument")]
    MissingArgument {
        intrinsic: Intrinsic,
        argument: &'static str,
    },
    #[error("{intrinsic} does not take a {argument} argument")]
    UnexpectedArgument {
        intrinsic: Intrinsic,
        argument: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
