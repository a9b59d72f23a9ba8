/*! Sampler declarations and the argument types passed to them. */

pub mod sampler;
pub mod coordinates;
