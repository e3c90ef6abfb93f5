//! # Dispatch policies.
//!
//! This module groups the tunable behaviors of a dispatch pass:
//! - [`EmitPolicy`] — what happens when a slot fails during emit.

mod emit;

pub use emit::EmitPolicy;
