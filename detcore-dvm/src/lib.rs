//! Deterministic virtual machine primitives.
//!
//! Two independent layers that together give the rest of the pipeline a
//! total, platform-independent arithmetic surface:
//!
//! - [`arith`] - saturating Q16.16 fixed-point arithmetic with
//!   round-to-nearest-even shifts.
//! - [`prf`] - the counter-based pseudo-random function and its unbiased
//!   bounded-integer sampler.
//!
//! Every fallible operation here takes `&mut FaultFlags` and returns a
//! defined value; nothing in this crate panics or allocates.

pub mod arith;
pub mod prf;

pub use arith::{add32, clamp32, div_q16, mul64, mul_q16, round_shift_rne, sub32};
pub use prf::{prf, prf_uniform};
