//! Integer math used by the pool engine.
//!
//! Two building blocks live here:
//!
//! - [`wide`]: 256-bit intermediates (`mul_div`, `integer_sqrt`) so that
//!   reserve products never overflow and every division floors.
//! - [`checked`]: the [`CheckedArithmetic`] trait, giving [`Amount`] and
//!   [`Shares`] fallible addition and subtraction.
//!
//! [`Amount`]: crate::domain::Amount
//! [`Shares`]: crate::domain::Shares

pub mod checked;
pub mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{full_mul, integer_sqrt, mul_div, to_u128, U256};
