//! Checked arithmetic over domain quantities.
//!
//! Every addition and subtraction of reserves or shares goes through this
//! trait so that overflow and underflow surface as typed errors instead of
//! wrapping or panicking.

use crate::domain::{Amount, Shares};
use crate::error::{PoolError, Result};

/// Fallible addition and subtraction for domain quantities.
pub trait CheckedArithmetic: Sized {
    /// Adds `other`, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the sum exceeds the type's range.
    fn safe_add(self, other: Self) -> Result<Self>;

    /// Subtracts `other`, failing on underflow.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if `other` exceeds `self`.
    fn safe_sub(self, other: Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    fn safe_add(self, other: Self) -> Result<Self> {
        self.checked_add(&other)
            .ok_or(PoolError::Overflow("amount addition overflowed"))
    }

    fn safe_sub(self, other: Self) -> Result<Self> {
        self.checked_sub(&other)
            .ok_or(PoolError::Underflow("amount subtraction underflowed"))
    }
}

impl CheckedArithmetic for Shares {
    fn safe_add(self, other: Self) -> Result<Self> {
        self.checked_add(&other)
            .ok_or(PoolError::Overflow("share addition overflowed"))
    }

    fn safe_sub(self, other: Self) -> Result<Self> {
        self.checked_sub(&other)
            .ok_or(PoolError::Underflow("share subtraction underflowed"))
    }
}
