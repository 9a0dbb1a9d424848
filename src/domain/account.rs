//! Opaque account identity.

use core::fmt;

/// A 32-byte opaque identifier for an account — a liquidity provider, a
/// trader, or the pool itself on the external asset ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    /// Abbreviated hex form: first four bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_bytes() {
        let id = AccountId::from_bytes([9u8; 32]);
        assert_eq!(id.as_bytes(), &[9u8; 32]);
    }

    #[test]
    fn distinct_accounts_differ() {
        assert_ne!(
            AccountId::from_bytes([1u8; 32]),
            AccountId::from_bytes([2u8; 32])
        );
    }
}
