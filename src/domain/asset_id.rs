//! Opaque asset identity.

use core::fmt;

/// A 32-byte opaque identifier for a fungible asset.
///
/// The pool never inspects the bytes — the identity exists only so the
/// pool and the external asset ledger agree on which asset a transfer
/// refers to.
///
/// # Examples
///
/// ```
/// use duopool::domain::AssetId;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(asset.as_bytes()[0], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
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

impl fmt::Display for AssetId {
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
        let id = AssetId::from_bytes([7u8; 32]);
        assert_eq!(id.as_bytes(), &[7u8; 32]);
    }

    #[test]
    fn equality_by_bytes() {
        assert_eq!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([1u8; 32]));
        assert_ne!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
    }

    #[test]
    fn display_abbreviates() {
        let id = AssetId::from_bytes([0xabu8; 32]);
        assert_eq!(format!("{id}"), "abababab…");
    }
}
