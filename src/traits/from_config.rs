//! Construction from validated configuration.

use crate::error::Result;

/// Builds a component from a configuration value.
///
/// Implementations validate the configuration and fail construction rather
/// than produce a half-configured component.
pub trait FromConfig<C>: Sized {
    /// Constructs `Self` from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn from_config(config: &C) -> Result<Self>;
}
