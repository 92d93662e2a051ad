//! Error types for nas5g

use thiserror::Error;

/// Error types for the nas5g support library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Errors raised by [`OctetView`](crate::OctetView) and
/// [`OctetViewMut`](crate::OctetViewMut) when an access would leave the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OctetError {
    /// Not enough octets left in the window
    #[error("Out of bounds: needed {needed} octets, {remaining} remaining")]
    OutOfBounds {
        /// Octets the access required
        needed: usize,
        /// Octets left between the cursor and the end of the window
        remaining: usize,
    },
}
