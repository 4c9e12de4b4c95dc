//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when working with the mount protocol.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// Frame is too short to be decoded.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Non-finite value fed to the coordinate codec.
    #[error("invalid coordinate value: {0}")]
    InvalidValue(f32),
}
