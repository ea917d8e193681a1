// Copyright (C) 2025 Linkward Developers
//
// MIT License

//! linkward-core - Error types

use core::fmt;

/// Errors surfaced by the radio control port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioError {
    /// A control call was made before the radio was started.  Fatal to the
    /// calling sequence; must not be retried blindly.
    NotInitialized,

    /// Malformed configuration, rejected before any radio call is
    /// attempted.
    InvalidArgument(&'static str),

    /// Another radio operation is still pending.
    Busy,

    /// A blocking operation timed out.  Non-fatal; the operation may be
    /// retried.
    Timeout,
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadioError::NotInitialized => write!(f, "radio not initialized"),
            RadioError::InvalidArgument(detail) => {
                write!(f, "invalid argument: {detail}")
            }
            RadioError::Busy => write!(f, "radio busy"),
            RadioError::Timeout => write!(f, "operation timed out"),
        }
    }
}

impl core::error::Error for RadioError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_includes_detail() {
        let err = RadioError::InvalidArgument("ssid too long");
        assert_eq!(format!("{err}"), "invalid argument: ssid too long");
    }
}
