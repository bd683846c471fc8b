//! Construction and access error types for the device models.
//!
//! Configuration errors are detected once at construction time and fail that
//! construction outright; range errors are detected per call, do not corrupt
//! existing state, and are safe to retry with a valid index.

use crate::regfile::REGISTER_COUNT;
use lockstep_common::{MAX_WIDTH, MIN_WIDTH};

/// Errors produced by device construction or register-file access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A filter was constructed with an empty tap list.
    #[error("filter requires at least one tap coefficient")]
    EmptyTaps,

    /// A register file was constructed with an unsupported data width.
    #[error("invalid data width {width} (supported range is {MIN_WIDTH}..={MAX_WIDTH})")]
    InvalidDataWidth {
        /// The rejected width in bits.
        width: u32,
    },

    /// A register address outside the fixed register range was supplied.
    #[error("address {address} out of range (0..={})", REGISTER_COUNT - 1)]
    AddressOutOfRange {
        /// The rejected register address.
        address: usize,
    },

    /// A read-port index at or beyond the configured port count was supplied.
    #[error("read port {port} out of range ({ports} ports configured)")]
    PortOutOfRange {
        /// The rejected port index.
        port: usize,
        /// The number of read ports the register file was built with.
        ports: usize,
    },

    /// Write data whose width differs from the register width was supplied.
    #[error("write data width {found} does not match register width {expected}")]
    WidthMismatch {
        /// The register width the file was built with.
        expected: u32,
        /// The width of the offered write data.
        found: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_taps_display() {
        let e = ModelError::EmptyTaps;
        assert_eq!(e.to_string(), "filter requires at least one tap coefficient");
    }

    #[test]
    fn invalid_data_width_display() {
        let e = ModelError::InvalidDataWidth { width: 99 };
        assert_eq!(
            e.to_string(),
            "invalid data width 99 (supported range is 1..=64)"
        );
    }

    #[test]
    fn address_out_of_range_display() {
        let e = ModelError::AddressOutOfRange { address: 32 };
        assert_eq!(e.to_string(), "address 32 out of range (0..=31)");
    }

    #[test]
    fn port_out_of_range_display() {
        let e = ModelError::PortOutOfRange { port: 2, ports: 2 };
        assert_eq!(e.to_string(), "read port 2 out of range (2 ports configured)");
    }

    #[test]
    fn width_mismatch_display() {
        let e = ModelError::WidthMismatch {
            expected: 32,
            found: 16,
        };
        assert_eq!(
            e.to_string(),
            "write data width 16 does not match register width 32"
        );
    }
}
