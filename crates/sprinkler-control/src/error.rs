//! Zone controller error types.

use sprinkler_device::DeviceError;
use thiserror::Error;

/// A result type using `ControlError`.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Minimum firmware version the protocol requires (2.1.3).
pub const MIN_FIRMWARE: u64 = 213;

/// Errors that can occur in zone-control operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// A device exchange failed.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// The device firmware is too old for the station protocol.
    #[error("\"{device}\" requires firmware 2.1.3 or newer (reported {found})")]
    Firmware {
        /// Display name of the device.
        device: String,
        /// The firmware version the device reported.
        found: u64,
    },

    /// No zone topology has been persisted for the device yet; discovery
    /// has to succeed before zones can be controlled.
    #[error("\"{device}\" has no stored zone configuration")]
    NotConfigured {
        /// Display name of the device.
        device: String,
    },
}
