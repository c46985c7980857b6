//! Device session error types.

use thiserror::Error;

/// A result type using `DeviceError`.
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Human-readable meaning of a device result code.
///
/// The table is fixed by the device firmware; codes outside it render as
/// `Unknown`.
#[must_use]
pub const fn result_meaning(code: u64) -> &'static str {
    match code {
        1 => "Success",
        2 => "Unauthorized",
        3 => "Mismatch",
        16 => "Data Missing",
        17 => "Out of Range",
        18 => "Data Format Error",
        32 => "Page Not Found",
        48 => "Not Permitted",
        _ => "Unknown",
    }
}

/// Errors produced by one device exchange.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Network or HTTP-level failure reaching the device. Never retried by
    /// this crate; callers decide.
    #[error("\"{device}\": request failed: {source}")]
    Transport {
        /// Display name of the device.
        device: String,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not parse as a JSON object.
    #[error("cannot parse output for \"{device}\": {detail}")]
    Decode {
        /// Display name of the device.
        device: String,
        /// What the parser choked on.
        detail: String,
    },

    /// The device answered with a non-success result code.
    #[error("{device} - {}", result_meaning(*.code))]
    Result {
        /// Display name of the device.
        device: String,
        /// The raw result code from the reply.
        code: u64,
    },

    /// A field the operation requires is absent from the reply, or has an
    /// unusable shape.
    #[error("\"{device}\": reply has no usable \"{field}\" field")]
    MissingField {
        /// Display name of the device.
        device: String,
        /// Name of the offending field.
        field: &'static str,
    },
}

impl DeviceError {
    /// Returns `true` if the failure is transient and a retry might succeed.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The device result code, when the device itself rejected the call.
    #[must_use]
    pub const fn result_code(&self) -> Option<u64> {
        match self {
            Self::Result { code, .. } => Some(*code),
            _ => None,
        }
    }
}
