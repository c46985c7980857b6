//! Device session for OpenSprinkler-style irrigation controllers.
//!
//! One [`DeviceClient`] owns the authenticated request/response cycle to a
//! single device endpoint: it signs each query with the password digest,
//! performs the HTTP exchange, decodes the JSON reply, maps device result
//! codes to typed failures, and normalizes the reply shape (one-element
//! arrays collapse to scalars).
//!
//! # Example
//!
//! ```no_run
//! use sprinkler_device::{DeviceClient, DeviceConfig, Keyword};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeviceConfig::new("Backyard", "192.168.1.52:8080", "opendoor");
//! let client = DeviceClient::new(config);
//!
//! let reply = client.query(Keyword::Options, &[]).await?;
//! println!("firmware: {}", reply.require_u64("fwv")?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod error;

pub use client::{DeviceClient, Keyword, Reply};
pub use error::{result_meaning, DeviceError, Result};

use std::fmt;

use md5::{Digest, Md5};

/// Connection settings for one physical irrigation controller.
#[derive(Clone)]
pub struct DeviceConfig {
    /// Display name used in log lines and error messages.
    pub name: String,
    /// Host, host:port, or full URL of the device.
    pub address: String,
    /// Plaintext device password; only its MD5 digest goes on the wire.
    pub password: String,
}

impl DeviceConfig {
    /// Create a new device configuration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            password: password.into(),
        }
    }

    /// Base URL for requests. The scheme defaults to HTTP when the address
    /// does not carry one.
    #[must_use]
    pub fn base_url(&self) -> String {
        let address = self.address.trim_end_matches('/');
        if address.starts_with("http") {
            address.to_string()
        } else {
            format!("http://{address}")
        }
    }

    /// MD5 hex digest of the device password, computed fresh on each call.
    #[must_use]
    pub fn password_digest(&self) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

// The password must never leak into logs, so Debug is written by hand.
impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .finish()
    }
}
