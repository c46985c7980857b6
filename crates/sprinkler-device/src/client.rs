//! Authenticated request/response exchange with one sprinkler device.
//!
//! Every operation is a single HTTP GET against `<base-url>/<keyword>` with
//! the operation parameters plus the password digest in the query string.
//! There are no retries and no connection reuse guarantees; transient
//! failures surface immediately and callers decide what to do.

use std::fmt;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::{DeviceError, Result};
use crate::DeviceConfig;

/// The success result code.
const RESULT_SUCCESS: u64 = 1;

/// Device operations addressable over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Device options, including the firmware version (`jo`).
    Options,
    /// Station names and the disabled-station bitmask (`jn`).
    StationNames,
    /// Controller variables, including the rain sensor flag (`jc`).
    ControllerStatus,
    /// Per-station on/off status array (`js`).
    StationStatus,
    /// Manual station control: `sid`, `en`, optional `t` (`cm`).
    SetStation,
}

impl Keyword {
    /// Wire name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Options => "jo",
            Self::StationNames => "jn",
            Self::ControllerStatus => "jc",
            Self::StationStatus => "js",
            Self::SetStation => "cm",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized device reply: a JSON object with every one-element array
/// collapsed to its scalar. Arrays of any other length pass through.
#[derive(Debug, Clone)]
pub struct Reply {
    device: String,
    fields: Map<String, Value>,
}

impl Reply {
    fn new(device: &str, fields: Map<String, Value>) -> Self {
        Self {
            device: device.to_string(),
            fields,
        }
    }

    /// Raw field access.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Integer field, if present and numeric.
    #[must_use]
    pub fn get_u64(&self, field: &str) -> Option<u64> {
        self.fields.get(field).and_then(Value::as_u64)
    }

    /// Integer field the operation cannot proceed without.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::MissingField` if the field is absent or not an
    /// unsigned integer.
    pub fn require_u64(&self, field: &'static str) -> Result<u64> {
        self.get_u64(field).ok_or_else(|| self.missing(field))
    }

    /// String-array field. A single-station controller collapses the array
    /// to a bare string under singleton unwrap; that shape is accepted too.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::MissingField` if the field is absent or any
    /// element is not a string.
    pub fn require_str_array(&self, field: &'static str) -> Result<Vec<String>> {
        match self.fields.get(field) {
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(str::to_owned).ok_or_else(|| self.missing(field)))
                .collect(),
            _ => Err(self.missing(field)),
        }
    }

    /// Integer-array field, accepting the collapsed single-element form.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::MissingField` if the field is absent or any
    /// element is not an unsigned integer.
    pub fn require_u64_array(&self, field: &'static str) -> Result<Vec<u64>> {
        match self.fields.get(field) {
            Some(Value::Number(_)) => Ok(vec![self.require_u64(field)?]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_u64().ok_or_else(|| self.missing(field)))
                .collect(),
            _ => Err(self.missing(field)),
        }
    }

    /// Bitmask field: either a bare integer or, on multi-board hardware, an
    /// array of per-board bytes where board *i* covers bits `8i..8i+8`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::MissingField` if the field is absent or not an
    /// integer/integer-array.
    pub fn require_bitmask(&self, field: &'static str) -> Result<u64> {
        match self.fields.get(field) {
            Some(Value::Number(_)) => self.require_u64(field),
            Some(Value::Array(_)) => {
                let bytes = self.require_u64_array(field)?;
                Ok(bytes
                    .iter()
                    .take(8)
                    .enumerate()
                    .fold(0u64, |mask, (board, byte)| mask | (byte << (8 * board))))
            }
            _ => Err(self.missing(field)),
        }
    }

    fn missing(&self, field: &'static str) -> DeviceError {
        DeviceError::MissingField {
            device: self.device.clone(),
            field,
        }
    }
}

/// Client owning the authenticated request/response cycle to one device.
///
/// Stateless across calls: the password digest is recomputed per request
/// and no reply data is cached.
pub struct DeviceClient {
    config: DeviceConfig,
    client: reqwest::Client,
}

impl DeviceClient {
    /// Create a new device client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should never happen
    /// with default TLS).
    #[must_use]
    pub fn new(config: DeviceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Create a device client with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: DeviceConfig) -> Self {
        Self { config, client }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Perform one authenticated exchange: `GET <base-url>/<keyword>` with
    /// `params` plus the password digest as the query payload.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request cannot be sent or the device answers with a non-2xx
    ///   status (`Transport`)
    /// - The body is not a JSON object (`Decode`)
    /// - The reply's `result` code (default `1` when absent) is not
    ///   success (`Result`)
    pub async fn query(&self, keyword: Keyword, params: &[(&str, String)]) -> Result<Reply> {
        let device = &self.config.name;
        let url = format!("{}/{}", self.config.base_url(), keyword);

        let mut query: Vec<(&str, String)> = params.to_vec();
        query.push(("pw", self.config.password_digest()));

        tracing::debug!(device = %device, keyword = %keyword, "querying device");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| DeviceError::Transport {
                device: device.clone(),
                source,
            })?;

        let body = response.text().await.map_err(|source| DeviceError::Transport {
            device: device.clone(),
            source,
        })?;

        let fields: Map<String, Value> =
            serde_json::from_str(&body).map_err(|e| DeviceError::Decode {
                device: device.clone(),
                detail: e.to_string(),
            })?;

        let code = fields.get("result").and_then(Value::as_u64).unwrap_or(RESULT_SUCCESS);
        if code != RESULT_SUCCESS {
            return Err(DeviceError::Result {
                device: device.clone(),
                code,
            });
        }

        Ok(Reply::new(device, normalize(fields)))
    }
}

/// Collapse every one-element array to its scalar; other values pass
/// through unchanged.
fn normalize(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Array(mut items) if items.len() == 1 => items.remove(0),
                other => other,
            };
            (key, value)
        })
        .collect()
}
