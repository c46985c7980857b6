//! Zone control for sprinkler devices.
//!
//! This crate owns everything above the wire: station discovery, the rain
//! gate, the single-active-zone activation state machine, and status
//! reporting. The wire itself lives in `sprinkler-device`; the hosting
//! automation platform sits behind the [`Platform`] trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────┐
//! │   Hosting platform          │  persisted topology, active-zone state,
//! │   (behind the Platform      │  event log
//! │    trait)                   │
//! └──────────────┬──────────────┘
//!                │
//! ┌──────────────▼──────────────┐
//! │   ZoneController            │  discovery · rain gate · off→delay→on
//! │                             │  sequence · status report
//! └──────────────┬──────────────┘
//!                │
//! ┌──────────────▼──────────────┐
//! │   DeviceClient              │  authenticated HTTP+JSON exchanges
//! │   (sprinkler-device)        │
//! └─────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! - At most one zone is intentionally energized at a time; `zone_on`
//!   switches every other station off before energizing the target.
//! - The settling delay between the off-sweep and the on-command is
//!   mandatory and strictly ordered, but suspends only the calling task.
//! - The rain gate runs before any device mutation and fails open when the
//!   sensor field is absent.
//! - Every public operation catches its own failures and emits exactly one
//!   platform log line; none are fatal to the host.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod controller;
pub mod error;
pub mod platform;
pub mod stations;

pub use controller::{ControlOptions, ZoneController};
pub use error::{ControlError, Result, MIN_FIRMWARE};
pub use platform::Platform;
pub use stations::{
    display_zone_name, join_zone_names, split_zone_names, StationSet, COMMA_SUBSTITUTE,
    ZONE_SEPARATOR,
};

#[cfg(any(test, feature = "test-utils"))]
pub use platform::MemoryPlatform;

// Re-export the device-session surface the controller API exposes.
pub use sprinkler_device::{DeviceClient, DeviceConfig, DeviceError, Keyword};
