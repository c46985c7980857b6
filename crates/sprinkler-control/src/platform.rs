//! The host-automation platform seam.
//!
//! The controller never talks to the host platform directly; everything it
//! needs from the host (persisted topology, the active-zone state sink,
//! and the user-visible event log) goes through the [`Platform`] trait.

/// What the zone controller needs from the hosting automation platform.
///
/// Implementations are expected to be cheap: these calls sit on the
/// activation hot path between device commands.
pub trait Platform: Send + Sync {
    /// The persisted comma-joined zone-name string, if discovery has run.
    fn zone_names_joined(&self) -> Option<String>;

    /// The persisted number of active zones, if discovery has run.
    fn num_zones(&self) -> Option<usize>;

    /// Persist a freshly discovered topology.
    fn persist_topology(&self, zone_names_joined: &str, num_zones: usize);

    /// Record the currently active zone: `0` for none, else the 1-based
    /// zone number.
    fn set_active_zone(&self, zone: u32);

    /// Emit an informational line into the platform's event log.
    fn log_info(&self, line: &str);

    /// Emit an error line into the platform's event log.
    fn log_error(&self, line: &str);
}

/// An in-memory [`Platform`] that records everything written to it.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    inner: parking_lot::Mutex<MemoryState>,
}

#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
struct MemoryState {
    zone_names: Option<String>,
    num_zones: Option<usize>,
    active_zone: u32,
    info: Vec<String>,
    errors: Vec<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryPlatform {
    /// A platform with no persisted topology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A platform seeded with an already-discovered topology.
    #[must_use]
    pub fn with_topology(zone_names_joined: &str, num_zones: usize) -> Self {
        let platform = Self::default();
        platform.persist_topology(zone_names_joined, num_zones);
        platform
    }

    /// The recorded active zone.
    #[must_use]
    pub fn active_zone(&self) -> u32 {
        self.inner.lock().active_zone
    }

    /// Every informational line logged so far.
    #[must_use]
    pub fn info_lines(&self) -> Vec<String> {
        self.inner.lock().info.clone()
    }

    /// Every error line logged so far.
    #[must_use]
    pub fn error_lines(&self) -> Vec<String> {
        self.inner.lock().errors.clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Platform for MemoryPlatform {
    fn zone_names_joined(&self) -> Option<String> {
        self.inner.lock().zone_names.clone()
    }

    fn num_zones(&self) -> Option<usize> {
        self.inner.lock().num_zones
    }

    fn persist_topology(&self, zone_names_joined: &str, num_zones: usize) {
        let mut state = self.inner.lock();
        state.zone_names = Some(zone_names_joined.to_string());
        state.num_zones = Some(num_zones);
    }

    fn set_active_zone(&self, zone: u32) {
        self.inner.lock().active_zone = zone;
    }

    fn log_info(&self, line: &str) {
        self.inner.lock().info.push(line.to_string());
    }

    fn log_error(&self, line: &str) {
        self.inner.lock().errors.push(line.to_string());
    }
}
