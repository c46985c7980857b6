//! Station topology: the disabled-station bitmask and the zone-name codec.
//!
//! The device reports every station it has, enabled or not; a set bit in
//! the disabled mask marks a station as unavailable. The platform persists
//! the active names as one comma-joined string, so literal commas inside a
//! name are substituted with a reserved character before joining.

/// Separator between zone names in the persisted joined string.
pub const ZONE_SEPARATOR: char = ',';

/// Substitute for a literal comma inside a single zone name.
pub const COMMA_SUBSTITUTE: char = '|';

/// The station topology reported by one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSet {
    names: Vec<String>,
    disabled: u64,
}

impl StationSet {
    /// Build a station set from the firmware-reported name list and
    /// disabled bitmask.
    #[must_use]
    pub fn new(names: Vec<String>, disabled: u64) -> Self {
        Self { names, disabled }
    }

    /// Total number of stations, enabled or not.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.names.len()
    }

    /// Whether station `index` is enabled. Bit `index` set means disabled.
    #[must_use]
    pub fn is_enabled(&self, index: usize) -> bool {
        u32::try_from(index)
            .ok()
            .and_then(|i| self.disabled.checked_shr(i))
            .map_or(0, |shifted| shifted & 1)
            == 0
    }

    /// Indices of enabled stations, ascending.
    #[must_use]
    pub fn active_indices(&self) -> Vec<usize> {
        (0..self.names.len()).filter(|&i| self.is_enabled(i)).collect()
    }

    /// Names of enabled stations, ascending, with literal commas replaced
    /// by [`COMMA_SUBSTITUTE`] so the list survives comma-joining.
    #[must_use]
    pub fn zone_names(&self) -> Vec<String> {
        self.active_indices()
            .into_iter()
            .map(|i| self.names[i].replace(ZONE_SEPARATOR, &COMMA_SUBSTITUTE.to_string()))
            .collect()
    }
}

/// Join substituted zone names into the persisted single-string form.
#[must_use]
pub fn join_zone_names(names: &[String]) -> String {
    names.join(&ZONE_SEPARATOR.to_string())
}

/// Split the persisted single-string form back into substituted names.
#[must_use]
pub fn split_zone_names(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(ZONE_SEPARATOR).map(str::to_owned).collect()
}

/// Restore a stored zone name to its display form (substitute back to a
/// comma).
#[must_use]
pub fn display_zone_name(stored: &str) -> String {
    stored.replace(COMMA_SUBSTITUTE, &ZONE_SEPARATOR.to_string())
}
