//! The zone-activation engine.
//!
//! One [`ZoneController`] drives one device: station discovery, the rain
//! gate, the single-active-zone state machine, and status reporting.
//!
//! # Activation sequence
//!
//! ```text
//! zone_on(n)
//!   ├─ resolve zone name      (missing name degrades to "Unknown")
//!   ├─ rain gate              (before any device mutation)
//!   ├─ off-sweep              (every other station, ascending,
//!   │                          best-effort per station)
//!   ├─ settling delay         (device hardware requirement)
//!   └─ station on, target     (with the configured max run time)
//! ```
//!
//! Zone numbering is the platform's 1-based external numbering; zone *n*
//! maps to device station id *n - 1* (compacted mapping: a controller with
//! a non-contiguous enabled range is addressed through its compacted zone
//! order, since the platform persists only names and count).
//!
//! Operations serialize on an internal per-device lock: the off → delay → on
//! sequence is not atomic at the wire level, so nothing else may talk to the
//! device while it runs. The delay suspends only the calling task.

use std::sync::Arc;
use std::time::Duration;

use sprinkler_device::{DeviceClient, DeviceError, Keyword};
use tokio::sync::Mutex;

use crate::error::{ControlError, Result, MIN_FIRMWARE};
use crate::platform::Platform;
use crate::stations::{display_zone_name, join_zone_names, split_zone_names, StationSet};

/// Pause between de-energizing stations and energizing the target. The
/// device mishandles back-to-back manual station switches without it; this
/// is a hardware requirement, not a tuning knob.
const SETTLE_DELAY: Duration = Duration::from_secs(5);

/// User-facing knobs for one controlled device.
#[derive(Debug, Clone)]
pub struct ControlOptions {
    /// Water even when the rain sensor reports rain.
    pub ignore_rain: bool,
    /// Maximum manual run time handed to the device, in seconds.
    pub max_time_secs: u32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            ignore_rain: false,
            max_time_secs: 600,
        }
    }
}

/// Controls the zones of one device through its [`DeviceClient`], writing
/// state and event-log lines back through the hosting [`Platform`].
///
/// Every public operation catches its own failures and emits exactly one
/// platform log line naming the device and the cause; none of them are
/// fatal to the host.
pub struct ZoneController<P: Platform> {
    client: DeviceClient,
    platform: Arc<P>,
    options: ControlOptions,
    command_lock: Mutex<()>,
    settle_delay: Duration,
}

impl<P: Platform> ZoneController<P> {
    /// Create a controller for one device.
    #[must_use]
    pub fn new(client: DeviceClient, platform: Arc<P>, options: ControlOptions) -> Self {
        Self {
            client,
            platform,
            options,
            command_lock: Mutex::new(()),
            settle_delay: SETTLE_DELAY,
        }
    }

    fn device_name(&self) -> &str {
        &self.client.config().name
    }

    fn not_configured(&self) -> ControlError {
        ControlError::NotConfigured {
            device: self.device_name().to_string(),
        }
    }

    /// Establish communication: discover the station topology and persist
    /// it. Failures are logged and leave the stored configuration
    /// unchanged; the host's own reconnection policy decides when to try
    /// again. The active-zone state is not touched; it mirrors device
    /// reality across reconnects.
    pub async fn establish(&self) {
        let _guard = self.command_lock.lock().await;
        if let Err(e) = self.try_establish().await {
            self.platform
                .log_info(&format!("Unable to start communication: {e}"));
        }
    }

    async fn try_establish(&self) -> Result<()> {
        let stations = self.discover().await?;
        let zone_names = stations.zone_names();
        let joined = join_zone_names(&zone_names);

        self.platform.log_info(&format!("Station names: {joined}"));
        self.platform
            .log_info(&format!("{} stations are active", zone_names.len()));
        self.platform.persist_topology(&joined, zone_names.len());
        Ok(())
    }

    async fn discover(&self) -> Result<StationSet> {
        let options = self.client.query(Keyword::Options, &[]).await?;
        let firmware = options.require_u64("fwv")?;
        // Everything after this point assumes the 2.1.3 station protocol.
        if firmware < MIN_FIRMWARE {
            return Err(ControlError::Firmware {
                device: self.device_name().to_string(),
                found: firmware,
            });
        }

        let reply = self.client.query(Keyword::StationNames, &[]).await?;
        let names = reply.require_str_array("snames")?;
        let disabled = reply.require_bitmask("stn_dis")?;
        Ok(StationSet::new(names, disabled))
    }

    /// Whether the device's rain sensor currently reports rain.
    ///
    /// An absent `rs` field reads as **no rain**: availability of watering
    /// deliberately wins over strict field checking (fail-open).
    ///
    /// # Errors
    ///
    /// Returns an error if the status query itself fails.
    pub async fn has_rain(&self) -> Result<bool> {
        let _guard = self.command_lock.lock().await;
        self.query_rain().await
    }

    async fn query_rain(&self) -> Result<bool> {
        let reply = self.client.query(Keyword::ControllerStatus, &[]).await?;
        Ok(reply.get_u64("rs") == Some(1))
    }

    /// Turn on a single zone (1-based), switching every other station off
    /// first so at most one zone is ever energized.
    pub async fn zone_on(&self, zone: u32) {
        let _guard = self.command_lock.lock().await;
        tracing::debug!(device = %self.device_name(), zone, "starting activation sequence");

        let name = self.zone_display_name(zone);
        if let Err(e) = self.try_zone_on(zone, &name).await {
            self.platform.log_error(&format!(
                "send \"{}\" zone \"{name}\" on failed: {e}",
                self.device_name()
            ));
        }
    }

    async fn try_zone_on(&self, zone: u32, name: &str) -> Result<()> {
        if !self.options.ignore_rain && self.query_rain().await? {
            self.platform.log_info(&format!(
                "Rain detected - cannot water \"{} - {name}\"",
                self.device_name()
            ));
            return Ok(());
        }

        // Force everything else off, even if device state drifted behind
        // our back.
        self.off_sweep(Some(zone)).await?;

        tokio::time::sleep(self.settle_delay).await;

        let sid = i64::from(zone) - 1;
        self.client
            .query(
                Keyword::SetStation,
                &[
                    ("sid", sid.to_string()),
                    ("en", "1".to_string()),
                    ("t", self.options.max_time_secs.to_string()),
                ],
            )
            .await?;

        self.platform
            .log_info(&format!("sent \"{} - {name}\" on", self.device_name()));
        self.platform.set_active_zone(zone);
        Ok(())
    }

    /// Turn every zone off and record the all-off state.
    pub async fn all_zones_off(&self) {
        let _guard = self.command_lock.lock().await;
        match self.off_sweep(None).await {
            Ok(()) => {
                self.platform
                    .log_info(&format!("sent \"{}\" all zones off", self.device_name()));
                self.platform.set_active_zone(0);
            }
            Err(e) => self.platform.log_error(&format!(
                "send \"{}\" all zones off failed: {e}",
                self.device_name()
            )),
        }
    }

    /// Issue "station off" for every station except `skip`'s, in ascending
    /// order. Per-station failures are logged individually and the sweep
    /// keeps going; a zone left stuck on is worse than an incomplete
    /// sweep. The only hard failure is a missing topology.
    async fn off_sweep(&self, skip: Option<u32>) -> Result<()> {
        let count = self.platform.num_zones().ok_or_else(|| self.not_configured())?;
        let skip_station = skip.and_then(|zone| usize::try_from(zone).ok()?.checked_sub(1));

        for station in (0..count).filter(|s| Some(*s) != skip_station) {
            let params = [("sid", station.to_string()), ("en", "0".to_string())];
            if let Err(e) = self.client.query(Keyword::SetStation, &params).await {
                self.platform.log_error(&format!(
                    "send \"{}\" station {station} off failed: {e}",
                    self.device_name()
                ));
            }
        }
        Ok(())
    }

    /// Log the on/off state of every zone.
    pub async fn request_status(&self) {
        let _guard = self.command_lock.lock().await;
        match self.build_status_report().await {
            Ok(lines) => {
                for line in &lines {
                    self.platform.log_info(line);
                }
            }
            Err(e) => self
                .platform
                .log_info(&format!("Unable to get status: {e}")),
        }
    }

    /// Assemble the whole report before emitting anything: a failure
    /// halfway through must not leave a partial report in the log.
    async fn build_status_report(&self) -> Result<Vec<String>> {
        let reply = self.client.query(Keyword::StationStatus, &[]).await?;
        let states = reply.require_u64_array("sn")?;

        let joined = self
            .platform
            .zone_names_joined()
            .ok_or_else(|| self.not_configured())?;
        let count = self.platform.num_zones().ok_or_else(|| self.not_configured())?;
        let names = split_zone_names(&joined);

        let mut lines = Vec::with_capacity(count);
        for index in 0..count {
            let on = *states.get(index).ok_or_else(|| DeviceError::MissingField {
                device: self.device_name().to_string(),
                field: "sn",
            })?;
            let name = names
                .get(index)
                .map(|stored| display_zone_name(stored))
                .ok_or_else(|| self.not_configured())?;
            let state = if on == 1 { "On" } else { "Off" };
            lines.push(format!("\"{name}\": {state}"));
        }
        Ok(lines)
    }

    /// The hardware has no beeper; the request is acknowledged in the log
    /// and nothing else happens.
    pub fn beep(&self) {
        self.platform.log_info(&format!(
            "\"{}\" beep request is not supported",
            self.device_name()
        ));
    }

    fn zone_display_name(&self, zone: u32) -> String {
        self.platform
            .zone_names_joined()
            .and_then(|joined| {
                let names = split_zone_names(&joined);
                let index = usize::try_from(zone).ok()?.checked_sub(1)?;
                names.get(index).map(|stored| display_zone_name(stored))
            })
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryPlatform;
    use serde_json::json;
    use sprinkler_device::DeviceConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FOUR_ZONES: &str = "Front,Back,Side,Drip";

    fn controller(
        server: &MockServer,
        platform: &Arc<MemoryPlatform>,
        options: ControlOptions,
    ) -> ZoneController<MemoryPlatform> {
        let client = DeviceClient::new(DeviceConfig::new("Backyard", server.uri(), "abc"));
        let mut controller = ZoneController::new(client, Arc::clone(platform), options);
        controller.settle_delay = Duration::from_millis(1);
        controller
    }

    async fn mount_json(server: &MockServer, at: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    /// Every `/cm` request seen by the server, in order, as (sid, en, t).
    async fn cm_calls(server: &MockServer) -> Vec<(String, String, Option<String>)> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/cm")
            .map(|request| {
                let mut sid = None;
                let mut en = None;
                let mut t = None;
                for (key, value) in request.url.query_pairs() {
                    match key.as_ref() {
                        "sid" => sid = Some(value.to_string()),
                        "en" => en = Some(value.to_string()),
                        "t" => t = Some(value.to_string()),
                        _ => {}
                    }
                }
                (sid.unwrap(), en.unwrap(), t)
            })
            .collect()
    }

    // -- Discovery ----------------------------------------------------------

    #[tokio::test]
    async fn establish_persists_discovered_topology() {
        let server = MockServer::start().await;
        mount_json(&server, "/jo", json!({ "fwv": [219] })).await;
        mount_json(
            &server,
            "/jn",
            json!({
                "snames": ["Front", "Back, shady", "Side", "Drip"],
                "stn_dis": [4] // station 2 ("Side") disabled
            }),
        )
        .await;

        let platform = Arc::new(MemoryPlatform::new());
        controller(&server, &platform, ControlOptions::default())
            .establish()
            .await;

        assert_eq!(
            platform.zone_names_joined().as_deref(),
            Some("Front,Back| shady,Drip")
        );
        assert_eq!(platform.num_zones(), Some(3));

        let info = platform.info_lines();
        assert!(info.iter().any(|l| l == "Station names: Front,Back| shady,Drip"));
        assert!(info.iter().any(|l| l == "3 stations are active"));
    }

    #[tokio::test]
    async fn establish_rejects_old_firmware() {
        let server = MockServer::start().await;
        mount_json(&server, "/jo", json!({ "fwv": 212 })).await;
        mount_json(&server, "/jn", json!({ "snames": ["x"], "stn_dis": 0 })).await;

        let platform = Arc::new(MemoryPlatform::new());
        controller(&server, &platform, ControlOptions::default())
            .establish()
            .await;

        assert!(platform.zone_names_joined().is_none());
        assert!(platform.num_zones().is_none());

        let info = platform.info_lines();
        assert_eq!(info.len(), 1);
        assert!(info[0].starts_with("Unable to start communication:"));
        assert!(info[0].contains("2.1.3"));
    }

    #[tokio::test]
    async fn establish_accepts_minimum_firmware() {
        let server = MockServer::start().await;
        mount_json(&server, "/jo", json!({ "fwv": 213 })).await;
        mount_json(&server, "/jn", json!({ "snames": ["Front", "Back"], "stn_dis": 0 })).await;

        let platform = Arc::new(MemoryPlatform::new());
        controller(&server, &platform, ControlOptions::default())
            .establish()
            .await;

        assert_eq!(platform.num_zones(), Some(2));
    }

    #[tokio::test]
    async fn establish_logs_failure_and_leaves_config_unchanged() {
        // No mocks mounted: the device answers 404 to everything.
        let server = MockServer::start().await;
        let platform = Arc::new(MemoryPlatform::new());
        controller(&server, &platform, ControlOptions::default())
            .establish()
            .await;

        assert!(platform.zone_names_joined().is_none());
        let info = platform.info_lines();
        assert_eq!(info.len(), 1);
        assert!(info[0].starts_with("Unable to start communication:"));
    }

    // -- Rain gate ----------------------------------------------------------

    #[tokio::test]
    async fn rain_blocks_activation_before_any_mutation() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "rs": 1 })).await;
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        controller(&server, &platform, ControlOptions::default())
            .zone_on(2)
            .await;

        assert!(cm_calls(&server).await.is_empty());
        assert_eq!(platform.active_zone(), 0);
        assert!(platform
            .info_lines()
            .iter()
            .any(|l| l == "Rain detected - cannot water \"Backyard - Back\""));
        assert!(platform.error_lines().is_empty());
    }

    #[tokio::test]
    async fn has_rain_reads_the_sensor_flag() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "rs": 1 })).await;

        let platform = Arc::new(MemoryPlatform::new());
        let controller = controller(&server, &platform, ControlOptions::default());
        assert!(controller.has_rain().await.unwrap());
    }

    #[tokio::test]
    async fn missing_rain_field_fails_open() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "devt": 1_234_567 })).await;

        let platform = Arc::new(MemoryPlatform::new());
        let controller = controller(&server, &platform, ControlOptions::default());
        // Deliberate policy: no field means no rain, watering stays
        // available.
        assert!(!controller.has_rain().await.unwrap());
    }

    #[tokio::test]
    async fn rain_query_failure_aborts_activation() {
        let server = MockServer::start().await;
        // /jc unmocked -> 404; /cm would succeed if reached.
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        controller(&server, &platform, ControlOptions::default())
            .zone_on(2)
            .await;

        assert!(cm_calls(&server).await.is_empty());
        assert_eq!(platform.active_zone(), 0);
        let errors = platform.error_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("send \"Backyard\" zone \"Back\" on failed:"));
    }

    #[tokio::test]
    async fn ignore_rain_skips_the_rain_query() {
        let server = MockServer::start().await;
        // /jc is intentionally unmocked: with ignore_rain the gate must not
        // even be consulted.
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        let options = ControlOptions {
            ignore_rain: true,
            ..ControlOptions::default()
        };
        controller(&server, &platform, options).zone_on(1).await;

        assert_eq!(platform.active_zone(), 1);
        let touched_jc = server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .any(|r| r.url.path() == "/jc");
        assert!(!touched_jc);
    }

    // -- Activation sequence -------------------------------------------------

    #[tokio::test]
    async fn zone_on_sweeps_then_energizes_target() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "rs": 0 })).await;
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        controller(&server, &platform, ControlOptions::default())
            .zone_on(3)
            .await;

        let calls = cm_calls(&server).await;
        assert_eq!(
            calls,
            vec![
                ("0".to_string(), "0".to_string(), None),
                ("1".to_string(), "0".to_string(), None),
                ("3".to_string(), "0".to_string(), None),
                ("2".to_string(), "1".to_string(), Some("600".to_string())),
            ]
        );
        assert_eq!(platform.active_zone(), 3);
        assert!(platform
            .info_lines()
            .iter()
            .any(|l| l == "sent \"Backyard - Side\" on"));
    }

    #[tokio::test]
    async fn zone_on_failure_leaves_state_and_logs_once() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "rs": 0 })).await;
        // The off-sweep succeeds but the final "on" is rejected.
        Mock::given(method("GET"))
            .and(path("/cm"))
            .and(query_param("en", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 48 })))
            .with_priority(1)
            .mount(&server)
            .await;
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        controller(&server, &platform, ControlOptions::default())
            .zone_on(2)
            .await;

        assert_eq!(platform.active_zone(), 0);
        let errors = platform.error_lines();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            "send \"Backyard\" zone \"Back\" on failed: Backyard - Not Permitted"
        );
    }

    #[tokio::test]
    async fn zone_on_without_topology_degrades_to_unknown_name() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "rs": 0 })).await;

        let platform = Arc::new(MemoryPlatform::new());
        controller(&server, &platform, ControlOptions::default())
            .zone_on(2)
            .await;

        assert!(cm_calls(&server).await.is_empty());
        let errors = platform.error_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("send \"Backyard\" zone \"Unknown\" on failed:"));
        assert!(errors[0].contains("no stored zone configuration"));
    }

    #[tokio::test]
    async fn zone_name_with_comma_is_restored_in_logs() {
        let server = MockServer::start().await;
        mount_json(&server, "/jc", json!({ "rs": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology("Front,Back| shady", 2));
        controller(&server, &platform, ControlOptions::default())
            .zone_on(2)
            .await;

        assert!(platform
            .info_lines()
            .iter()
            .any(|l| l == "Rain detected - cannot water \"Backyard - Back, shady\""));
    }

    // -- All zones off --------------------------------------------------------

    #[tokio::test]
    async fn all_zones_off_sweeps_everything_and_confirms() {
        let server = MockServer::start().await;
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        platform.set_active_zone(3);
        controller(&server, &platform, ControlOptions::default())
            .all_zones_off()
            .await;

        let calls = cm_calls(&server).await;
        let stations: Vec<&str> = calls.iter().map(|(sid, _, _)| sid.as_str()).collect();
        assert_eq!(stations, vec!["0", "1", "2", "3"]);
        assert!(calls.iter().all(|(_, en, _)| en == "0"));
        assert_eq!(platform.active_zone(), 0);
        assert!(platform
            .info_lines()
            .iter()
            .any(|l| l == "sent \"Backyard\" all zones off"));
    }

    #[tokio::test]
    async fn per_station_failure_does_not_stop_the_sweep() {
        let server = MockServer::start().await;
        // Station 1 misbehaves; the rest answer normally.
        Mock::given(method("GET"))
            .and(path("/cm"))
            .and(query_param("sid", "1"))
            .respond_with(ResponseTemplate::new(500))
            .with_priority(1)
            .mount(&server)
            .await;
        mount_json(&server, "/cm", json!({ "result": 1 })).await;

        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        controller(&server, &platform, ControlOptions::default())
            .all_zones_off()
            .await;

        // All four stations were attempted despite the failure.
        let calls = cm_calls(&server).await;
        assert_eq!(calls.len(), 4);

        let errors = platform.error_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("send \"Backyard\" station 1 off failed:"));

        // Best-effort sweep still completes the state transition.
        assert_eq!(platform.active_zone(), 0);
        assert!(platform
            .info_lines()
            .iter()
            .any(|l| l == "sent \"Backyard\" all zones off"));
    }

    #[tokio::test]
    async fn all_zones_off_without_topology_logs_failure() {
        let server = MockServer::start().await;
        let platform = Arc::new(MemoryPlatform::new());
        platform.set_active_zone(2);
        controller(&server, &platform, ControlOptions::default())
            .all_zones_off()
            .await;

        assert_eq!(platform.active_zone(), 2); // untouched
        let errors = platform.error_lines();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("send \"Backyard\" all zones off failed:"));
    }

    // -- Status -----------------------------------------------------------------

    #[tokio::test]
    async fn status_reports_every_zone() {
        let server = MockServer::start().await;
        mount_json(&server, "/js", json!({ "sn": [1, 0, 1] })).await;

        let platform = Arc::new(MemoryPlatform::with_topology("Front,Back| shady,Drip", 3));
        controller(&server, &platform, ControlOptions::default())
            .request_status()
            .await;

        assert_eq!(
            platform.info_lines(),
            vec![
                "\"Front\": On".to_string(),
                "\"Back, shady\": Off".to_string(),
                "\"Drip\": On".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn status_failure_abandons_the_whole_report() {
        let server = MockServer::start().await;
        // Three zones persisted but the device only answers for one: the
        // report must not be emitted partially.
        mount_json(&server, "/js", json!({ "sn": [1, 0] })).await;

        let platform = Arc::new(MemoryPlatform::with_topology("Front,Back,Drip", 3));
        controller(&server, &platform, ControlOptions::default())
            .request_status()
            .await;

        let info = platform.info_lines();
        assert_eq!(info.len(), 1);
        assert!(info[0].starts_with("Unable to get status:"));
    }

    #[tokio::test]
    async fn status_transport_failure_is_one_line() {
        let server = MockServer::start().await;
        let platform = Arc::new(MemoryPlatform::with_topology(FOUR_ZONES, 4));
        controller(&server, &platform, ControlOptions::default())
            .request_status()
            .await;

        let info = platform.info_lines();
        assert_eq!(info.len(), 1);
        assert!(info[0].starts_with("Unable to get status:"));
    }

    // -- Beep ---------------------------------------------------------------------

    #[tokio::test]
    async fn beep_is_acknowledged_as_unsupported() {
        let server = MockServer::start().await;
        let platform = Arc::new(MemoryPlatform::new());
        controller(&server, &platform, ControlOptions::default()).beep();

        assert_eq!(
            platform.info_lines(),
            vec!["\"Backyard\" beep request is not supported".to_string()]
        );
    }
}
