//! `sprinklerctl` - one-shot command-line control of a sprinkler device.
//!
//! Each invocation establishes communication with the device (station
//! discovery) and then runs a single operation against it. Event-log lines
//! that a hosting automation platform would capture are printed to stdout.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use parking_lot::Mutex;

use sprinkler_control::{
    ControlOptions, DeviceClient, DeviceConfig, Platform, ZoneController,
};

/// Command-line control of a sprinkler device.
#[derive(Parser, Debug)]
#[command(name = "sprinklerctl")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Device address: host, host:port, or full URL.
    #[arg(long, env = "SPRINKLER_ADDRESS")]
    address: String,

    /// Device password.
    #[arg(long, env = "SPRINKLER_PASSWORD")]
    password: String,

    /// Display name used in log lines.
    #[arg(long, default_value = "OpenSprinkler")]
    name: String,

    /// Water even when the rain sensor reports rain.
    #[arg(long)]
    ignore_rain: bool,

    /// Maximum manual run time, in seconds.
    #[arg(long, default_value_t = 600)]
    max_time: u32,

    /// Enable debug logging.
    #[arg(long, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover active stations and persist the zone list.
    Discover,
    /// Turn one zone on (1-based), switching every other zone off first.
    On {
        /// The zone to energize.
        zone: u32,
    },
    /// Turn every zone off.
    Off,
    /// Report the on/off state of every zone.
    Status,
    /// Check the rain sensor.
    Rain,
    /// Ask the device to beep.
    Beep,
}

/// A [`Platform`] for one-shot runs: topology lives in memory and event-log
/// lines go straight to the console.
#[derive(Default)]
struct ConsolePlatform {
    topology: Mutex<Option<(String, usize)>>,
    active_zone: Mutex<u32>,
}

impl ConsolePlatform {
    fn active_zone(&self) -> u32 {
        *self.active_zone.lock()
    }
}

impl Platform for ConsolePlatform {
    fn zone_names_joined(&self) -> Option<String> {
        self.topology.lock().as_ref().map(|(joined, _)| joined.clone())
    }

    fn num_zones(&self) -> Option<usize> {
        self.topology.lock().as_ref().map(|&(_, count)| count)
    }

    fn persist_topology(&self, zone_names_joined: &str, num_zones: usize) {
        *self.topology.lock() = Some((zone_names_joined.to_string(), num_zones));
    }

    fn set_active_zone(&self, zone: u32) {
        tracing::debug!(zone, "active zone updated");
        *self.active_zone.lock() = zone;
    }

    fn log_info(&self, line: &str) {
        println!("{line}");
    }

    fn log_error(&self, line: &str) {
        eprintln!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter("sprinkler_device=debug,sprinkler_control=debug,warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = DeviceConfig::new(&args.name, &args.address, &args.password);
    let client = DeviceClient::new(config);
    let platform = Arc::new(ConsolePlatform::default());
    let options = ControlOptions {
        ignore_rain: args.ignore_rain,
        max_time_secs: args.max_time,
    };
    let controller = ZoneController::new(client, Arc::clone(&platform), options);

    match args.command {
        Command::Discover => controller.establish().await,
        Command::On { zone } => {
            controller.establish().await;
            controller.zone_on(zone).await;
            println!("active zone: {}", platform.active_zone());
        }
        Command::Off => {
            controller.establish().await;
            controller.all_zones_off().await;
        }
        Command::Status => {
            controller.establish().await;
            controller.request_status().await;
        }
        Command::Rain => {
            if controller.has_rain().await? {
                println!("rain detected");
            } else {
                println!("no rain");
            }
        }
        Command::Beep => controller.beep(),
    }

    Ok(())
}
