use std::io;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sysinventory::config::Config;
use sysinventory::snapshot;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("sysinventory={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sysinventory v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    let snapshot = match &config.input {
        Some(path) => snapshot::load_from_path(path)?,
        None => snapshot::load_from_reader(io::stdin().lock())?,
    };

    if snapshot.systems.is_empty() && snapshot.monitors.is_empty() {
        warn!("Snapshot contains no systems or monitors");
    }

    for system in &snapshot.systems {
        let version = system
            .version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        info!(
            "{}: {} {} ({}), {} disk(s)",
            system.computer_name,
            system.name,
            version,
            system.manufacturer,
            system.disks.len()
        );

        for disk in &system.disks {
            info!("  {}", disk);
        }
    }

    for monitor in &snapshot.monitors {
        info!(
            computer = monitor.computer_name.as_deref().unwrap_or("-"),
            serial = monitor.monitor_serial.as_deref().unwrap_or("-"),
            model = monitor.monitor_type.as_deref().unwrap_or("-"),
            "Monitor"
        );
    }

    Ok(())
}
