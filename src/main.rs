//! nmls entry point - lists network devices known to NetworkManager.
//!
//! Exit codes: 0 on a clean run (including zero devices), 1 when the bus or
//! the service is unreachable, 2 when at least one device had to be skipped.

use std::{process, time::Duration};

use clap::Parser;
use nmls::{DeviceScope, DeviceService, NmError, presenter, tracing_config};
use tracing::info;

/// Exit code for a connection- or service-level failure.
const EXIT_CONNECTION: i32 = 1;
/// Exit code when enumeration completed but some devices were skipped.
const EXIT_PARTIAL: i32 = 2;

#[derive(Parser)]
#[command(name = "nmls")]
#[command(about = "List network devices known to NetworkManager")]
struct Cli {
    /// Include unrealized device placeholders (GetAllDevices)
    #[arg(long)]
    all: bool,

    /// Per-call timeout in seconds
    #[arg(long, default_value_t = 25)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = tracing_config::init() {
        eprintln!("failed to initialize logging: {err}");
    }

    match run(&cli).await {
        Ok(skipped) if skipped > 0 => process::exit(EXIT_PARTIAL),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_CONNECTION);
        }
    }
}

/// Runs the enumeration and prints one block or diagnostic per device.
///
/// Returns the number of devices that had to be skipped.
async fn run(cli: &Cli) -> Result<u32, NmError> {
    let service = DeviceService::connect(Duration::from_secs(cli.timeout)).await?;

    if let Ok(version) = service.version().await {
        info!("connected to NetworkManager {version}");
    }

    let scope = if cli.all {
        DeviceScope::All
    } else {
        DeviceScope::Realized
    };

    let mut skipped = 0;
    for report in service.enumerate(scope).await? {
        match report.outcome {
            Ok(record) => {
                for line in presenter::render(&record) {
                    println!("{line}");
                }
            }
            Err(err) => {
                skipped += 1;
                println!("{}", presenter::render_failure(report.path.as_str(), &err));
            }
        }
    }

    Ok(skipped)
}
