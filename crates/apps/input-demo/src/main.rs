//! Input reader demo
//!
//! Drives the gameplay input reader for a fixed number of simulation steps
//! and logs every event it emits. By default a built-in scripted timeline is
//! replayed; with the `gilrs` feature, `--live` reads a real gamepad.
//!
//! Set `RUST_LOG=debug` to see mode switches and map changes.

mod script;
mod session;

use anyhow::Context;
use clap::Parser;
use devices::{DeviceBackend, DeviceState};
use input::{InputConfig, InputControlMode, InputControls, InputReader, ModeSwitch};
use session::Session;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fixed simulation rate used for live input
const FIXED_STEP: Duration = Duration::from_millis(20);

#[derive(Parser)]
#[command(name = "input-demo")]
#[command(about = "Replay device input through the gameplay input reader")]
struct Args {
    /// Binding configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of fixed steps to run
    #[arg(long, default_value_t = 48)]
    ticks: u64,

    /// Override the configured initial mode (none, gameplay, ui)
    #[arg(long)]
    mode: Option<InputControlMode>,

    /// Read live devices instead of the scripted timeline
    #[arg(long)]
    live: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InputConfig::load(path)
            .with_context(|| format!("loading input config {}", path.display()))?,
        None => InputConfig::default(),
    };
    let initial_mode = args.mode.unwrap_or(config.initial_mode);

    let backend: Box<dyn DeviceBackend> = if args.live {
        devices::create_device_backend()
    } else {
        Box::new(script::demo_backend())
    };
    info!(backend = backend.name(), ticks = args.ticks, %initial_mode, "starting input session");

    let mut reader = InputReader::new(InputControls::from_config(&config));
    reader.change_mode(initial_mode);

    let mut session = Session::new(
        backend,
        DeviceState::with_deadzone(config.stick_deadzone),
        reader,
    );
    for _ in 0..args.ticks {
        session.step();
        if args.live {
            std::thread::sleep(FIXED_STEP);
        }
    }

    let tally = session.finish();
    info!(?tally, "done");
    Ok(())
}
