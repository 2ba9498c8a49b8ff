//! morselamp - Morse code lamp for the Raspberry Pi
//!
//! Reads messages at a terminal prompt and flashes them in Morse on an
//! LED. Messages are 1-11 Latin letters; anything else is rejected before
//! the lamp is touched.

mod app;
mod config;
mod lamp;

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rppal::hal::Delay;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use morselamp_core::{CancelToken, MorseService};
use morselamp_drivers::DelayClock;

use crate::app::{App, Outcome, INVALID_STATUS};
use crate::lamp::Lamp;

#[derive(Parser)]
#[command(name = "morselamp")]
#[command(about = "Flash messages in Morse code on a GPIO lamp")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the built-in morselamp.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log lamp changes instead of driving GPIO
    #[arg(long)]
    simulate: bool,

    /// Send this message once and exit
    message: Option<String>,
}

fn main() -> Result<ExitCode> {
    // RUST_LOG overrides the default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("morselamp=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Ctrl-C/SIGTERM stop the current message between pulses so the lamp
    // is switched off before exit
    let shutdown = Arc::new(CancelToken::new());
    let handler_token = Arc::clone(&shutdown);
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install signal handler")?;

    let (config, source) = config::load(cli.config.as_deref())?;
    info!(
        %source,
        pin = config.lamp.pin,
        inverted = config.lamp.inverted,
        simulate = cli.simulate,
        "morselamp starting"
    );

    let lamp = if cli.simulate {
        Lamp::simulated()
    } else {
        Lamp::gpio(&config.lamp)
            .with_context(|| format!("failed to set up lamp on GPIO {}", config.lamp.pin))?
    };
    if lamp.is_simulated() {
        info!("simulated lamp; set RUST_LOG=morselamp=debug to see each flash");
    }

    let clock = DelayClock::new(Delay::new());
    let mut app = App::new(
        MorseService::with_timing(lamp, clock, config.timing),
        shutdown,
    );

    let result = match cli.message {
        Some(text) => app.submit(&text).map(|outcome| match outcome {
            Outcome::Sent => ExitCode::SUCCESS,
            Outcome::Rejected(_) => {
                eprintln!("{}", INVALID_STATUS);
                ExitCode::FAILURE
            }
            // 128 + SIGINT
            Outcome::Cancelled => ExitCode::from(130),
        }),
        None => app
            .run(BufReader::new(io::stdin()), io::stdout())
            .map(|()| ExitCode::SUCCESS),
    };

    app.shutdown();

    match result {
        Ok(code) => Ok(code),
        Err(e) => {
            error!(error = %e, "morselamp stopped");
            Err(e.into())
        }
    }
}
