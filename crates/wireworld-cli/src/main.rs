//! Driver playing the preset gate circuits in the terminal.

mod telemetry;

use anyhow::Result;
use std::path::Path;
use tokio::signal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};
use wireworld_core::{DriverConfig, Error};
use wireworld_world::{render, Grid, Preset, Simulation, StopReason};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = DriverConfig::load()?;

    telemetry::init_telemetry(&config)?;

    info!("Starting WireWorld driver");
    info!("Step delay: {:?}", config.step_delay());

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    for preset in Preset::ALL {
        tokio::select! {
            result = play(preset, &config) => {
                if let Err(e) = result {
                    error!("Circuit {} aborted: {}", preset.name(), e);
                }
            }
            _ = &mut shutdown => {
                info!("Stopping playback");
                return Ok(());
            }
        }
    }

    info!("All circuits played");
    Ok(())
}

async fn play(preset: Preset, config: &DriverConfig) -> wireworld_core::Result<()> {
    let dir = config.circuits_dir.as_deref().map(Path::new);
    let mut sim = Simulation::new(preset.load(dir)?);
    info!(circuit = preset.name(), cells = sim.grid().len(), "Circuit loaded");

    let mut ticker = interval(config.step_delay());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    if !show(preset, sim.grid()) {
        return Ok(());
    }
    ticker.tick().await;

    let reason = loop {
        if let Some(reason) = sim.try_advance(config.max_generations) {
            break reason;
        }
        if !show(preset, sim.grid()) {
            return Ok(());
        }
        ticker.tick().await;
    };

    let summary = sim.finish(reason);
    match summary.stop_reason {
        StopReason::Idle => info!(
            circuit = preset.name(),
            generations = summary.generations,
            "Circuit idle"
        ),
        StopReason::GenerationLimit => warn!(
            circuit = preset.name(),
            generations = summary.generations,
            "Generation limit reached with current left"
        ),
    }
    Ok(())
}

/// Print a frame; false when the grid cannot be drawn and playback should stop
fn show(preset: Preset, grid: &Grid) -> bool {
    match render(grid) {
        Ok(frame) => {
            println!("PLAYING: {}", preset.description());
            println!("{}", frame);
            true
        }
        Err(Error::EmptyGrid) => {
            warn!(circuit = preset.name(), "Grid has no cells left to draw");
            false
        }
        Err(e) => {
            error!(circuit = preset.name(), "Render failed: {}", e);
            false
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
