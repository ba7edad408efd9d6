//! ORA Simulator - clock, stopwatch and countdown panels for the terminal
//!
//! This is the main entry point for the ora-simulator application.

use std::sync::Arc;
use tokio::{
    io::BufReader,
    sync::{mpsc, watch},
};
use tracing::info;

use ora_simulator::{
    config::Config,
    engine::{Clock, SystemClock},
    presentation::Renderer,
    sensors::OsJitter,
    state::SimulatorState,
    tasks::{display_task, input_task, refresh_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout is the display
    tracing_subscriber::fmt()
        .with_env_filter(format!("ora_simulator={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;

    info!("Starting ora-simulator v1.0.0");
    info!("Configuration: cadences={:?}, output={:?}, clock={:?}",
          config.cadences(), config.output_mode(), config.clock_format());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let utc_offset = *chrono::Local::now().offset();

    let mut state = SimulatorState::new(
        clock,
        utc_offset,
        config.clock_format(),
        Box::new(OsJitter),
        Box::new(OsJitter),
    );

    if let Some((minutes, seconds)) = config.preset()? {
        state.timer.configure_parts(minutes, seconds)?;
        info!("Countdown preset to {}", state.timer.display());
    }

    let (command_tx, command_rx) = mpsc::channel(32);
    let (reply_tx, reply_rx) = mpsc::channel(32);
    let (frame_tx, frame_rx) = watch::channel(state.snapshot());

    let display = tokio::spawn(display_task(
        Renderer::new(config.output_mode()),
        frame_rx,
        reply_rx,
        tokio::io::stdout(),
    ));

    let input = tokio::spawn(input_task(
        BufReader::new(tokio::io::stdin()),
        command_tx,
        reply_tx.clone(),
    ));

    let mut refresh = tokio::spawn(refresh_task(
        state,
        config.cadences(),
        command_rx,
        reply_tx,
        frame_tx,
    ));

    info!("Type 'help' for commands");

    let interrupted = tokio::select! {
        result = &mut refresh => {
            if let Err(e) = result {
                tracing::error!("Refresh task failed: {}", e);
            }
            false
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            true
        }
    };

    // Dropping both tasks closes the channels the display is waiting on.
    refresh.abort();
    input.abort();
    match display.await {
        Ok(Err(e)) => tracing::error!("Display error: {}", e),
        Err(e) => tracing::error!("Display task failed: {}", e),
        Ok(Ok(())) => {}
    }

    info!("Simulator shutdown complete");
    if interrupted {
        // A pending stdin read would otherwise keep the runtime alive.
        std::process::exit(0);
    }
    Ok(())
}
