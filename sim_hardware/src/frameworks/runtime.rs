// Framework bootstrap for the simulator runtime.

use crate::domain::{BodyState, Obstacle};
use crate::frameworks::config::RunConfig;
use crate::interface_adapters::protocol::TelemetryFrame;
use crate::interface_adapters::utils::rng::SimRng;
use crate::use_cases::{QuadVehicle, VehicleSetup};

use std::io::Result;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "warn,sim_hardware=info";

fn init_runtime() {
    let _ = dotenvy::dotenv();

    // Simulator events at info; dependencies only when they warn.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "simulator panicked");
    }));
}

/// How a run ended.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub ticks: u64,
    pub final_state: BodyState,
    pub remaining_mah: f64,
    pub interrupted: bool,
}

/// Static course the demo flight is flown in: a wall ahead and a pillar to the north.
pub fn demo_course() -> Vec<Obstacle> {
    vec![
        Obstacle::new(9.5, 10.5, -10.0, 10.0, 0.0, 20.0),
        Obstacle::new(-1.0, 1.0, 6.0, 8.0, 0.0, 30.0),
    ]
}

/// Flies one vehicle at a fixed throttle for the configured number of fixed steps.
///
/// Steps are paced by a tokio interval, but every step integrates exactly `1 / tick_hz`
/// seconds regardless of how late the interval fires.
pub async fn run(config: RunConfig) -> Result<RunSummary> {
    let mut rng = SimRng::from_seed_option(config.seed);
    let setup = VehicleSetup {
        mass: config.mass,
        cell_count: config.cell_count,
        capacity_mah: config.capacity_mah,
        obstacles: demo_course(),
        ..VehicleSetup::default()
    };
    let mut vehicle = QuadVehicle::new(setup, &mut rng)
        .map_err(|e| std::io::Error::other(format!("invalid vehicle setup: {e}")))
        .inspect_err(|e| tracing::error!(error = %e, "vehicle setup failed"))?;

    vehicle.set_throttle_all(config.hover_throttle);
    info!(
        ticks = config.total_ticks(),
        tick_hz = config.tick_hz,
        throttle = config.hover_throttle,
        "flight started"
    );

    let dt = config.dt();
    let telemetry_every = config.telemetry_every.max(1);
    let mut interval = tokio::time::interval(config.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut interrupted = false;
    for _ in 0..config.total_ticks() {
        tokio::select! {
            _ = &mut shutdown => {
                interrupted = true;
                break;
            }
            _ = interval.tick() => {}
        }

        let report = vehicle.tick(dt);
        if report.tick % telemetry_every == 0 {
            let frame = TelemetryFrame::new(&report, vehicle.sample());
            match serde_json::to_string(&frame) {
                Ok(json) => info!(tick = report.tick, telemetry = %json, "telemetry"),
                Err(e) => warn!(tick = report.tick, error = %e, "telemetry encode failed"),
            }
        }
    }

    let summary = RunSummary {
        ticks: vehicle.tick_count(),
        final_state: vehicle.engine().state(),
        remaining_mah: vehicle.battery().remaining_mah(),
        interrupted,
    };
    info!(
        ticks = summary.ticks,
        altitude = summary.final_state.position.z,
        remaining_mah = summary.remaining_mah,
        interrupted,
        "flight finished"
    );
    Ok(summary)
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();
    let config = RunConfig::from_env();
    tracing::debug!(?config, "runtime configured");
    run(config).await.map(|_| ())
}
