//! AutoSecAgent Simulator - Main Entry Point
//!
//! Chạy dashboard trên system clock, poll định kỳ và tự chuyển screen
//! cho tới khi nhận Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};

use autosec_core::api::Dashboard;
use autosec_core::constants::{self, APP_NAME, APP_VERSION};
use autosec_core::logic::analytics::TimeRange;
use autosec_core::logic::clock::SystemClock;
use autosec_core::logic::config::SimulationConfig;
use autosec_core::logic::error::DashboardResult;
use autosec_core::logic::events::LogSink;
use autosec_core::logic::mitigation::CATALOG;
use autosec_core::logic::screens::Route;
use autosec_core::logic::settings::ConfigValue;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{} (live simulation)...", APP_NAME, APP_VERSION);

    let config = SimulationConfig::from_env();
    log::info!(
        "Seed {:#x}, threat tick {}ms, analytics refresh {}ms",
        config.seed,
        config.threat_tick_ms,
        config.analytics_refresh_ms
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(run(config))
}

async fn run(config: SimulationConfig) -> anyhow::Result<()> {
    let poll_every = Duration::from_millis(constants::get_poll_interval_ms());
    let dwell = Duration::from_secs(constants::get_screen_dwell_secs());

    let mut dashboard = Dashboard::new(config, Arc::new(SystemClock), Arc::new(LogSink));

    let mut poll = interval(poll_every);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut cycle = interval_at(Instant::now() + dwell, dwell);
    let mut step = 0usize;

    loop {
        tokio::select! {
            _ = poll.tick() => {
                dashboard.poll();
            }
            _ = cycle.tick() => {
                let next = dashboard.route().next();
                dashboard.navigate(next);
                if let Err(e) = demo_intent(&mut dashboard, step) {
                    log::warn!("Demo intent failed: {}", e);
                }
                step += 1;
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                log::info!("Ctrl-C received, shutting down...");
                break;
            }
        }
    }

    dashboard.shutdown();
    Ok(())
}

/// Simulate one user action on the freshly mounted screen
fn demo_intent(dashboard: &mut Dashboard, step: usize) -> DashboardResult<()> {
    match dashboard.route() {
        Route::Home => {}
        Route::Threats => {
            dashboard.refresh_now()?;
        }
        Route::Mitigation => {
            let strategy = &CATALOG[step % CATALOG.len()];
            dashboard.toggle_details(strategy.id)?;
            dashboard.deploy(strategy.id)?;
        }
        Route::Analytics => {
            let range = TimeRange::ALL[step % TimeRange::ALL.len()];
            dashboard.set_time_range(range.as_str())?;
        }
        Route::Config => {
            let sensitivity = 70 + (step % 30) as i64;
            dashboard.update_agent_field("1", "sensitivity", ConfigValue::Int(sensitivity))?;
            dashboard.save()?;
        }
    }
    Ok(())
}
