//! Simulation Configuration
//!
//! Timer periods, delays and sizes used by every screen.
//! Defaults come from `constants`; `from_env` applies overrides.

use serde::{Deserialize, Serialize};

use crate::constants::{self, *};

/// Runtime configuration for the dashboard simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for every random source the dashboard hands out
    pub seed: u64,
    /// Live feed capacity
    pub feed_capacity: usize,
    /// Records generated on mount and on manual refresh
    pub initial_burst: usize,
    pub threat_tick_ms: u64,
    pub health_tick_ms: u64,
    pub analytics_refresh_ms: u64,
    pub home_init_delay_ms: u64,
    pub manual_refresh_delay_ms: u64,
    /// Deploying -> Deployed
    pub deploy_delay_ms: u64,
    /// Deployed -> Idle
    pub deploy_reset_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            feed_capacity: DEFAULT_FEED_CAPACITY,
            initial_burst: DEFAULT_INITIAL_BURST,
            threat_tick_ms: DEFAULT_THREAT_TICK_MS,
            health_tick_ms: DEFAULT_HEALTH_TICK_MS,
            analytics_refresh_ms: DEFAULT_ANALYTICS_REFRESH_MS,
            home_init_delay_ms: DEFAULT_HOME_INIT_DELAY_MS,
            manual_refresh_delay_ms: DEFAULT_MANUAL_REFRESH_DELAY_MS,
            deploy_delay_ms: DEFAULT_DEPLOY_DELAY_MS,
            deploy_reset_ms: DEFAULT_DEPLOY_RESET_MS,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            seed: constants::get_seed(),
            feed_capacity: constants::get_feed_capacity(),
            threat_tick_ms: constants::get_threat_tick_ms(),
            health_tick_ms: constants::get_health_tick_ms(),
            analytics_refresh_ms: constants::get_analytics_refresh_ms(),
            deploy_delay_ms: constants::get_deploy_delay_ms(),
            deploy_reset_ms: constants::get_deploy_reset_ms(),
            ..Default::default()
        }
    }

    /// Same defaults with a pinned seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
