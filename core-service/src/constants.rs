//! Central Configuration Constants
//!
//! Single source of truth for all simulation defaults.
//! Every timer period and delay the screens use is defined here.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "AutoSecAgent";

/// Default seed for the simulation random sources
pub const DEFAULT_SEED: u64 = 0x5EC0_A6E7;

// ============================================
// Rolling feed
// ============================================

/// Maximum number of threats kept in the live feed
pub const DEFAULT_FEED_CAPACITY: usize = 10;

/// Threats generated on mount and on every manual refresh
pub const DEFAULT_INITIAL_BURST: usize = 5;

// ============================================
// Timer periods (milliseconds)
// ============================================

/// Real-time threat tick
pub const DEFAULT_THREAT_TICK_MS: u64 = 3_000;

/// Home screen health jitter
pub const DEFAULT_HEALTH_TICK_MS: u64 = 5_000;

/// Analytics snapshot refresh
pub const DEFAULT_ANALYTICS_REFRESH_MS: u64 = 10_000;

/// Home screen "Initializing..." phase
pub const DEFAULT_HOME_INIT_DELAY_MS: u64 = 2_000;

/// Simulated latency of a manual feed refresh
pub const DEFAULT_MANUAL_REFRESH_DELAY_MS: u64 = 1_000;

/// Deploying -> Deployed
pub const DEFAULT_DEPLOY_DELAY_MS: u64 = 2_000;

/// Deployed -> Idle
pub const DEFAULT_DEPLOY_RESET_MS: u64 = 3_000;

// ============================================
// Simulator binary
// ============================================

/// How often the binary polls the mounted screen
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// How long the binary stays on each screen before navigating
pub const DEFAULT_SCREEN_DWELL_SECS: u64 = 15;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Read a positive integer from the environment, falling back on anything else
fn env_positive(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Get simulation seed from environment or use default
pub fn get_seed() -> u64 {
    std::env::var("AUTOSEC_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_SEED)
}

/// Get feed capacity from environment or use default
pub fn get_feed_capacity() -> usize {
    env_positive("AUTOSEC_FEED_CAPACITY", DEFAULT_FEED_CAPACITY as u64) as usize
}

/// Get threat tick period from environment or use default
pub fn get_threat_tick_ms() -> u64 {
    env_positive("AUTOSEC_THREAT_TICK_MS", DEFAULT_THREAT_TICK_MS)
}

/// Get health jitter period from environment or use default
pub fn get_health_tick_ms() -> u64 {
    env_positive("AUTOSEC_HEALTH_TICK_MS", DEFAULT_HEALTH_TICK_MS)
}

/// Get analytics refresh period from environment or use default
pub fn get_analytics_refresh_ms() -> u64 {
    env_positive("AUTOSEC_ANALYTICS_REFRESH_MS", DEFAULT_ANALYTICS_REFRESH_MS)
}

/// Get deploy delay from environment or use default
pub fn get_deploy_delay_ms() -> u64 {
    env_positive("AUTOSEC_DEPLOY_DELAY_MS", DEFAULT_DEPLOY_DELAY_MS)
}

/// Get deploy auto-reset delay from environment or use default
pub fn get_deploy_reset_ms() -> u64 {
    env_positive("AUTOSEC_DEPLOY_RESET_MS", DEFAULT_DEPLOY_RESET_MS)
}

/// Get binary poll interval from environment or use default
pub fn get_poll_interval_ms() -> u64 {
    env_positive("AUTOSEC_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)
}

/// Get binary screen dwell time from environment or use default
pub fn get_screen_dwell_secs() -> u64 {
    env_positive("AUTOSEC_SCREEN_DWELL_SECS", DEFAULT_SCREEN_DWELL_SECS)
}
