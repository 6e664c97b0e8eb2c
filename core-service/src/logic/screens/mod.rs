//! Screens Module
//!
//! Mỗi screen sở hữu state + scheduler riêng. Không có shared mutable state
//! giữa các screen; dashboard chỉ mount đúng một screen tại một thời điểm.
//!
//! ## Structure
//! - `home`: System status with init one-shot and health jitter
//! - `threats`: Live threat feed with real-time ticks and manual refresh
//! - `mitigation`: Strategy catalog and deployment lifecycles
//! - `analytics`: Periodic metric snapshots and time range selector
//! - `config`: Agent and system settings editor

pub mod home;
pub mod threats;
pub mod mitigation;
pub mod analytics;
pub mod config;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::logic::clock::SharedClock;
use crate::logic::config::SimulationConfig;
use crate::logic::events::Event;

pub use analytics::{AnalyticsScreen, AnalyticsView};
pub use config::{ConfigScreen, ConfigView};
pub use home::{HomeScreen, HomeView, SystemStatus, AGENT_ROSTER};
pub use mitigation::{MitigationScreen, MitigationView, StrategyView};
pub use threats::{ThreatsScreen, ThreatsView};

// ============================================================================
// ROUTE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Threats,
    Mitigation,
    Analytics,
    Config,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Threats,
        Route::Mitigation,
        Route::Analytics,
        Route::Config,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Threats => "threats",
            Route::Mitigation => "mitigation",
            Route::Analytics => "analytics",
            Route::Config => "config",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim_start_matches('/');
        if name.is_empty() || name == "index" {
            return Some(Route::Home);
        }
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Next route in display order, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCREEN CONTRACT
// ============================================================================

/// Everything a screen needs at mount time
pub struct ScreenContext {
    pub clock: SharedClock,
    pub config: SimulationConfig,
    /// Screen-private random source
    pub rng: StdRng,
}

pub trait Screen {
    fn route(&self) -> Route;

    /// Dispatch every timer or transition due at the current clock reading
    fn poll(&mut self) -> Vec<Event>;

    /// Cancel every armed timer. Idempotent.
    fn teardown(&mut self) -> usize;

    /// Event carrying the current view state
    fn state_event(&self) -> Event;

    fn snapshot(&self) -> ScreenSnapshot;

    fn active_timers(&self) -> usize;
}

/// Read-only view of whichever screen is mounted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "route", content = "state", rename_all = "lowercase")]
pub enum ScreenSnapshot {
    Home(HomeView),
    Threats(ThreatsView),
    Mitigation(MitigationView),
    Analytics(AnalyticsView),
    Config(ConfigView),
}

impl ScreenSnapshot {
    pub fn route(&self) -> Route {
        match self {
            ScreenSnapshot::Home(_) => Route::Home,
            ScreenSnapshot::Threats(_) => Route::Threats,
            ScreenSnapshot::Mitigation(_) => Route::Mitigation,
            ScreenSnapshot::Analytics(_) => Route::Analytics,
            ScreenSnapshot::Config(_) => Route::Config,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_context(clock: SharedClock, seed: u64) -> ScreenContext {
    use rand::SeedableRng;

    ScreenContext {
        clock,
        config: SimulationConfig::with_seed(seed),
        rng: StdRng::seed_from_u64(seed),
    }
}
