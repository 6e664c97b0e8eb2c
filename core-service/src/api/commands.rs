//! Dashboard Commands - API cho view layer
//!
//! `Dashboard` giữ đúng một screen đang mount. Navigation luôn teardown
//! screen cũ (cancel timers) TRƯỚC khi mount screen mới. Command gửi tới
//! screen không được mount trả về `ScreenNotMounted`.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::logic::analytics::TimeRange;
use crate::logic::clock::SharedClock;
use crate::logic::config::SimulationConfig;
use crate::logic::error::{DashboardError, DashboardResult};
use crate::logic::events::{names, Event, EventSink};
use crate::logic::mitigation::Transition;
use crate::logic::screens::{
    AnalyticsScreen, ConfigScreen, HomeScreen, MitigationScreen, Route, Screen, ScreenContext,
    ScreenSnapshot, ThreatsScreen,
};
use crate::logic::settings::{ConfigTestReport, ConfigValue, SaveReceipt};

// ============================================================================
// MOUNTED SCREEN
// ============================================================================

enum MountedScreen {
    Home(HomeScreen),
    Threats(ThreatsScreen),
    Mitigation(MitigationScreen),
    Analytics(AnalyticsScreen),
    Config(ConfigScreen),
}

impl MountedScreen {
    fn mount(route: Route, ctx: ScreenContext) -> Self {
        match route {
            Route::Home => MountedScreen::Home(HomeScreen::mount(ctx)),
            Route::Threats => MountedScreen::Threats(ThreatsScreen::mount(ctx)),
            Route::Mitigation => MountedScreen::Mitigation(MitigationScreen::mount(ctx)),
            Route::Analytics => MountedScreen::Analytics(AnalyticsScreen::mount(ctx)),
            Route::Config => MountedScreen::Config(ConfigScreen::mount(ctx)),
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            MountedScreen::Home(s) => s,
            MountedScreen::Threats(s) => s,
            MountedScreen::Mitigation(s) => s,
            MountedScreen::Analytics(s) => s,
            MountedScreen::Config(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            MountedScreen::Home(s) => s,
            MountedScreen::Threats(s) => s,
            MountedScreen::Mitigation(s) => s,
            MountedScreen::Analytics(s) => s,
            MountedScreen::Config(s) => s,
        }
    }
}

/// Payload of `navigation:mounted`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationInfo {
    pub route: Route,
    pub previous: Option<Route>,
    /// Timers cancelled when the previous screen was torn down
    pub cancelled_timers: usize,
    pub at_ms: u64,
}

// ============================================================================
// DASHBOARD
// ============================================================================

pub struct Dashboard {
    clock: SharedClock,
    config: SimulationConfig,
    /// Hands out one seed per mount
    seeder: StdRng,
    sink: Arc<dyn EventSink>,
    screen: MountedScreen,
    mounts: u64,
}

impl Dashboard {
    /// Create the dashboard with the home screen mounted
    pub fn new(config: SimulationConfig, clock: SharedClock, sink: Arc<dyn EventSink>) -> Self {
        let mut seeder = StdRng::seed_from_u64(config.seed);
        let ctx = ScreenContext {
            clock: clock.clone(),
            config: config.clone(),
            rng: StdRng::seed_from_u64(seeder.gen()),
        };
        let screen = MountedScreen::mount(Route::Home, ctx);

        let dashboard = Self {
            clock,
            config,
            seeder,
            sink,
            screen,
            mounts: 1,
        };
        dashboard.announce(None, 0);
        dashboard
    }

    fn context(&mut self) -> ScreenContext {
        ScreenContext {
            clock: self.clock.clone(),
            config: self.config.clone(),
            rng: StdRng::seed_from_u64(self.seeder.gen()),
        }
    }

    fn announce(&self, previous: Option<Route>, cancelled_timers: usize) {
        let info = NavigationInfo {
            route: self.route(),
            previous,
            cancelled_timers,
            at_ms: self.clock.now_ms(),
        };
        self.sink.emit(&Event::new(names::NAVIGATION_MOUNTED, info));
        self.sink.emit(&self.screen.as_screen().state_event());
    }

    /// Tear down the current screen, then mount `route`.
    /// Navigating to the mounted route remounts it from scratch.
    /// Returns the number of timers the old screen had armed.
    pub fn navigate(&mut self, route: Route) -> usize {
        let previous = self.route();
        let cancelled = self.screen.as_screen_mut().teardown();

        let ctx = self.context();
        self.screen = MountedScreen::mount(route, ctx);
        self.mounts += 1;

        log::info!("Navigated {} -> {} ({} timer(s) cancelled)", previous, route, cancelled);
        self.announce(Some(previous), cancelled);
        cancelled
    }

    /// Dispatch everything due on the mounted screen.
    /// Returns the number of events emitted.
    pub fn poll(&mut self) -> usize {
        let events = self.screen.as_screen_mut().poll();
        self.sink.emit_all(&events);
        events.len()
    }

    /// Tear down the mounted screen
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self.screen.as_screen_mut().teardown();
        log::info!("Dashboard shut down ({} timer(s) cancelled)", cancelled);
        cancelled
    }

    pub fn route(&self) -> Route {
        self.screen.as_screen().route()
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        self.screen.as_screen().snapshot()
    }

    pub fn active_timers(&self) -> usize {
        self.screen.as_screen().active_timers()
    }

    /// Screens mounted so far, including the initial home screen
    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    fn not_mounted(&self, expected: Route) -> DashboardError {
        let err = DashboardError::ScreenNotMounted {
            expected,
            active: self.route(),
        };
        log::warn!("{}", err);
        err
    }

    fn emit(&self, event: Event) {
        self.sink.emit(&event);
    }

    // ========================================================================
    // THREATS
    // ========================================================================

    /// Returns the new real-time mode
    pub fn toggle_real_time(&mut self) -> DashboardResult<bool> {
        let MountedScreen::Threats(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Threats));
        };
        let enabled = screen.toggle_real_time();
        let event = screen.state_event();
        self.emit(event);
        Ok(enabled)
    }

    /// Returns false if a refresh was already running
    pub fn refresh_now(&mut self) -> DashboardResult<bool> {
        let MountedScreen::Threats(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Threats));
        };
        let started = screen.refresh_now();
        let event = screen.state_event();
        self.emit(event);
        Ok(started)
    }

    // ========================================================================
    // MITIGATION
    // ========================================================================

    pub fn deploy(&mut self, strategy_id: &str) -> DashboardResult<Transition> {
        let MountedScreen::Mitigation(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Mitigation));
        };
        let (transition, event) = screen.deploy(strategy_id)?;
        self.emit(event);
        Ok(transition)
    }

    pub fn toggle_details(&mut self, strategy_id: &str) -> DashboardResult<Option<String>> {
        let MountedScreen::Mitigation(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Mitigation));
        };
        screen.toggle_details(strategy_id)
    }

    // ========================================================================
    // ANALYTICS
    // ========================================================================

    /// `range` is one of "1h", "24h", "7d", "30d"
    pub fn set_time_range(&mut self, range: &str) -> DashboardResult<bool> {
        let parsed = TimeRange::parse(range).ok_or_else(|| {
            DashboardError::invalid_value(
                "timeRange",
                format!("expected 1h, 24h, 7d or 30d, got '{}'", range),
            )
        })?;

        let MountedScreen::Analytics(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Analytics));
        };
        let changed = screen.set_time_range(parsed);
        if changed {
            let event = screen.state_event();
            self.emit(event);
        }
        Ok(changed)
    }

    // ========================================================================
    // CONFIG
    // ========================================================================

    pub fn update_agent_field(
        &mut self,
        agent_id: &str,
        field: &str,
        value: ConfigValue,
    ) -> DashboardResult<()> {
        let MountedScreen::Config(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Config));
        };
        let event = screen.update_agent_field(agent_id, field, value)?;
        self.emit(event);
        Ok(())
    }

    pub fn update_system_setting(&mut self, name: &str, value: ConfigValue) -> DashboardResult<()> {
        let MountedScreen::Config(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Config));
        };
        let event = screen.update_system_setting(name, value)?;
        self.emit(event);
        Ok(())
    }

    pub fn save(&mut self) -> DashboardResult<SaveReceipt> {
        let MountedScreen::Config(screen) = &self.screen else {
            return Err(self.not_mounted(Route::Config));
        };
        let (receipt, event) = screen.save();
        self.emit(event);
        Ok(receipt)
    }

    pub fn reset(&mut self) -> DashboardResult<()> {
        let MountedScreen::Config(screen) = &mut self.screen else {
            return Err(self.not_mounted(Route::Config));
        };
        let event = screen.reset();
        self.emit(event);
        Ok(())
    }

    pub fn test_configuration(&self) -> DashboardResult<ConfigTestReport> {
        let MountedScreen::Config(screen) = &self.screen else {
            return Err(self.not_mounted(Route::Config));
        };
        Ok(screen.test_configuration())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.screen.as_screen_mut().teardown();
    }
}
