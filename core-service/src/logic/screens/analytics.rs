//! Analytics Screen - Periodic metric snapshots
//!
//! Snapshot sinh ngay lúc mount rồi refresh theo chu kỳ. Đổi time range
//! sinh snapshot mới và restart interval (chu kỳ đếm lại từ lúc đổi).

use rand::rngs::StdRng;
use serde::Serialize;

use super::{Route, Screen, ScreenContext, ScreenSnapshot};
use crate::logic::analytics::{
    AgentPerformance, AnalyticsSnapshot, ThreatTrend, TimeRange, AGENT_PERFORMANCE, THREAT_TRENDS,
};
use crate::logic::events::{names, Event};
use crate::logic::scheduler::IntervalScheduler;

const REFRESH_TIMER: &str = "analytics-refresh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Refresh;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub snapshot: AnalyticsSnapshot,
    pub time_range: TimeRange,
    /// Snapshots generated since mount
    pub refreshes: u64,
    pub threat_trends: &'static [ThreatTrend],
    pub agent_performance: &'static [AgentPerformance],
}

pub struct AnalyticsScreen {
    scheduler: IntervalScheduler<Refresh>,
    rng: StdRng,
    snapshot: AnalyticsSnapshot,
    time_range: TimeRange,
    refreshes: u64,
}

impl AnalyticsScreen {
    pub fn mount(ctx: ScreenContext) -> Self {
        let mut scheduler = IntervalScheduler::new("analytics", ctx.clock);
        scheduler.register(REFRESH_TIMER, ctx.config.analytics_refresh_ms, Refresh);
        scheduler.start(REFRESH_TIMER);

        let mut screen = Self {
            scheduler,
            rng: ctx.rng,
            snapshot: AnalyticsSnapshot::default(),
            time_range: TimeRange::default(),
            refreshes: 0,
        };
        screen.regenerate();

        log::info!("Analytics screen mounted");
        screen
    }

    fn regenerate(&mut self) {
        self.snapshot = AnalyticsSnapshot::generate(&mut self.rng);
        self.refreshes += 1;
        log::debug!(
            "Analytics refreshed ({}): {} blocked",
            self.time_range,
            self.snapshot.threats_blocked
        );
    }

    /// Returns false if `range` is already selected
    pub fn set_time_range(&mut self, range: TimeRange) -> bool {
        if range == self.time_range {
            return false;
        }

        self.time_range = range;
        self.regenerate();
        self.scheduler.restart(REFRESH_TIMER);
        log::info!("Analytics time range set to {}", range);
        true
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn current(&self) -> AnalyticsSnapshot {
        self.snapshot
    }

    pub fn view(&self) -> AnalyticsView {
        AnalyticsView {
            snapshot: self.snapshot,
            time_range: self.time_range,
            refreshes: self.refreshes,
            threat_trends: &THREAT_TRENDS,
            agent_performance: &AGENT_PERFORMANCE,
        }
    }
}

impl Screen for AnalyticsScreen {
    fn route(&self) -> Route {
        Route::Analytics
    }

    fn poll(&mut self) -> Vec<Event> {
        let fired = self.scheduler.poll();
        if fired.is_empty() {
            return Vec::new();
        }

        for _ in fired {
            self.regenerate();
        }
        vec![self.state_event()]
    }

    fn teardown(&mut self) -> usize {
        self.scheduler.teardown()
    }

    fn state_event(&self) -> Event {
        Event::new(names::ANALYTICS_SNAPSHOT, self.view())
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::Analytics(self.view())
    }

    fn active_timers(&self) -> usize {
        self.scheduler.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::clock::ManualClock;
    use crate::logic::screens::test_context;

    #[test]
    fn test_snapshot_on_mount_and_every_period() {
        let clock = ManualClock::shared(0);
        let mut screen = AnalyticsScreen::mount(test_context(clock.clone(), 2));
        assert_eq!(screen.view().refreshes, 1);
        assert!(screen.current().threats_blocked >= 1_200);

        clock.set(9_999);
        assert!(screen.poll().is_empty());

        clock.set(10_000);
        let events = screen.poll();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, names::ANALYTICS_SNAPSHOT);
        assert_eq!(screen.view().refreshes, 2);

        clock.set(40_000);
        screen.poll();
        assert_eq!(screen.view().refreshes, 5);
    }

    #[test]
    fn test_time_range_restarts_interval() {
        let clock = ManualClock::shared(0);
        let mut screen = AnalyticsScreen::mount(test_context(clock.clone(), 2));

        clock.set(6_000);
        assert!(screen.set_time_range(TimeRange::SevenDays));
        assert_eq!(screen.view().refreshes, 2);
        assert!(!screen.set_time_range(TimeRange::SevenDays));

        clock.set(10_000);
        assert!(screen.poll().is_empty());
        clock.set(16_000);
        assert_eq!(screen.poll().len(), 1);
        assert_eq!(screen.view().time_range, TimeRange::SevenDays);
    }

    #[test]
    fn test_teardown() {
        let clock = ManualClock::shared(0);
        let mut screen = AnalyticsScreen::mount(test_context(clock.clone(), 2));
        assert_eq!(screen.teardown(), 1);
        clock.set(100_000);
        assert!(screen.poll().is_empty());
        assert_eq!(screen.view().refreshes, 1);
    }

    #[test]
    fn test_view_tables() {
        let screen = AnalyticsScreen::mount(test_context(ManualClock::shared(0), 2));
        let json = serde_json::to_value(screen.view()).unwrap();
        assert_eq!(json["timeRange"], "24h");
        assert_eq!(json["threatTrends"].as_array().map(|a| a.len()), Some(5));
        assert_eq!(json["agentPerformance"].as_array().map(|a| a.len()), Some(4));
    }
}
