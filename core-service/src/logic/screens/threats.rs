//! Threats Screen - Live threat feed
//!
//! Mount sinh một burst ban đầu. Khi real-time bật, mỗi tick thêm một
//! record vào đầu feed. Toggle real-time sinh lại burst mới. Manual refresh
//! thay toàn bộ feed sau một delay.

use serde::Serialize;

use super::{Route, Screen, ScreenContext, ScreenSnapshot};
use crate::logic::events::{names, Event};
use crate::logic::feed::{FeedStatus, RollingFeed};
use crate::logic::scheduler::IntervalScheduler;
use crate::logic::threat::{FeedStats, ThreatGenerator, ThreatRecord};

const TICK_TIMER: &str = "threat-tick";
const REFRESH_TIMER: &str = "manual-refresh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThreatsTask {
    Tick,
    RefreshDone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatsView {
    /// Newest first
    pub threats: Vec<ThreatRecord>,
    pub stats: FeedStats,
    pub feed: FeedStatus,
    pub real_time: bool,
    pub refreshing: bool,
    pub toggle_label: &'static str,
}

pub struct ThreatsScreen {
    scheduler: IntervalScheduler<ThreatsTask>,
    generator: ThreatGenerator,
    feed: RollingFeed<ThreatRecord>,
    burst_size: usize,
    real_time: bool,
    refreshing: bool,
}

impl ThreatsScreen {
    pub fn mount(ctx: ScreenContext) -> Self {
        let mut generator = ThreatGenerator::from_rng(ctx.rng, ctx.clock.clone());
        let mut feed = RollingFeed::new(ctx.config.feed_capacity);
        feed.replace_all(generator.burst(ctx.config.initial_burst));

        let mut scheduler = IntervalScheduler::new("threats", ctx.clock);
        scheduler.register(TICK_TIMER, ctx.config.threat_tick_ms, ThreatsTask::Tick);
        scheduler.register_once(
            REFRESH_TIMER,
            ctx.config.manual_refresh_delay_ms,
            ThreatsTask::RefreshDone,
        );
        scheduler.start(TICK_TIMER);

        log::info!("Threats screen mounted ({} initial records)", feed.len());

        Self {
            scheduler,
            generator,
            feed,
            burst_size: ctx.config.initial_burst,
            real_time: true,
            refreshing: false,
        }
    }

    /// Flip real-time mode; returns the new mode.
    /// Either way the feed is replaced with a fresh burst.
    pub fn toggle_real_time(&mut self) -> bool {
        self.real_time = !self.real_time;
        self.feed.replace_all(self.generator.burst(self.burst_size));
        if self.real_time {
            self.scheduler.start(TICK_TIMER);
        } else {
            self.scheduler.stop(TICK_TIMER);
        }
        log::info!("Real-time mode {}", if self.real_time { "on" } else { "off" });
        self.real_time
    }

    /// Begin a manual refresh. Returns false if one is already running.
    pub fn refresh_now(&mut self) -> bool {
        if self.refreshing {
            log::debug!("Refresh already in progress");
            return false;
        }
        self.refreshing = true;
        self.scheduler.start(REFRESH_TIMER)
    }

    pub fn is_real_time(&self) -> bool {
        self.real_time
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn feed(&self) -> &RollingFeed<ThreatRecord> {
        &self.feed
    }

    pub fn view(&self) -> ThreatsView {
        ThreatsView {
            threats: self.feed.snapshot(),
            stats: FeedStats::from_records(self.feed.iter()),
            feed: self.feed.status(),
            real_time: self.real_time,
            refreshing: self.refreshing,
            toggle_label: if self.real_time {
                "Pause Real-time"
            } else {
                "Start Real-time"
            },
        }
    }
}

impl Screen for ThreatsScreen {
    fn route(&self) -> Route {
        Route::Threats
    }

    fn poll(&mut self) -> Vec<Event> {
        let fired = self.scheduler.poll();
        if fired.is_empty() {
            return Vec::new();
        }

        for f in fired {
            match f.task {
                ThreatsTask::Tick => {
                    let record = self.generator.generate();
                    log::debug!("New threat: {} ({})", record.threat_type, record.severity);
                    self.feed.push(record);
                }
                ThreatsTask::RefreshDone => {
                    self.feed.replace_all(self.generator.burst(self.burst_size));
                    self.refreshing = false;
                    log::info!("Threat feed refreshed");
                }
            }
        }
        vec![self.state_event()]
    }

    fn teardown(&mut self) -> usize {
        self.scheduler.teardown()
    }

    fn state_event(&self) -> Event {
        Event::new(names::THREAT_FEED, self.view())
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::Threats(self.view())
    }

    fn active_timers(&self) -> usize {
        self.scheduler.active_count()
    }
}
