//! Home Screen - System status overview
//!
//! "Initializing..." cho tới khi one-shot init chạy xong, sau đó
//! "Active - Monitoring". Health jitter chạy ngay từ lúc mount.

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use super::{Route, Screen, ScreenContext, ScreenSnapshot};
use crate::logic::events::{names, Event};
use crate::logic::scheduler::IntervalScheduler;

const INIT_TIMER: &str = "system-init";
const JITTER_TIMER: &str = "health-jitter";

const INITIAL_HEALTH: f64 = 98.0;
const HEALTH_FLOOR: f64 = 95.0;
/// Initial threatsDetected is drawn from [0, 5)
const INITIAL_THREATS_MAX: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeTask {
    Init,
    Jitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SystemStatus {
    Initializing,
    Active,
}

impl SystemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Initializing => "Initializing...",
            SystemStatus::Active => "Active - Monitoring",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SystemStatus::Initializing => "#FFC107",
            SystemStatus::Active => "#4CAF50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentRosterEntry {
    pub name: &'static str,
    pub state: &'static str,
}

pub const AGENT_ROSTER: [AgentRosterEntry; 3] = [
    AgentRosterEntry { name: "Detection Agent", state: "Active" },
    AgentRosterEntry { name: "Remediation Agent", state: "Active" },
    AgentRosterEntry { name: "Analysis Agent", state: "Learning" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub status: SystemStatus,
    pub status_label: &'static str,
    pub threats_detected: u32,
    pub system_health: f64,
    /// e.g. "97.4%"
    pub health_label: String,
    pub agents: &'static [AgentRosterEntry],
}

pub struct HomeScreen {
    scheduler: IntervalScheduler<HomeTask>,
    rng: StdRng,
    status: SystemStatus,
    threats_detected: u32,
    system_health: f64,
}

impl HomeScreen {
    pub fn mount(ctx: ScreenContext) -> Self {
        let mut scheduler = IntervalScheduler::new("home", ctx.clock);
        scheduler.register_once(INIT_TIMER, ctx.config.home_init_delay_ms, HomeTask::Init);
        scheduler.register(JITTER_TIMER, ctx.config.health_tick_ms, HomeTask::Jitter);
        scheduler.start(INIT_TIMER);
        scheduler.start(JITTER_TIMER);

        log::info!("Home screen mounted");

        Self {
            scheduler,
            rng: ctx.rng,
            status: SystemStatus::Initializing,
            threats_detected: 0,
            system_health: INITIAL_HEALTH,
        }
    }

    fn finish_init(&mut self) {
        self.status = SystemStatus::Active;
        self.threats_detected = self.rng.gen_range(0..INITIAL_THREATS_MAX);
        log::info!("System initialized ({} threats detected)", self.threats_detected);
    }

    fn jitter(&mut self) {
        self.threats_detected += self.rng.gen_range(0..2);
        let delta: f64 = self.rng.gen_range(-1.0..1.0);
        self.system_health = (self.system_health + delta).max(HEALTH_FLOOR);
        log::debug!(
            "Health jitter: {:.1}% / {} threats",
            self.system_health,
            self.threats_detected
        );
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            status: self.status,
            status_label: self.status.label(),
            threats_detected: self.threats_detected,
            system_health: self.system_health,
            health_label: format!("{:.1}%", self.system_health),
            agents: &AGENT_ROSTER,
        }
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn poll(&mut self) -> Vec<Event> {
        let fired = self.scheduler.poll();
        if fired.is_empty() {
            return Vec::new();
        }

        for f in fired {
            match f.task {
                HomeTask::Init => self.finish_init(),
                HomeTask::Jitter => self.jitter(),
            }
        }
        vec![self.state_event()]
    }

    fn teardown(&mut self) -> usize {
        self.scheduler.teardown()
    }

    fn state_event(&self) -> Event {
        Event::new(names::HOME_STATUS, self.view())
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::Home(self.view())
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
    fn test_init_after_delay() {
        let clock = ManualClock::shared(0);
        let mut home = HomeScreen::mount(test_context(clock.clone(), 1));

        assert_eq!(home.view().status_label, "Initializing...");
        assert_eq!(home.view().threats_detected, 0);
        assert_eq!(home.view().health_label, "98.0%");

        clock.set(1_999);
        assert!(home.poll().is_empty());

        clock.set(2_000);
        let events = home.poll();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, names::HOME_STATUS);

        let view = home.view();
        assert_eq!(view.status, SystemStatus::Active);
        assert_eq!(view.status_label, "Active - Monitoring");
        assert!(view.threats_detected < 5);
    }

    #[test]
    fn test_jitter_steps() {
        let clock = ManualClock::shared(0);
        let mut home = HomeScreen::mount(test_context(clock.clone(), 7));

        clock.set(2_000);
        home.poll();

        let mut previous = home.view();
        for step in 1..=50u64 {
            clock.set(step * 5_000);
            home.poll();
            let view = home.view();

            let added = view.threats_detected - previous.threats_detected;
            assert!(added <= 1);
            assert!(view.system_health >= 95.0);
            assert!((view.system_health - previous.system_health).abs() <= 1.0);
            previous = view;
        }
    }

    #[test]
    fn test_health_floored_not_capped() {
        let peaks: Vec<f64> = (0..20u64)
            .map(|seed| {
                let mut home = HomeScreen::mount(test_context(ManualClock::shared(0), seed));
                home.system_health = 99.5;
                (0..200).fold(0.0f64, |peak, _| {
                    home.jitter();
                    assert!(home.system_health >= HEALTH_FLOOR);
                    peak.max(home.system_health)
                })
            })
            .collect();
        assert!(peaks.iter().any(|&peak| peak > 100.0));
    }

    #[test]
    fn test_teardown_cancels_timers() {
        let clock = ManualClock::shared(0);
        let mut home = HomeScreen::mount(test_context(clock.clone(), 3));
        assert_eq!(home.active_timers(), 2);

        assert_eq!(home.teardown(), 2);
        assert_eq!(home.teardown(), 0);
        assert_eq!(home.active_timers(), 0);

        clock.set(60_000);
        assert!(home.poll().is_empty());
        assert_eq!(home.view().status, SystemStatus::Initializing);
    }

    #[test]
    fn test_init_timer_is_spent_after_firing() {
        let clock = ManualClock::shared(0);
        let mut home = HomeScreen::mount(test_context(clock.clone(), 3));

        clock.set(2_000);
        home.poll();
        assert_eq!(home.active_timers(), 1);
        assert_eq!(home.teardown(), 1);
    }
}
