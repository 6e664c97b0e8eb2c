//! Interval Scheduler - Named timers per screen
//!
//! Each screen owns one scheduler. Timers are registered by name with a task
//! value; `poll()` reads the injected clock and returns the tasks that came
//! due, in due-time order, for the owner to dispatch.
//!
//! ## Lifecycle
//! - `register` / `register_once` create a stopped timer
//! - `start` arms it relative to "now", `stop` disarms it
//! - `teardown` cancels every armed timer exactly once and disables the
//!   scheduler; it also runs on drop
//! - after a long gap (host suspend) a periodic timer fires at most
//!   `MAX_CATCH_UP` times per poll, then skips ahead to its next slot

use crate::logic::clock::SharedClock;

/// Firings per periodic timer in a single `poll()`
pub const MAX_CATCH_UP: usize = 32;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Re-arms itself after every firing
    Periodic,
    /// Fires once, then stays registered but stopped
    Once,
}

/// One firing returned by `poll()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<T> {
    pub name: &'static str,
    pub task: T,
    pub due_ms: u64,
}

#[derive(Debug)]
struct Timer<T> {
    name: &'static str,
    kind: TimerKind,
    period_ms: u64,
    task: T,
    next_due: Option<u64>,
}

impl<T> Timer<T> {
    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

pub struct IntervalScheduler<T: Copy> {
    owner: &'static str,
    clock: SharedClock,
    timers: Vec<Timer<T>>,
    cancelled: u64,
    torn_down: bool,
}

impl<T: Copy> IntervalScheduler<T> {
    pub fn new(owner: &'static str, clock: SharedClock) -> Self {
        Self {
            owner,
            clock,
            timers: Vec::new(),
            cancelled: 0,
            torn_down: false,
        }
    }

    /// Register a periodic timer (stopped). Re-registering a name replaces it.
    pub fn register(&mut self, name: &'static str, period_ms: u64, task: T) {
        self.insert(name, TimerKind::Periodic, period_ms, task);
    }

    /// Register a one-shot timer (stopped)
    pub fn register_once(&mut self, name: &'static str, delay_ms: u64, task: T) {
        self.insert(name, TimerKind::Once, delay_ms, task);
    }

    fn insert(&mut self, name: &'static str, kind: TimerKind, period_ms: u64, task: T) {
        self.stop(name);
        self.timers.retain(|t| t.name != name);
        self.timers.push(Timer {
            name,
            kind,
            period_ms: period_ms.max(1),
            task,
            next_due: None,
        });
    }

    /// Arm a timer to fire one period from now.
    /// Returns false if unknown, already armed, or the scheduler is torn down.
    pub fn start(&mut self, name: &'static str) -> bool {
        if self.torn_down {
            log::warn!("[{}] start('{}') after teardown ignored", self.owner, name);
            return false;
        }

        let now = self.clock.now_ms();
        match self.timers.iter_mut().find(|t| t.name == name) {
            Some(timer) if !timer.is_armed() => {
                timer.next_due = Some(now + timer.period_ms);
                log::debug!("[{}] timer '{}' armed ({}ms)", self.owner, name, timer.period_ms);
                true
            }
            Some(_) => false,
            None => {
                log::warn!("[{}] start('{}'): no such timer", self.owner, name);
                false
            }
        }
    }

    /// Disarm a timer. Returns true if it was armed.
    pub fn stop(&mut self, name: &'static str) -> bool {
        let Some(timer) = self.timers.iter_mut().find(|t| t.name == name) else {
            return false;
        };

        if timer.next_due.take().is_some() {
            self.cancelled += 1;
            log::debug!("[{}] timer '{}' cancelled", self.owner, name);
            true
        } else {
            false
        }
    }

    /// Stop then start, so the next firing is one full period from now
    pub fn restart(&mut self, name: &'static str) -> bool {
        self.stop(name);
        self.start(name)
    }

    /// Collect every firing due at or before the current clock reading.
    /// Overdue periodic timers catch up one period at a time, up to
    /// `MAX_CATCH_UP`; the remaining missed periods are skipped.
    pub fn poll(&mut self) -> Vec<Fired<T>> {
        if self.torn_down {
            return Vec::new();
        }

        let now = self.clock.now_ms();
        let mut fired = Vec::new();

        for (index, timer) in self.timers.iter_mut().enumerate() {
            let mut count = 0;
            while let Some(due) = timer.next_due {
                if due > now {
                    break;
                }
                if count == MAX_CATCH_UP {
                    let missed = (now - due) / timer.period_ms + 1;
                    timer.next_due = Some(due + missed * timer.period_ms);
                    log::warn!(
                        "[{}] timer '{}' skipped {} missed period(s)",
                        self.owner,
                        timer.name,
                        missed
                    );
                    break;
                }
                count += 1;

                fired.push((index, Fired {
                    name: timer.name,
                    task: timer.task,
                    due_ms: due,
                }));

                timer.next_due = match timer.kind {
                    TimerKind::Periodic => Some(due + timer.period_ms),
                    TimerKind::Once => None,
                };
            }
        }

        // Registration order breaks ties between timers due at the same instant
        fired.sort_by_key(|(index, f)| (f.due_ms, *index));
        fired.into_iter().map(|(_, f)| f).collect()
    }

    /// Cancel every armed timer and disable the scheduler.
    /// Returns how many timers were cancelled by this call; repeated calls return 0.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;

        let mut count = 0;
        for timer in self.timers.iter_mut() {
            if timer.next_due.take().is_some() {
                count += 1;
            }
        }
        self.cancelled += count as u64;

        log::info!("[{}] teardown: {} timer(s) cancelled", self.owner, count);
        count
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.timers.iter().any(|t| t.name == name && t.is_armed())
    }

    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|t| t.is_armed()).count()
    }

    /// Total cancellations over the scheduler's life (stops + teardown)
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }

    /// Next due time of an armed timer
    pub fn next_due(&self, name: &str) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.name == name)
            .and_then(|t| t.next_due)
    }
}

impl<T: Copy> Drop for IntervalScheduler<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ============================================================================
// TESTS
// ============================================================================
