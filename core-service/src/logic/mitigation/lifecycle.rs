//! Deployment Lifecycle - Per-strategy timed state machine
//!
//! ```text
//! Idle --deploy()--> Deploying --(deploy delay)--> Deployed --(reset delay)--> Idle
//! ```
//!
//! Transitions are due-times against the injected clock and are applied by
//! `advance()`. They are not cancellable. Lifecycles of different strategies
//! never touch each other.
//!
//! `deploy()` on a strategy that is already Deploying or Deployed is not
//! guarded: the call schedules its own pair of transitions alongside the
//! pending ones.

use std::collections::BTreeMap;

use super::catalog;
use super::types::{DeploymentStatus, Transition};
use crate::logic::clock::SharedClock;
use crate::logic::config::SimulationConfig;
use crate::logic::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone)]
struct PendingTransition {
    strategy_id: String,
    to: DeploymentStatus,
    due_ms: u64,
    seq: u64,
}

pub struct DeploymentTracker {
    clock: SharedClock,
    deploy_delay_ms: u64,
    reset_delay_ms: u64,
    /// Only Deploying / Deployed entries; absence means Idle
    statuses: BTreeMap<String, DeploymentStatus>,
    pending: Vec<PendingTransition>,
    next_seq: u64,
}

impl DeploymentTracker {
    pub fn new(clock: SharedClock, deploy_delay_ms: u64, reset_delay_ms: u64) -> Self {
        Self {
            clock,
            deploy_delay_ms,
            reset_delay_ms,
            statuses: BTreeMap::new(),
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn from_config(clock: SharedClock, config: &SimulationConfig) -> Self {
        Self::new(clock, config.deploy_delay_ms, config.deploy_reset_ms)
    }

    /// Start deploying a catalog strategy
    pub fn deploy(&mut self, strategy_id: &str) -> DashboardResult<Transition> {
        if catalog::find(strategy_id).is_none() {
            log::warn!("Deploy rejected: unknown strategy '{}'", strategy_id);
            return Err(DashboardError::UnknownEntity(strategy_id.to_string()));
        }

        let now = self.clock.now_ms();
        let from = self.status(strategy_id);
        if from != DeploymentStatus::Idle {
            log::warn!(
                "Strategy {} deployed again while {} - scheduling another lifecycle",
                strategy_id,
                from
            );
        }

        self.statuses
            .insert(strategy_id.to_string(), DeploymentStatus::Deploying);

        let deployed_at = now + self.deploy_delay_ms;
        self.schedule(strategy_id, DeploymentStatus::Deployed, deployed_at);
        self.schedule(strategy_id, DeploymentStatus::Idle, deployed_at + self.reset_delay_ms);

        log::info!("Deploying strategy {} (ready at {}ms)", strategy_id, deployed_at);

        Ok(Transition {
            strategy_id: strategy_id.to_string(),
            from,
            to: DeploymentStatus::Deploying,
            at_ms: now,
        })
    }

    fn schedule(&mut self, strategy_id: &str, to: DeploymentStatus, due_ms: u64) {
        self.pending.push(PendingTransition {
            strategy_id: strategy_id.to_string(),
            to,
            due_ms,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Apply every transition due at or before now, in due order.
    /// Returns the transitions that changed a status.
    pub fn advance(&mut self) -> Vec<Transition> {
        let now = self.clock.now_ms();

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due_ms, p.seq));

        let mut applied = Vec::with_capacity(due.len());
        for step in due {
            let from = self.status(&step.strategy_id);
            match step.to {
                DeploymentStatus::Idle => {
                    self.statuses.remove(&step.strategy_id);
                }
                status => {
                    self.statuses.insert(step.strategy_id.clone(), status);
                }
            }

            if from == step.to {
                continue;
            }

            log::debug!("Strategy {}: {} -> {}", step.strategy_id, from, step.to);
            applied.push(Transition {
                strategy_id: step.strategy_id,
                from,
                to: step.to,
                at_ms: step.due_ms,
            });
        }

        applied
    }

    pub fn status(&self, strategy_id: &str) -> DeploymentStatus {
        self.statuses
            .get(strategy_id)
            .copied()
            .unwrap_or(DeploymentStatus::Idle)
    }

    /// Strategies with a live lifecycle, ordered by id
    pub fn active(&self) -> Vec<(String, DeploymentStatus)> {
        self.statuses
            .iter()
            .map(|(id, status)| (id.clone(), *status))
            .collect()
    }

    pub fn has_entry(&self, strategy_id: &str) -> bool {
        self.statuses.contains_key(strategy_id)
    }

    /// Transitions scheduled but not yet applied
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}
