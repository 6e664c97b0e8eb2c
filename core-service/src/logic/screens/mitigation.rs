//! Mitigation Screen - Strategy catalog and deploy buttons
//!
//! Screen này không có interval timer. Deploy lifecycle chạy trên
//! `DeploymentTracker`; transition nào còn pending khi unmount thì bị bỏ.

use serde::Serialize;

use super::{Route, Screen, ScreenContext, ScreenSnapshot};
use crate::logic::error::{DashboardError, DashboardResult};
use crate::logic::events::{names, Event};
use crate::logic::mitigation::{
    catalog, ColorClass, DeploymentStatus, DeploymentTracker, MitigationStrategy, RlAgentStatus,
    Transition, CATALOG, RL_AGENT,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyView {
    pub strategy: &'static MitigationStrategy,
    pub status: DeploymentStatus,
    pub button_label: &'static str,
    pub effectiveness_class: ColorClass,
    pub automation_class: ColorClass,
    /// Details panel open
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationView {
    pub strategies: Vec<StrategyView>,
    pub selected: Option<String>,
    pub rl_agent: RlAgentStatus,
}

/// Payload of `mitigation:deployment`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentUpdate {
    pub transitions: Vec<Transition>,
    pub active: Vec<(String, DeploymentStatus)>,
}

pub struct MitigationScreen {
    tracker: DeploymentTracker,
    selected: Option<String>,
    torn_down: bool,
}

impl MitigationScreen {
    pub fn mount(ctx: ScreenContext) -> Self {
        log::info!("Mitigation screen mounted ({} strategies)", CATALOG.len());
        Self {
            tracker: DeploymentTracker::from_config(ctx.clock, &ctx.config),
            selected: None,
            torn_down: false,
        }
    }

    pub fn deploy(&mut self, strategy_id: &str) -> DashboardResult<(Transition, Event)> {
        let transition = self.tracker.deploy(strategy_id)?;
        let event = self.update_event(vec![transition.clone()]);
        Ok((transition, event))
    }

    /// Open the details panel of `strategy_id`, or close it if already open.
    /// Returns the selection after the toggle.
    pub fn toggle_details(&mut self, strategy_id: &str) -> DashboardResult<Option<String>> {
        if catalog::find(strategy_id).is_none() {
            return Err(DashboardError::UnknownEntity(strategy_id.to_string()));
        }

        if self.selected.as_deref() == Some(strategy_id) {
            self.selected = None;
        } else {
            self.selected = Some(strategy_id.to_string());
        }
        Ok(self.selected.clone())
    }

    pub fn status(&self, strategy_id: &str) -> DeploymentStatus {
        self.tracker.status(strategy_id)
    }

    pub fn view(&self) -> MitigationView {
        let strategies = CATALOG
            .iter()
            .map(|strategy| {
                let status = self.tracker.status(strategy.id);
                StrategyView {
                    strategy,
                    status,
                    button_label: status.label(),
                    effectiveness_class: strategy.effectiveness_class(),
                    automation_class: strategy.automation_level.color_class(),
                    expanded: self.selected.as_deref() == Some(strategy.id),
                }
            })
            .collect();

        MitigationView {
            strategies,
            selected: self.selected.clone(),
            rl_agent: RL_AGENT,
        }
    }

    fn update_event(&self, transitions: Vec<Transition>) -> Event {
        Event::new(
            names::MITIGATION_DEPLOYMENT,
            DeploymentUpdate {
                transitions,
                active: self.tracker.active(),
            },
        )
    }
}

impl Screen for MitigationScreen {
    fn route(&self) -> Route {
        Route::Mitigation
    }

    fn poll(&mut self) -> Vec<Event> {
        if self.torn_down {
            return Vec::new();
        }

        let applied = self.tracker.advance();
        if applied.is_empty() {
            return Vec::new();
        }
        vec![self.update_event(applied)]
    }

    /// No interval timers to cancel. Pending transitions are discarded.
    fn teardown(&mut self) -> usize {
        if !self.torn_down {
            self.torn_down = true;
            let pending = self.tracker.in_flight();
            if pending > 0 {
                log::debug!("Mitigation unmounted with {} pending transition(s); dropped", pending);
            }
        }
        0
    }

    fn state_event(&self) -> Event {
        self.update_event(Vec::new())
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::Mitigation(self.view())
    }

    fn active_timers(&self) -> usize {
        0
    }
}
