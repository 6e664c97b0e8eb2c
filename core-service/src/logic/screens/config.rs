//! Config Screen - Agent and system settings editor
//!
//! Không có timer. Mọi thay đổi đi qua `ConfigStore`, rejection để nguyên
//! state. Save/test là stub luôn thành công.

use std::sync::Arc;

use serde::Serialize;

use super::{Route, Screen, ScreenContext, ScreenSnapshot};
use crate::logic::error::DashboardResult;
use crate::logic::events::{names, Event};
use crate::logic::settings::{
    AgentConfig, ConfigStore, ConfigTestReport, ConfigValue, ModelCard, SaveReceipt,
    SystemSettings, MODEL_CARDS,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    #[serde(flatten)]
    pub config: Arc<AgentConfig>,
    pub learning_band: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigView {
    pub agents: Vec<AgentView>,
    pub settings: SystemSettings,
    pub is_default: bool,
    pub model_cards: &'static [ModelCard],
}

pub struct ConfigScreen {
    store: ConfigStore,
}

impl ConfigScreen {
    /// Always starts from the defaults
    pub fn mount(_ctx: ScreenContext) -> Self {
        log::info!("Config screen mounted");
        Self {
            store: ConfigStore::new(),
        }
    }

    pub fn update_agent_field(
        &mut self,
        agent_id: &str,
        field: &str,
        value: ConfigValue,
    ) -> DashboardResult<Event> {
        self.store
            .update_agent_field(agent_id, field, value)
            .map_err(|e| {
                log::warn!("Agent update rejected: {}", e);
                e
            })?;
        Ok(self.state_event())
    }

    pub fn update_system_setting(
        &mut self,
        name: &str,
        value: ConfigValue,
    ) -> DashboardResult<Event> {
        self.store.update_system_setting(name, value).map_err(|e| {
            log::warn!("Setting update rejected: {}", e);
            e
        })?;
        Ok(self.state_event())
    }

    pub fn save(&self) -> (SaveReceipt, Event) {
        let receipt = self.store.save();
        let event = Event::new(names::CONFIG_SAVED, &receipt);
        (receipt, event)
    }

    pub fn reset(&mut self) -> Event {
        self.store.reset();
        self.state_event()
    }

    pub fn test_configuration(&self) -> ConfigTestReport {
        self.store.test_configuration()
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn view(&self) -> ConfigView {
        ConfigView {
            agents: self
                .store
                .agents()
                .iter()
                .map(|agent| AgentView {
                    config: Arc::clone(agent),
                    learning_band: agent.learning_band().label(),
                })
                .collect(),
            settings: self.store.settings(),
            is_default: self.store.is_default(),
            model_cards: &MODEL_CARDS,
        }
    }
}

impl Screen for ConfigScreen {
    fn route(&self) -> Route {
        Route::Config
    }

    fn poll(&mut self) -> Vec<Event> {
        Vec::new()
    }

    fn teardown(&mut self) -> usize {
        0
    }

    fn state_event(&self) -> Event {
        Event::new(names::CONFIG_CHANGED, self.view())
    }

    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::Config(self.view())
    }

    fn active_timers(&self) -> usize {
        0
    }
}
