//! Settings Module
//!
//! Agent + system configuration giữ trong memory. Save/test chỉ là stub,
//! không ghi ra disk hay gọi backend.
//!
//! ## Structure
//! - `types`: AgentConfig, SystemSettings, ConfigValue coercion
//! - `store`: ConfigStore with atomic updates and reset

pub mod types;
pub mod store;

#[cfg(test)]
mod tests;

pub use types::{
    default_agents,
    AgentConfig,
    AgentField,
    ConfigValue,
    LearningBand,
    ModelCard,
    ModelSetting,
    SettingName,
    SystemSettings,
    MODEL_CARDS,
};

pub use store::{ConfigSnapshot, ConfigStore, ConfigTestReport, SaveReceipt};
