//! Settings Types
//!
//! Agent configuration, global system settings và typed value coercion.
//! Validation sống ở đây để store chỉ việc apply.

use serde::{Deserialize, Serialize};

use crate::logic::error::{DashboardError, DashboardResult};

// ============================================================================
// AGENT CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    /// 0..=100
    pub sensitivity: u8,
    pub auto_response: bool,
    /// Always > 0
    pub learning_rate: f64,
    pub description: String,
}

impl AgentConfig {
    pub fn learning_band(&self) -> LearningBand {
        LearningBand::from_rate(self.learning_rate)
    }
}

/// The four built-in agents, in display order
pub fn default_agents() -> Vec<AgentConfig> {
    vec![
        agent(
            "1",
            "Detection Agent",
            85,
            true,
            0.01,
            "Monitors network traffic and identifies potential threats using ML models",
        ),
        agent(
            "2",
            "Analysis Agent",
            90,
            false,
            0.005,
            "Performs deep analysis of detected threats using RAG and LLM",
        ),
        agent(
            "3",
            "Remediation Agent",
            80,
            true,
            0.02,
            "Executes mitigation strategies based on RL recommendations",
        ),
        agent(
            "4",
            "RL Agent",
            75,
            false,
            0.1,
            "Learns optimal response strategies through reinforcement learning",
        ),
    ]
}

fn agent(
    id: &str,
    name: &str,
    sensitivity: u8,
    auto_response: bool,
    learning_rate: f64,
    description: &str,
) -> AgentConfig {
    AgentConfig {
        id: id.to_string(),
        name: name.to_string(),
        enabled: true,
        sensitivity,
        auto_response,
        learning_rate,
        description: description.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentField {
    Id,
    Name,
    Enabled,
    Sensitivity,
    AutoResponse,
    LearningRate,
    Description,
}

impl AgentField {
    /// Accepts both the camelCase wire name and snake_case
    pub fn parse(name: &str) -> DashboardResult<Self> {
        match name {
            "id" => Ok(AgentField::Id),
            "name" => Ok(AgentField::Name),
            "enabled" => Ok(AgentField::Enabled),
            "sensitivity" => Ok(AgentField::Sensitivity),
            "autoResponse" | "auto_response" => Ok(AgentField::AutoResponse),
            "learningRate" | "learning_rate" => Ok(AgentField::LearningRate),
            "description" => Ok(AgentField::Description),
            other => Err(DashboardError::UnknownField(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentField::Id => "id",
            AgentField::Name => "name",
            AgentField::Enabled => "enabled",
            AgentField::Sensitivity => "sensitivity",
            AgentField::AutoResponse => "autoResponse",
            AgentField::LearningRate => "learningRate",
            AgentField::Description => "description",
        }
    }

    /// Validate `value` and write it into `agent`. Nothing is written on error.
    pub fn apply(&self, agent: &mut AgentConfig, value: &ConfigValue) -> DashboardResult<()> {
        let field = self.as_str();
        match self {
            AgentField::Id => {
                return Err(DashboardError::invalid_value(field, "agent id is read-only"));
            }
            AgentField::Name => agent.name = value.to_non_empty_text(field)?,
            AgentField::Enabled => agent.enabled = value.to_bool(field)?,
            AgentField::Sensitivity => agent.sensitivity = value.to_percent(field)?,
            AgentField::AutoResponse => agent.auto_response = value.to_bool(field)?,
            AgentField::LearningRate => agent.learning_rate = value.to_positive_float(field)?,
            AgentField::Description => agent.description = value.to_text(field)?,
        }
        Ok(())
    }
}

// ============================================================================
// LEARNING BAND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LearningBand {
    Fast,
    Moderate,
    Conservative,
}

impl LearningBand {
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.05 {
            LearningBand::Fast
        } else if rate > 0.01 {
            LearningBand::Moderate
        } else {
            LearningBand::Conservative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LearningBand::Fast => "Fast Learning",
            LearningBand::Moderate => "Moderate Learning",
            LearningBand::Conservative => "Conservative Learning",
        }
    }
}

// ============================================================================
// SYSTEM SETTINGS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub real_time_monitoring: bool,
    pub auto_mitigation: bool,
    /// 0..=100
    pub alert_threshold: u8,
    /// Days, > 0
    pub log_retention: u32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            real_time_monitoring: true,
            auto_mitigation: false,
            alert_threshold: 75,
            log_retention: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingName {
    RealTimeMonitoring,
    AutoMitigation,
    AlertThreshold,
    LogRetention,
}

impl SettingName {
    pub fn parse(name: &str) -> DashboardResult<Self> {
        match name {
            "realTimeMonitoring" | "real_time_monitoring" => Ok(SettingName::RealTimeMonitoring),
            "autoMitigation" | "auto_mitigation" => Ok(SettingName::AutoMitigation),
            "alertThreshold" | "alert_threshold" => Ok(SettingName::AlertThreshold),
            "logRetention" | "log_retention" => Ok(SettingName::LogRetention),
            other => Err(DashboardError::UnknownField(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingName::RealTimeMonitoring => "realTimeMonitoring",
            SettingName::AutoMitigation => "autoMitigation",
            SettingName::AlertThreshold => "alertThreshold",
            SettingName::LogRetention => "logRetention",
        }
    }

    pub fn apply(&self, settings: &mut SystemSettings, value: &ConfigValue) -> DashboardResult<()> {
        let field = self.as_str();
        match self {
            SettingName::RealTimeMonitoring => {
                settings.real_time_monitoring = value.to_bool(field)?
            }
            SettingName::AutoMitigation => settings.auto_mitigation = value.to_bool(field)?,
            SettingName::AlertThreshold => settings.alert_threshold = value.to_percent(field)?,
            SettingName::LogRetention => settings.log_retention = value.to_positive_int(field)?,
        }
        Ok(())
    }
}

// ============================================================================
// VALUES
// ============================================================================

/// Loosely-typed value coming from the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ConfigValue {
    fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "number",
            ConfigValue::Text(_) => "string",
        }
    }

    fn mismatch(&self, field: &str, expected: &str) -> DashboardError {
        DashboardError::invalid_value(field, format!("expected {}, got {}", expected, self.kind()))
    }

    pub fn to_bool(&self, field: &str) -> DashboardResult<bool> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(field, "boolean")),
        }
    }

    pub fn to_percent(&self, field: &str) -> DashboardResult<u8> {
        match self {
            ConfigValue::Int(v) if (0..=100).contains(v) => Ok(*v as u8),
            ConfigValue::Int(v) => Err(DashboardError::invalid_value(
                field,
                format!("must be between 0 and 100, got {}", v),
            )),
            _ => Err(self.mismatch(field, "integer")),
        }
    }

    pub fn to_positive_int(&self, field: &str) -> DashboardResult<u32> {
        match self {
            ConfigValue::Int(v) if *v > 0 && *v <= u32::MAX as i64 => Ok(*v as u32),
            ConfigValue::Int(v) => Err(DashboardError::invalid_value(
                field,
                format!("must be a positive integer, got {}", v),
            )),
            _ => Err(self.mismatch(field, "integer")),
        }
    }

    /// Integers are widened
    pub fn to_positive_float(&self, field: &str) -> DashboardResult<f64> {
        let v = match self {
            ConfigValue::Float(v) => *v,
            ConfigValue::Int(v) => *v as f64,
            _ => return Err(self.mismatch(field, "number")),
        };
        if v.is_finite() && v > 0.0 {
            Ok(v)
        } else {
            Err(DashboardError::invalid_value(
                field,
                format!("must be a positive number, got {}", v),
            ))
        }
    }

    pub fn to_text(&self, field: &str) -> DashboardResult<String> {
        match self {
            ConfigValue::Text(s) => Ok(s.clone()),
            _ => Err(self.mismatch(field, "string")),
        }
    }

    pub fn to_non_empty_text(&self, field: &str) -> DashboardResult<String> {
        let text = self.to_text(field)?;
        if text.trim().is_empty() {
            return Err(DashboardError::invalid_value(field, "must not be empty"));
        }
        Ok(text)
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Int(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Int(v as i64)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Float(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::Text(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::Text(v)
    }
}

// ============================================================================
// MODEL CONFIGURATION (static)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSetting {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelCard {
    pub title: &'static str,
    pub settings: &'static [ModelSetting],
}

pub const MODEL_CARDS: [ModelCard; 2] = [
    ModelCard {
        title: "LLM Configuration",
        settings: &[
            ModelSetting { label: "Model: GPT-4 Turbo", value: "Active" },
            ModelSetting { label: "Temperature: 0.3", value: "Conservative" },
            ModelSetting { label: "Max Tokens: 2048", value: "Standard" },
        ],
    },
    ModelCard {
        title: "RAG Configuration",
        settings: &[
            ModelSetting { label: "Vector Database: Pinecone", value: "Connected" },
            ModelSetting { label: "Embedding Model: text-embedding-3-small", value: "Active" },
            ModelSetting { label: "Similarity Threshold: 0.8", value: "High Precision" },
        ],
    },
];
