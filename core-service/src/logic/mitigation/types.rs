//! Mitigation Types
//!
//! Strategy catalog entries, deployment states and the color classes the
//! view layer maps to badges.

use serde::{Deserialize, Serialize};

// ============================================================================
// COLOR CLASS
// ============================================================================

/// Badge class for percentages (effectiveness, confidence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Critical,
    Caution,
    Warn,
    Good,
}

impl ColorClass {
    /// >= 90 good, >= 80 warn, >= 70 caution, else critical
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            90.. => ColorClass::Good,
            80..=89 => ColorClass::Warn,
            70..=79 => ColorClass::Caution,
            _ => ColorClass::Critical,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ColorClass::Good => "#4CAF50",
            ColorClass::Warn => "#FFC107",
            ColorClass::Caution => "#FF9800",
            ColorClass::Critical => "#F44336",
        }
    }
}

// ============================================================================
// AUTOMATION LEVEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomationLevel {
    Manual,
    #[serde(rename = "Semi-Auto")]
    SemiAuto,
    #[serde(rename = "Fully Auto")]
    FullyAuto,
}

impl AutomationLevel {
    pub const ALL: [AutomationLevel; 3] = [
        AutomationLevel::Manual,
        AutomationLevel::SemiAuto,
        AutomationLevel::FullyAuto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationLevel::Manual => "Manual",
            AutomationLevel::SemiAuto => "Semi-Auto",
            AutomationLevel::FullyAuto => "Fully Auto",
        }
    }

    pub fn color_class(&self) -> ColorClass {
        match self {
            AutomationLevel::FullyAuto => ColorClass::Good,
            AutomationLevel::SemiAuto => ColorClass::Caution,
            AutomationLevel::Manual => ColorClass::Critical,
        }
    }
}

// ============================================================================
// STRATEGY
// ============================================================================

/// Static catalog entry, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationStrategy {
    pub id: &'static str,
    pub threat_type: &'static str,
    pub strategy: &'static str,
    pub description: &'static str,
    /// 0 - 100
    pub effectiveness: u8,
    pub automation_level: AutomationLevel,
    pub estimated_time: &'static str,
    /// 0 - 100
    pub rl_confidence: u8,
    pub steps: &'static [&'static str],
}

impl MitigationStrategy {
    pub fn effectiveness_class(&self) -> ColorClass {
        ColorClass::from_percent(self.effectiveness)
    }
}

// ============================================================================
// DEPLOYMENT STATUS
// ============================================================================

/// `Idle` means no entry exists for the strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentStatus {
    Idle,
    Deploying,
    Deployed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Idle => "idle",
            DeploymentStatus::Deploying => "deploying",
            DeploymentStatus::Deployed => "deployed",
        }
    }

    /// Deploy button text
    pub fn label(&self) -> &'static str {
        match self {
            DeploymentStatus::Idle => "Deploy Strategy",
            DeploymentStatus::Deploying => "Deploying...",
            DeploymentStatus::Deployed => "Deployed",
        }
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One applied lifecycle step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub strategy_id: String,
    pub from: DeploymentStatus,
    pub to: DeploymentStatus,
    pub at_ms: u64,
}
