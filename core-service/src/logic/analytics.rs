//! Analytics - Aggregate metric snapshots
//!
//! Snapshot được sinh lại toàn bộ mỗi lần refresh. Các con số KHÔNG lấy từ
//! live feed; dashboard totals and the feed are allowed to disagree.

use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// SNAPSHOT
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub threats_blocked: u32,
    pub false_positives: u32,
    /// Seconds
    pub response_time: f64,
    /// Percent
    pub system_uptime: f64,
    /// Percent
    pub ml_accuracy: f64,
    /// Percent
    pub rl_performance: f64,
}

impl AnalyticsSnapshot {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            threats_blocked: rng.gen_range(1_200..1_700),
            false_positives: rng.gen_range(5..25),
            response_time: rng.gen_range(0.5..2.5),
            system_uptime: rng.gen_range(99.8..99.95),
            ml_accuracy: rng.gen_range(94.0..98.0),
            rl_performance: rng.gen_range(91.0..97.0),
        }
    }
}

// ============================================================================
// TIME RANGE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    OneHour,
    #[default]
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneHour,
        TimeRange::OneDay,
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::OneHour => "1h",
            TimeRange::OneDay => "24h",
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// STATIC TABLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatTrend {
    pub threat_type: &'static str,
    pub count: u32,
    pub change_percent: i32,
}

impl ThreatTrend {
    pub fn direction(&self) -> TrendDirection {
        if self.change_percent > 0 {
            TrendDirection::Rising
        } else {
            TrendDirection::Falling
        }
    }

    /// e.g. "+12%" / "-8%"
    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change_percent)
    }
}

pub const THREAT_TRENDS: [ThreatTrend; 5] = [
    ThreatTrend { threat_type: "Malware", count: 45, change_percent: 12 },
    ThreatTrend { threat_type: "DDoS", count: 23, change_percent: -8 },
    ThreatTrend { threat_type: "Phishing", count: 67, change_percent: 25 },
    ThreatTrend { threat_type: "SQL Injection", count: 12, change_percent: -15 },
    ThreatTrend { threat_type: "Brute Force", count: 34, change_percent: 5 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentPerformance {
    pub name: &'static str,
    pub accuracy: f32,
    pub speed: &'static str,
}

pub const AGENT_PERFORMANCE: [AgentPerformance; 4] = [
    AgentPerformance { name: "Detection Agent", accuracy: 96.2, speed: "Fast" },
    AgentPerformance { name: "Analysis Agent", accuracy: 94.8, speed: "Medium" },
    AgentPerformance { name: "Remediation Agent", accuracy: 92.1, speed: "Fast" },
    AgentPerformance { name: "RL Agent", accuracy: 89.7, speed: "Learning" },
];

// ============================================================================
// TESTS
// ============================================================================
