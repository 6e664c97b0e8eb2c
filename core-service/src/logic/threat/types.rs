//! Threat Types
//!
//! Core types cho synthetic threat feed.
//! KHÔNG chứa logic sinh dữ liệu - chỉ data structures.
//!
//! Every categorical field is a closed enumeration; `parse` only accepts the
//! display names listed in `ALL`.

use serde::{Deserialize, Serialize};

// ============================================================================
// THREAT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatType {
    Malware,
    #[serde(rename = "DDoS Attack")]
    DdosAttack,
    Phishing,
    #[serde(rename = "SQL Injection")]
    SqlInjection,
    #[serde(rename = "Brute Force")]
    BruteForce,
    #[serde(rename = "Port Scan")]
    PortScan,
    #[serde(rename = "Data Exfiltration")]
    DataExfiltration,
}

impl ThreatType {
    pub const ALL: [ThreatType; 7] = [
        ThreatType::Malware,
        ThreatType::DdosAttack,
        ThreatType::Phishing,
        ThreatType::SqlInjection,
        ThreatType::BruteForce,
        ThreatType::PortScan,
        ThreatType::DataExfiltration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatType::Malware => "Malware",
            ThreatType::DdosAttack => "DDoS Attack",
            ThreatType::Phishing => "Phishing",
            ThreatType::SqlInjection => "SQL Injection",
            ThreatType::BruteForce => "Brute Force",
            ThreatType::PortScan => "Port Scan",
            ThreatType::DataExfiltration => "Data Exfiltration",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for ThreatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Totally ordered: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Critical => "#F44336", // Red
            Severity::High => "#FF9800",     // Orange
            Severity::Medium => "#FFC107",   // Amber
            Severity::Low => "#4CAF50",      // Green
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// STATUS
// ============================================================================

/// Not derived from severity - drawn independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatStatus {
    Detected,
    Analyzing,
    Mitigated,
    Blocked,
}

impl ThreatStatus {
    pub const ALL: [ThreatStatus; 4] = [
        ThreatStatus::Detected,
        ThreatStatus::Analyzing,
        ThreatStatus::Mitigated,
        ThreatStatus::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatStatus::Detected => "Detected",
            ThreatStatus::Analyzing => "Analyzing",
            ThreatStatus::Mitigated => "Mitigated",
            ThreatStatus::Blocked => "Blocked",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn color(&self) -> &'static str {
        match self {
            ThreatStatus::Detected => "#FF5722",
            ThreatStatus::Analyzing => "#2196F3",
            ThreatStatus::Mitigated => "#4CAF50",
            ThreatStatus::Blocked => "#9C27B0",
        }
    }
}

impl std::fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// THREAT RECORD
// ============================================================================

/// One synthetic threat. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatRecord {
    pub id: String,
    /// Display only, never used for ordering
    pub timestamp: String,
    #[serde(rename = "type")]
    pub threat_type: ThreatType,
    pub severity: Severity,
    pub source: String,
    pub description: String,
    pub status: ThreatStatus,
    /// 70 - 100
    pub confidence: u8,
}

// ============================================================================
// FEED STATISTICS
// ============================================================================

/// Counters shown above the live feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStats {
    pub critical: usize,
    pub high: usize,
    pub mitigated: usize,
}

impl FeedStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ThreatRecord>,
    {
        records.into_iter().fold(Self::default(), |mut stats, r| {
            match r.severity {
                Severity::Critical => stats.critical += 1,
                Severity::High => stats.high += 1,
                _ => {}
            }
            if r.status == ThreatStatus::Mitigated {
                stats.mitigated += 1;
            }
            stats
        })
    }
}
