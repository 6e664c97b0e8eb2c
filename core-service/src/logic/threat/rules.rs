//! Threat Generation Rules
//!
//! Sampling pools and bounds for the synthetic feed.
//! KHÔNG chứa logic - chỉ constants.

use super::types::ThreatType;

// ============================================================================
// POOLS
// ============================================================================

/// Source addresses a synthetic threat can come from
pub const SOURCE_POOL: [&str; 5] = [
    "192.168.1.100",
    "10.0.0.45",
    "172.16.0.23",
    "203.0.113.5",
    "198.51.100.14",
];

// ============================================================================
// CONFIDENCE
// ============================================================================

pub const CONFIDENCE_MIN: u8 = 70;

pub const CONFIDENCE_MAX: u8 = 100;

// ============================================================================
// DESCRIPTION
// ============================================================================

pub fn describe(threat_type: ThreatType) -> String {
    format!(
        "{} detected from suspicious source. AI analysis in progress.",
        threat_type.as_str()
    )
}
