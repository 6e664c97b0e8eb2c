//! Threat Module
//!
//! Sinh synthetic threats cho live feed. Không có detection thật - mọi
//! field đều được lấy mẫu ngẫu nhiên từ pool cố định.
//!
//! ## Structure
//! - `types`: Closed enumerations and `ThreatRecord`
//! - `rules`: Sampling pools and bounds
//! - `generator`: Seeded record generator
//!
//! ## Usage
//! ```ignore
//! use crate::logic::threat::ThreatGenerator;
//!
//! let mut generator = ThreatGenerator::new(seed, clock);
//! let record = generator.generate();
//! feed.push(record);
//! ```

pub mod types;
pub mod rules;
pub mod generator;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use types::{
    FeedStats,
    Severity,
    ThreatRecord,
    ThreatStatus,
    ThreatType,
};

pub use rules::{CONFIDENCE_MAX, CONFIDENCE_MIN, SOURCE_POOL};

pub use generator::ThreatGenerator;
