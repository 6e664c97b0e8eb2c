//! Threat Generator
//!
//! Produces one synthetic `ThreatRecord` per call by sampling each field
//! independently and uniformly from its pool. Deterministic for a given seed
//! and clock reading.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::rules::{describe, CONFIDENCE_MAX, CONFIDENCE_MIN, SOURCE_POOL};
use super::types::{Severity, ThreatRecord, ThreatStatus, ThreatType};
use crate::logic::clock::{format_time_of_day, SharedClock};

pub struct ThreatGenerator {
    rng: StdRng,
    clock: SharedClock,
    generated: u64,
}

impl ThreatGenerator {
    pub fn new(seed: u64, clock: SharedClock) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), clock)
    }

    pub fn from_rng(rng: StdRng, clock: SharedClock) -> Self {
        Self {
            rng,
            clock,
            generated: 0,
        }
    }

    /// Generate one record
    pub fn generate(&mut self) -> ThreatRecord {
        let threat_type = pick(&mut self.rng, &ThreatType::ALL);
        let severity = pick(&mut self.rng, &Severity::ALL);
        let source = pick(&mut self.rng, &SOURCE_POOL);
        let status = pick(&mut self.rng, &ThreatStatus::ALL);
        let confidence = self.rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX);
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();

        self.generated += 1;

        ThreatRecord {
            id: id.to_string(),
            timestamp: format_time_of_day(self.clock.now_ms()),
            threat_type,
            severity,
            source: source.to_string(),
            description: describe(threat_type),
            status,
            confidence,
        }
    }

    /// Generate `count` records, newest first
    pub fn burst(&mut self, count: usize) -> Vec<ThreatRecord> {
        let mut records: Vec<ThreatRecord> = (0..count).map(|_| self.generate()).collect();
        records.reverse();
        records
    }

    /// Records produced so far
    pub fn generated(&self) -> u64 {
        self.generated
    }
}

fn pick<T: Copy>(rng: &mut StdRng, pool: &[T]) -> T {
    pool[rng.gen_range(0..pool.len())]
}
