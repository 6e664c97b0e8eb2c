use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::logic::clock::ManualClock;
use crate::logic::feed::RollingFeed;

fn generator(seed: u64) -> ThreatGenerator {
    ThreatGenerator::new(seed, ManualClock::shared(0))
}

#[test]
fn test_same_seed_same_records() {
    let mut a = generator(42);
    let mut b = generator(42);

    for _ in 0..20 {
        assert_eq!(a.generate(), b.generate());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let a: Vec<_> = generator(1).burst(5);
    let b: Vec<_> = generator(2).burst(5);
    assert_ne!(a, b);
}

#[test]
fn test_ids_are_unique() {
    let mut gen = generator(7);
    let ids: HashSet<String> = (0..500).map(|_| gen.generate().id).collect();
    assert_eq!(ids.len(), 500);
    assert_eq!(gen.generated(), 500);
}

#[test]
fn test_description_follows_type() {
    let mut gen = generator(3);
    for _ in 0..50 {
        let record = gen.generate();
        assert_eq!(
            record.description,
            format!(
                "{} detected from suspicious source. AI analysis in progress.",
                record.threat_type
            )
        );
    }
}

#[test]
fn test_timestamp_reads_clock() {
    let clock = ManualClock::shared(0);
    let mut gen = ThreatGenerator::new(5, clock.clone());

    assert_eq!(gen.generate().timestamp, "00:00:00");
    clock.advance(3_000);
    assert_eq!(gen.generate().timestamp, "00:00:03");
}

#[test]
fn test_every_category_is_reachable() {
    let mut gen = generator(11);
    let records: Vec<_> = (0..2_000).map(|_| gen.generate()).collect();

    let types: HashSet<_> = records.iter().map(|r| r.threat_type).collect();
    let severities: HashSet<_> = records.iter().map(|r| r.severity).collect();
    let statuses: HashSet<_> = records.iter().map(|r| r.status).collect();
    let sources: HashSet<_> = records.iter().map(|r| r.source.as_str()).collect();

    assert_eq!(types.len(), ThreatType::ALL.len());
    assert_eq!(severities.len(), Severity::ALL.len());
    assert_eq!(statuses.len(), ThreatStatus::ALL.len());
    assert_eq!(sources.len(), SOURCE_POOL.len());
    assert!(records.iter().any(|r| r.confidence == CONFIDENCE_MIN));
    assert!(records.iter().any(|r| r.confidence == CONFIDENCE_MAX));
}

#[test]
fn test_burst_is_newest_first() {
    let mut a = generator(9);
    let mut b = generator(9);

    let burst = a.burst(3);
    let sequential: Vec<_> = (0..3).map(|_| b.generate()).collect();

    assert_eq!(burst[0], sequential[2]);
    assert_eq!(burst[2], sequential[0]);
}

#[test]
fn test_twelve_pushes_keep_last_ten() {
    let mut gen = generator(2024);
    let mut feed = RollingFeed::new(10);

    let generated: Vec<ThreatRecord> = (0..12).map(|_| gen.generate()).collect();
    for record in &generated {
        feed.push(record.clone());
    }

    let snapshot = feed.snapshot();
    assert_eq!(snapshot.len(), 10);
    assert_eq!(snapshot[0], generated[11]);
    assert_eq!(snapshot[9], generated[2]);

    let expected: Vec<_> = generated[2..].iter().rev().cloned().collect();
    assert_eq!(snapshot, expected);
}

#[test]
fn test_feed_stats() {
    let mut gen = generator(8);
    let records: Vec<_> = (0..40).map(|_| gen.generate()).collect();
    let stats = FeedStats::from_records(&records);

    assert_eq!(stats.critical, records.iter().filter(|r| r.severity == Severity::Critical).count());
    assert_eq!(stats.high, records.iter().filter(|r| r.severity == Severity::High).count());
    assert_eq!(
        stats.mitigated,
        records.iter().filter(|r| r.status == ThreatStatus::Mitigated).count()
    );
}

#[test]
fn test_severity_order() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
}

#[test]
fn test_closed_sets_reject_unknown_names() {
    assert_eq!(ThreatType::parse("SQL Injection"), Some(ThreatType::SqlInjection));
    assert_eq!(ThreatType::parse("Ransomware"), None);
    assert_eq!(Severity::parse("Critical"), Some(Severity::Critical));
    assert_eq!(Severity::parse("Severe"), None);
    assert_eq!(ThreatStatus::parse("Blocked"), Some(ThreatStatus::Blocked));
    assert_eq!(ThreatStatus::parse("Ignored"), None);
}

#[test]
fn test_record_serializes_with_display_names() {
    let mut gen = generator(1);
    let record = gen.generate();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["type"], record.threat_type.as_str());
    assert_eq!(json["severity"], record.severity.as_str());
    assert_eq!(json["status"], record.status.as_str());
    assert!(json["confidence"].as_u64().unwrap() >= 70);
}

proptest! {
    #[test]
    fn test_generated_fields_stay_in_bounds(seed in any::<u64>()) {
        let mut gen = generator(seed);
        for _ in 0..25 {
            let record = gen.generate();
            prop_assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&record.confidence));
            prop_assert!(ThreatType::ALL.contains(&record.threat_type));
            prop_assert!(Severity::ALL.contains(&record.severity));
            prop_assert!(ThreatStatus::ALL.contains(&record.status));
            prop_assert!(SOURCE_POOL.contains(&record.source.as_str()));
        }
    }
}
