use std::sync::Arc;

use super::*;
use crate::logic::clock::ManualClock;
use crate::logic::error::DashboardError;

fn tracker() -> (Arc<ManualClock>, DeploymentTracker) {
    let clock = ManualClock::shared(0);
    let tracker = DeploymentTracker::new(clock.clone(), 2_000, 3_000);
    (clock, tracker)
}

fn steps(transitions: &[Transition]) -> Vec<(DeploymentStatus, DeploymentStatus, u64)> {
    transitions.iter().map(|t| (t.from, t.to, t.at_ms)).collect()
}

#[test]
fn test_deploy_lifecycle_timing() {
    let (clock, mut tracker) = tracker();

    let start = tracker.deploy("1").unwrap();
    assert_eq!(start.from, DeploymentStatus::Idle);
    assert_eq!(start.to, DeploymentStatus::Deploying);
    assert_eq!(start.at_ms, 0);
    assert_eq!(tracker.status("1"), DeploymentStatus::Deploying);

    clock.set(1_999);
    assert!(tracker.advance().is_empty());
    assert_eq!(tracker.status("1"), DeploymentStatus::Deploying);

    clock.set(2_000);
    assert_eq!(
        steps(&tracker.advance()),
        vec![(DeploymentStatus::Deploying, DeploymentStatus::Deployed, 2_000)]
    );

    clock.set(4_999);
    assert!(tracker.advance().is_empty());
    assert_eq!(tracker.status("1"), DeploymentStatus::Deployed);

    clock.set(5_000);
    assert_eq!(
        steps(&tracker.advance()),
        vec![(DeploymentStatus::Deployed, DeploymentStatus::Idle, 5_000)]
    );
    assert!(!tracker.has_entry("1"));
    assert_eq!(tracker.in_flight(), 0);
}

#[test]
fn test_late_advance_keeps_sequence() {
    let (clock, mut tracker) = tracker();
    tracker.deploy("3").unwrap();

    clock.advance(60_000);
    assert_eq!(
        steps(&tracker.advance()),
        vec![
            (DeploymentStatus::Deploying, DeploymentStatus::Deployed, 2_000),
            (DeploymentStatus::Deployed, DeploymentStatus::Idle, 5_000),
        ]
    );
}

#[test]
fn test_unknown_strategy_rejected() {
    let (_clock, mut tracker) = tracker();

    let err = tracker.deploy("unknown-id").unwrap_err();
    assert_eq!(err, DashboardError::UnknownEntity("unknown-id".to_string()));
    assert!(!tracker.has_entry("unknown-id"));
    assert!(tracker.active().is_empty());
    assert_eq!(tracker.in_flight(), 0);
}

#[test]
fn test_lifecycles_are_independent() {
    let (clock, mut tracker) = tracker();

    tracker.deploy("1").unwrap();
    clock.set(1_000);
    tracker.deploy("2").unwrap();

    clock.set(2_000);
    let applied = tracker.advance();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].strategy_id, "1");
    assert_eq!(tracker.status("1"), DeploymentStatus::Deployed);
    assert_eq!(tracker.status("2"), DeploymentStatus::Deploying);

    clock.set(3_000);
    tracker.advance();
    assert_eq!(
        tracker.active(),
        vec![
            ("1".to_string(), DeploymentStatus::Deployed),
            ("2".to_string(), DeploymentStatus::Deployed),
        ]
    );

    clock.set(5_000);
    tracker.advance();
    assert_eq!(tracker.status("1"), DeploymentStatus::Idle);
    assert_eq!(tracker.status("2"), DeploymentStatus::Deployed);
}

#[test]
fn test_redeploy_schedules_second_lifecycle() {
    let (clock, mut tracker) = tracker();

    tracker.deploy("4").unwrap();
    clock.set(1_000);
    let again = tracker.deploy("4").unwrap();
    assert_eq!(again.from, DeploymentStatus::Deploying);
    assert_eq!(tracker.in_flight(), 4);

    // The first lifecycle's reset at 5_000 clears the entry while the second
    // one is still pending; its own steps at 3_000 and 6_000 change nothing.
    clock.set(10_000);
    assert_eq!(
        steps(&tracker.advance()),
        vec![
            (DeploymentStatus::Deploying, DeploymentStatus::Deployed, 2_000),
            (DeploymentStatus::Deployed, DeploymentStatus::Idle, 5_000),
        ]
    );
    assert!(!tracker.has_entry("4"));
    assert_eq!(tracker.in_flight(), 0);
}

#[test]
fn test_catalog_lookup() {
    assert_eq!(CATALOG.len(), 5);
    assert_eq!(find("3").map(|s| s.threat_type), Some("SQL Injection"));
    assert!(find("6").is_none());

    for strategy in CATALOG.iter() {
        assert!(strategy.effectiveness <= 100);
        assert!(strategy.rl_confidence <= 100);
        assert_eq!(strategy.steps.len(), 5);
    }
}

#[test]
fn test_color_class_thresholds() {
    assert_eq!(ColorClass::from_percent(100), ColorClass::Good);
    assert_eq!(ColorClass::from_percent(90), ColorClass::Good);
    assert_eq!(ColorClass::from_percent(89), ColorClass::Warn);
    assert_eq!(ColorClass::from_percent(80), ColorClass::Warn);
    assert_eq!(ColorClass::from_percent(79), ColorClass::Caution);
    assert_eq!(ColorClass::from_percent(70), ColorClass::Caution);
    assert_eq!(ColorClass::from_percent(69), ColorClass::Critical);
    assert_eq!(ColorClass::from_percent(0), ColorClass::Critical);
}

#[test]
fn test_catalog_color_classes() {
    assert_eq!(find("1").unwrap().effectiveness_class(), ColorClass::Good);
    assert_eq!(find("2").unwrap().effectiveness_class(), ColorClass::Warn);
    assert_eq!(AutomationLevel::FullyAuto.color_class(), ColorClass::Good);
    assert_eq!(AutomationLevel::SemiAuto.color_class(), ColorClass::Caution);
    assert_eq!(AutomationLevel::Manual.color_class(), ColorClass::Critical);
}

#[test]
fn test_status_labels() {
    assert_eq!(DeploymentStatus::Idle.label(), "Deploy Strategy");
    assert_eq!(DeploymentStatus::Deploying.label(), "Deploying...");
    assert_eq!(DeploymentStatus::Deployed.label(), "Deployed");
}
