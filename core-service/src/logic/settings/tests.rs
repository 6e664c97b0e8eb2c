use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use crate::logic::error::DashboardError;

#[test]
fn test_defaults() {
    let store = ConfigStore::new();
    let names: Vec<&str> = store.agents().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Detection Agent", "Analysis Agent", "Remediation Agent", "RL Agent"]
    );

    let detection = store.agent("1").unwrap();
    assert_eq!(detection.sensitivity, 85);
    assert_eq!(detection.learning_rate, 0.01);
    assert!(detection.auto_response);
    assert!(!store.agent("4").unwrap().auto_response);

    assert_eq!(
        store.settings(),
        SystemSettings {
            real_time_monitoring: true,
            auto_mitigation: false,
            alert_threshold: 75,
            log_retention: 30,
        }
    );
    assert!(store.is_default());
}

#[test]
fn test_update_touches_one_field_of_one_agent() {
    let mut store = ConfigStore::new();
    let before = store.snapshot();

    let updated = store
        .update_agent_field("2", "sensitivity", ConfigValue::Int(42))
        .unwrap();
    assert_eq!(updated.sensitivity, 42);

    let after = store.snapshot();
    for (old, new) in before.agents.iter().zip(after.agents.iter()) {
        if old.id == "2" {
            let mut expected = AgentConfig::clone(old);
            expected.sensitivity = 42;
            assert_eq!(**new, expected);
        } else {
            assert!(Arc::ptr_eq(old, new));
        }
    }
    assert_eq!(before.settings, after.settings);
}

#[test]
fn test_update_accepts_snake_case_and_widens_ints() {
    let mut store = ConfigStore::new();
    store
        .update_agent_field("3", "learning_rate", ConfigValue::Int(1))
        .unwrap();
    assert_eq!(store.agent("3").unwrap().learning_rate, 1.0);

    store
        .update_agent_field("3", "autoResponse", false.into())
        .unwrap();
    assert!(!store.agent("3").unwrap().auto_response);
}

#[test]
fn test_update_rejections_are_atomic() {
    let mut store = ConfigStore::new();
    let before = store.snapshot();

    assert_eq!(
        store.update_agent_field("9", "enabled", false.into()),
        Err(DashboardError::UnknownAgent("9".to_string()))
    );
    assert_eq!(
        store.update_agent_field("1", "color", "red".into()),
        Err(DashboardError::UnknownField("color".to_string()))
    );
    assert!(matches!(
        store.update_agent_field("1", "id", "7".into()),
        Err(DashboardError::InvalidValue { .. })
    ));
    assert!(matches!(
        store.update_agent_field("1", "sensitivity", ConfigValue::Int(101)),
        Err(DashboardError::InvalidValue { .. })
    ));
    assert!(matches!(
        store.update_agent_field("1", "learningRate", ConfigValue::Float(0.0)),
        Err(DashboardError::InvalidValue { .. })
    ));
    assert!(matches!(
        store.update_agent_field("1", "learningRate", ConfigValue::Float(f64::NAN)),
        Err(DashboardError::InvalidValue { .. })
    ));
    assert!(matches!(
        store.update_agent_field("1", "name", "  ".into()),
        Err(DashboardError::InvalidValue { .. })
    ));
    assert!(matches!(
        store.update_agent_field("1", "enabled", ConfigValue::Int(1)),
        Err(DashboardError::InvalidValue { .. })
    ));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_alert_threshold_out_of_range() {
    let mut store = ConfigStore::new();

    let err = store
        .update_system_setting("alertThreshold", ConfigValue::Int(150))
        .unwrap_err();
    assert!(matches!(
        err,
        DashboardError::InvalidValue { ref field, .. } if field == "alertThreshold"
    ));
    assert_eq!(store.settings().alert_threshold, 75);
    assert!(store.is_default());
}

#[test]
fn test_system_settings_updates() {
    let mut store = ConfigStore::new();

    let settings = store
        .update_system_setting("autoMitigation", true.into())
        .unwrap();
    assert!(settings.auto_mitigation);

    store
        .update_system_setting("alertThreshold", ConfigValue::Int(100))
        .unwrap();
    store
        .update_system_setting("alertThreshold", ConfigValue::Int(0))
        .unwrap();
    assert_eq!(store.settings().alert_threshold, 0);

    assert!(store
        .update_system_setting("logRetention", ConfigValue::Int(0))
        .is_err());
    assert_eq!(
        store.update_system_setting("theme", "dark".into()),
        Err(DashboardError::UnknownField("theme".to_string()))
    );
    assert_eq!(store.settings().log_retention, 30);
}

#[test]
fn test_save_and_test_stubs() {
    let mut store = ConfigStore::new();
    store
        .update_agent_field("4", "enabled", false.into())
        .unwrap();

    let receipt = store.save();
    assert!(receipt.success);
    assert_eq!(receipt.message, "Configuration saved successfully!");
    assert_eq!(receipt.snapshot, store.snapshot());

    let report = store.test_configuration();
    assert!(report.passed);
    assert_eq!(report.agents_checked, 4);
    assert_eq!(report.enabled_agents, 3);
}

#[test]
fn test_learning_band() {
    assert_eq!(LearningBand::from_rate(0.1), LearningBand::Fast);
    assert_eq!(LearningBand::from_rate(0.05), LearningBand::Moderate);
    assert_eq!(LearningBand::from_rate(0.02), LearningBand::Moderate);
    assert_eq!(LearningBand::from_rate(0.01), LearningBand::Conservative);
    assert_eq!(LearningBand::Fast.label(), "Fast Learning");

    let store = ConfigStore::new();
    assert_eq!(store.agent("2").unwrap().learning_band(), LearningBand::Conservative);
}

#[test]
fn test_value_json_shape() {
    let v: ConfigValue = serde_json::from_str("150").unwrap();
    assert_eq!(v, ConfigValue::Int(150));
    let v: ConfigValue = serde_json::from_str("0.25").unwrap();
    assert_eq!(v, ConfigValue::Float(0.25));
    let v: ConfigValue = serde_json::from_str("true").unwrap();
    assert_eq!(v, ConfigValue::Bool(true));

    let json = serde_json::to_value(ConfigStore::new().snapshot()).unwrap();
    assert_eq!(json["settings"]["alertThreshold"], 75);
    assert_eq!(json["agents"][0]["learningRate"], 0.01);
}

#[derive(Debug, Clone)]
enum Mutation {
    Agent(&'static str, &'static str, ConfigValue),
    Setting(&'static str, ConfigValue),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    let agent_id = prop::sample::select(vec!["1", "2", "3", "4", "5"]);
    prop_oneof![
        (agent_id.clone(), -20i64..150)
            .prop_map(|(id, v)| Mutation::Agent(id, "sensitivity", ConfigValue::Int(v))),
        (agent_id.clone(), any::<bool>())
            .prop_map(|(id, v)| Mutation::Agent(id, "enabled", ConfigValue::Bool(v))),
        (agent_id, -1.0f64..1.0)
            .prop_map(|(id, v)| Mutation::Agent(id, "learningRate", ConfigValue::Float(v))),
        (-50i64..200).prop_map(|v| Mutation::Setting("alertThreshold", ConfigValue::Int(v))),
        any::<bool>().prop_map(|v| Mutation::Setting("realTimeMonitoring", ConfigValue::Bool(v))),
    ]
}

proptest! {
    #[test]
    fn test_reset_restores_defaults(mutations in prop::collection::vec(mutation(), 0..40)) {
        let mut store = ConfigStore::new();
        for m in mutations {
            let _ = match m {
                Mutation::Agent(id, field, value) => {
                    store.update_agent_field(id, field, value).map(|_| ())
                }
                Mutation::Setting(name, value) => {
                    store.update_system_setting(name, value).map(|_| ())
                }
            };
        }
        store.reset();
        prop_assert!(store.is_default());
        prop_assert_eq!(store.snapshot(), ConfigStore::new().snapshot());
    }

    #[test]
    fn test_settings_stay_in_range(values in prop::collection::vec(-500i64..500, 1..30)) {
        let mut store = ConfigStore::new();
        for v in values {
            let _ = store.update_system_setting("alertThreshold", ConfigValue::Int(v));
            prop_assert!(store.settings().alert_threshold <= 100);
        }
    }
}
