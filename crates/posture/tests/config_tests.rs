use posture::{ClassifierConfig, OverlayStyle, PostureConfig, PostureError};
use std::fs;

#[test]
fn test_defaults() {
    let config = PostureConfig::default();
    assert_eq!(config.min_interval_ms(), 1000);
    assert_eq!(config.classifier(), &ClassifierConfig::default());
    assert_eq!(config.overlay(), &OverlayStyle::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = PostureConfig::from_json(
        r#"{"min_interval_ms": 250, "classifier": {"torso_ratio_min": 0.3}}"#,
    )
    .unwrap();
    assert_eq!(config.min_interval_ms(), 250);
    assert_eq!(config.classifier().torso_ratio_min(), 0.3);
    assert_eq!(config.classifier().flatness_threshold(), 0.08);
    assert_eq!(config.overlay().point_radius, 6.0);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(PostureConfig::from_json("{}").unwrap(), PostureConfig::default());
}

#[test]
fn test_invalid_threshold_rejected() {
    let result = PostureConfig::from_json(r#"{"classifier": {"flatness_threshold": -0.1}}"#);
    match result {
        Err(PostureError::InvalidConfig(msg)) => assert!(msg.contains("flatness_threshold")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }

    let zero_radius = PostureConfig::default().with_overlay(OverlayStyle {
        point_radius: 0.0,
        stroke_width: 2.0,
    });
    assert!(matches!(zero_radius.validate(), Err(PostureError::InvalidConfig(_))));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = PostureConfig::from_json("{ not json");
    assert!(matches!(result, Err(PostureError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = PostureConfig::load("/nonexistent/posture/config.json");
    assert!(matches!(result, Err(PostureError::Io(_))));
}

#[test]
fn test_save_then_load() {
    let path = std::env::temp_dir().join(format!("posture-config-{}.json", std::process::id()));
    let config = PostureConfig::default()
        .with_min_interval_ms(1500)
        .with_classifier(ClassifierConfig::default().with_min_total_height(0.3));

    config.save(&path).unwrap();
    let loaded = PostureConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    fs::remove_file(&path).ok();
}

#[test]
fn test_error_display() {
    assert_eq!(PostureError::Io("gone".into()).to_string(), "io error: gone");
    assert_eq!(PostureError::Parse("eof".into()).to_string(), "parse error: eof");
    assert_eq!(
        PostureError::InvalidConfig("bad".into()).to_string(),
        "invalid config: bad"
    );
}
