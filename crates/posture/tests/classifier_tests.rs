use posture::{Classifier, ClassifierConfig, JointId, Landmark, PostureLabel, Snapshot, classify};
use posture::classifier::left_segments;

/// Symmetric body with both sides at the given heights.
fn body(shoulder: f64, hip: f64, knee: f64, ankle: f64) -> Snapshot {
    use JointId::*;
    vec![
        Landmark::new(LeftShoulder, 0.40, shoulder),
        Landmark::new(RightShoulder, 0.60, shoulder),
        Landmark::new(LeftHip, 0.42, hip),
        Landmark::new(RightHip, 0.58, hip),
        Landmark::new(LeftKnee, 0.42, knee),
        Landmark::new(RightKnee, 0.58, knee),
        Landmark::new(LeftAnkle, 0.42, ankle),
        Landmark::new(RightAnkle, 0.58, ankle),
    ]
    .into()
}

#[test]
fn test_empty_snapshot_is_no_person() {
    assert_eq!(classify(&Snapshot::empty()), PostureLabel::NoPerson);
}

#[test]
fn test_standing() {
    assert_eq!(classify(&body(0.0, 0.30, 0.56, 0.82)), PostureLabel::Standing);
}

#[test]
fn test_sitting() {
    assert_eq!(classify(&body(0.0, 0.32, 0.40, 0.50)), PostureLabel::Sitting);
}

#[test]
fn test_all_joints_close_together_is_prone() {
    assert_eq!(classify(&body(0.50, 0.52, 0.53, 0.55)), PostureLabel::Prone);
}

#[test]
fn test_short_total_height_is_prone() {
    // left side is not flat but the whole body spans less than 0.25
    assert_eq!(classify(&body(0.40, 0.50, 0.55, 0.60)), PostureLabel::Prone);
}

#[test]
fn test_upside_down_body_is_prone() {
    // negative total height also falls under the degenerate-extent rule
    assert_eq!(classify(&body(0.9, 0.6, 0.4, 0.1)), PostureLabel::Prone);
}

#[test]
fn test_proportions_matching_neither_rule_are_unclear() {
    // torso 0.2 of height: too short for either upright label
    assert_eq!(classify(&body(0.0, 0.16, 0.48, 0.80)), PostureLabel::Unclear);
}

#[test]
fn test_any_missing_required_joint_is_unclear() {
    let full = body(0.0, 0.30, 0.56, 0.82);
    for missing in JointId::REQUIRED {
        let partial: Snapshot = full.iter().copied().filter(|lm| lm.id != missing).collect();
        assert_eq!(
            classify(&partial),
            PostureLabel::Unclear,
            "missing {missing} should be Unclear"
        );
    }
}

#[test]
fn test_only_overlay_joints_is_unclear() {
    let snapshot: Snapshot = vec![
        Landmark::new(JointId::LeftWrist, 0.1, 0.1),
        Landmark::new(JointId::RightElbow, 0.2, 0.2),
    ]
    .into();
    assert_eq!(classify(&snapshot), PostureLabel::Unclear);
}

#[test]
fn test_non_finite_coordinate_is_unclear() {
    let mut snapshot: Snapshot = body(0.0, 0.30, 0.56, 0.82)
        .iter()
        .copied()
        .filter(|lm| lm.id != JointId::RightKnee)
        .collect();
    snapshot.push(Landmark::new(JointId::RightKnee, 0.58, f64::NAN));
    assert_eq!(classify(&snapshot), PostureLabel::Unclear);
}

#[test]
fn test_duplicate_joint_uses_first_match() {
    let seated = body(0.0, 0.32, 0.40, 0.50);

    // a stray left hip ahead of the real one wins the lookup
    let mut stray_first: Snapshot = vec![Landmark::new(JointId::LeftHip, 0.42, 0.05)].into();
    for lm in seated.iter() {
        stray_first.push(*lm);
    }
    assert_eq!(classify(&stray_first), PostureLabel::Unclear);

    // the same stray entry after the real one is ignored
    let mut stray_last = seated.clone();
    stray_last.push(Landmark::new(JointId::LeftHip, 0.42, 0.05));
    assert_eq!(classify(&stray_last), PostureLabel::Sitting);
}

#[test]
fn test_classify_is_pure() {
    let classifier = Classifier::default();
    let standing = body(0.0, 0.30, 0.56, 0.82);
    let sitting = body(0.0, 0.32, 0.40, 0.50);

    let first = classifier.classify(&standing);
    classifier.classify(&sitting);
    classifier.classify(&Snapshot::empty());
    assert_eq!(classifier.classify(&standing), first);
}

#[test]
fn test_landmark_order_does_not_matter_without_duplicates() {
    let standing = body(0.0, 0.30, 0.56, 0.82);
    let reversed: Snapshot = standing.iter().rev().copied().collect();
    assert_eq!(classify(&reversed), PostureLabel::Standing);
}

#[test]
fn test_custom_thresholds() {
    // a stricter torso ratio rejects the standing body
    let strict = Classifier::new(ClassifierConfig::default().with_torso_ratio_min(0.40));
    assert_eq!(strict.classify(&body(0.0, 0.30, 0.56, 0.82)), PostureLabel::Unclear);

    // a wide flatness threshold turns sitting into prone
    let loose = Classifier::new(ClassifierConfig::default().with_flatness_threshold(0.5));
    assert_eq!(loose.classify(&body(0.0, 0.32, 0.40, 0.50)), PostureLabel::Prone);
}

#[test]
fn test_default_thresholds() {
    let config = ClassifierConfig::default();
    assert_eq!(config.flatness_threshold(), 0.08);
    assert_eq!(config.min_total_height(), 0.25);
    assert_eq!(config.torso_ratio_min(), 0.28);
    assert_eq!(config.standing_segment_ratio_min(), 0.25);
    assert_eq!(config.sitting_thigh_ratio_max(), 0.20);
    assert_eq!(config.sitting_shin_ratio_max(), 0.25);
}

#[test]
fn test_label_display() {
    assert_eq!(PostureLabel::NoPerson.to_string(), "No person");
    assert_eq!(PostureLabel::Prone.to_string(), "Prone");
    assert_eq!(PostureLabel::Standing.to_string(), "Standing");
    assert_eq!(PostureLabel::Sitting.to_string(), "Sitting");
    assert_eq!(PostureLabel::Unclear.to_string(), "Unclear");
}

#[test]
fn test_left_segments() {
    let segments = left_segments(&body(0.0, 0.30, 0.56, 0.82)).unwrap();
    assert!((segments[0] - 0.30).abs() < 1e-10);
    assert!((segments[1] - 0.26).abs() < 1e-10);
    assert!((segments[2] - 0.26).abs() < 1e-10);
    assert!(left_segments(&Snapshot::empty()).is_none());
}
