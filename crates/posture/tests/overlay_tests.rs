use posture::{
    JointId, Landmark, Overlay, OverlayStyle, Snapshot, Viewport, ViewportScale, edges, project,
    resolve_edges,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_project_scales_each_axis() {
    let snapshot: Snapshot = vec![Landmark::new(JointId::LeftShoulder, 240.0, 320.0)].into();
    let points = project(&snapshot, 480, 640, 960.0, 640.0);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].joint, JointId::LeftShoulder);
    assert!(close(points[0].position.x, 480.0));
    assert!(close(points[0].position.y, 320.0));
}

#[test]
fn test_project_keeps_order_and_duplicates() {
    let snapshot: Snapshot = vec![
        Landmark::new(JointId::RightKnee, 10.0, 10.0),
        Landmark::new(JointId::LeftWrist, 20.0, 20.0),
        Landmark::new(JointId::RightKnee, 30.0, 30.0),
    ]
    .into();
    let points = project(&snapshot, 100, 100, 50.0, 200.0);

    let joints: Vec<_> = points.iter().map(|p| p.joint).collect();
    assert_eq!(joints, vec![JointId::RightKnee, JointId::LeftWrist, JointId::RightKnee]);
    assert!(close(points[2].position.x, 15.0));
    assert!(close(points[2].position.y, 60.0));
}

#[test]
fn test_project_zero_source_is_empty() {
    let snapshot: Snapshot = vec![Landmark::new(JointId::LeftHip, 1.0, 1.0)].into();
    assert!(project(&snapshot, 0, 640, 100.0, 100.0).is_empty());
    assert!(project(&snapshot, 480, 0, 100.0, 100.0).is_empty());
    assert!(ViewportScale::new(0, 0, 1.0, 1.0).is_none());
}

#[test]
fn test_edge_table() {
    use JointId::*;
    let table = edges();
    assert_eq!(table.len(), 10);
    assert_eq!(table[0], (LeftShoulder, LeftElbow));
    assert!(table.contains(&(LeftShoulder, RightShoulder)));
    assert!(table.contains(&(LeftHip, RightHip)));
    assert!(table.contains(&(RightKnee, RightAnkle)));
    // no torso sides
    assert!(!table.contains(&(LeftShoulder, LeftHip)));
}

#[test]
fn test_resolve_edges_skips_missing_endpoints() {
    use JointId::*;
    let snapshot: Snapshot = vec![
        Landmark::new(LeftShoulder, 100.0, 100.0),
        Landmark::new(LeftElbow, 120.0, 150.0),
        Landmark::new(RightShoulder, 200.0, 100.0),
        // no wrists, no right elbow, no legs
    ]
    .into();
    let resolved = resolve_edges(&snapshot, 400, 400, 400.0, 400.0);

    let pairs: Vec<_> = resolved.iter().map(|(a, b)| (a.joint, b.joint)).collect();
    assert_eq!(pairs, vec![(LeftShoulder, LeftElbow), (LeftShoulder, RightShoulder)]);
}

#[test]
fn test_resolve_edges_first_match() {
    use JointId::*;
    let snapshot: Snapshot = vec![
        Landmark::new(LeftHip, 10.0, 10.0),
        Landmark::new(RightHip, 30.0, 10.0),
        Landmark::new(LeftHip, 99.0, 99.0),
    ]
    .into();
    let resolved = resolve_edges(&snapshot, 100, 100, 200.0, 200.0);

    assert_eq!(resolved.len(), 1);
    let (a, b) = resolved[0];
    assert_eq!((a.joint, b.joint), (LeftHip, RightHip));
    assert!(close(a.position.x, 20.0));
    assert!(close(b.position.x, 60.0));
}

#[test]
fn test_overlay_build() {
    use JointId::*;
    let snapshot: Snapshot = vec![
        Landmark::new(LeftHip, 10.0, 40.0),
        Landmark::new(LeftKnee, 10.0, 60.0),
        Landmark::new(LeftAnkle, 10.0, 80.0),
    ]
    .into();
    let overlay = Overlay::build(&snapshot, &Viewport::new(100, 100, 300.0, 100.0));

    assert_eq!(overlay.points.len(), 3);
    assert_eq!(overlay.edges.len(), 2);
    assert!(close(overlay.points[0].position.x, 30.0));
    assert!(close(overlay.points[0].position.y, 40.0));
    assert!(!overlay.is_empty());

    let degenerate = Overlay::build(&snapshot, &Viewport::new(0, 100, 300.0, 100.0));
    assert!(degenerate.is_empty());
    assert!(degenerate.edges.is_empty());
}

#[test]
fn test_overlay_style_defaults() {
    let style = OverlayStyle::default();
    assert_eq!(style.point_radius, 6.0);
    assert_eq!(style.stroke_width, 2.0);
}
