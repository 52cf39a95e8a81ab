use std::path::PathBuf;

use bezier_viewer::scene::{load_scene, AnimationConfig, SceneConfig, SceneError};

fn sample_scene_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/scene_config.json")
}

#[test]
fn test_bundled_scene_loads() {
    let scene = load_scene(sample_scene_path()).expect("bundled scene should load");

    assert_eq!(scene.objects.len(), 3);
    assert_eq!(scene.light_sources.len(), 1);
    assert_eq!(scene.camera.fov, 45.0);

    let names: Vec<&str> = scene.objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Suzanne", "Cube", "Planet"]);

    assert_eq!(scene.objects[0].animation, AnimationConfig::None);
    assert!(scene.objects[1].animation.is_bezier());
    match &scene.objects[2].animation {
        AnimationConfig::Bezier { resolution, .. } => assert_eq!(*resolution, Some(200)),
        AnimationConfig::None => panic!("Planet should be animated"),
    }
}

#[test]
fn test_defaults_fill_optional_sections() {
    let scene = SceneConfig::from_json_str(r#"{ "objects": [ { "name": "lonely" } ] }"#).unwrap();
    assert!(scene.light_sources.is_empty());
    assert_eq!(scene.camera.position, [0.0, 0.0, 3.0]);
    assert_eq!(scene.objects[0].initial_transform.scale, [1.0, 1.0, 1.0]);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = SceneConfig::from_json_str("{ objects: ").unwrap_err();
    assert!(matches!(err, SceneError::Parse { .. }));
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let err = SceneConfig::from_json_str(r#"{ "objects": [ { "name": 5 } ] }"#).unwrap_err();
    assert!(matches!(err, SceneError::Parse { .. }));
}

#[test]
fn test_zero_rotation_axis_is_invalid() {
    let err = SceneConfig::from_json_str(
        r#"{ "objects": [ { "name": "spinner", "initial_transform": { "rotation_axis": [0, 0, 0] } } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::Invalid(_)));
    assert!(err.to_string().contains("spinner"));
}

#[test]
fn test_tiny_resolution_is_invalid() {
    let err = SceneConfig::from_json_str(
        r#"{ "objects": [ { "name": "coarse", "animation": { "type": "bezier", "control_points": [], "resolution": 1 } } ] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("resolution"));
}

#[test]
fn test_short_control_polygon_still_loads() {
    // Degenerate curves disable following; they do not fail the scene
    let scene = SceneConfig::from_json_str(
        r#"{ "objects": [ { "name": "stub", "animation": { "type": "bezier", "control_points": [[0,0,0],[1,1,1]] } } ] }"#,
    );
    assert!(scene.is_ok());
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_scene("no/such/scene.json").unwrap_err();
    assert!(matches!(err, SceneError::Io { .. }));
    assert!(err.to_string().contains("no/such/scene.json"));
}
