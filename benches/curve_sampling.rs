use bezier_viewer::app::{AppOptions, AppState};
use bezier_viewer::camera::Camera;
use bezier_viewer::core::{Command, FixedStepFrames, LogRenderer};
use bezier_viewer::math::{cubic_bezier, sample_curve};
use bezier_viewer::scene::SceneConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

/// Zig-zag control polygon with `segments` cubic pieces
fn control_polygon(segments: usize) -> Vec<Vec3> {
    (0..=segments * 3)
        .map(|i| {
            let x = i as f32 * 0.5;
            let y = if i % 2 == 0 { 0.0 } else { 1.0 };
            Vec3::new(x, y, (i as f32 * 0.3).sin())
        })
        .collect()
}

/// Scene with `count` objects, each following its own curve
fn following_scene(count: usize) -> AppState {
    let objects: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{ "name": "obj{i}", "animation": {{ "type": "bezier",
                    "control_points": [[0,0,0],[1,{i},0],[2,0,{i}],[3,1,1]], "speed": 0.001 }} }}"#
            )
        })
        .collect();
    let json = format!(r#"{{ "objects": [{}] }}"#, objects.join(","));

    let scene = match SceneConfig::from_json_str(&json) {
        Ok(scene) => scene,
        Err(e) => panic!("benchmark scene is invalid: {e}"),
    };
    let mut state = AppState::from_scene(&scene, &AppOptions::default());
    for index in 0..count {
        state.apply_all([Command::Select(index), Command::ToggleTrajectory]);
    }
    state
}

/// Benchmark: Single cubic evaluation
fn bench_cubic_evaluation(c: &mut Criterion) {
    let p = control_polygon(1);

    c.bench_function("cubic_bezier", |b| {
        b.iter(|| black_box(cubic_bezier(p[0], p[1], p[2], p[3], black_box(0.37))))
    });
}

/// Benchmark: Sampling a single segment at increasing resolutions
fn bench_sample_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_curve");
    let points = control_polygon(1);

    for resolution in [10, 100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("resolution", resolution),
            resolution,
            |b, &resolution| b.iter(|| black_box(sample_curve(&points, resolution))),
        );
    }

    group.finish();
}

/// Benchmark: Composite curves with more segments at a fixed resolution
fn bench_sample_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_composite");

    for segments in [1, 4, 16, 64].iter() {
        let points = control_polygon(*segments);
        group.bench_with_input(BenchmarkId::new("segments", segments), segments, |b, _| {
            b.iter(|| black_box(sample_curve(&points, 1000)))
        });
    }

    group.finish();
}

/// Benchmark: One update + render pass over many following objects
fn bench_frame_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let camera = Camera::default();

    for count in [1, 10, 100].iter() {
        let mut state = following_scene(*count);
        let mut renderer = LogRenderer::new();
        let mut frames = FixedStepFrames::at_hz(60.0);

        group.bench_with_input(BenchmarkId::new("objects", count), count, |b, _| {
            b.iter(|| {
                if let Some(frame) = frames.next() {
                    state.update(&frame);
                    state.render(&mut renderer, &camera, 16.0 / 9.0, &frame);
                }
                black_box(renderer.mesh_draws())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cubic_evaluation,
    bench_sample_resolution,
    bench_sample_segments,
    bench_frame_update,
);

criterion_main!(benches);
