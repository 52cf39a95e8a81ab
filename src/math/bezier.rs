use glam::Vec3;

/// Minimum number of control points for a single cubic segment
pub const MIN_CONTROL_POINTS: usize = 4;

/// Evaluate one cubic Bezier segment at `t` using the Bernstein form
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Number of complete cubic segments a control polygon holds.
/// Segments share endpoints, so `n` points give `(n - 1) / 3` segments.
pub fn segment_count(point_count: usize) -> usize {
    if point_count < MIN_CONTROL_POINTS {
        0
    } else {
        (point_count - 1) / 3
    }
}

/// Evaluate a composite cubic curve at global parameter `t` in [0, 1].
/// Returns `None` when the control polygon has no complete segment.
pub fn evaluate_composite(control_points: &[Vec3], t: f32) -> Option<Vec3> {
    let segments = segment_count(control_points.len());
    if segments == 0 {
        return None;
    }

    let scaled = t.clamp(0.0, 1.0) * segments as f32;
    let segment = (scaled.floor() as usize).min(segments - 1);
    let local_t = scaled - segment as f32;

    let base = segment * 3;
    Some(cubic_bezier(
        control_points[base],
        control_points[base + 1],
        control_points[base + 2],
        control_points[base + 3],
        local_t,
    ))
}

/// Sample a composite cubic curve at `resolution` evenly spaced parameters.
/// Degenerate control polygons produce an empty sequence.
pub fn sample_curve(control_points: &[Vec3], resolution: usize) -> Vec<Vec3> {
    if segment_count(control_points.len()) == 0 {
        return Vec::new();
    }

    match resolution {
        0 => Vec::new(),
        1 => vec![control_points[0]],
        _ => {
            let last = (resolution - 1) as f32;
            (0..resolution)
                .filter_map(|k| evaluate_composite(control_points, k as f32 / last))
                .collect()
        }
    }
}

/// Bezier path with its precomputed sample sequence
///
/// The control polygon is immutable once built, so the samples are computed
/// exactly once. Extra trailing points that do not complete a segment are kept
/// but ignored by evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    control_points: Vec<Vec3>,
    samples: Vec<Vec3>,
}

impl BezierCurve {
    /// Build a curve and sample it at `resolution` points.
    ///
    /// `t_k = k / (resolution - 1)` needs at least two samples to reach both
    /// endpoints. A resolution of 1 yields only the first control point and 0
    /// yields no samples; callers that read curves from user input reject
    /// both.
    pub fn build(control_points: Vec<Vec3>, resolution: usize) -> Self {
        let samples = sample_curve(&control_points, resolution);
        Self {
            control_points,
            samples,
        }
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// True when the curve has no usable samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        segment_count(self.control_points.len())
    }

    /// Sample at `index`, or `None` outside `[0, sample_count)`
    pub fn point_at(&self, index: usize) -> Option<Vec3> {
        self.samples.get(index).copied()
    }

    /// Evaluate the continuous curve, bypassing the sample table
    pub fn evaluate(&self, t: f32) -> Option<Vec3> {
        evaluate_composite(&self.control_points, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_polygon() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_cubic_endpoints_are_exact() {
        let p = square_polygon();
        assert_eq!(cubic_bezier(p[0], p[1], p[2], p[3], 0.0), p[0]);
        assert_eq!(cubic_bezier(p[0], p[1], p[2], p[3], 1.0), p[3]);
    }

    #[test]
    fn test_cubic_midpoint() {
        let p = square_polygon();
        let mid = cubic_bezier(p[0], p[1], p[2], p[3], 0.5);
        assert!(mid.abs_diff_eq(Vec3::new(0.75, 0.5, 0.0), 1e-6));
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count(0), 0);
        assert_eq!(segment_count(3), 0);
        assert_eq!(segment_count(4), 1);
        assert_eq!(segment_count(6), 1);
        assert_eq!(segment_count(7), 2);
        assert_eq!(segment_count(10), 3);
    }

    #[test]
    fn test_degenerate_polygon_has_no_samples() {
        let curve = BezierCurve::build(vec![Vec3::ZERO, Vec3::X, Vec3::Y], 50);
        assert!(curve.is_empty());
        assert_eq!(curve.sample_count(), 0);
        assert_eq!(curve.point_at(0), None);
        assert_eq!(curve.evaluate(0.5), None);
    }

    #[test]
    fn test_zero_resolution_is_empty() {
        let curve = BezierCurve::build(square_polygon(), 0);
        assert!(curve.is_empty());
    }

    #[test]
    fn test_single_sample_is_start_point() {
        let curve = BezierCurve::build(square_polygon(), 1);
        assert_eq!(curve.sample_count(), 1);
        assert_eq!(curve.point_at(0), Some(Vec3::ZERO));
    }

    #[test]
    fn test_composite_joins_segments() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ];
        // Halfway through the global parameter lands on the shared endpoint
        let joint = evaluate_composite(&points, 0.5).unwrap();
        assert!(joint.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert_eq!(evaluate_composite(&points, 1.0), Some(points[6]));
    }

    #[test]
    fn test_trailing_points_are_ignored() {
        let mut points = square_polygon();
        points.push(Vec3::new(9.0, 9.0, 9.0));
        let curve = BezierCurve::build(points, 10);
        assert_eq!(curve.control_points().len(), 5);
        assert_eq!(curve.segment_count(), 1);
        assert_eq!(curve.point_at(9), Some(Vec3::new(0.0, 1.0, 0.0)));
    }
}
