mod bezier;

pub use bezier::{
    cubic_bezier, evaluate_composite, sample_curve, segment_count, BezierCurve,
    MIN_CONTROL_POINTS,
};
