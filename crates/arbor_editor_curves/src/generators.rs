// SPDX-License-Identifier: MIT OR Apache-2.0
//! The curve generators.
//!
//! Each generator maps an x range and a [`CurveParams`] to an ordered sample
//! sequence with y nominally inside [-1, 1]; how strictly the band is
//! enforced varies per generator and is part of its contract. Sampling is
//! uniform with `sample_count` points, except [`step_points`] (four corner
//! points) and [`lerp_points`] (ten substeps per user segment). Generators
//! never fail: a missing required parameter or a degenerate input yields an
//! empty sequence or the documented fallback value instead.

use crate::params::CurveParams;
use crate::point::Point;

/// Sample count used when the caller has no preference
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Straight line `y = m*x + b`, clamped to [-1, 1].
///
/// Requires `m` and `b`.
pub fn linear_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let (Some(m), Some(b)) = (params.m, params.b) else {
        return Vec::new();
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let y = (m * x + b).clamp(-1.0, 1.0);
            Point::new(x, y)
        })
        .collect()
}

/// Step from `base` up to 1 at `threshold`.
///
/// Emits the four corner points exactly; the threshold is clamped into the
/// x range. Requires `base` and `threshold`.
pub fn step_points(min_x: f64, max_x: f64, params: &CurveParams) -> Vec<Point> {
    let (Some(base), Some(threshold)) = (params.base, params.threshold) else {
        return Vec::new();
    };
    let threshold = threshold.clamp(min_x, max_x);
    vec![
        Point::new(min_x, base),
        Point::new(threshold, base),
        Point::new(threshold, 1.0),
        Point::new(max_x, 1.0),
    ]
}

/// Logarithm rescaled into the [-1, 1] band.
///
/// Non-positive inputs take the configured `clamp` value, which also floors
/// the scaled output. `base` defaults to e. Requires `clamp`.
pub fn logarithmic_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let Some(clamp) = params.clamp else {
        return Vec::new();
    };
    let base = params.base.filter(|b| *b != 0.0).unwrap_or(std::f64::consts::E);
    let compute_log = |input: f64| {
        if input <= 0.0 {
            clamp
        } else {
            input.ln() / base.ln()
        }
    };

    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;

    // First pass: the scaling constants over the sampled domain.
    let mut min_log = f64::INFINITY;
    let mut max_log = f64::NEG_INFINITY;
    let mut x = min_x;
    while x <= max_x {
        let value = compute_log(x);
        min_log = min_log.min(value);
        max_log = max_log.max(value);
        x += step;
    }
    max_log = max_log.min(10.0);

    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let adjusted_max = max_log.max(f64::EPSILON);
            let scaled = ((compute_log(x) - min_log) / (adjusted_max - min_log)) * 2.0 - 1.0;
            Point::new(x, scaled.max(clamp).min(1.0))
        })
        .collect()
}

/// Exponential `base^x` rescaled into the [-1, 1] band.
///
/// The observed maximum is capped at 10 before scaling, so steep bases still
/// land inside the band. `base` defaults to e.
pub fn exponential_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let base = params.base.unwrap_or(std::f64::consts::E);
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;

    let mut min_exp = f64::INFINITY;
    let mut max_exp = f64::NEG_INFINITY;
    let mut x = min_x;
    while x <= max_x {
        let value = base.powf(x);
        min_exp = min_exp.min(value);
        max_exp = max_exp.max(value);
        x += step;
    }
    if max_exp > 10.0 {
        max_exp = 10.0;
    }
    let scale = min_exp.abs().max(max_exp.abs());
    let (min_exp, max_exp) = (-scale, scale);

    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let input = base.powf(x) - base.powf(min_x);
            let y = ((input - min_exp) / (max_exp - min_exp)) * 2.0 - 1.0;
            Point::new(x, y.clamp(-1.0, 1.0))
        })
        .collect()
}

/// Parabola over x normalized to [-1, 1] around the range midpoint.
///
/// The raw value is doubled, then clamped into the band. Requires `a`, `b`
/// and `c`.
pub fn quadratic_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let (Some(a), Some(b), Some(c)) = (params.a, params.b, params.c) else {
        return Vec::new();
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    let mid_x = min_x + (max_x - min_x) / 2.0;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let nx = ((x - mid_x) / (max_x - min_x)) * 2.0;
            let y = a * nx * nx + b * nx + c;
            Point::new(x, (y * 2.0).clamp(-1.0, 1.0))
        })
        .collect()
}

/// Bell curve with its peak scaled to 1 and its tails approaching `floor`.
///
/// Requires `mean`, `sigma` and `floor`; `sigma` must be non-zero.
pub fn gaussian_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let (Some(mean), Some(sigma), Some(floor)) = (params.mean, params.sigma, params.floor) else {
        return Vec::new();
    };
    let gaussian = |x: f64| (-(x - mean).powi(2) / (2.0 * sigma.powi(2))).exp();
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    let max_y = gaussian(mean);
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let y = floor + gaussian(x) * (1.0 - floor);
            Point::new(x, y / max_y)
        })
        .collect()
}

/// Hyperbolic tangent over x rescaled to span [-3, 3].
///
/// Takes no parameters.
pub fn tanh_points(min_x: f64, max_x: f64, sample_count: usize) -> Vec<Point> {
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    let range = max_x - min_x;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let scaled_x = ((x - min_x) / range) * 6.0 - 3.0;
            Point::new(x, scaled_x.tanh())
        })
        .collect()
}

/// Cosine wave with `frequency` oscillations over the range.
///
/// Requires `frequency` and `amplitude`; an amplitude within [-1, 1] keeps
/// the output inside the band on its own.
pub fn cosine_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let (Some(frequency), Some(amplitude)) = (params.frequency, params.amplitude) else {
        return Vec::new();
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let nx = (2.0 * std::f64::consts::PI * frequency * (x - min_x)) / (max_x - min_x);
            Point::new(x, amplitude * nx.cos())
        })
        .collect()
}

/// Sine wave with `frequency` oscillations over the range.
///
/// Requires `frequency` and `amplitude`.
pub fn sine_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let (Some(frequency), Some(amplitude)) = (params.frequency, params.amplitude) else {
        return Vec::new();
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let nx = (2.0 * std::f64::consts::PI * frequency * (x - min_x)) / (max_x - min_x);
            Point::new(x, amplitude * nx.sin())
        })
        .collect()
}

/// Logistic S-curve over x normalized to [-1, 1], rescaled to the band.
///
/// Requires `a`, the steepness.
pub fn logistic_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let Some(a) = params.a else {
        return Vec::new();
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    let mid_x = (min_x + max_x) / 2.0;
    let range = max_x - min_x;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let nx = (2.0 * (x - mid_x)) / range;
            let y = 1.0 / (1.0 + (-a * nx).exp());
            Point::new(x, 2.0 * (y - 0.5))
        })
        .collect()
}

/// Smoothstep over x normalized to [0, 1].
///
/// `degree` 3 gives the cubic form, 5 the quintic; anything else falls back
/// to the identity ramp.
pub fn smoothstep_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    let smoothstep = |x: f64| match params.degree {
        Some(d) if d == 3.0 => x * x * (3.0 - 2.0 * x),
        Some(d) if d == 5.0 => x * x * x * (x * (x * 6.0 - 15.0) + 10.0),
        _ => x,
    };
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let nx = (x - min_x) / (max_x - min_x);
            Point::new(x, smoothstep(nx))
        })
        .collect()
}

/// Cubic polynomial over x normalized to [-1, 1].
///
/// The raw value is emitted unclamped; coefficients that leave [-1, 1] leave
/// the band with it. Requires `a`, `b`, `c` and `d`.
pub fn cubic_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let (Some(a), Some(b), Some(c), Some(d)) = (params.a, params.b, params.c, params.d) else {
        return Vec::new();
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let step = (max_x - min_x) / (sample_count - 1) as f64;
    (0..sample_count)
        .map(|i| {
            let x = min_x + i as f64 * step;
            let nx = ((x - min_x) / (max_x - min_x)) * 2.0 - 1.0;
            let y = a * nx * nx * nx + b * nx * nx + c * nx + d;
            Point::new(x, y)
        })
        .collect()
}

/// Bezier curve over the y values of the first `control_points` entries of
/// `points`, with t mapped onto the x range.
///
/// An unset or zero `control_points` yields an empty sequence.
pub fn bezier_points(
    min_x: f64,
    max_x: f64,
    params: &CurveParams,
    sample_count: usize,
) -> Vec<Point> {
    let control_count = match params.control_points {
        Some(count) if count > 0 => count,
        _ => return Vec::new(),
    };
    if sample_count < 2 {
        return Vec::new();
    }
    let control = &params.points[..control_count.min(params.points.len())];
    let step = 1.0 / (sample_count - 1) as f64;
    (0..sample_count)
        .map(|i| {
            let t = i as f64 * step;
            let y = bezier_interpolation(t, control);
            let x = min_x + t * (max_x - min_x);
            Point::new(x, y)
        })
        .collect()
}

fn bezier_interpolation(t: f64, control: &[Point]) -> f64 {
    let degree = control.len().saturating_sub(1);
    control
        .iter()
        .enumerate()
        .map(|(i, point)| {
            binomial_coefficient(degree, i)
                * (1.0 - t).powi((degree - i) as i32)
                * t.powi(i as i32)
                * point.y
        })
        .sum()
}

fn binomial_coefficient(n: usize, k: usize) -> f64 {
    let mut coefficient = 1.0;
    for i in (n - k)..n {
        coefficient *= (i + 1) as f64;
    }
    for i in 1..=k {
        coefficient /= i as f64;
    }
    coefficient
}

/// Piecewise-linear interpolation through the user-supplied `points`.
///
/// A starting point at `(min_x, base)` is prepended (`base` defaults to 0),
/// each segment is traced with ten substeps, and the value at `max_x` is
/// appended, extrapolated from the final segment when needed. Values clamp
/// to [-1, 1]. Two points sharing an x interpolate to the first point's y.
/// No points yields an empty sequence.
pub fn lerp_points(min_x: f64, max_x: f64, params: &CurveParams) -> Vec<Point> {
    if params.points.is_empty() {
        return Vec::new();
    }
    let clamp_y = |y: f64| y.clamp(-1.0, 1.0);
    let interpolate = |x: f64, p1: Point, p2: Point| {
        if p1.x == p2.x {
            p1.y
        } else {
            p1.y + ((p2.y - p1.y) * (x - p1.x)) / (p2.x - p1.x)
        }
    };

    let base = params.base.unwrap_or(0.0);
    let mut anchors = Vec::with_capacity(params.points.len() + 1);
    anchors.push(Point::new(min_x, clamp_y(base)));
    anchors.extend(params.points.iter().copied());

    let mut points = Vec::new();
    for pair in anchors.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let substep = (p2.x - p1.x) / 10.0;
        let mut x = p1.x;
        while x < p2.x {
            points.push(Point::new(x, clamp_y(interpolate(x, p1, p2))));
            x += substep;
        }
    }

    let last = anchors[anchors.len() - 1];
    if max_x > last.x {
        let before_last = anchors[anchors.len() - 2];
        let y = clamp_y(interpolate(max_x, before_last, last));
        points.push(Point::new(max_x, y));
    } else if max_x == last.x {
        points.push(Point::new(max_x, clamp_y(last.y)));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CurveParams {
        CurveParams::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_linear_without_slope_or_intercept_is_empty() {
        assert!(linear_points(0.0, 10.0, &params(), 200).is_empty());
        let only_m = CurveParams {
            m: Some(1.0),
            ..params()
        };
        assert!(linear_points(0.0, 10.0, &only_m, 200).is_empty());
    }

    #[test]
    fn test_linear_clamps_to_the_unit_band() {
        let line = CurveParams {
            m: Some(1.0),
            b: Some(0.0),
            ..params()
        };
        let points = linear_points(-2.0, 2.0, &line, 5);
        let expected = [
            (-2.0, -1.0),
            (-1.0, -1.0),
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 1.0),
        ];
        assert_eq!(points.len(), expected.len());
        for (point, (x, y)) in points.iter().zip(expected) {
            assert_eq!((point.x, point.y), (x, y));
        }
    }

    #[test]
    fn test_step_matches_the_reference_corners() {
        let step = CurveParams {
            base: Some(-1.0),
            threshold: Some(5.0),
            ..params()
        };
        let points = step_points(0.0, 10.0, &step);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, -1.0),
                Point::new(5.0, -1.0),
                Point::new(5.0, 1.0),
                Point::new(10.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_step_clamps_the_threshold_into_range() {
        let step = CurveParams {
            base: Some(0.0),
            threshold: Some(15.0),
            ..params()
        };
        let points = step_points(0.0, 10.0, &step);
        assert_eq!(points[1], Point::new(10.0, 0.0));
        assert_eq!(points[2], Point::new(10.0, 1.0));
    }

    #[test]
    fn test_step_without_params_is_empty() {
        assert!(step_points(0.0, 10.0, &params()).is_empty());
    }

    #[test]
    fn test_logarithmic_without_clamp_is_empty() {
        assert!(logarithmic_points(0.0, 10.0, &params(), 200).is_empty());
    }

    #[test]
    fn test_logarithmic_floors_non_positive_inputs() {
        let log = CurveParams {
            clamp: Some(-1.0),
            ..params()
        };
        let points = logarithmic_points(-5.0, 5.0, &log, 11);
        assert_eq!(points.len(), 11);
        // the whole non-positive half sits on the clamp floor
        for point in &points[..6] {
            assert_eq!(point.y, -1.0);
        }
        // the observed maximum maps to the top of the band
        assert_eq!(points[10].y, 1.0);
        for point in &points {
            assert!((-1.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn test_exponential_starts_at_the_band_midpoint() {
        let points = exponential_points(0.0, 1.0, &params(), 5);
        assert_eq!(points[0].y, 0.0);
        for pair in points.windows(2) {
            assert!(pair[1].y > pair[0].y, "not increasing: {pair:?}");
        }
        for point in &points {
            assert!((-1.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn test_quadratic_traces_a_clamped_bowl() {
        let bowl = CurveParams {
            a: Some(1.0),
            b: Some(0.0),
            c: Some(0.0),
            ..params()
        };
        let points = quadratic_points(-1.0, 1.0, &bowl, 5);
        let expected = [1.0, 0.5, 0.0, 0.5, 1.0];
        for (point, y) in points.iter().zip(expected) {
            assert_eq!(point.y, y);
        }
    }

    #[test]
    fn test_quadratic_without_coefficients_is_empty() {
        assert!(quadratic_points(-1.0, 1.0, &params(), 5).is_empty());
    }

    #[test]
    fn test_gaussian_peaks_at_the_mean() {
        let bell = CurveParams {
            mean: Some(5.0),
            sigma: Some(1.0),
            floor: Some(-1.0),
            ..params()
        };
        let points = gaussian_points(0.0, 10.0, &bell, 11);
        assert_eq!(points[5], Point::new(5.0, 1.0));
        // the tails flatten onto the floor
        assert!(points[0].y < -0.99);
        assert!(points[10].y < -0.99);
    }

    #[test]
    fn test_tanh_is_odd_around_the_range_midpoint() {
        let points = tanh_points(0.0, 4.0, 5);
        assert_eq!(points[2].y, 0.0);
        assert_close(points[0].y, -(3.0f64.tanh()));
        assert_close(points[4].y, 3.0f64.tanh());
        for (left, right) in points.iter().zip(points.iter().rev()) {
            assert_close(left.y, -right.y);
        }
    }

    #[test]
    fn test_cosine_starts_at_the_amplitude() {
        let wave = CurveParams {
            frequency: Some(1.0),
            amplitude: Some(0.5),
            ..params()
        };
        let points = cosine_points(0.0, 1.0, &wave, 5);
        assert_eq!(points[0].y, 0.5);
        assert_close(points[2].y, -0.5);
        assert_close(points[4].y, 0.5);
    }

    #[test]
    fn test_sine_starts_at_zero_and_peaks_at_the_quarter_period() {
        let wave = CurveParams {
            frequency: Some(1.0),
            amplitude: Some(1.0),
            ..params()
        };
        let points = sine_points(0.0, 1.0, &wave, 5);
        assert_eq!(points[0].y, 0.0);
        assert_close(points[1].y, 1.0);
        assert_close(points[3].y, -1.0);
    }

    #[test]
    fn test_waves_without_params_are_empty() {
        assert!(cosine_points(0.0, 1.0, &params(), 5).is_empty());
        assert!(sine_points(0.0, 1.0, &params(), 5).is_empty());
    }

    #[test]
    fn test_logistic_is_odd_symmetric() {
        let s_curve = CurveParams {
            a: Some(2.0),
            ..params()
        };
        let points = logistic_points(0.0, 10.0, &s_curve, 5);
        assert_eq!(points[2].y, 0.0);
        for (left, right) in points.iter().zip(points.iter().rev()) {
            assert_close(left.y, -right.y);
        }
    }

    #[test]
    fn test_smoothstep_passes_through_the_midpoint() {
        for degree in [3.0, 5.0] {
            let smooth = CurveParams {
                degree: Some(degree),
                ..params()
            };
            let points = smoothstep_points(0.0, 1.0, &smooth, 3);
            assert_eq!(points[0].y, 0.0);
            assert_eq!(points[1].y, 0.5);
            assert_eq!(points[2].y, 1.0);
        }
    }

    #[test]
    fn test_smoothstep_falls_back_to_the_identity_ramp() {
        let points = smoothstep_points(0.0, 2.0, &params(), 5);
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        for (point, y) in points.iter().zip(expected) {
            assert_eq!(point.y, y);
        }
    }

    #[test]
    fn test_cubic_identity_coefficients_trace_the_diagonal() {
        let diagonal = CurveParams {
            a: Some(0.0),
            b: Some(0.0),
            c: Some(1.0),
            d: Some(0.0),
            ..params()
        };
        let points = cubic_points(0.0, 2.0, &diagonal, 5);
        let expected = [-1.0, -0.5, 0.0, 0.5, 1.0];
        for (point, y) in points.iter().zip(expected) {
            assert_eq!(point.y, y);
        }
    }

    #[test]
    fn test_cubic_without_coefficients_is_empty() {
        assert!(cubic_points(0.0, 2.0, &params(), 5).is_empty());
    }

    #[test]
    fn test_bezier_without_control_points_is_empty() {
        assert!(bezier_points(0.0, 10.0, &params(), 5).is_empty());
        let zero = CurveParams {
            control_points: Some(0),
            points: vec![Point::new(0.0, 1.0)],
            ..params()
        };
        assert!(bezier_points(0.0, 10.0, &zero, 5).is_empty());
    }

    #[test]
    fn test_bezier_with_a_flat_control_polygon_is_constant() {
        let flat = CurveParams {
            control_points: Some(2),
            points: vec![Point::new(0.0, 0.25), Point::new(1.0, 0.25)],
            ..params()
        };
        let points = bezier_points(0.0, 10.0, &flat, 5);
        assert_eq!(points.len(), 5);
        for point in &points {
            assert_eq!(point.y, 0.25);
        }
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[4].x, 10.0);
    }

    #[test]
    fn test_bezier_uses_only_the_declared_control_points() {
        let declared = CurveParams {
            control_points: Some(2),
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 5.0),
            ],
            ..params()
        };
        let points = bezier_points(0.0, 1.0, &declared, 3);
        // a two-point Bezier is a straight line; the third point is ignored
        assert_close(points[1].y, 0.5);
        assert_close(points[2].y, 1.0);
    }

    #[test]
    fn test_lerp_without_points_is_empty() {
        assert!(lerp_points(0.0, 10.0, &params()).is_empty());
    }

    #[test]
    fn test_lerp_traces_segments_and_appends_the_endpoint() {
        let ramp = CurveParams {
            base: Some(0.0),
            points: vec![Point::new(10.0, 1.0)],
            ..params()
        };
        let points = lerp_points(0.0, 10.0, &ramp);
        // ten substeps plus the endpoint
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[10], Point::new(10.0, 1.0));
        for pair in points.windows(2) {
            assert!(pair[1].y >= pair[0].y);
        }
    }

    #[test]
    fn test_lerp_coincident_xs_fall_back_to_the_first_point() {
        let cliff = CurveParams {
            points: vec![Point::new(2.0, 0.4), Point::new(2.0, 0.9)],
            ..params()
        };
        let points = lerp_points(0.0, 10.0, &cliff);
        // the degenerate segment contributes nothing; the extrapolated
        // endpoint takes the first point's y
        let last = points[points.len() - 1];
        assert_eq!(last, Point::new(10.0, 0.4));
    }

    #[test]
    fn test_lerp_clamps_the_base_and_values() {
        let loud = CurveParams {
            base: Some(5.0),
            points: vec![Point::new(10.0, 3.0)],
            ..params()
        };
        let points = lerp_points(0.0, 10.0, &loud);
        assert_eq!(points[0], Point::new(0.0, 1.0));
        for point in &points {
            assert!((-1.0..=1.0).contains(&point.y));
        }
    }
}
