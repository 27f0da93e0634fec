// SPDX-License-Identifier: MIT OR Apache-2.0
//! Curve parameter sets.

use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Named parameters for the curve generators.
///
/// Every field is optional; each generator documents which fields it needs
/// and degrades to an empty sample sequence when a required one is missing.
/// Fields are shared between kinds where the reference catalog shares them
/// (`a`..`d` serve the polynomial kinds, `base` serves step, logarithmic,
/// exponential and lerp).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Slope of the linear curve
    pub m: Option<f64>,
    /// Intercept of the linear curve; also a polynomial coefficient
    pub b: Option<f64>,
    /// Base value for step and lerp, logarithm/exponential base otherwise
    pub base: Option<f64>,
    /// Input position where the step jumps
    pub threshold: Option<f64>,
    /// Floor for logarithm values at non-positive inputs
    pub clamp: Option<f64>,
    /// Polynomial coefficient; steepness for the logistic curve
    pub a: Option<f64>,
    /// Polynomial coefficient
    pub c: Option<f64>,
    /// Polynomial coefficient
    pub d: Option<f64>,
    /// Center of the Gaussian bell
    pub mean: Option<f64>,
    /// Width of the Gaussian bell
    pub sigma: Option<f64>,
    /// Floor of the Gaussian, between -1 and 1
    pub floor: Option<f64>,
    /// Number of oscillations for sine/cosine
    pub frequency: Option<f64>,
    /// Height of the oscillations for sine/cosine
    pub amplitude: Option<f64>,
    /// Smoothstep degree: 3 for smooth, 5 for smoother
    pub degree: Option<f64>,
    /// How many of `points` the Bezier curve uses
    pub control_points: Option<usize>,
    /// User-supplied control points for Bezier and lerp
    pub points: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_unset() {
        let params = CurveParams::default();
        assert_eq!(params.m, None);
        assert_eq!(params.control_points, None);
        assert!(params.points.is_empty());
    }

    #[test]
    fn test_deserializes_from_partial_json() {
        let params: CurveParams =
            serde_json::from_str(r#"{"base": -1.0, "threshold": 5.0}"#).unwrap();
        assert_eq!(params.base, Some(-1.0));
        assert_eq!(params.threshold, Some(5.0));
        assert_eq!(params.m, None);
    }
}
