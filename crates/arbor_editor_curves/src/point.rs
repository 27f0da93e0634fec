// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sampled curve points.

use serde::{Deserialize, Serialize};

/// A sampled point on a response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position along the input axis
    pub x: f64,
    /// Curve value, nominally within [-1, 1]
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
