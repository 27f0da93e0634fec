// SPDX-License-Identifier: MIT OR Apache-2.0
//! The curve catalog.
//!
//! Maps each curve kind to its description and named parameters; the editor
//! builds its parameter form from this table and then calls
//! [`CurveKind::sample`]. Also carries the blackboard value lookups that
//! bound the input axis of a response curve.

use crate::generators;
use crate::params::CurveParams;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Documentation for one named curve parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDoc {
    /// Parameter name, matching the [`CurveParams`] field
    pub name: &'static str,
    /// What the parameter controls
    pub description: &'static str,
}

/// The available curve kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Straight line
    Linear,
    /// Jump from a base value to 1 at a threshold
    Step,
    /// Slow start that gradually speeds up
    Logarithmic,
    /// Accelerating growth
    Exponential,
    /// U-shaped or inverted-U parabola
    Quadratic,
    /// Bell curve
    Gaussian,
    /// S-curve spanning -1 to 1
    Tanh,
    /// Oscillation starting at the amplitude
    Cosine,
    /// Oscillation starting at zero
    Sine,
    /// S-curve with adjustable steepness
    Logistic,
    /// Eased ramp
    Smoothstep,
    /// Cubic polynomial
    Cubic,
    /// Bezier curve over user control points
    Bezier,
    /// Piecewise-linear interpolation over user control points
    Lerp,
}

impl CurveKind {
    /// All kinds, in palette order
    pub fn all() -> &'static [CurveKind] {
        &[
            Self::Linear,
            Self::Step,
            Self::Logarithmic,
            Self::Exponential,
            Self::Quadratic,
            Self::Gaussian,
            Self::Tanh,
            Self::Cosine,
            Self::Sine,
            Self::Logistic,
            Self::Smoothstep,
            Self::Cubic,
            Self::Bezier,
            Self::Lerp,
        ]
    }

    /// Catalog key for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Step => "step",
            Self::Logarithmic => "logarithmic",
            Self::Exponential => "exponential",
            Self::Quadratic => "quadratic",
            Self::Gaussian => "gaussian",
            Self::Tanh => "tanh",
            Self::Cosine => "cosine",
            Self::Sine => "sine",
            Self::Logistic => "logistic",
            Self::Smoothstep => "smoothstep",
            Self::Cubic => "cubic",
            Self::Bezier => "bezier",
            Self::Lerp => "lerp",
        }
    }

    /// Look up a kind by its catalog key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }

    /// Human description shown in the curve palette
    pub fn description(&self) -> &'static str {
        match self {
            Self::Linear => {
                "The linear function creates a straight line. The output increases at a \
                 constant rate as the input increases."
            }
            Self::Step => {
                "The step function creates a curve that jumps from `base` to 1 at a specific \
                 input value (threshold)."
            }
            Self::Logarithmic => {
                "The logarithmic function creates a curve that increases slowly at first and \
                 then gradually speeds up."
            }
            Self::Exponential => {
                "The exponential function creates a curve that increases slowly at first and \
                 then speeds up."
            }
            Self::Quadratic => {
                "The quadratic function creates a U-shaped or inverted U-shaped curve, \
                 depending on the parameters."
            }
            Self::Gaussian => {
                "The Gaussian function creates a bell-shaped curve, often used to represent \
                 a normal distribution."
            }
            Self::Tanh => {
                "The tanh function creates an S-shaped curve similar to the sigmoid but \
                 ranging from -1 to 1."
            }
            Self::Cosine => {
                "The cosine function creates a wave-like curve that oscillates between \
                 positive and negative values."
            }
            Self::Sine => {
                "The sine function creates a wave-like curve similar to cosine, starting \
                 at 0."
            }
            Self::Logistic => "The logistic function creates an S-shaped curve.",
            Self::Smoothstep => {
                "The smoothstep function creates a smooth curve that starts slow, \
                 accelerates, and then slows down again. Can be a smooth or a smoother curve \
                 based on the degree."
            }
            Self::Cubic => {
                "The cubic function can create a variety of curve shapes depending on the \
                 parameters. It can have zero, one, or two inflection points."
            }
            Self::Bezier => {
                "The Bezier function creates a freeform curve shaped by a set of control \
                 points."
            }
            Self::Lerp => {
                "The lerp function draws straight segments through a set of control points."
            }
        }
    }

    /// Named parameters this kind's generator reads
    pub fn parameters(&self) -> &'static [ParamDoc] {
        match self {
            Self::Linear => &[
                ParamDoc {
                    name: "m",
                    description: "The slope of the line. Determines how steep the line is.",
                },
                ParamDoc {
                    name: "b",
                    description: "The y-intercept of the line. Determines where the line \
                                  crosses the y-axis.",
                },
            ],
            Self::Step => &[
                ParamDoc {
                    name: "base",
                    description: "The base value of the step.",
                },
                ParamDoc {
                    name: "threshold",
                    description: "The input value where the step occurs.",
                },
            ],
            Self::Logarithmic => &[
                ParamDoc {
                    name: "clamp",
                    description: "The minimum value as the input approaches 0",
                },
                ParamDoc {
                    name: "base",
                    description: "The base of the logarithm. Common values are e (natural \
                                  logarithm) or 10.",
                },
            ],
            Self::Exponential => &[ParamDoc {
                name: "base",
                description: "The base of the exponential. If not provided, e is used.",
            }],
            Self::Quadratic => &[
                ParamDoc {
                    name: "a",
                    description: "Coefficients that define the curve's shape.",
                },
                ParamDoc {
                    name: "b",
                    description: "Coefficients that define the curve's shape.",
                },
                ParamDoc {
                    name: "c",
                    description: "Coefficients that define the curve's shape.",
                },
            ],
            Self::Gaussian => &[
                ParamDoc {
                    name: "floor",
                    description: "The floor of the function, a value between -1 and 1",
                },
                ParamDoc {
                    name: "mean",
                    description: "The center of the bell curve.",
                },
                ParamDoc {
                    name: "sigma",
                    description: "The width of the bell curve.",
                },
            ],
            Self::Tanh => &[],
            Self::Cosine | Self::Sine => &[
                ParamDoc {
                    name: "frequency",
                    description: "The number of oscillations.",
                },
                ParamDoc {
                    name: "amplitude",
                    description: "The height of the oscillations.",
                },
            ],
            Self::Logistic => &[ParamDoc {
                name: "a",
                description: "Controls the steepness of the curve.",
            }],
            Self::Smoothstep => &[ParamDoc {
                name: "degree",
                description: "The degree of smoothness; use 3 for smooth and 5 for smoother.",
            }],
            Self::Cubic => &[
                ParamDoc {
                    name: "a",
                    description: "Coefficients that define the curve's shape.",
                },
                ParamDoc {
                    name: "b",
                    description: "Coefficients that define the curve's shape.",
                },
                ParamDoc {
                    name: "c",
                    description: "Coefficients that define the curve's shape.",
                },
                ParamDoc {
                    name: "d",
                    description: "Coefficients that define the curve's shape.",
                },
            ],
            Self::Bezier => &[],
            Self::Lerp => &[ParamDoc {
                name: "base",
                description: "Initial Y value",
            }],
        }
    }

    /// Sample this kind's generator over `[min_x, max_x]`.
    ///
    /// `sample_count` is ignored by the kinds whose density is fixed by
    /// their shape (step) or by the control points (lerp).
    pub fn sample(
        &self,
        min_x: f64,
        max_x: f64,
        params: &CurveParams,
        sample_count: usize,
    ) -> Vec<Point> {
        match self {
            Self::Linear => generators::linear_points(min_x, max_x, params, sample_count),
            Self::Step => generators::step_points(min_x, max_x, params),
            Self::Logarithmic => {
                generators::logarithmic_points(min_x, max_x, params, sample_count)
            }
            Self::Exponential => {
                generators::exponential_points(min_x, max_x, params, sample_count)
            }
            Self::Quadratic => generators::quadratic_points(min_x, max_x, params, sample_count),
            Self::Gaussian => generators::gaussian_points(min_x, max_x, params, sample_count),
            Self::Tanh => generators::tanh_points(min_x, max_x, sample_count),
            Self::Cosine => generators::cosine_points(min_x, max_x, params, sample_count),
            Self::Sine => generators::sine_points(min_x, max_x, params, sample_count),
            Self::Logistic => generators::logistic_points(min_x, max_x, params, sample_count),
            Self::Smoothstep => {
                generators::smoothstep_points(min_x, max_x, params, sample_count)
            }
            Self::Cubic => generators::cubic_points(min_x, max_x, params, sample_count),
            Self::Bezier => generators::bezier_points(min_x, max_x, params, sample_count),
            Self::Lerp => generators::lerp_points(min_x, max_x, params),
        }
    }
}

/// A blackboard value a response curve can be driven by, with its input
/// range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueLookup {
    /// Blackboard key
    pub name: &'static str,
    /// Smallest value the key takes
    pub min: f64,
    /// Largest value the key takes
    pub max: f64,
}

/// Blackboard values available to drive response curves
pub const VALUE_LOOKUPS: &[ValueLookup] = &[
    ValueLookup {
        name: "MyHealth",
        min: 0.0,
        max: 100.0,
    },
    ValueLookup {
        name: "AverageGroupHealth",
        min: 0.0,
        max: 100.0,
    },
    ValueLookup {
        name: "Grouped",
        min: 0.0,
        max: 1.0,
    },
    ValueLookup {
        name: "GroupMembers",
        min: 0.0,
        max: 5.0,
    },
];

/// Look up a blackboard value's range by key
pub fn value_lookup(name: &str) -> Option<&'static ValueLookup> {
    VALUE_LOOKUPS.iter().find(|lookup| lookup.name == name)
}
