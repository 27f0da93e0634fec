// SPDX-License-Identifier: MIT OR Apache-2.0
//! Response-curve generators for Arbor Editor.
//!
//! This crate provides the utility curves used to tune character AI:
//! - Fourteen deterministic curve generators, from straight lines to
//!   Gaussian bells and Bezier curves
//! - A parameter catalog that drives the curve editor's input form
//! - Blackboard value lookups bounding the input axis
//!
//! ## Architecture
//!
//! Generators are pure functions from an x range and a [`CurveParams`] to an
//! ordered point sequence with y nominally inside [-1, 1]. They never fail:
//! missing or degenerate parameters degrade to an empty sequence or a
//! documented fallback. The crate has no dependency on the tree model; the
//! curve editor drives it directly.

pub mod catalog;
pub mod generators;
pub mod params;
pub mod point;

pub use catalog::{value_lookup, CurveKind, ParamDoc, ValueLookup, VALUE_LOOKUPS};
pub use generators::DEFAULT_SAMPLE_COUNT;
pub use params::CurveParams;
pub use point::Point;
