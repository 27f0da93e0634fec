// SPDX-License-Identifier: MIT OR Apache-2.0
//! The nested JSON wire format consumed by the runtime.
//!
//! A document is a single root node; children nest recursively. Wire ids are
//! carried for the runtime's benefit but ignored on import, where the store
//! always assigns fresh ids.

use crate::node::{InputValue, NodeType};
use crate::schema::{InputDecl, InputType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node of a serialized tree document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireNode {
    /// Node id as written by the exporter; ignored on import
    #[serde(default)]
    pub id: String,
    /// Wire type string ("SequenceNode", ...); unrecognized types fail to
    /// parse
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Input values keyed by declared input name
    #[serde(default)]
    pub inputs: IndexMap<String, InputValue>,
    /// Child documents, in execution order
    #[serde(default)]
    pub children: Vec<WireNode>,
}

impl WireNode {
    /// Total number of nodes in this document
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(WireNode::node_count).sum::<usize>()
    }
}

/// A wire value that does not match its declared input type
#[derive(Debug, thiserror::Error)]
#[error("input '{input}' on {node_type} expects {expected}")]
pub struct MismatchedInput {
    /// Wire type name of the offending node
    pub node_type: &'static str,
    /// Input name
    pub input: String,
    /// Declared type name
    pub expected: &'static str,
}

/// Normalize a wire value against its declaration.
///
/// List inputs accept either a true array or a comma-joined string; an empty
/// string becomes an empty list. Scalar inputs must already carry the
/// declared variant.
pub(crate) fn normalize_input(
    node_type: NodeType,
    decl: &InputDecl,
    value: &InputValue,
) -> Result<InputValue, MismatchedInput> {
    let mismatch = || MismatchedInput {
        node_type: node_type.wire_name(),
        input: decl.name.clone(),
        expected: decl.input_type.name(),
    };
    match decl.input_type {
        InputType::StringList => match value {
            InputValue::StringList(list) => Ok(InputValue::StringList(list.clone())),
            InputValue::String(s) if s.is_empty() => Ok(InputValue::StringList(Vec::new())),
            InputValue::String(s) => Ok(InputValue::StringList(
                s.split(',').map(str::to_string).collect(),
            )),
            _ => Err(mismatch()),
        },
        InputType::String | InputType::Condition => match value {
            InputValue::String(_) => Ok(value.clone()),
            _ => Err(mismatch()),
        },
        InputType::Number => match value {
            InputValue::Number(_) => Ok(value.clone()),
            _ => Err(mismatch()),
        },
        InputType::Bool => match value {
            InputValue::Bool(_) => Ok(value.clone()),
            _ => Err(mismatch()),
        },
    }
}
