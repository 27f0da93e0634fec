// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the behavior-tree model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node.
///
/// Ids are of the form `node-NNN` and are handed out by
/// [`TreeStore::generate_id`](crate::store::TreeStore::generate_id); an id is
/// never reused while it is referenced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeCategory {
    /// Nodes with multiple ordered children (sequence, select, parallel)
    Composite,
    /// Single-child wrappers that modify their child's result or policy
    Decorator,
    /// Leaf nodes that perform a character action
    Action,
    /// Leaves that evaluate or force a result (condition, failer, succeeder)
    Other,
}

/// Behavior-tree node kind.
///
/// The serialized names are the wire-format `type` strings consumed by the
/// runtime ("SequenceNode", "CastSpellNode", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Casts spells, disciplines, items, and alternate abilities
    #[serde(rename = "CastSpellNode")]
    CastSpell,
    /// Runs children in order, fails on the first failure
    #[serde(rename = "SequenceNode")]
    Sequence,
    /// Runs children in parallel against a success percentage
    #[serde(rename = "ParallelNode")]
    Parallel,
    /// Returns the first non-failing child's state
    #[serde(rename = "SelectNode")]
    Select,
    /// A select that shuffles its children first
    #[serde(rename = "RandomSelectorNode")]
    RandomSelector,
    /// Inverts its child's result
    #[serde(rename = "InvertNode")]
    Invert,
    /// Repeats its child a number of times or until a condition fails
    #[serde(rename = "LoopNode")]
    Loop,
    /// Repeats its child until it fails
    #[serde(rename = "RepeatNode")]
    Repeat,
    /// Retries its child until it succeeds
    #[serde(rename = "RetryNode")]
    Retry,
    /// Executes a character ability
    #[serde(rename = "AbilityNode")]
    Ability,
    /// Faces a spawn id or location
    #[serde(rename = "FaceNode")]
    Face,
    /// Starts or stops attacking
    #[serde(rename = "AttackNode")]
    Attack,
    /// Memorizes a spell into a gem slot
    #[serde(rename = "MemorizeSpellNode")]
    MemorizeSpell,
    /// Moves the character to a location or target
    #[serde(rename = "MoveToNode")]
    MoveTo,
    /// Manages the character's sitting state
    #[serde(rename = "SitNode")]
    Sit,
    /// Targets an entity
    #[serde(rename = "TargetNode")]
    Target,
    /// Evaluates a blackboard condition
    #[serde(rename = "ConditionNode")]
    Condition,
    /// Always fails
    #[serde(rename = "FailerNode")]
    Failer,
    /// Always succeeds
    #[serde(rename = "SucceederNode")]
    Succeeder,
    /// Pauses execution for a duration
    #[serde(rename = "WaitNode")]
    Wait,
}

impl NodeType {
    /// The wire-format type string for this kind
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::CastSpell => "CastSpellNode",
            Self::Sequence => "SequenceNode",
            Self::Parallel => "ParallelNode",
            Self::Select => "SelectNode",
            Self::RandomSelector => "RandomSelectorNode",
            Self::Invert => "InvertNode",
            Self::Loop => "LoopNode",
            Self::Repeat => "RepeatNode",
            Self::Retry => "RetryNode",
            Self::Ability => "AbilityNode",
            Self::Face => "FaceNode",
            Self::Attack => "AttackNode",
            Self::MemorizeSpell => "MemorizeSpellNode",
            Self::MoveTo => "MoveToNode",
            Self::Sit => "SitNode",
            Self::Target => "TargetNode",
            Self::Condition => "ConditionNode",
            Self::Failer => "FailerNode",
            Self::Succeeder => "SucceederNode",
            Self::Wait => "WaitNode",
        }
    }

    /// Get all node kinds
    pub fn all() -> &'static [NodeType] {
        &[
            Self::CastSpell,
            Self::Sequence,
            Self::Parallel,
            Self::Select,
            Self::RandomSelector,
            Self::Invert,
            Self::Loop,
            Self::Repeat,
            Self::Retry,
            Self::Ability,
            Self::Face,
            Self::Attack,
            Self::MemorizeSpell,
            Self::MoveTo,
            Self::Sit,
            Self::Target,
            Self::Condition,
            Self::Failer,
            Self::Succeeder,
            Self::Wait,
        ]
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Value stored in a node input.
///
/// The variant must match the [`InputType`](crate::schema::InputType) tag the
/// node's schema declares for that input; the store validates this on import
/// and on [`set_input`](crate::store::TreeStore::set_input). List inputs are
/// always held as a real `Vec` in memory, even when the wire form was a
/// comma-joined string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value (also carries condition references)
    String(String),
    /// Ordered list of strings
    StringList(Vec<String>),
}

impl InputValue {
    /// Get as a string slice if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a number if possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as a bool if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as a string list if possible
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(l) => Some(l),
            _ => None,
        }
    }
}

/// A node instance in the tree.
///
/// Nodes are owned exclusively by the [`TreeStore`](crate::store::TreeStore)
/// in a flat id-keyed map; `parent` and `children` are plain id references,
/// never owning links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance id
    pub id: NodeId,
    /// Node kind
    pub node_type: NodeType,
    /// Input values, keyed by the schema's declared input names
    pub inputs: IndexMap<String, InputValue>,
    /// Parent back-reference; `None` for roots
    pub parent: Option<NodeId>,
    /// Ordered child ids (execution order)
    pub children: Vec<NodeId>,
    /// Layout-computed x coordinate
    pub x: f64,
    /// Layout-computed y coordinate
    pub y: f64,
}

impl Node {
    /// Create a new node of the given kind
    pub fn new(node_type: NodeType, id: NodeId) -> Self {
        Self {
            id,
            node_type,
            inputs: IndexMap::new(),
            parent: None,
            children: Vec::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// The node's `name` input, if set
    pub fn name(&self) -> Option<&str> {
        self.inputs.get("name").and_then(InputValue::as_str)
    }

    /// Whether this node has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for node_type in NodeType::all() {
            let json = serde_json::to_string(node_type).unwrap();
            assert_eq!(json, format!("\"{}\"", node_type.wire_name()));
            let back: NodeType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *node_type);
        }
    }

    #[test]
    fn test_unknown_wire_name_is_rejected() {
        let result = serde_json::from_str::<NodeType>("\"TeleportNode\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_input_value_untagged_forms() {
        let bool_value: InputValue = serde_json::from_str("true").unwrap();
        assert_eq!(bool_value, InputValue::Bool(true));

        let number: InputValue = serde_json::from_str("0.1").unwrap();
        assert_eq!(number, InputValue::Number(0.1));

        let string: InputValue = serde_json::from_str("\"spellId\"").unwrap();
        assert_eq!(string, InputValue::String("spellId".to_string()));

        let list: InputValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(
            list,
            InputValue::StringList(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_node_name_reads_name_input() {
        let mut node = Node::new(NodeType::Sequence, NodeId::new("node-000"));
        assert_eq!(node.name(), None);
        node.inputs.insert(
            "name".to_string(),
            InputValue::String("Get Target".to_string()),
        );
        assert_eq!(node.name(), Some("Get Target"));
    }
}
