// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-type input schemas and the schema registry.

use crate::node::{NodeCategory, NodeType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared type of a node input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    /// Free-form string
    String,
    /// Numeric value
    Number,
    /// Boolean flag
    Bool,
    /// Ordered list of strings; wire form may be an array or a comma-joined
    /// string
    StringList,
    /// Key referencing a condition function in the runtime's conditions table
    Condition,
}

impl InputType {
    /// Human-readable name, used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::StringList => "string[]",
            Self::Condition => "condition",
        }
    }
}

/// Declaration of a single node input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDecl {
    /// Input name (the key in a node's input bag and on the wire)
    pub name: String,
    /// Label for the editor form; falls back to `name` when absent
    pub display: Option<String>,
    /// Declared value type
    pub input_type: InputType,
    /// Minimum allowed value, for numeric inputs
    pub min: Option<f64>,
    /// Maximum allowed value, for numeric inputs
    pub max: Option<f64>,
    /// What the input means to the runtime
    pub description: String,
    /// Whether the runtime accepts the node without this input
    pub optional: bool,
}

impl InputDecl {
    /// Create a new input declaration
    pub fn new(
        name: impl Into<String>,
        input_type: InputType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display: None,
            input_type,
            min: None,
            max: None,
            description: description.into(),
            optional: false,
        }
    }

    /// Set the display label
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Set the allowed numeric range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Mark the input as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Schema entry describing one node type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSchema {
    /// The node kind this schema describes
    pub node_type: NodeType,
    /// Category the kind belongs to
    pub category: NodeCategory,
    /// What the node does at runtime
    pub description: String,
    /// Ordered input declarations
    pub inputs: Vec<InputDecl>,
    /// Whether the node may hold children at all
    pub can_have_children: bool,
    /// Whether the node is a decorator (at most one child)
    pub is_decorator: bool,
}

impl NodeSchema {
    /// Look up an input declaration by name
    pub fn input(&self, name: &str) -> Option<&InputDecl> {
        self.inputs.iter().find(|decl| decl.name == name)
    }
}

/// Registry of node schemas.
///
/// [`SchemaRegistry::builtin`] covers every [`NodeType`] variant; the store
/// relies on that coverage for validation and shape-driven serialization.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: IndexMap<NodeType, NodeSchema>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            schemas: IndexMap::new(),
        }
    }

    /// The full built-in catalog
    pub fn builtin() -> Self {
        crate::catalog::create_builtin_registry()
    }

    /// Register a schema, replacing any previous entry for its type
    pub fn register(&mut self, schema: NodeSchema) {
        self.schemas.insert(schema.node_type, schema);
    }

    /// Get the schema for a node type
    pub fn get(&self, node_type: NodeType) -> Option<&NodeSchema> {
        self.schemas.get(&node_type)
    }

    /// Get all registered schemas
    pub fn schemas(&self) -> impl Iterator<Item = &NodeSchema> {
        self.schemas.values()
    }

    /// Get schemas in a category
    pub fn schemas_in_category(
        &self,
        category: NodeCategory,
    ) -> impl Iterator<Item = &NodeSchema> {
        self.schemas.values().filter(move |s| s.category == category)
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_builtin_covers_every_type() {
        let registry = SchemaRegistry::builtin();
        for node_type in NodeType::all() {
            let schema = registry.get(*node_type);
            assert!(schema.is_some(), "missing schema for {node_type}");
        }
        assert_eq!(registry.len(), NodeType::all().len());
    }

    #[test]
    fn test_every_schema_declares_a_name_input() {
        let registry = SchemaRegistry::builtin();
        for schema in registry.schemas() {
            let name = schema.input("name");
            assert!(name.is_some(), "{} has no name input", schema.node_type);
            assert_eq!(name.map(|d| d.input_type), Some(InputType::String));
        }
    }

    #[test]
    fn test_decorators_can_have_children() {
        let registry = SchemaRegistry::builtin();
        for schema in registry.schemas() {
            if schema.is_decorator {
                assert!(
                    schema.can_have_children,
                    "{} is a decorator but forbids children",
                    schema.node_type
                );
                assert_eq!(schema.category, NodeCategory::Decorator);
            }
        }
    }

    #[test]
    fn test_composites_allow_children_and_leaves_do_not() {
        let registry = SchemaRegistry::builtin();
        for schema in registry.schemas() {
            match schema.category {
                NodeCategory::Composite => assert!(schema.can_have_children),
                NodeCategory::Action | NodeCategory::Other => {
                    assert!(!schema.can_have_children, "{}", schema.node_type);
                }
                NodeCategory::Decorator => {}
            }
        }
    }

    #[test]
    fn test_parallel_percentage_range() {
        let registry = SchemaRegistry::builtin();
        let parallel = registry.get(NodeType::Parallel).unwrap();
        let percentage = parallel.input("percentage").unwrap();
        assert_eq!(percentage.input_type, InputType::Number);
        assert_eq!(percentage.min, Some(0.0));
        assert_eq!(percentage.max, Some(100.0));
    }
}
