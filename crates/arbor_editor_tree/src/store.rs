// SPDX-License-Identifier: MIT OR Apache-2.0
//! The mutable behavior-tree store.
//!
//! Owns every [`Node`] in a flat id-keyed map; `parent`/`children` are plain
//! id references. All mutations run synchronously to completion and trigger
//! the layout pass the mutation calls for. Only [`TreeStore::load_tree`] is
//! atomic: it validates a detached candidate map and merges on success, so a
//! failed load leaves the live tree untouched.

use crate::layout::{self, LayoutConfig};
use crate::node::{InputValue, Node, NodeId, NodeType};
use crate::schema::{InputType, SchemaRegistry};
use crate::templates;
use crate::wire::{self, MismatchedInput, WireNode};
use indexmap::IndexMap;
use tracing::debug;

/// Outcome of a placement check.
///
/// Messages are written for direct display to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementCheck {
    /// Whether the placement may proceed
    pub can_place: bool,
    /// Whether the caller must confirm a destructive replace first
    pub should_confirm: bool,
    /// Explanation for a rejection or confirmation prompt
    pub message: Option<String>,
}

impl PlacementCheck {
    fn allowed() -> Self {
        Self {
            can_place: true,
            should_confirm: false,
            message: None,
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            can_place: false,
            should_confirm: false,
            message: Some(message.into()),
        }
    }

    fn needs_confirmation(message: impl Into<String>) -> Self {
        Self {
            can_place: true,
            should_confirm: true,
            message: Some(message.into()),
        }
    }
}

/// Error when importing a serialized tree
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Malformed JSON or an unrecognized node type
    #[error("failed to parse tree document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An input value does not match its declared type
    #[error(transparent)]
    Input(#[from] MismatchedInput),

    /// A decorator carries more than one child
    #[error("decorator {node_type} has {count} children, at most one is allowed")]
    DecoratorArity {
        /// Wire type name of the decorator
        node_type: &'static str,
        /// Number of children found
        count: usize,
    },

    /// A leaf type carries children
    #[error("{node_type} cannot have children")]
    ChildrenNotAllowed {
        /// Wire type name of the leaf
        node_type: &'static str,
    },

    /// No built-in template with the requested name
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
}

/// Error when exporting a serialized tree
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The store holds no nodes
    #[error("the store holds no nodes to export")]
    EmptyStore,

    /// The document failed to serialize
    #[error("failed to serialize tree document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error when editing a node input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// No node with the given id
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The input is not declared by the node's schema
    #[error("input '{input}' is not declared for {node_type}")]
    UndeclaredInput {
        /// Wire type name of the node
        node_type: &'static str,
        /// Offending input name
        input: String,
    },

    /// The value does not match the declared input type
    #[error(transparent)]
    TypeMismatch(#[from] MismatchedInput),
}

/// The behavior-tree store
#[derive(Debug)]
pub struct TreeStore {
    nodes: IndexMap<NodeId, Node>,
    selected: Option<NodeId>,
    layout: LayoutConfig,
    registry: SchemaRegistry,
    next_node_id: u64,
}

impl TreeStore {
    /// Create an empty store with the built-in schema catalog and default
    /// spacing
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            selected: None,
            layout: LayoutConfig::default(),
            registry: SchemaRegistry::builtin(),
            next_node_id: 0,
        }
    }

    // ---- accessors ------------------------------------------------------

    /// Get a node by id
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterate all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of nodes in the store
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Id of the selected node, if any
    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// The selected node, if any
    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.nodes.get(id))
    }

    /// Whether the node has no parent
    pub fn is_root(&self, id: &NodeId) -> bool {
        self.nodes.get(id).is_some_and(Node::is_root)
    }

    /// The schema catalog the store validates against
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Names of the built-in templates
    pub fn template_names(&self) -> &'static [&'static str] {
        templates::TEMPLATE_NAMES
    }

    /// Current spacing configuration
    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    // ---- spacing setters ------------------------------------------------
    // Each setter synchronously recomputes the full layout; consumers read
    // fresh coordinates as soon as the call returns.

    /// Set the node box width and recompute the layout
    pub fn set_node_width(&mut self, width: f64) {
        self.layout.node_width = width;
        self.apply_layout(None);
    }

    /// Set the node box height and recompute the layout
    pub fn set_node_height(&mut self, height: f64) {
        self.layout.node_height = height;
        self.apply_layout(None);
    }

    /// Set the spacing between depth levels and recompute the layout
    pub fn set_horizontal_spacing(&mut self, spacing: f64) {
        self.layout.horizontal_spacing = spacing;
        self.apply_layout(None);
    }

    /// Set the spacing between siblings and recompute the layout
    pub fn set_vertical_spacing(&mut self, spacing: f64) {
        self.layout.vertical_spacing = spacing;
        self.apply_layout(None);
    }

    // ---- mutations ------------------------------------------------------

    /// Hand out a fresh `node-NNN` id.
    ///
    /// The counter is monotonic for the store's lifetime and skips ids that
    /// are still in use, so imported and freshly created nodes never collide.
    pub fn generate_id(&mut self) -> NodeId {
        loop {
            let id = NodeId::new(format!("node-{:03}", self.next_node_id));
            self.next_node_id += 1;
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    /// Create a node of the given kind at the origin.
    ///
    /// The node's `name` input is seeded from its kind and id, and a layout
    /// pass rooted at the new node runs before returning.
    pub fn add_node(&mut self, node_type: NodeType) -> NodeId {
        let id = self.generate_id();
        let mut node = Node::new(node_type, id.clone());
        node.inputs.insert(
            "name".to_string(),
            InputValue::String(format!("{}-{}", node_type.wire_name(), id)),
        );
        self.nodes.insert(id.clone(), node);
        debug!(id = %id, node_type = node_type.wire_name(), "added node");
        self.apply_layout(Some(&id));
        id
    }

    /// Toggle selection: selecting the already-selected node clears it
    pub fn select(&mut self, id: &NodeId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
    }

    /// Delete the selected node and its entire subtree.
    ///
    /// The former parent's child list is updated and the selection cleared.
    /// No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(selected) = self.selected.take() else {
            return;
        };
        self.delete_children(&selected);
        let parent = self.nodes.get(&selected).and_then(|n| n.parent.clone());
        if let Some(parent_id) = parent {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|child| child != &selected);
            }
        }
        self.nodes.shift_remove(&selected);
        debug!(id = %selected, "deleted node and subtree");
    }

    /// Delete every descendant of `id`, leaving `id` itself in place
    fn delete_children(&mut self, id: &NodeId) {
        let children = match self.nodes.get_mut(id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.delete_children(&child);
            self.nodes.shift_remove(&child);
        }
    }

    /// Check whether `child` may be placed under `parent`.
    ///
    /// Rejects placements that would form a loop (placing a node under
    /// itself or under one of its descendants) and placements under types
    /// that cannot hold children. Placing under a decorator that already has
    /// a child is allowed but flagged for confirmation, since it replaces
    /// the current child subtree.
    pub fn can_place(&self, parent: &NodeId, child: &NodeId) -> PlacementCheck {
        if parent == child || self.has_ancestor(parent, child) {
            return PlacementCheck::rejected("Unable to place node, a loop would be formed");
        }
        let Some(parent_node) = self.nodes.get(parent) else {
            return PlacementCheck::rejected("an unknown error has occurred");
        };
        let Some(schema) = self.registry.get(parent_node.node_type) else {
            return PlacementCheck::rejected("an unknown error has occurred");
        };
        if !schema.can_have_children {
            return PlacementCheck::rejected(format!(
                "Unable to place node. '{}' can't have children",
                parent_node.node_type.wire_name()
            ));
        }
        if schema.is_decorator && !parent_node.children.is_empty() {
            let current = self
                .nodes
                .get(&parent_node.children[0])
                .and_then(Node::name)
                .unwrap_or("unnamed");
            return PlacementCheck::needs_confirmation(format!(
                "Placing this node will replace the current node {current}"
            ));
        }
        PlacementCheck::allowed()
    }

    /// Whether `ancestor` appears on the parent chain above `start`
    fn has_ancestor(&self, start: &NodeId, ancestor: &NodeId) -> bool {
        let mut current = self.nodes.get(start);
        while let Some(node) = current {
            match &node.parent {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => current = self.nodes.get(parent),
                None => return false,
            }
        }
        false
    }

    /// Re-parent `child` under `parent`.
    ///
    /// Detaches `child` from its previous parent first. A decorator parent
    /// drops its existing child subtree and ends up with exactly `[child]`;
    /// any other parent appends. A layout pass rooted at `parent` runs
    /// before returning.
    ///
    /// Callers must have validated the pair with [`TreeStore::can_place`];
    /// this operation re-checks nothing and will corrupt the tree if handed
    /// a placement that check would have rejected.
    pub fn place(&mut self, parent: &NodeId, child: &NodeId) {
        let old_parent = self.nodes.get(child).and_then(|n| n.parent.clone());
        if let Some(old_parent_id) = old_parent {
            if let Some(old_parent) = self.nodes.get_mut(&old_parent_id) {
                old_parent.children.retain(|c| c != child);
            }
        }
        let is_decorator = self
            .nodes
            .get(parent)
            .and_then(|n| self.registry.get(n.node_type))
            .is_some_and(|s| s.is_decorator);
        if is_decorator {
            self.delete_children(parent);
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children = vec![child.clone()];
            }
        } else if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(child.clone());
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent.clone());
        }
        debug!(parent = %parent, child = %child, "placed node");
        self.apply_layout(Some(parent));
    }

    /// Set an input on a node, validated against the node's schema.
    ///
    /// String values for list-typed inputs are split on commas, mirroring
    /// the wire-format normalization.
    pub fn set_input(
        &mut self,
        id: &NodeId,
        input: &str,
        value: InputValue,
    ) -> Result<(), InputError> {
        let node_type = self
            .nodes
            .get(id)
            .ok_or_else(|| InputError::UnknownNode(id.clone()))?
            .node_type;
        let Some(decl) = self
            .registry
            .get(node_type)
            .and_then(|schema| schema.input(input))
        else {
            return Err(InputError::UndeclaredInput {
                node_type: node_type.wire_name(),
                input: input.to_string(),
            });
        };
        let normalized = wire::normalize_input(node_type, decl, &value)?;
        if let Some(node) = self.nodes.get_mut(id) {
            node.inputs.insert(decl.name.clone(), normalized);
        }
        Ok(())
    }

    // ---- import / export ------------------------------------------------

    /// Import a nested JSON tree document.
    ///
    /// Every node receives a fresh id (wire ids are ignored), list inputs
    /// are normalized to real lists, and undeclared wire inputs are dropped.
    /// The flattened candidate is validated before it is merged, so a failed
    /// load leaves the live tree untouched. A full layout pass runs on
    /// success.
    pub fn load_tree(&mut self, json: &str) -> Result<(), LoadError> {
        let document: WireNode = serde_json::from_str(json)?;
        let mut candidate = IndexMap::new();
        self.flatten(&document, None, &mut candidate)?;
        validate_candidate(&self.registry, &candidate)?;
        let count = candidate.len();
        for (id, node) in candidate {
            self.nodes.insert(id, node);
        }
        debug!(count, "loaded tree");
        self.apply_layout(None);
        Ok(())
    }

    /// Load a built-in template by name
    pub fn load_template(&mut self, name: &str) -> Result<(), LoadError> {
        let Some(document) = templates::builtin(name) else {
            return Err(LoadError::UnknownTemplate(name.to_string()));
        };
        self.load_tree(document)
    }

    fn flatten(
        &mut self,
        wire: &WireNode,
        parent: Option<&NodeId>,
        out: &mut IndexMap<NodeId, Node>,
    ) -> Result<NodeId, LoadError> {
        let id = self.generate_id();
        let mut node = Node::new(wire.node_type, id.clone());
        node.parent = parent.cloned();
        if let Some(schema) = self.registry.get(wire.node_type) {
            for decl in &schema.inputs {
                match wire.inputs.get(&decl.name) {
                    Some(value) => {
                        let normalized = wire::normalize_input(wire.node_type, decl, value)?;
                        node.inputs.insert(decl.name.clone(), normalized);
                    }
                    // List inputs always materialize, even when absent.
                    None if decl.input_type == InputType::StringList => {
                        node.inputs
                            .insert(decl.name.clone(), InputValue::StringList(Vec::new()));
                    }
                    None => {}
                }
            }
        }
        out.insert(id.clone(), node);
        for child in &wire.children {
            let child_id = self.flatten(child, Some(&id), out)?;
            if let Some(parent_node) = out.get_mut(&id) {
                parent_node.children.push(child_id);
            }
        }
        Ok(id)
    }

    /// Export the tree as a nested JSON document.
    ///
    /// Walks from the unique root; a multi-root forest is wrapped in an
    /// implicit Select root. List inputs always export as true arrays.
    pub fn export_tree(&self) -> Result<String, ExportError> {
        let roots: Vec<&NodeId> = self
            .nodes
            .values()
            .filter(|n| n.is_root())
            .map(|n| &n.id)
            .collect();
        let document = match roots.as_slice() {
            [] => return Err(ExportError::EmptyStore),
            [root] => self.to_wire(root),
            many => {
                let mut inputs = IndexMap::new();
                inputs.insert(
                    "name".to_string(),
                    InputValue::String("Root".to_string()),
                );
                Some(WireNode {
                    id: "node-root".to_string(),
                    node_type: NodeType::Select,
                    inputs,
                    children: many.iter().filter_map(|r| self.to_wire(r)).collect(),
                })
            }
        };
        let Some(document) = document else {
            return Err(ExportError::EmptyStore);
        };
        debug!(count = document.node_count(), "exported tree");
        Ok(serde_json::to_string(&document)?)
    }

    fn to_wire(&self, id: &NodeId) -> Option<WireNode> {
        let node = self.nodes.get(id)?;
        let schema = self.registry.get(node.node_type)?;
        let mut inputs = IndexMap::new();
        for decl in &schema.inputs {
            if decl.input_type == InputType::StringList {
                let list = node
                    .inputs
                    .get(&decl.name)
                    .and_then(InputValue::as_list)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();
                inputs.insert(decl.name.clone(), InputValue::StringList(list));
            } else if let Some(value) = node.inputs.get(&decl.name) {
                inputs.insert(decl.name.clone(), value.clone());
            }
        }
        Some(WireNode {
            id: node.id.as_str().to_string(),
            node_type: node.node_type,
            inputs,
            children: node
                .children
                .iter()
                .filter_map(|child| self.to_wire(child))
                .collect(),
        })
    }

    // ---- layout ---------------------------------------------------------

    /// Recompute coordinates for the subtree under `root`, or for the whole
    /// forest when `root` is `None`.
    ///
    /// A rooted pass is anchored at the root's current position; a full pass
    /// is anchored at the origin. When the store holds several roots, an
    /// ephemeral Select node unifies them for the pass and is discarded
    /// afterwards, keeping only its children's resulting positions.
    pub fn apply_layout(&mut self, root: Option<&NodeId>) {
        let root_ids: Vec<NodeId> = match root {
            Some(id) => {
                if !self.nodes.contains_key(id) {
                    return;
                }
                vec![id.clone()]
            }
            None => self
                .nodes
                .values()
                .filter(|n| n.is_root())
                .map(|n| n.id.clone())
                .collect(),
        };
        if root_ids.is_empty() {
            return;
        }
        let (base_x, base_y) = root
            .and_then(|id| self.nodes.get(id))
            .map_or((0.0, 0.0), |n| (n.x, n.y));

        let proxy = if root_ids.len() > 1 {
            let id = self.generate_id();
            let mut node = Node::new(NodeType::Select, id.clone());
            node.children = root_ids.clone();
            self.nodes.insert(id.clone(), node);
            Some(id)
        } else {
            None
        };
        let layout_root = proxy.clone().unwrap_or_else(|| root_ids[0].clone());

        let positions = layout::compute(&self.nodes, &layout_root, &self.layout);
        for (id, x, y) in positions {
            if proxy.as_ref() == Some(&id) {
                continue;
            }
            if let Some(node) = self.nodes.get_mut(&id) {
                node.x = x + base_x;
                node.y = y + base_y;
            }
        }
        if let Some(proxy) = proxy {
            self.nodes.shift_remove(&proxy);
        }
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural validation over a detached candidate map
fn validate_candidate(
    registry: &SchemaRegistry,
    candidate: &IndexMap<NodeId, Node>,
) -> Result<(), LoadError> {
    for node in candidate.values() {
        let Some(schema) = registry.get(node.node_type) else {
            continue;
        };
        if !schema.can_have_children && !node.children.is_empty() {
            return Err(LoadError::ChildrenNotAllowed {
                node_type: node.node_type.wire_name(),
            });
        }
        if schema.is_decorator && node.children.len() > 1 {
            return Err(LoadError::DecoratorArity {
                node_type: node.node_type.wire_name(),
                count: node.children.len(),
            });
        }
    }
    Ok(())
}
