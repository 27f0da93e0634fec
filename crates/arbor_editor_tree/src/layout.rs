// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tidy-tree layout for the behavior-tree canvas.
//!
//! Implements the Buchheim-Walker algorithm (threads, apportioning and
//! deferred shifts, O(n) total) over the store's id-linked tree, producing a
//! horizontal layout: depth runs along x, breadth along y. Siblings under
//! different parents are kept twice as far apart as siblings under the same
//! parent. The computation is deterministic: an unchanged tree and spacing
//! configuration reproduce coordinates exactly.

use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Spacing configuration for the tree layout.
///
/// The breadth step between sibling centers is `node_width +
/// vertical_spacing`; the depth step between levels is `node_height +
/// horizontal_spacing`. `vertical_spacing` may be negative to tighten rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Node box width
    pub node_width: f64,
    /// Node box height
    pub node_height: f64,
    /// Extra spacing between depth levels
    pub horizontal_spacing: f64,
    /// Extra spacing between siblings
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            node_height: 100.0,
            horizontal_spacing: 150.0,
            vertical_spacing: -40.0,
        }
    }
}

impl LayoutConfig {
    /// Breadth step between sibling centers
    pub fn breadth_step(&self) -> f64 {
        self.node_width + self.vertical_spacing
    }

    /// Depth step between levels
    pub fn depth_step(&self) -> f64 {
        self.node_height + self.horizontal_spacing
    }
}

/// Working state for one node during the walk
struct WalkNode {
    id: Option<NodeId>,
    parent: usize,
    children: Vec<usize>,
    /// Index among siblings
    index: usize,
    depth: usize,
    /// Preliminary breadth position
    prelim: f64,
    /// Aggregated subtree offset
    modifier: f64,
    change: f64,
    shift: f64,
    /// Contour thread for leaves
    thread: Option<usize>,
    /// Ancestor link used while apportioning
    ancestor: usize,
    /// Default ancestor, tracked per parent
    default_ancestor: Option<usize>,
    /// Final breadth position
    breadth: f64,
}

/// Compute coordinates for every node reachable from `root`.
///
/// Returns `(id, x, y)` triples relative to the layout origin; the root lands
/// at `(0, 0)` and callers add their own anchor offset. Ids referenced but
/// missing from the map are skipped.
pub fn compute(
    nodes: &IndexMap<NodeId, Node>,
    root: &NodeId,
    config: &LayoutConfig,
) -> Vec<(NodeId, f64, f64)> {
    let mut arena: Vec<WalkNode> = Vec::new();
    let Some(root_index) = build(nodes, root, 0, 0, &mut arena) else {
        return Vec::new();
    };

    // Synthetic super-root, so the real root walks like any other node.
    let super_root = arena.len();
    arena.push(WalkNode {
        id: None,
        parent: super_root,
        children: vec![root_index],
        index: 0,
        depth: 0,
        prelim: 0.0,
        modifier: 0.0,
        change: 0.0,
        shift: 0.0,
        thread: None,
        ancestor: super_root,
        default_ancestor: None,
        breadth: 0.0,
    });
    arena[root_index].parent = super_root;

    let mut postorder = Vec::with_capacity(arena.len());
    collect_postorder(&arena, root_index, &mut postorder);
    for &v in &postorder {
        first_walk(&mut arena, v);
    }
    arena[super_root].modifier = -arena[root_index].prelim;

    let mut preorder = Vec::with_capacity(arena.len());
    collect_preorder(&arena, root_index, &mut preorder);
    for &v in &preorder {
        let parent_modifier = arena[arena[v].parent].modifier;
        arena[v].breadth = arena[v].prelim + parent_modifier;
        arena[v].modifier += parent_modifier;
    }

    let breadth_step = config.breadth_step();
    let depth_step = config.depth_step();
    preorder
        .iter()
        .filter_map(|&v| {
            let node = &arena[v];
            let id = node.id.clone()?;
            Some((id, node.depth as f64 * depth_step, node.breadth * breadth_step))
        })
        .collect()
}

fn build(
    nodes: &IndexMap<NodeId, Node>,
    id: &NodeId,
    depth: usize,
    index: usize,
    arena: &mut Vec<WalkNode>,
) -> Option<usize> {
    let node = nodes.get(id)?;
    let me = arena.len();
    arena.push(WalkNode {
        id: Some(id.clone()),
        parent: me,
        children: Vec::new(),
        index,
        depth,
        prelim: 0.0,
        modifier: 0.0,
        change: 0.0,
        shift: 0.0,
        thread: None,
        ancestor: me,
        default_ancestor: None,
        breadth: 0.0,
    });
    let mut children = Vec::with_capacity(node.children.len());
    for child_id in &node.children {
        if let Some(child) = build(nodes, child_id, depth + 1, children.len(), arena) {
            arena[child].parent = me;
            children.push(child);
        }
    }
    arena[me].children = children;
    Some(me)
}

fn collect_postorder(arena: &[WalkNode], v: usize, out: &mut Vec<usize>) {
    for &child in &arena[v].children {
        collect_postorder(arena, child, out);
    }
    out.push(v);
}

fn collect_preorder(arena: &[WalkNode], v: usize, out: &mut Vec<usize>) {
    out.push(v);
    for &child in &arena[v].children {
        collect_preorder(arena, child, out);
    }
}

/// Separation between adjacent breadth neighbors, in breadth-step units
fn separation(arena: &[WalkNode], a: usize, b: usize) -> f64 {
    if arena[a].parent == arena[b].parent {
        1.0
    } else {
        2.0
    }
}

fn next_left(arena: &[WalkNode], v: usize) -> Option<usize> {
    arena[v].children.first().copied().or(arena[v].thread)
}

fn next_right(arena: &[WalkNode], v: usize) -> Option<usize> {
    arena[v].children.last().copied().or(arena[v].thread)
}

fn first_walk(arena: &mut [WalkNode], v: usize) {
    let parent = arena[v].parent;
    let left_sibling = if arena[v].index > 0 {
        Some(arena[parent].children[arena[v].index - 1])
    } else {
        None
    };

    if !arena[v].children.is_empty() {
        execute_shifts(arena, v);
        let first = arena[v].children[0];
        let last = arena[v].children[arena[v].children.len() - 1];
        let midpoint = (arena[first].prelim + arena[last].prelim) / 2.0;
        match left_sibling {
            Some(w) => {
                arena[v].prelim = arena[w].prelim + separation(arena, v, w);
                arena[v].modifier = arena[v].prelim - midpoint;
            }
            None => arena[v].prelim = midpoint,
        }
    } else if let Some(w) = left_sibling {
        arena[v].prelim = arena[w].prelim + separation(arena, v, w);
    }

    let default_ancestor = arena[parent]
        .default_ancestor
        .unwrap_or(arena[parent].children[0]);
    let new_default = apportion(arena, v, left_sibling, default_ancestor);
    arena[parent].default_ancestor = Some(new_default);
}

/// Push the right subtree apart from the already-placed left siblings by
/// walking the facing contours level by level.
fn apportion(
    arena: &mut [WalkNode],
    v: usize,
    left_sibling: Option<usize>,
    mut ancestor: usize,
) -> usize {
    let Some(w) = left_sibling else {
        return ancestor;
    };

    let mut inner_right = v;
    let mut outer_right = v;
    let mut inner_left = w;
    let mut outer_left = arena[arena[v].parent].children[0];
    let mut sum_inner_right = arena[inner_right].modifier;
    let mut sum_outer_right = arena[outer_right].modifier;
    let mut sum_inner_left = arena[inner_left].modifier;
    let mut sum_outer_left = arena[outer_left].modifier;

    loop {
        let next_inner_left = next_right(arena, inner_left);
        let next_inner_right = next_left(arena, inner_right);
        let (Some(nil), Some(nir)) = (next_inner_left, next_inner_right) else {
            // Thread the shallower contour onto the deeper one.
            if let Some(nil) = next_inner_left {
                if next_right(arena, outer_right).is_none() {
                    arena[outer_right].thread = Some(nil);
                    arena[outer_right].modifier += sum_inner_left - sum_outer_right;
                }
            }
            if let Some(nir) = next_inner_right {
                if next_left(arena, outer_left).is_none() {
                    arena[outer_left].thread = Some(nir);
                    arena[outer_left].modifier += sum_inner_right - sum_outer_left;
                    ancestor = v;
                }
            }
            break;
        };
        inner_left = nil;
        inner_right = nir;
        // The outer contours reach at least as deep as the inner ones.
        if let Some(next) = next_left(arena, outer_left) {
            outer_left = next;
        }
        if let Some(next) = next_right(arena, outer_right) {
            outer_right = next;
        }
        arena[outer_right].ancestor = v;

        let shift = arena[inner_left].prelim + sum_inner_left
            - (arena[inner_right].prelim + sum_inner_right)
            + separation(arena, inner_left, inner_right);
        if shift > 0.0 {
            let from = responsible_ancestor(arena, inner_left, v, ancestor);
            move_subtree(arena, from, v, shift);
            sum_inner_right += shift;
            sum_outer_right += shift;
        }
        sum_inner_left += arena[inner_left].modifier;
        sum_inner_right += arena[inner_right].modifier;
        sum_outer_left += arena[outer_left].modifier;
        sum_outer_right += arena[outer_right].modifier;
    }
    ancestor
}

fn responsible_ancestor(arena: &[WalkNode], inner_left: usize, v: usize, fallback: usize) -> usize {
    let candidate = arena[inner_left].ancestor;
    if arena[candidate].parent == arena[v].parent {
        candidate
    } else {
        fallback
    }
}

fn move_subtree(arena: &mut [WalkNode], left: usize, right: usize, shift: f64) {
    let spread = (arena[right].index - arena[left].index) as f64;
    let change = shift / spread;
    arena[right].change -= change;
    arena[right].shift += shift;
    arena[left].change += change;
    arena[right].prelim += shift;
    arena[right].modifier += shift;
}

fn execute_shifts(arena: &mut [WalkNode], v: usize) {
    let mut shift = 0.0;
    let mut change = 0.0;
    for i in (0..arena[v].children.len()).rev() {
        let w = arena[v].children[i];
        arena[w].prelim += shift;
        arena[w].modifier += shift;
        change += arena[w].change;
        shift += arena[w].shift + change;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeId, NodeType};

    /// Unit spacing so breadth positions come out in separation units
    fn unit_config() -> LayoutConfig {
        LayoutConfig {
            node_width: 1.0,
            node_height: 1.0,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
        }
    }

    fn insert(
        nodes: &mut IndexMap<NodeId, Node>,
        id: &str,
        parent: Option<&str>,
        children: &[&str],
    ) {
        let mut node = Node::new(NodeType::Select, NodeId::new(id));
        node.parent = parent.map(NodeId::new);
        node.children = children.iter().copied().map(NodeId::new).collect();
        nodes.insert(NodeId::new(id), node);
    }

    fn position(result: &[(NodeId, f64, f64)], id: &str) -> (f64, f64) {
        result
            .iter()
            .find(|(node_id, _, _)| node_id.as_str() == id)
            .map(|(_, x, y)| (*x, *y))
            .unwrap()
    }

    #[test]
    fn test_single_node_sits_at_origin() {
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "root", None, &[]);
        let result = compute(&nodes, &NodeId::new("root"), &unit_config());
        assert_eq!(result.len(), 1);
        assert_eq!(position(&result, "root"), (0.0, 0.0));
    }

    #[test]
    fn test_two_children_straddle_their_parent() {
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "root", None, &["a", "b"]);
        insert(&mut nodes, "a", Some("root"), &[]);
        insert(&mut nodes, "b", Some("root"), &[]);
        let result = compute(&nodes, &NodeId::new("root"), &unit_config());
        assert_eq!(position(&result, "root"), (0.0, 0.0));
        assert_eq!(position(&result, "a"), (1.0, -0.5));
        assert_eq!(position(&result, "b"), (1.0, 0.5));
    }

    #[test]
    fn test_cousins_get_double_separation() {
        // Two subtrees of two leaves each; the facing cousins end up two
        // units apart while siblings stay one unit apart.
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "root", None, &["a", "b"]);
        insert(&mut nodes, "a", Some("root"), &["a1", "a2"]);
        insert(&mut nodes, "b", Some("root"), &["b1", "b2"]);
        for leaf in ["a1", "a2"] {
            insert(&mut nodes, leaf, Some("a"), &[]);
        }
        for leaf in ["b1", "b2"] {
            insert(&mut nodes, leaf, Some("b"), &[]);
        }
        let result = compute(&nodes, &NodeId::new("root"), &unit_config());

        assert_eq!(position(&result, "root"), (0.0, 0.0));
        assert_eq!(position(&result, "a"), (1.0, -1.5));
        assert_eq!(position(&result, "b"), (1.0, 1.5));
        assert_eq!(position(&result, "a1"), (2.0, -2.0));
        assert_eq!(position(&result, "a2"), (2.0, -1.0));
        assert_eq!(position(&result, "b1"), (2.0, 1.0));
        assert_eq!(position(&result, "b2"), (2.0, 2.0));
    }

    #[test]
    fn test_spacing_configuration_scales_axes() {
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "root", None, &["a", "b"]);
        insert(&mut nodes, "a", Some("root"), &[]);
        insert(&mut nodes, "b", Some("root"), &[]);
        let config = LayoutConfig::default();
        let result = compute(&nodes, &NodeId::new("root"), &config);
        // breadth step 150 - 40 = 110, depth step 100 + 150 = 250
        assert_eq!(position(&result, "a"), (250.0, -55.0));
        assert_eq!(position(&result, "b"), (250.0, 55.0));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "root", None, &["a", "b", "c"]);
        insert(&mut nodes, "a", Some("root"), &["a1"]);
        insert(&mut nodes, "a1", Some("a"), &[]);
        insert(&mut nodes, "b", Some("root"), &[]);
        insert(&mut nodes, "c", Some("root"), &["c1", "c2"]);
        insert(&mut nodes, "c1", Some("c"), &[]);
        insert(&mut nodes, "c2", Some("c"), &[]);
        let config = LayoutConfig::default();
        let first = compute(&nodes, &NodeId::new("root"), &config);
        let second = compute(&nodes, &NodeId::new("root"), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_deep_chain_advances_one_depth_step_per_level() {
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "n0", None, &["n1"]);
        insert(&mut nodes, "n1", Some("n0"), &["n2"]);
        insert(&mut nodes, "n2", Some("n1"), &["n3"]);
        insert(&mut nodes, "n3", Some("n2"), &[]);
        let result = compute(&nodes, &NodeId::new("n0"), &unit_config());
        for (depth, id) in ["n0", "n1", "n2", "n3"].iter().enumerate() {
            assert_eq!(position(&result, id), (depth as f64, 0.0));
        }
    }

    #[test]
    fn test_missing_root_yields_no_positions() {
        let nodes = IndexMap::new();
        let result = compute(&nodes, &NodeId::new("ghost"), &unit_config());
        assert!(result.is_empty());
    }

    #[test]
    fn test_unbalanced_subtrees_do_not_overlap() {
        // A bushy left subtree against a single right leaf; every pair of
        // nodes on the same depth keeps at least one breadth unit of
        // clearance.
        let mut nodes = IndexMap::new();
        insert(&mut nodes, "root", None, &["a", "b"]);
        insert(&mut nodes, "a", Some("root"), &["a1", "a2", "a3"]);
        for leaf in ["a1", "a2", "a3"] {
            insert(&mut nodes, leaf, Some("a"), &[]);
        }
        insert(&mut nodes, "b", Some("root"), &[]);
        let result = compute(&nodes, &NodeId::new("root"), &unit_config());
        let mut by_depth: IndexMap<u64, Vec<f64>> = IndexMap::new();
        for (_, x, y) in &result {
            by_depth.entry(*x as u64).or_default().push(*y);
        }
        for (_, mut ys) in by_depth {
            ys.sort_by(|a, b| a.total_cmp(b));
            for pair in ys.windows(2) {
                assert!(pair[1] - pair[0] >= 1.0 - 1e-9, "overlap: {pair:?}");
            }
        }
    }
}
