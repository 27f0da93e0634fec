// SPDX-License-Identifier: MIT OR Apache-2.0
//! Behavior-tree authoring model for Arbor Editor.
//!
//! This crate is the data core behind the tree canvas:
//! - Node catalog with per-type input schemas
//! - Flat id-keyed tree store with structural validation
//! - Nested JSON import/export in the runtime's wire format
//! - Automatic tidy-tree layout
//!
//! ## Architecture
//!
//! The store owns every node in a flat map keyed by id; parent/child links
//! are plain id references. Mutations go through the store, which validates
//! them against the schema catalog and reruns the layout pass the mutation
//! calls for. Rendering, drag-and-drop and persistence live in the editor
//! shell and only consume this crate's types.

pub mod catalog;
pub mod layout;
pub mod node;
pub mod schema;
pub mod store;
pub mod templates;
pub mod wire;

pub use layout::LayoutConfig;
pub use node::{InputValue, Node, NodeCategory, NodeId, NodeType};
pub use schema::{InputDecl, InputType, NodeSchema, SchemaRegistry};
pub use store::{ExportError, InputError, LoadError, PlacementCheck, TreeStore};
pub use wire::WireNode;
