//! PanelKit Tree
//!
//! The hierarchical list companion to the inspector: a recursive node
//! structure with selection propagation, inline renaming, drag-reparenting,
//! and expand/collapse state. Rendering is an external concern; this crate
//! owns the structure and its invariants (unique ids, acyclic re-parenting,
//! exclusive selection).
//!
//! # Example
//!
//! ```rust
//! use panelkit_tree::{Tree, TreeItem};
//!
//! let mut tree = Tree::new(TreeItem::new("root", "Scene"));
//! tree.insert_item(TreeItem::new("camera", "Camera"), None, None);
//! tree.insert_item(TreeItem::new("lens", "Lens"), Some("camera"), None);
//!
//! tree.set_selected_item("lens");
//! let camera = tree.node_id("camera").unwrap();
//! assert!(tree.is_semiselected(camera));
//! ```

pub mod tree;

pub use tree::{DragPayload, MoveVeto, NodeId, RenameCallback, Tree, TreeItem};
