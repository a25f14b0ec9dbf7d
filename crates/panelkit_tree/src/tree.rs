//! Hierarchical tree structure
//!
//! Nodes are owned by a slotmap arena and addressed two ways: by `NodeId`
//! (arena key) internally, and by the user-facing string id through a
//! lookup index. Parent links are non-owning back-references; ownership
//! flows strictly parent → children through the child lists.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use panelkit_core::Value;

new_key_type! {
    pub struct NodeId;
}

/// Payload of one tree row.
#[derive(Clone, Debug)]
pub struct TreeItem {
    /// Unique id within one tree instance.
    pub id: String,
    /// Displayed content.
    pub content: String,
    /// Opaque caller data carried with the row.
    pub payload: Value,
}

impl TreeItem {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            payload: Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = payload.into();
        self
    }
}

struct Node {
    item: TreeItem,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    selected: bool,
    semiselected: bool,
    expanded: bool,
    editing: bool,
}

impl Node {
    fn new(item: TreeItem, parent: Option<NodeId>) -> Self {
        Self {
            item,
            children: Vec::new(),
            parent,
            selected: false,
            semiselected: false,
            expanded: true,
            editing: false,
        }
    }
}

/// Veto hook consulted before a drop re-parents: `(dragged id, target id)`.
pub type MoveVeto = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Rename notification: `(id, old content, new content)`.
pub type RenameCallback = Arc<dyn Fn(&str, &str, &str) + Send + Sync>;

/// Data channel payload for a drag in progress.
#[derive(Clone, Debug)]
pub struct DragPayload {
    pub id: String,
}

pub struct Tree {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    index: FxHashMap<String, NodeId>,
    selected: Option<NodeId>,
    move_veto: Option<MoveVeto>,
    on_rename: Option<RenameCallback>,
}

impl Tree {
    pub fn new(root: TreeItem) -> Self {
        let mut nodes = SlotMap::with_key();
        let root_id = root.id.clone();
        let root_key = nodes.insert(Node::new(root, None));
        let mut index = FxHashMap::default();
        index.insert(root_id, root_key);
        Self {
            nodes,
            root: root_key,
            index,
            selected: None,
            move_veto: None,
            on_rename: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Resolve a user-facing string id.
    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    pub fn item(&self, node: NodeId) -> Option<&TreeItem> {
        self.nodes.get(node).map(|n| &n.item)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_children(&self, node: NodeId) -> bool {
        !self.children(node).is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Depth-first preorder walk, excluding the root.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk_into(self.root, &mut out);
        out
    }

    fn walk_into(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.children(node) {
            out.push(child);
            self.walk_into(child, out);
        }
    }

    pub fn set_move_veto(&mut self, veto: MoveVeto) {
        self.move_veto = Some(veto);
    }

    pub fn set_on_rename(&mut self, callback: RenameCallback) {
        self.on_rename = Some(callback);
    }

    // ── structure ───────────────────────────────────────────────────────────

    /// Insert under `parent` (the root when `None`) at `position` (appended
    /// when `None`). Unresolved parents and duplicate ids log and yield
    /// nothing.
    pub fn insert_item(
        &mut self,
        item: TreeItem,
        parent: Option<&str>,
        position: Option<usize>,
    ) -> Option<NodeId> {
        if self.index.contains_key(&item.id) {
            tracing::warn!(id = %item.id, "duplicate tree item id; insert ignored");
            return None;
        }
        let parent_key = match parent {
            None => self.root,
            Some(pid) => match self.node_id(pid) {
                Some(key) => key,
                None => {
                    tracing::warn!(parent = %pid, "parent not found; insert ignored");
                    return None;
                }
            },
        };
        let id = item.id.clone();
        let key = self.nodes.insert(Node::new(item, Some(parent_key)));
        self.index.insert(id, key);
        let siblings = &mut self.nodes[parent_key].children;
        let at = position.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(at, key);
        Some(key)
    }

    /// Re-parent a node. Returns `false` when either id is unresolved or the
    /// move would corrupt the tree; a move to the current parent is a no-op
    /// that still succeeds.
    pub fn move_item(&mut self, id: &str, parent_id: &str) -> bool {
        let (Some(node), Some(target)) = (self.node_id(id), self.node_id(parent_id)) else {
            tracing::warn!(id, parent_id, "move with unresolved id ignored");
            return false;
        };
        if node == self.root {
            tracing::warn!(id, "the root cannot be moved");
            return false;
        }
        let old_parent = self.nodes[node].parent;
        if old_parent == Some(target) {
            return true;
        }
        if node == target || self.is_descendant(target, node) {
            tracing::warn!(id, parent_id, "move into own subtree rejected");
            return false;
        }
        if let Some(old) = old_parent {
            self.nodes[old].children.retain(|&c| c != node);
        }
        self.nodes[target].children.push(node);
        self.nodes[node].parent = Some(target);
        true
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// Detach a node and drop its whole subtree.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(node) = self.node_id(id) else {
            tracing::warn!(id, "remove of unknown item ignored");
            return false;
        };
        if node == self.root {
            tracing::warn!(id, "the root cannot be removed");
            return false;
        }
        if let Some(parent) = self.nodes[node].parent {
            self.nodes[parent].children.retain(|&c| c != node);
        }
        self.drop_subtree(node);
        true
    }

    fn drop_subtree(&mut self, node: NodeId) {
        let children = self
            .nodes
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            self.drop_subtree(child);
        }
        if let Some(removed) = self.nodes.remove(node) {
            self.index.remove(&removed.item.id);
            if self.selected == Some(node) {
                self.selected = None;
            }
        }
    }

    // ── selection ───────────────────────────────────────────────────────────

    /// Select by string id: clears all previous markers, marks the node
    /// selected, and semiselects its ancestors (excluding the root).
    pub fn set_selected_item(&mut self, id: &str) -> bool {
        let Some(node) = self.node_id(id) else {
            tracing::warn!(id, "selection of unknown item ignored");
            return false;
        };
        self.mark_selected(node);
        true
    }

    /// Selection by node key; same marker semantics as `set_selected_item`.
    pub fn mark_selected(&mut self, node: NodeId) {
        if !self.nodes.contains_key(node) {
            return;
        }
        self.clear_selection();
        self.nodes[node].selected = true;
        self.selected = Some(node);
        let mut current = self.parent(node);
        while let Some(p) = current {
            if p == self.root {
                break;
            }
            self.nodes[p].semiselected = true;
            current = self.parent(p);
        }
    }

    /// Clear all selected/semiselected markers.
    pub fn clear_selection(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            node.selected = false;
            node.semiselected = false;
        }
        self.selected = None;
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_selected(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.selected)
    }

    pub fn is_semiselected(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.semiselected)
    }

    // ── expansion ───────────────────────────────────────────────────────────

    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> bool {
        let Some(node) = self.node_id(id) else {
            return false;
        };
        self.nodes[node].expanded = expanded;
        true
    }

    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.expanded)
    }

    // ── drag and drop ───────────────────────────────────────────────────────

    /// Tag a drag payload with the dragged node's id. All mutation happens
    /// on drop; an abandoned drag changes nothing.
    pub fn begin_drag(&self, id: &str) -> Option<DragPayload> {
        if self.node_id(id).is_none() {
            tracing::warn!(id, "drag of unknown item ignored");
            return None;
        }
        Some(DragPayload { id: id.to_string() })
    }

    /// Drop onto a target node: re-parents the dragged node under it,
    /// subject to the veto hook. Rejected or malformed drops log and leave
    /// state unchanged.
    pub fn drop_on(&mut self, payload: &DragPayload, target_id: &str) -> bool {
        if let Some(veto) = &self.move_veto {
            if !veto(&payload.id, target_id) {
                tracing::debug!(id = %payload.id, target_id, "drop vetoed");
                return false;
            }
        }
        self.move_item(&payload.id, target_id)
    }

    // ── renaming ────────────────────────────────────────────────────────────

    /// Enter inline edit mode. Exclusive per node: a node already editing
    /// rejects re-entry.
    pub fn begin_rename(&mut self, id: &str) -> bool {
        let Some(node) = self.node_id(id) else {
            tracing::warn!(id, "rename of unknown item ignored");
            return false;
        };
        if self.nodes[node].editing {
            return false;
        }
        self.nodes[node].editing = true;
        true
    }

    /// Commit an edit (also the blur path): restores display content and
    /// emits the rename notification with old and new names.
    pub fn commit_rename(&mut self, id: &str, new_content: &str) -> bool {
        let Some(node) = self.node_id(id) else {
            return false;
        };
        if !self.nodes[node].editing {
            return false;
        }
        let old = std::mem::replace(&mut self.nodes[node].item.content, new_content.to_string());
        self.nodes[node].editing = false;
        if let Some(callback) = self.on_rename.clone() {
            callback(id, &old, new_content);
        }
        true
    }

    pub fn is_editing(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.editing)
    }
}
