//! Container arena and insertion-point stack
//!
//! Newly created widgets are routed to the container on top of the stack, so
//! factories never take an explicit parent argument. The root container sits
//! permanently at the bottom: popping past it is a no-op and `current()`
//! always yields a valid insertion point.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::section::SectionId;
use crate::widgets::WidgetId;

new_key_type! {
    pub struct ContainerId;
}

/// What a container is for. Section and group content containers are the
/// markers `get_current_section` and `end_group` search the stack for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Root,
    Plain,
    SectionContent(SectionId),
    GroupContent,
}

/// One entry in a container's ordered child list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Child {
    Widget(WidgetId),
    Container(ContainerId),
}

/// An ordered holder of widgets and sub-containers.
#[derive(Clone, Debug)]
pub struct Container {
    pub name: Option<String>,
    pub kind: ContainerKind,
    pub children: Vec<Child>,
    /// Renderer hint for group/section content; ignored for other kinds.
    pub collapsed: bool,
}

impl Container {
    pub fn new(kind: ContainerKind, name: Option<String>) -> Self {
        Self {
            name,
            kind,
            children: Vec::new(),
            collapsed: false,
        }
    }
}

/// Owning arena for all containers of one inspector.
pub type ContainerArena = SlotMap<ContainerId, Container>;

/// Stack of active insertion points.
///
/// The bottom entry is always the root container; it is placed there at
/// construction and no pop can remove it.
#[derive(Clone, Debug)]
pub struct ContainerStack {
    entries: SmallVec<[ContainerId; 8]>,
    root: ContainerId,
    row: u32,
}

impl ContainerStack {
    pub fn new(root: ContainerId) -> Self {
        let mut entries = SmallVec::new();
        entries.push(root);
        Self {
            entries,
            root,
            row: 0,
        }
    }

    pub fn root(&self) -> ContainerId {
        self.root
    }

    /// Push a new insertion point. A container already anywhere in the stack
    /// is rejected, which keeps the nesting acyclic.
    pub fn push(&mut self, container: ContainerId) -> bool {
        if self.entries.contains(&container) {
            tracing::warn!(?container, "container already in the stack; push ignored");
            return false;
        }
        self.entries.push(container);
        true
    }

    /// Pop one entry, or unwind until `container` has been removed.
    ///
    /// The root entry is never removed. The row counter restarts after any
    /// pop so visual alternation resets per container.
    pub fn pop(&mut self, container: Option<ContainerId>) {
        match container {
            None => {
                if self.entries.len() > 1 {
                    self.entries.pop();
                }
            }
            Some(target) => {
                if self.entries.contains(&target) {
                    while self.entries.len() > 1 {
                        if self.entries.pop() == Some(target) {
                            break;
                        }
                    }
                } else {
                    tracing::warn!(?target, "container not in the stack; unwinding one entry");
                    if self.entries.len() > 1 {
                        self.entries.pop();
                    }
                }
            }
        }
        self.row = 0;
    }

    /// The active insertion point. Falls back to the root when the stack has
    /// been fully unwound.
    pub fn current(&self) -> ContainerId {
        self.entries.last().copied().unwrap_or(self.root)
    }

    pub fn contains(&self, container: ContainerId) -> bool {
        self.entries.contains(&container)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Entries from the active insertion point down to the root.
    pub fn iter_top_down(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.entries.iter().rev().copied()
    }

    /// Capture the stack for later restoration (section snapshots).
    pub fn snapshot(&self) -> SmallVec<[ContainerId; 8]> {
        self.entries.clone()
    }

    /// Restore a previously captured snapshot.
    pub fn restore(&mut self, snapshot: SmallVec<[ContainerId; 8]>) {
        debug_assert_eq!(snapshot.first(), Some(&self.root));
        self.entries = snapshot;
        self.row = 0;
    }

    /// Current row slot, advanced once per appended widget.
    pub fn next_row_slot(&mut self) -> u32 {
        let slot = self.row;
        self.row += 1;
        slot
    }

    pub fn row(&self) -> u32 {
        self.row
    }
}
