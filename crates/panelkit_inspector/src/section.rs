//! Sections: named, collapsible top-level regions
//!
//! At most one section is open for appends at a time. Opening a section
//! captures a snapshot of the container stack; ending it (explicitly or by
//! opening the next section) restores that snapshot, so widget insertion
//! falls back to wherever it was before the section activated. A closed
//! section can be made current again later, which re-derives its stack
//! position from the stored snapshot.

use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::container::ContainerId;
use crate::notify::ChangeListener;

new_key_type! {
    pub struct SectionId;
}

pub struct Section {
    pub name: String,
    /// Content container pushed onto the stack while the section is open.
    pub content: ContainerId,
    /// Renderer hint; the core only stores it.
    pub collapsed: bool,
    /// Stack state captured when the section activated, restored on end.
    pub(crate) snapshot: SmallVec<[ContainerId; 8]>,
    /// Section-level change observers (before/after pairs).
    pub(crate) listeners: Vec<ChangeListener>,
}

impl Section {
    pub(crate) fn new(
        name: impl Into<String>,
        content: ContainerId,
        snapshot: SmallVec<[ContainerId; 8]>,
        collapsed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            content,
            collapsed,
            snapshot,
            listeners: Vec::new(),
        }
    }
}

/// Options recognized by `add_section`.
#[derive(Clone, Debug, Default)]
pub struct SectionOptions {
    /// Start collapsed.
    pub collapsed: bool,
    /// Renderer styling hook.
    pub class_name: Option<String>,
}

impl SectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }
}
