//! The inspector host
//!
//! Owns the value cache, the widget indices, the container arena and stack,
//! and the section list. All widget creation funnels through `add` (typed
//! convenience methods are thin wrappers), and all committed user edits
//! funnel through `on_widget_change`.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use panelkit_core::{Error, Event, Result, Value};

use crate::container::{Child, Container, ContainerArena, ContainerId, ContainerKind, ContainerStack};
use crate::notify::{ChangeEvent, ChangeListener, ChangePhase, PanelCallback};
use crate::options::{InspectorConfig, WidgetOptions};
use crate::registry::{WidgetFactory, WidgetRegistry, WidgetSpec};
use crate::section::{Section, SectionId, SectionOptions};
use crate::widgets::{Widget, WidgetId};

/// One registered widget: behavior handle plus registration metadata.
pub struct WidgetEntry {
    /// Storage key in the value cache and name index.
    pub name: String,
    /// Displayed label (differs from `name` under `name_override`).
    pub label: String,
    pub widget: Box<dyn Widget>,
    pub options: WidgetOptions,
    /// Section open when the widget was created.
    pub section: Option<SectionId>,
    pub container: ContainerId,
    /// Row slot assigned at creation (renderer alternation hint).
    pub row_slot: u32,
    pub(crate) listeners: Vec<ChangeListener>,
}

pub struct Inspector {
    config: InspectorConfig,
    registry: WidgetRegistry,
    widgets: SlotMap<WidgetId, WidgetEntry>,
    by_ordinal: Vec<WidgetId>,
    by_name: FxHashMap<String, WidgetId>,
    values: IndexMap<String, Value>,
    containers: ContainerArena,
    root: ContainerId,
    stack: ContainerStack,
    sections: SlotMap<SectionId, Section>,
    section_order: Vec<SectionId>,
    current_section: Option<SectionId>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    pub fn with_config(config: InspectorConfig) -> Self {
        let mut containers = ContainerArena::with_key();
        let root = containers.insert(Container::new(ContainerKind::Root, None));
        Self {
            config,
            registry: WidgetRegistry::with_builtins(),
            widgets: SlotMap::with_key(),
            by_ordinal: Vec::new(),
            by_name: FxHashMap::default(),
            values: IndexMap::new(),
            containers,
            root,
            stack: ContainerStack::new(root),
            sections: SlotMap::with_key(),
            section_order: Vec::new(),
            current_section: None,
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Replace the panel-level change handler.
    pub fn set_on_change(&mut self, handler: PanelCallback) {
        self.config.on_change = Some(handler);
    }

    /// Extend the registry with a new type keyword at runtime.
    pub fn register_widget_kind(&mut self, keyword: &str, factory: WidgetFactory) {
        self.registry.register(keyword, factory);
    }

    // ── creation ────────────────────────────────────────────────────────────

    /// The dynamic-dispatch creation path. Unknown kinds log and yield
    /// nothing usable.
    pub fn add(
        &mut self,
        kind: &str,
        name: impl Into<String>,
        value: impl Into<Value>,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        let factory = self.registry.resolve(kind)?;
        let spec = WidgetSpec::new(kind, name, value).with_options(options);
        factory(self, spec)
    }

    /// Options-bag form of `add`. A spec with no type keyword is a
    /// programmer error.
    pub fn add_spec(&mut self, spec: WidgetSpec) -> Result<Option<WidgetId>> {
        let Some(kind) = spec.kind.clone() else {
            return Err(Error::MissingType);
        };
        let Some(factory) = self.registry.resolve(&kind) else {
            return Ok(None);
        };
        Ok(factory(self, spec))
    }

    /// Common registration steps shared by every factory: seed the value
    /// cache, place the widget into the active container, index it by
    /// ordinal and name, and keep the creating section as its owner.
    ///
    /// Custom factories registered through `register_widget_kind` call this
    /// with their constructed widget.
    pub fn install(&mut self, spec: WidgetSpec, widget: Box<dyn Widget>) -> WidgetId {
        let WidgetSpec { name: label, options, .. } = spec;
        let name = options.name_override.clone().unwrap_or_else(|| label.clone());

        // Seed from the constructed widget: factories already applied the
        // kind's default when the requested value was null.
        self.values.insert(name.clone(), widget.value());

        let container = options
            .widget_parent
            .filter(|id| self.containers.contains_key(*id))
            .unwrap_or_else(|| self.stack.current());
        let row_slot = self.stack.next_row_slot();

        let id = self.widgets.insert(WidgetEntry {
            name: name.clone(),
            label,
            widget,
            options,
            section: self.current_section,
            container,
            row_slot,
            listeners: Vec::new(),
        });
        if let Some(parent) = self.containers.get_mut(container) {
            parent.children.push(Child::Widget(id));
        }
        if let Some(previous) = self.by_name.insert(name.clone(), id) {
            tracing::debug!(name = %name, ?previous, "widget name reused; name index now points at the newest widget");
        }
        self.by_ordinal.push(id);
        id
    }

    // ── values ──────────────────────────────────────────────────────────────

    /// Cached value for `name`. Reads the value cache only — a widget whose
    /// live value was set with `skip_event` can diverge from this; use
    /// `get_values` for live state.
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Live values, recomputed by asking every named widget. Intentionally
    /// not a cache read.
    pub fn get_values(&self) -> IndexMap<String, Value> {
        let mut out = IndexMap::new();
        for &id in &self.by_ordinal {
            if let Some(entry) = self.widgets.get(id) {
                out.insert(entry.name.clone(), entry.widget.value());
            }
        }
        out
    }

    /// Bulk write: every key with a registered widget goes through that
    /// widget's set-value path (with change events); unknown keys are
    /// ignored silently.
    pub fn set_values(&mut self, values: &IndexMap<String, Value>) {
        for (name, value) in values {
            if self.by_name.contains_key(name.as_str()) {
                self.set_widget_value(name, value.clone(), false);
            }
        }
    }

    /// Push a value into a widget. Unless `skip_event`, the full change
    /// pipeline runs (updating the cache); with `skip_event` the cache is
    /// deliberately left untouched.
    pub fn set_widget_value(&mut self, name: &str, value: Value, skip_event: bool) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            return false;
        };
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.widget.set_value(&value);
        }
        if !skip_event {
            self.on_widget_change(id, value, None);
        }
        true
    }

    /// Pull-refresh every widget with a `callback_update`. Refreshes never
    /// re-enter the change pipeline.
    pub fn update_widgets(&mut self) {
        let ids = self.by_ordinal.clone();
        for id in ids {
            let Some(update) = self
                .widgets
                .get(id)
                .and_then(|entry| entry.options.callback_update.clone())
            else {
                continue;
            };
            let fresh = update();
            if let Some(entry) = self.widgets.get_mut(id) {
                entry.widget.set_value(&fresh);
            }
        }
    }

    // ── lookup ──────────────────────────────────────────────────────────────

    pub fn get_widget(&self, name: &str) -> Option<WidgetId> {
        self.by_name.get(name).copied()
    }

    pub fn get_widget_at(&self, ordinal: usize) -> Option<WidgetId> {
        self.by_ordinal.get(ordinal).copied()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|entry| entry.widget.as_ref())
    }

    pub fn entry(&self, id: WidgetId) -> Option<&WidgetEntry> {
        self.widgets.get(id)
    }

    pub fn widget_count(&self) -> usize {
        self.by_ordinal.len()
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            return false;
        };
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.widget.set_enabled(enabled);
            return true;
        }
        false
    }

    pub fn focus(&mut self, name: &str) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            return false;
        };
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.widget.focus();
            return true;
        }
        false
    }

    pub fn set_range(&mut self, name: &str, min: f64, max: f64) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            return false;
        };
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.widget.set_range(min, max);
            return true;
        }
        false
    }

    // ── change pipeline ─────────────────────────────────────────────────────

    /// Feed a raw input event to a named widget. If the widget commits a
    /// value, the change pipeline runs and the committed (possibly coerced)
    /// value is returned.
    pub fn dispatch_input(&mut self, name: &str, event: &Event) -> Option<Value> {
        let Some(&id) = self.by_name.get(name) else {
            tracing::warn!(name, "input for unknown widget ignored");
            return None;
        };
        let committed = self.widgets.get_mut(id)?.widget.interact(event)?;
        let coerced = self.on_widget_change(id, committed.clone(), Some(event));
        Some(coerced.unwrap_or(committed))
    }

    /// The uniform commit protocol, in strict order: before-change
    /// notifications (section, then widget) with the pending value; cache
    /// update; widget callback (or `final_callback` on a drag-end commit);
    /// after-change notifications with the committed value; panel-level
    /// handler. Returns the callback's result so callers can observe a
    /// coercion.
    pub fn on_widget_change(
        &mut self,
        id: WidgetId,
        value: Value,
        event: Option<&Event>,
    ) -> Option<Value> {
        let Some(entry) = self.widgets.get(id) else {
            tracing::warn!(?id, "change for unknown widget ignored");
            return None;
        };
        let name = entry.name.clone();
        let options = entry.options.clone();
        let widget_listeners = entry.listeners.clone();
        let section_listeners = entry
            .section
            .and_then(|sid| self.sections.get(sid))
            .map(|section| section.listeners.clone())
            .unwrap_or_default();

        if !options.skip_change_events {
            let pending = ChangeEvent {
                phase: ChangePhase::Before,
                name: name.clone(),
                value: value.clone(),
                widget: id,
            };
            for listener in &section_listeners {
                listener(&pending);
            }
            for listener in &widget_listeners {
                listener(&pending);
            }
        }

        self.values.insert(name.clone(), value.clone());

        let is_final_commit = matches!(
            event,
            Some(e) if e.event_type == panelkit_core::events::event_types::DRAG_END
        );
        let callback = if is_final_commit && options.final_callback.is_some() {
            options.final_callback.clone()
        } else {
            options.callback.clone()
        };

        let mut result = None;
        if let Some(callback) = callback {
            result = callback(&value, event);
            if let Some(coerced) = &result {
                if let Some(entry) = self.widgets.get_mut(id) {
                    entry.widget.set_value(coerced);
                }
                self.values.insert(name.clone(), coerced.clone());
            }
        }
        let committed = result.clone().unwrap_or(value);

        if !options.skip_change_events {
            let done = ChangeEvent {
                phase: ChangePhase::After,
                name: name.clone(),
                value: committed.clone(),
                widget: id,
            };
            for listener in &section_listeners {
                listener(&done);
            }
            for listener in &widget_listeners {
                listener(&done);
            }
        }

        if let Some(on_change) = self.config.on_change.clone() {
            on_change(&name, &committed, id);
        }
        result
    }

    /// Attach a change observer to a named widget.
    pub fn observe_widget(&mut self, name: &str, listener: ChangeListener) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            return false;
        };
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.listeners.push(listener);
            return true;
        }
        false
    }

    /// Attach a change observer to a section; it fires for every widget the
    /// section owns.
    pub fn observe_section(&mut self, id: SectionId, listener: ChangeListener) -> bool {
        if let Some(section) = self.sections.get_mut(id) {
            section.listeners.push(listener);
            return true;
        }
        false
    }

    // ── containers ──────────────────────────────────────────────────────────

    pub fn root(&self) -> ContainerId {
        self.root
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn stack(&self) -> &ContainerStack {
        &self.stack
    }

    fn attach_container(&mut self, kind: ContainerKind, name: Option<String>) -> ContainerId {
        let id = self.containers.insert(Container::new(kind, name));
        let parent = self.stack.current();
        if let Some(parent) = self.containers.get_mut(parent) {
            parent.children.push(Child::Container(id));
        }
        id
    }

    /// Create an inert layout container: attached, pushed, and immediately
    /// closed again.
    pub fn add_container(&mut self, name: Option<&str>) -> ContainerId {
        let id = self.attach_container(ContainerKind::Plain, name.map(str::to_string));
        self.stack.push(id);
        self.stack.pop(Some(id));
        id
    }

    /// Create a container and leave it active; pair with `end_container`.
    pub fn start_container(&mut self, name: Option<&str>) -> ContainerId {
        let id = self.attach_container(ContainerKind::Plain, name.map(str::to_string));
        self.stack.push(id);
        id
    }

    pub fn end_container(&mut self) {
        self.stack.pop(None);
    }

    /// Widgets inside a container, including nested sub-containers, in
    /// placement order.
    pub fn container_widgets(&self, id: ContainerId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        self.collect_widgets(id, &mut out);
        out
    }

    fn collect_widgets(&self, id: ContainerId, out: &mut Vec<WidgetId>) {
        let Some(container) = self.containers.get(id) else {
            return;
        };
        for child in &container.children {
            match child {
                Child::Widget(widget) => out.push(*widget),
                Child::Container(nested) => self.collect_widgets(*nested, out),
            }
        }
    }

    // ── sections ────────────────────────────────────────────────────────────

    /// Open a named section. Any previously open section is ended first; the
    /// new section captures the stack for later restoration and becomes the
    /// active insertion point.
    pub fn add_section(&mut self, name: &str, options: SectionOptions) -> SectionId {
        if let Some(open) = self.current_section {
            self.end_section(open);
        }
        let snapshot = self.stack.snapshot();
        let id = self.sections.insert(Section::new(
            name,
            ContainerId::default(),
            snapshot,
            options.collapsed,
        ));
        let content =
            self.attach_container(ContainerKind::SectionContent(id), Some(name.to_string()));
        if let Some(section) = self.sections.get_mut(id) {
            section.content = content;
        }
        self.section_order.push(id);
        self.stack.push(content);
        self.current_section = Some(id);
        id
    }

    /// Close a section. Guarded: a section that is not currently open is
    /// left alone.
    fn end_section(&mut self, id: SectionId) {
        if self.current_section != Some(id) {
            return;
        }
        if let Some(section) = self.sections.get(id) {
            // Only rewind if the section still owns a position in the stack.
            if self.stack.contains(section.content) {
                let snapshot = section.snapshot.clone();
                self.stack.restore(snapshot);
            }
        }
        self.current_section = None;
    }

    /// Reactivate a section for retroactive appends. Re-derives the stack
    /// position from the snapshot captured when the section first opened.
    pub fn set_current_section(&mut self, id: SectionId) {
        if self.current_section == Some(id) {
            return;
        }
        let Some(section) = self.sections.get(id) else {
            tracing::warn!(?id, "unknown section");
            return;
        };
        let snapshot = section.snapshot.clone();
        let content = section.content;
        if let Some(open) = self.current_section {
            self.end_section(open);
        }
        self.stack.restore(snapshot);
        self.stack.push(content);
        self.current_section = Some(id);
    }

    /// The section owning the topmost section-content container in the
    /// stack, if any.
    pub fn get_current_section(&self) -> Option<SectionId> {
        for id in self.stack.iter_top_down() {
            if let Some(container) = self.containers.get(id) {
                if let ContainerKind::SectionContent(section) = container.kind {
                    return Some(section);
                }
            }
        }
        None
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.section_order.iter().copied()
    }

    /// Widgets placed inside a section's content container.
    pub fn section_widgets(&self, id: SectionId) -> Vec<WidgetId> {
        self.sections
            .get(id)
            .map(|section| self.container_widgets(section.content))
            .unwrap_or_default()
    }

    pub fn set_section_collapsed(&mut self, id: SectionId, collapsed: bool) -> bool {
        if let Some(section) = self.sections.get_mut(id) {
            section.collapsed = collapsed;
            return true;
        }
        false
    }

    // ── groups ──────────────────────────────────────────────────────────────

    /// Open a group: a lighter, freely nestable collapsible region.
    pub fn begin_group(&mut self, name: &str, options: SectionOptions) -> ContainerId {
        let id = self.attach_container(ContainerKind::GroupContent, Some(name.to_string()));
        if let Some(container) = self.containers.get_mut(id) {
            container.collapsed = options.collapsed;
        }
        self.stack.push(id);
        id
    }

    /// Close the innermost open group, defensively unwinding anything left
    /// open inside it.
    pub fn end_group(&mut self) {
        loop {
            let top = self.stack.current();
            if top == self.stack.root() {
                tracing::warn!("end_group with no open group; stack unwound to root");
                break;
            }
            let is_group = matches!(
                self.containers.get(top).map(|c| c.kind),
                Some(ContainerKind::GroupContent)
            );
            self.stack.pop(None);
            if is_group {
                break;
            }
        }
    }

    // ── lifecycle ───────────────────────────────────────────────────────────

    /// Tear down all widgets, containers, and sections and reinitialize to
    /// the empty state. The registry and panel configuration survive.
    pub fn clear(&mut self) {
        self.values.clear();
        self.widgets.clear();
        self.by_ordinal.clear();
        self.by_name.clear();
        self.sections.clear();
        self.section_order.clear();
        self.current_section = None;
        self.containers.clear();
        self.root = self.containers.insert(Container::new(ContainerKind::Root, None));
        self.stack = ContainerStack::new(self.root);
    }

    // ── typed convenience methods ───────────────────────────────────────────

    pub fn add_title(&mut self, text: &str) -> Option<WidgetId> {
        self.add("title", text, text, WidgetOptions::default())
    }

    pub fn add_info(&mut self, name: &str, text: &str, options: WidgetOptions) -> Option<WidgetId> {
        self.add("info", name, text, options)
    }

    pub fn add_separator(&mut self) -> Option<WidgetId> {
        let name = format!("#separator-{}", self.by_ordinal.len());
        self.add("separator", name, Value::Null, WidgetOptions::default())
    }

    pub fn add_string(
        &mut self,
        name: &str,
        value: &str,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("string", name, value, options)
    }

    pub fn add_number(
        &mut self,
        name: &str,
        value: f64,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("number", name, value, options)
    }

    pub fn add_slider(
        &mut self,
        name: &str,
        value: f64,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("slider", name, value, options)
    }

    pub fn add_checkbox(
        &mut self,
        name: &str,
        value: bool,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("checkbox", name, value, options)
    }

    pub fn add_combo(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("combo", name, value, options)
    }

    /// List widget: `items` become the choice list, with no initial
    /// selection unless `value` matches an item.
    pub fn add_list(
        &mut self,
        name: &str,
        items: Vec<Value>,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("list", name, Value::Null, options.choices(items))
    }

    pub fn add_color(
        &mut self,
        name: &str,
        value: panelkit_core::Color,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("color", name, value, options)
    }

    pub fn add_vector2(
        &mut self,
        name: &str,
        value: [f64; 2],
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("vec2", name, value, options)
    }

    pub fn add_vector3(
        &mut self,
        name: &str,
        value: [f64; 3],
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("vec3", name, value, options)
    }

    pub fn add_vector4(
        &mut self,
        name: &str,
        value: [f64; 4],
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("vec4", name, value, options)
    }

    pub fn add_button(
        &mut self,
        name: &str,
        label: &str,
        options: WidgetOptions,
    ) -> Option<WidgetId> {
        self.add("button", name, label, options)
    }

    /// One widget per list element, grouped inside a dedicated container.
    /// Aborts before any mutation when `value` is not a list.
    pub fn add_array(
        &mut self,
        kind: &str,
        name: &str,
        value: impl Into<Value>,
        options: WidgetOptions,
    ) -> Result<Vec<WidgetId>> {
        let items = match value.into() {
            Value::List(items) => items,
            other => {
                let err = Error::ArrayTypeMismatch {
                    name: name.to_string(),
                    actual: other.type_name(),
                };
                tracing::error!(%err, "add_array aborted");
                return Err(err);
            }
        };
        self.start_container(Some(name));
        let mut ids = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            if let Some(id) = self.add(kind, format!("{name}[{i}]"), item, options.clone()) {
                ids.push(id);
            }
        }
        self.end_container();
        Ok(ids)
    }
}
