//! Change-notification types
//!
//! Every committed user edit flows through `Inspector::on_widget_change`,
//! which emits a before/after pair to the owning section's listeners and the
//! widget's own listeners around the cache update and callback invocation.
//! Listeners are the library's rendering of the original "trigger event on
//! element" collaborator primitive.

use std::sync::Arc;

use panelkit_core::Value;

use crate::widgets::WidgetId;

/// Whether a notification carries the pending or the committed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangePhase {
    /// Emitted before the cache update and callback, with the pending value.
    Before,
    /// Emitted after the callback, with the committed value.
    After,
}

/// One change notification as delivered to listeners.
#[derive(Clone, Debug)]
pub struct ChangeEvent {
    pub phase: ChangePhase,
    /// Storage name of the edited widget.
    pub name: String,
    pub value: Value,
    pub widget: WidgetId,
}

/// Widget- or section-level change observer.
pub type ChangeListener = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Panel-level change handler: `(name, committed value, widget)`.
pub type PanelCallback = Arc<dyn Fn(&str, &Value, WidgetId) + Send + Sync>;
