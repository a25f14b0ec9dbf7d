//! Panel and widget configuration
//!
//! Every recognized option is enumerated here with an explicit default, and
//! normalized once at the `add` entry point instead of per factory. Fields
//! the core does not interpret (column widths, class names) are carried as
//! opaque hints for the rendering layer.

use panelkit_core::{ChangeCallback, Event, UpdateCallback, Value};

use crate::container::ContainerId;
use crate::notify::PanelCallback;

/// Panel-level construction options.
#[derive(Clone)]
pub struct InspectorConfig {
    /// Panel sizing hint, delegated to the layout collaborator.
    pub width: Option<f32>,
    /// Panel sizing hint, delegated to the layout collaborator.
    pub height: Option<f32>,
    /// Widgets per visual row before wrapping (alternation grouping).
    pub widgets_per_row: u32,
    /// Column sizing hint for widget name labels.
    pub name_column_width: Option<f32>,
    /// Column sizing hint for widget bodies.
    pub widget_column_width: Option<f32>,
    /// Horizontal one-line layout mode.
    pub one_line_per_row: bool,
    /// Panel-level change handler `(name, value, widget)`.
    pub on_change: Option<PanelCallback>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            widgets_per_row: 1,
            name_column_width: None,
            widget_column_width: None,
            one_line_per_row: false,
            on_change: None,
        }
    }
}

impl InspectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn widgets_per_row(mut self, n: u32) -> Self {
        self.widgets_per_row = n.max(1);
        self
    }

    pub fn name_column_width(mut self, width: f32) -> Self {
        self.name_column_width = Some(width);
        self
    }

    pub fn widget_column_width(mut self, width: f32) -> Self {
        self.widget_column_width = Some(width);
        self
    }

    pub fn one_line_per_row(mut self) -> Self {
        self.one_line_per_row = true;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &Value, crate::widgets::WidgetId) + Send + Sync + 'static,
    {
        self.on_change = Some(std::sync::Arc::new(handler));
        self
    }
}

/// Per-widget options honored by the generic contract.
///
/// Per-kind knobs (`min`/`max`/`step`, `choices`, ...) live here too so the
/// typed convenience methods stay thin wrappers over the same `add` path.
#[derive(Clone, Default)]
pub struct WidgetOptions {
    /// Edit callback; may return a coerced replacement value.
    pub callback: Option<ChangeCallback>,
    /// Fires on commit-after-drag instead of every intermediate tick.
    pub final_callback: Option<ChangeCallback>,
    /// Pull-based refresh source consulted by `update_widgets`.
    pub callback_update: Option<UpdateCallback>,
    /// Suppress the before/after notification pair.
    pub skip_change_events: bool,
    pub disabled: bool,
    /// Renderer styling hook.
    pub class_name: Option<String>,
    /// Explicit container instead of the current stack top.
    pub widget_parent: Option<ContainerId>,
    /// Storage key different from the displayed label.
    pub name_override: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Decimal places a numeric widget commits at.
    pub precision: Option<u8>,
    /// Unit suffix hint for numeric widgets.
    pub units: Option<String>,
    /// Choice list for combo/list widgets.
    pub choices: Vec<Value>,
}

impl WidgetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalization of the bare-callback shorthand: an options bag that is
    /// nothing but an edit callback.
    pub fn from_callback<F>(callback: F) -> Self
    where
        F: Fn(&Value, Option<&Event>) -> Option<Value> + Send + Sync + 'static,
    {
        Self::new().on_change(callback)
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Value, Option<&Event>) -> Option<Value> + Send + Sync + 'static,
    {
        self.callback = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn on_final_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Value, Option<&Event>) -> Option<Value> + Send + Sync + 'static,
    {
        self.final_callback = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.callback_update = Some(std::sync::Arc::new(callback));
        self
    }

    pub fn skip_change_events(mut self) -> Self {
        self.skip_change_events = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn parent(mut self, container: ContainerId) -> Self {
        self.widget_parent = Some(container);
        self
    }

    /// Store under a different key than the displayed label.
    pub fn stored_as(mut self, name: impl Into<String>) -> Self {
        self.name_override = Some(name.into());
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn precision(mut self, digits: u8) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}
