//! Built-in widget kinds and the uniform widget contract
//!
//! Every widget, built-in or registered at runtime, satisfies the same small
//! contract: report a value, accept a value, and translate raw input events
//! into committed values. The inspector owns the widget behind a `WidgetId`
//! and drives the change pipeline around it; widgets never touch the value
//! cache or the callbacks themselves.

use std::sync::Arc;

use slotmap::new_key_type;

use panelkit_core::{Event, Value};

use crate::registry::WidgetRegistry;

pub mod button;
pub mod checkbox;
pub mod color;
pub mod combo;
pub mod list;
pub mod number;
pub mod text;
pub mod vector;

pub use button::ButtonWidget;
pub use checkbox::CheckboxWidget;
pub use color::ColorWidget;
pub use combo::ComboWidget;
pub use list::ListWidget;
pub use number::{NumberConfig, NumberWidget};
pub use text::{SeparatorWidget, StaticTextWidget, StringWidget};
pub use vector::{VectorConfig, VectorWidget};

new_key_type! {
    pub struct WidgetId;
}

/// Uniform contract every widget kind satisfies.
pub trait Widget: Send {
    /// The registered type keyword this widget was created as.
    fn kind(&self) -> &'static str;

    /// Current live value.
    fn value(&self) -> Value;

    /// Update the displayed value. Never emits change events; the inspector
    /// decides whether a set goes through the change pipeline.
    fn set_value(&mut self, value: &Value);

    /// Map a raw input event to a committed value. `None` means the event
    /// does not commit anything (hover, focus, out-of-range index, ...).
    fn interact(&mut self, event: &Event) -> Option<Value> {
        let _ = event;
        None
    }

    fn set_enabled(&mut self, enabled: bool) {
        let _ = enabled;
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn focus(&mut self) {}

    /// Re-bound a numeric or vector widget. No-op for other kinds.
    fn set_range(&mut self, min: f64, max: f64) {
        let _ = (min, max);
    }
}

fn vector_factory(kind: &'static str, dims: usize) -> crate::registry::WidgetFactory {
    Arc::new(move |insp, spec| {
        let config = VectorConfig::from_options(&spec.options);
        let mut widget = VectorWidget::new(kind, dims, &spec.value, config);
        widget.set_enabled(!spec.options.disabled);
        Some(insp.install(spec, Box::new(widget)))
    })
}

/// Register the built-in kinds. Called once from `WidgetRegistry::with_builtins`.
pub(crate) fn register_builtins(registry: &mut WidgetRegistry) {
    registry.register(
        "title",
        Arc::new(|insp, spec| {
            let text = spec.value.as_text().unwrap_or(&spec.name).to_string();
            Some(insp.install(spec, Box::new(StaticTextWidget::new("title", text))))
        }),
    );

    registry.register(
        "info",
        Arc::new(|insp, spec| {
            let text = spec.value.as_text().unwrap_or_default().to_string();
            Some(insp.install(spec, Box::new(StaticTextWidget::new("info", text))))
        }),
    );

    registry.register(
        "separator",
        Arc::new(|insp, spec| Some(insp.install(spec, Box::new(SeparatorWidget)))),
    );

    registry.register(
        "string",
        Arc::new(|insp, spec| {
            let text = spec.value.as_text().unwrap_or_default().to_string();
            let mut widget = StringWidget::new(text);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register(
        "number",
        Arc::new(|insp, spec| {
            let config = NumberConfig::from_options(&spec.options);
            let initial = spec.value.as_number().unwrap_or(0.0);
            let mut widget = NumberWidget::new("number", initial, config);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register(
        "slider",
        Arc::new(|insp, spec| {
            // Sliders are bounded by definition; default to the unit range.
            let mut config = NumberConfig::from_options(&spec.options);
            if spec.options.min.is_none() {
                config.min = 0.0;
            }
            if spec.options.max.is_none() {
                config.max = 1.0;
            }
            if spec.options.step.is_none() {
                config.step = 0.01;
            }
            let initial = spec.value.as_number().unwrap_or(config.min);
            let mut widget = NumberWidget::new("slider", initial, config);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register(
        "checkbox",
        Arc::new(|insp, spec| {
            let checked = spec.value.as_bool().unwrap_or(false);
            let mut widget = CheckboxWidget::new(checked);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register(
        "combo",
        Arc::new(|insp, spec| {
            let mut widget = ComboWidget::new(spec.options.choices.clone(), &spec.value);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register(
        "list",
        Arc::new(|insp, spec| {
            let mut widget = ListWidget::new(spec.options.choices.clone(), &spec.value);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register(
        "color",
        Arc::new(|insp, spec| {
            let initial = spec.value.as_color().unwrap_or_default();
            let mut widget = ColorWidget::new(initial);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );

    registry.register("vec2", vector_factory("vec2", 2));
    registry.register("vec3", vector_factory("vec3", 3));
    registry.register("vec4", vector_factory("vec4", 4));

    registry.register(
        "button",
        Arc::new(|insp, spec| {
            let label = spec.value.as_text().unwrap_or(&spec.name).to_string();
            let mut widget = ButtonWidget::new(label);
            widget.set_enabled(!spec.options.disabled);
            Some(insp.install(spec, Box::new(widget)))
        }),
    );
}
