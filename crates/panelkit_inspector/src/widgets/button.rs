//! Push-button widget
//!
//! Carries no editable state; a click commits the button label through the
//! uniform change pipeline so panel-level handlers observe presses the same
//! way they observe value edits.

use panelkit_core::events::event_types;
use panelkit_core::{Event, Value};

use super::Widget;

pub struct ButtonWidget {
    label: String,
    enabled: bool,
}

impl ButtonWidget {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for ButtonWidget {
    fn kind(&self) -> &'static str {
        "button"
    }

    fn value(&self) -> Value {
        Value::Text(self.label.clone())
    }

    fn set_value(&mut self, value: &Value) {
        if let Value::Text(label) = value {
            self.label = label.clone();
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        (event.event_type == event_types::POINTER_UP).then(|| self.value())
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
