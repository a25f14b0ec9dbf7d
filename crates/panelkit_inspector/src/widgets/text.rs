//! Static text and editable string widgets
//!
//! `StaticTextWidget` backs the `title` and `info` kinds (display only), and
//! `SeparatorWidget` the unnamed divider. `StringWidget` is the single-line
//! editable field: text input commits, focus/blur only flip the focus flag.

use panelkit_core::events::event_types;
use panelkit_core::{Event, EventData, Value};

use super::Widget;

/// Display-only text (titles and info rows).
pub struct StaticTextWidget {
    kind: &'static str,
    text: String,
}

impl StaticTextWidget {
    pub fn new(kind: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl Widget for StaticTextWidget {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_value(&mut self, value: &Value) {
        if let Value::Text(text) = value {
            self.text = text.clone();
        }
    }
}

/// Unnamed horizontal divider.
pub struct SeparatorWidget;

impl Widget for SeparatorWidget {
    fn kind(&self) -> &'static str {
        "separator"
    }

    fn value(&self) -> Value {
        Value::Null
    }

    fn set_value(&mut self, _value: &Value) {}
}

/// Single-line editable text field.
pub struct StringWidget {
    text: String,
    enabled: bool,
    focused: bool,
}

impl StringWidget {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
            focused: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Widget for StringWidget {
    fn kind(&self) -> &'static str {
        "string"
    }

    fn value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_value(&mut self, value: &Value) {
        if let Value::Text(text) = value {
            self.text = text.clone();
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        match event.event_type {
            event_types::FOCUS => {
                self.focused = true;
                None
            }
            event_types::BLUR => {
                self.focused = false;
                None
            }
            event_types::TEXT_INPUT if self.enabled => {
                if let EventData::Text { text } = &event.data {
                    self.text = text.clone();
                    Some(self.value())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
