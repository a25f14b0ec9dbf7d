//! Boolean toggle widget

use panelkit_core::events::event_types;
use panelkit_core::{Event, Value};

use super::Widget;

pub struct CheckboxWidget {
    checked: bool,
    enabled: bool,
    /// Optional display labels for the two states (renderer hint).
    pub label_on: Option<String>,
    pub label_off: Option<String>,
}

impl CheckboxWidget {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            enabled: true,
            label_on: None,
            label_off: None,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Widget for CheckboxWidget {
    fn kind(&self) -> &'static str {
        "checkbox"
    }

    fn value(&self) -> Value {
        Value::Bool(self.checked)
    }

    fn set_value(&mut self, value: &Value) {
        if let Value::Bool(checked) = value {
            self.checked = *checked;
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        match event.event_type {
            event_types::POINTER_UP | event_types::KEY_DOWN => {
                self.checked = !self.checked;
                Some(Value::Bool(self.checked))
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles() {
        let mut w = CheckboxWidget::new(true);
        assert_eq!(
            w.interact(&Event::pointer_up(0.0, 0.0)),
            Some(Value::Bool(false))
        );
        assert_eq!(
            w.interact(&Event::pointer_up(0.0, 0.0)),
            Some(Value::Bool(true))
        );
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let mut w = CheckboxWidget::new(true);
        w.set_enabled(false);
        assert_eq!(w.interact(&Event::pointer_up(0.0, 0.0)), None);
        assert!(w.is_checked());
    }
}
