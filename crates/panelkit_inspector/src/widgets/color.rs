//! Color widget
//!
//! The pixel-level picker is an external collaborator; it drives this widget
//! either with a hex string (text input) or per-channel component edits.

use panelkit_core::events::event_types;
use panelkit_core::{Color, Event, EventData, Value};

use super::Widget;

pub struct ColorWidget {
    color: Color,
    enabled: bool,
}

impl ColorWidget {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            enabled: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn set_channel(&mut self, index: usize, value: f64) -> bool {
        let value = value.clamp(0.0, 1.0) as f32;
        match index {
            0 => self.color.r = value,
            1 => self.color.g = value,
            2 => self.color.b = value,
            3 => self.color.a = value,
            _ => {
                tracing::warn!(index, "color channel out of range");
                return false;
            }
        }
        true
    }
}

impl Widget for ColorWidget {
    fn kind(&self) -> &'static str {
        "color"
    }

    fn value(&self) -> Value {
        Value::Color(self.color)
    }

    fn set_value(&mut self, value: &Value) {
        match value {
            Value::Color(c) => self.color = *c,
            Value::Text(hex) => {
                if let Some(c) = Color::from_hex_str(hex) {
                    self.color = c;
                }
            }
            _ => {}
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        match (event.event_type, &event.data) {
            (event_types::TEXT_INPUT, EventData::Text { text }) => {
                Color::from_hex_str(text).map(|c| {
                    self.color = c;
                    self.value()
                })
            }
            (event_types::COMPONENT, EventData::Component { index, value }) => {
                self.set_channel(*index, *value).then(|| self.value())
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
    fn test_hex_input_commits() {
        let mut w = ColorWidget::new(Color::BLACK);
        let committed = w.interact(&Event::text("#ff0000"));
        assert_eq!(committed, Some(Value::Color(Color::RED)));
    }

    #[test]
    fn test_channel_edit_commits() {
        let mut w = ColorWidget::new(Color::BLACK);
        let committed = w.interact(&Event::component(2, 1.0));
        assert_eq!(committed, Some(Value::Color(Color::BLUE)));
    }

    #[test]
    fn test_bad_hex_ignored() {
        let mut w = ColorWidget::new(Color::GREEN);
        assert_eq!(w.interact(&Event::text("not-a-color")), None);
        assert_eq!(w.color(), Color::GREEN);
    }
}
