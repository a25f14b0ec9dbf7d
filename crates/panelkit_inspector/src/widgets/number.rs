//! Numeric widget
//!
//! Backs both the `number` and `slider` kinds: a scalar with optional range,
//! drag step, and commit precision. Drag ticks commit intermediate values;
//! the drag-end event re-commits the final value so the change pipeline can
//! route it to `final_callback` instead of `callback`.

use panelkit_core::events::event_types;
use panelkit_core::{Event, EventData, Value};

use crate::options::WidgetOptions;

use super::Widget;

/// Numeric widget configuration.
#[derive(Clone, Debug)]
pub struct NumberConfig {
    pub min: f64,
    pub max: f64,
    /// Value change per dragged pixel.
    pub step: f64,
    /// Decimal places committed values are rounded to.
    pub precision: Option<u8>,
    /// Unit suffix hint for the renderer.
    pub units: Option<String>,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 1.0,
            precision: None,
            units: None,
        }
    }
}

impl NumberConfig {
    pub fn from_options(options: &WidgetOptions) -> Self {
        let defaults = Self::default();
        Self {
            min: options.min.unwrap_or(defaults.min),
            max: options.max.unwrap_or(defaults.max),
            step: options.step.unwrap_or(defaults.step),
            precision: options.precision,
            units: options.units.clone(),
        }
    }
}

fn round_to(value: f64, digits: u8) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

pub struct NumberWidget {
    kind: &'static str,
    value: f64,
    config: NumberConfig,
    enabled: bool,
}

impl NumberWidget {
    pub fn new(kind: &'static str, value: f64, config: NumberConfig) -> Self {
        let mut widget = Self {
            kind,
            value: 0.0,
            config,
            enabled: true,
        };
        widget.value = widget.quantize(value);
        widget
    }

    fn quantize(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.config.min, self.config.max);
        match self.config.precision {
            Some(digits) => round_to(clamped, digits),
            None => clamped,
        }
    }

    fn commit(&mut self, value: f64) -> Value {
        self.value = self.quantize(value);
        Value::Number(self.value)
    }
}

impl Widget for NumberWidget {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn value(&self) -> Value {
        Value::Number(self.value)
    }

    fn set_value(&mut self, value: &Value) {
        if let Value::Number(n) = value {
            self.value = self.quantize(*n);
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        match event.event_type {
            event_types::DRAG => {
                if let EventData::Drag { dx, .. } = event.data {
                    Some(self.commit(self.value + dx as f64 * self.config.step))
                } else {
                    None
                }
            }
            // Re-commit on drag end so the pipeline can fire final_callback.
            event_types::DRAG_END => Some(Value::Number(self.value)),
            event_types::TEXT_INPUT => {
                if let EventData::Text { text } = &event.data {
                    text.trim().parse::<f64>().ok().map(|n| self.commit(n))
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

    fn set_range(&mut self, min: f64, max: f64) {
        self.config.min = min;
        self.config.max = max;
        self.value = self.quantize(self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(value: f64, config: NumberConfig) -> NumberWidget {
        NumberWidget::new("number", value, config)
    }

    #[test]
    fn test_drag_applies_step_and_clamps() {
        let mut w = widget(
            5.0,
            NumberConfig {
                min: 0.0,
                max: 10.0,
                step: 2.0,
                ..Default::default()
            },
        );
        assert_eq!(w.interact(&Event::drag(1.0, 0.0)), Some(Value::Number(7.0)));
        assert_eq!(
            w.interact(&Event::drag(100.0, 0.0)),
            Some(Value::Number(10.0))
        );
    }

    #[test]
    fn test_typed_input_respects_precision() {
        let mut w = widget(
            0.0,
            NumberConfig {
                precision: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(
            w.interact(&Event::text("1.2345")),
            Some(Value::Number(1.23))
        );
    }

    #[test]
    fn test_set_range_reclamps_current_value() {
        let mut w = widget(50.0, NumberConfig::default());
        w.set_range(0.0, 10.0);
        assert_eq!(w.value(), Value::Number(10.0));
    }

    #[test]
    fn test_garbage_text_does_not_commit() {
        let mut w = widget(3.0, NumberConfig::default());
        assert_eq!(w.interact(&Event::text("abc")), None);
        assert_eq!(w.value(), Value::Number(3.0));
    }
}
