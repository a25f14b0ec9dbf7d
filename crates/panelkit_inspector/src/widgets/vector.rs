//! Fixed-dimension vector widget (vec2/vec3/vec4)
//!
//! Component edits commit the whole vector. Text input accepts a
//! comma-separated component list.

use panelkit_core::events::event_types;
use panelkit_core::{Components, Event, EventData, Value};

use crate::options::WidgetOptions;

use super::Widget;

/// Vector widget configuration (per-component range and drag step).
#[derive(Clone, Debug)]
pub struct VectorConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 1.0,
        }
    }
}

impl VectorConfig {
    pub fn from_options(options: &WidgetOptions) -> Self {
        let defaults = Self::default();
        Self {
            min: options.min.unwrap_or(defaults.min),
            max: options.max.unwrap_or(defaults.max),
            step: options.step.unwrap_or(defaults.step),
        }
    }
}

pub struct VectorWidget {
    kind: &'static str,
    dims: usize,
    components: Components,
    config: VectorConfig,
    enabled: bool,
}

impl VectorWidget {
    pub fn new(kind: &'static str, dims: usize, initial: &Value, config: VectorConfig) -> Self {
        let mut widget = Self {
            kind,
            dims,
            components: Components::from_elem(0.0, dims),
            config,
            enabled: true,
        };
        widget.set_value(initial);
        widget
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.config.min, self.config.max)
    }
}

impl Widget for VectorWidget {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn value(&self) -> Value {
        Value::Vector(self.components.clone())
    }

    fn set_value(&mut self, value: &Value) {
        if let Value::Vector(incoming) = value {
            for i in 0..self.dims {
                let component = incoming.get(i).copied().unwrap_or(0.0);
                self.components[i] = self.clamp(component);
            }
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        match (event.event_type, &event.data) {
            (event_types::COMPONENT, EventData::Component { index, value }) => {
                if *index >= self.dims {
                    tracing::warn!(index, dims = self.dims, "vector component out of range");
                    return None;
                }
                self.components[*index] = self.clamp(*value);
                Some(self.value())
            }
            // Re-commit on drag end so the pipeline can fire final_callback.
            (event_types::DRAG_END, _) => Some(self.value()),
            (event_types::TEXT_INPUT, EventData::Text { text }) => {
                let parsed: Option<Vec<f64>> = text
                    .split(',')
                    .map(|part| part.trim().parse::<f64>().ok())
                    .collect();
                let parsed = parsed?;
                if parsed.len() != self.dims {
                    return None;
                }
                for (i, component) in parsed.into_iter().enumerate() {
                    self.components[i] = self.clamp(component);
                }
                Some(self.value())
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
        for i in 0..self.dims {
            self.components[i] = self.components[i].clamp(min, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec3(initial: [f64; 3]) -> VectorWidget {
        VectorWidget::new("vec3", 3, &Value::from(initial), VectorConfig::default())
    }

    #[test]
    fn test_component_edit_commits_whole_vector() {
        let mut w = vec3([1.0, 2.0, 3.0]);
        let committed = w.interact(&Event::component(1, 9.0));
        assert_eq!(committed, Some(Value::from([1.0, 9.0, 3.0])));
    }

    #[test]
    fn test_short_value_pads_with_zeros() {
        let w = VectorWidget::new("vec3", 3, &Value::from([5.0, 6.0]), VectorConfig::default());
        assert_eq!(w.components(), &[5.0, 6.0, 0.0]);
    }

    #[test]
    fn test_text_input_must_match_dims() {
        let mut w = vec3([0.0, 0.0, 0.0]);
        assert_eq!(w.interact(&Event::text("1, 2")), None);
        assert_eq!(
            w.interact(&Event::text("1, 2, 3")),
            Some(Value::from([1.0, 2.0, 3.0]))
        );
    }
}
