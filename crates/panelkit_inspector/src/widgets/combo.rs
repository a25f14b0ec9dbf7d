//! Dropdown choice widget
//!
//! Holds a fixed choice list; the committed value is always one of the
//! choices. A `set_value` with a value not in the list leaves the selection
//! unchanged.

use panelkit_core::events::event_types;
use panelkit_core::{Event, EventData, Value};

use super::Widget;

pub struct ComboWidget {
    choices: Vec<Value>,
    selected: usize,
    enabled: bool,
}

impl ComboWidget {
    /// Selects the choice equal to `initial`, or the first choice.
    pub fn new(choices: Vec<Value>, initial: &Value) -> Self {
        let selected = choices.iter().position(|c| c == initial).unwrap_or(0);
        Self {
            choices,
            selected,
            enabled: true,
        }
    }

    pub fn choices(&self) -> &[Value] {
        &self.choices
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }
}

impl Widget for ComboWidget {
    fn kind(&self) -> &'static str {
        "combo"
    }

    fn value(&self) -> Value {
        self.choices
            .get(self.selected)
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn set_value(&mut self, value: &Value) {
        match self.choices.iter().position(|c| c == value) {
            Some(index) => self.selected = index,
            None => {
                tracing::debug!(value = value.type_name(), "value not in choice list; selection kept")
            }
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled || event.event_type != event_types::SELECT {
            return None;
        }
        let EventData::Select { index } = event.data else {
            return None;
        };
        if index >= self.choices.len() {
            tracing::warn!(index, len = self.choices.len(), "choice index out of range");
            return None;
        }
        self.selected = index;
        Some(self.value())
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

    fn choices() -> Vec<Value> {
        vec![Value::from("low"), Value::from("mid"), Value::from("high")]
    }

    #[test]
    fn test_initial_selection_matches_value() {
        let w = ComboWidget::new(choices(), &Value::from("mid"));
        assert_eq!(w.selected_index(), 1);
        assert_eq!(w.value(), Value::from("mid"));
    }

    #[test]
    fn test_select_commits_choice() {
        let mut w = ComboWidget::new(choices(), &Value::from("low"));
        assert_eq!(w.interact(&Event::select(2)), Some(Value::from("high")));
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut w = ComboWidget::new(choices(), &Value::from("low"));
        assert_eq!(w.interact(&Event::select(9)), None);
        assert_eq!(w.value(), Value::from("low"));
    }

    #[test]
    fn test_unknown_set_value_keeps_selection() {
        let mut w = ComboWidget::new(choices(), &Value::from("mid"));
        w.set_value(&Value::from("nope"));
        assert_eq!(w.value(), Value::from("mid"));
    }
}
