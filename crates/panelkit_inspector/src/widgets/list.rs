//! Selectable list widget
//!
//! Like a combo, but starts with no selection and keeps the full item list
//! visible. The committed value is the selected item.

use panelkit_core::events::event_types;
use panelkit_core::{Event, EventData, Value};

use super::Widget;

pub struct ListWidget {
    items: Vec<Value>,
    selected: Option<usize>,
    enabled: bool,
}

impl ListWidget {
    pub fn new(items: Vec<Value>, initial: &Value) -> Self {
        let selected = items.iter().position(|item| item == initial);
        Self {
            items,
            selected,
            enabled: true,
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }
}

impl Widget for ListWidget {
    fn kind(&self) -> &'static str {
        "list"
    }

    fn value(&self) -> Value {
        self.selected
            .and_then(|index| self.items.get(index))
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn set_value(&mut self, value: &Value) {
        if value.is_null() {
            self.selected = None;
            return;
        }
        match self.items.iter().position(|item| item == value) {
            Some(index) => self.selected = Some(index),
            None => tracing::debug!("value not in list items; selection kept"),
        }
    }

    fn interact(&mut self, event: &Event) -> Option<Value> {
        if !self.enabled || event.event_type != event_types::SELECT {
            return None;
        }
        let EventData::Select { index } = event.data else {
            return None;
        };
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "list index out of range");
            return None;
        }
        self.selected = Some(index);
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

    #[test]
    fn test_no_initial_selection() {
        let w = ListWidget::new(vec![Value::from("a")], &Value::Null);
        assert_eq!(w.selected_index(), None);
        assert_eq!(w.value(), Value::Null);
    }

    #[test]
    fn test_select_commits_item() {
        let mut w = ListWidget::new(vec![Value::from("a"), Value::from("b")], &Value::Null);
        assert_eq!(w.interact(&Event::select(1)), Some(Value::from("b")));
        assert_eq!(w.selected_index(), Some(1));
    }

    #[test]
    fn test_null_set_value_clears_selection() {
        let mut w = ListWidget::new(vec![Value::from("a")], &Value::from("a"));
        w.set_value(&Value::Null);
        assert_eq!(w.selected_index(), None);
    }
}
