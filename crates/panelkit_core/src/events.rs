//! Input event model
//!
//! The channel a rendering layer uses to drive widget interaction. Widgets
//! interpret raw events in `Widget::interact` and turn them into committed
//! values; the inspector never inspects event payloads itself.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Drag tick (pointer down + move)
    pub const DRAG: EventType = 6;
    /// Drag ended (pointer up after drag)
    pub const DRAG_END: EventType = 7;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    /// Text committed from keyboard or IME
    pub const TEXT_INPUT: EventType = 22;
    /// Choice picked from a dropdown or list row
    pub const SELECT: EventType = 30;
    /// One component of a multi-part widget edited
    pub const COMPONENT: EventType = 31;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    Key {
        key: u32,
    },
    /// Text input from keyboard or IME
    Text {
        text: String,
    },
    /// Index into a widget's choice list
    Select {
        index: usize,
    },
    /// Drag delta since the last tick
    Drag {
        dx: f32,
        dy: f32,
    },
    /// One component of a vector-style widget
    Component {
        index: usize,
        value: f64,
    },
    #[default]
    None,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self { event_type, data }
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self::new(
            event_types::POINTER_DOWN,
            EventData::Pointer { x, y, button: 0 },
        )
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::new(
            event_types::POINTER_UP,
            EventData::Pointer { x, y, button: 0 },
        )
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(event_types::TEXT_INPUT, EventData::Text { text: text.into() })
    }

    pub fn select(index: usize) -> Self {
        Self::new(event_types::SELECT, EventData::Select { index })
    }

    pub fn drag(dx: f32, dy: f32) -> Self {
        Self::new(event_types::DRAG, EventData::Drag { dx, dy })
    }

    pub fn drag_end() -> Self {
        Self::new(event_types::DRAG_END, EventData::None)
    }

    pub fn component(index: usize, value: f64) -> Self {
        Self::new(event_types::COMPONENT, EventData::Component { index, value })
    }

    pub fn focus() -> Self {
        Self::new(event_types::FOCUS, EventData::None)
    }

    pub fn blur() -> Self {
        Self::new(event_types::BLUR, EventData::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_tag_event_type() {
        assert_eq!(Event::text("x").event_type, event_types::TEXT_INPUT);
        assert_eq!(Event::select(2).event_type, event_types::SELECT);
        assert_eq!(Event::drag_end().event_type, event_types::DRAG_END);
    }
}
