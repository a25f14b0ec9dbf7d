//! PanelKit Inspector
//!
//! A retained widget-composition host for property-inspector panels. An
//! `Inspector` accumulates named, typed widgets inside nested
//! containers/sections/groups, caches their values, and pushes committed
//! user edits through a uniform change pipeline:
//!
//! - **Registry**: type keyword → factory dispatch, extensible at runtime
//! - **Container stack**: the active insertion point, so factories never
//!   take an explicit parent
//! - **Sections/groups**: collapsible regions; one section open at a time,
//!   reactivatable for retroactive appends
//! - **Change pipeline**: before/after notifications, cache update, widget
//!   callback, panel-level handler — synchronously, in that order
//!
//! # Example
//!
//! ```rust
//! use panelkit_inspector::{Inspector, Value, WidgetOptions};
//!
//! let mut inspector = Inspector::new();
//! inspector.add_number("Width", 1000.0, WidgetOptions::default());
//! inspector.add_checkbox("Visible", true, WidgetOptions::default());
//!
//! assert_eq!(inspector.get_value("Width"), Some(&Value::Number(1000.0)));
//! assert_eq!(inspector.get_value("Visible"), Some(&Value::Bool(true)));
//! ```

pub mod container;
pub mod inspector;
pub mod notify;
pub mod options;
pub mod registry;
pub mod section;
pub mod widgets;

pub use container::{Child, Container, ContainerId, ContainerKind, ContainerStack};
pub use inspector::{Inspector, WidgetEntry};
pub use notify::{ChangeEvent, ChangeListener, ChangePhase, PanelCallback};
pub use options::{InspectorConfig, WidgetOptions};
pub use registry::{WidgetFactory, WidgetRegistry, WidgetSpec};
pub use section::{Section, SectionId, SectionOptions};
pub use widgets::{Widget, WidgetId};

// Core primitives, re-exported for downstream convenience.
pub use panelkit_core::{Color, Error, Event, EventData, Value};

pub mod prelude {
    pub use crate::{
        ChangeEvent, ChangePhase, Color, Event, Inspector, InspectorConfig, SectionOptions, Value,
        Widget, WidgetId, WidgetOptions,
    };
}
