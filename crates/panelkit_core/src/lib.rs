//! PanelKit Core Primitives
//!
//! This crate provides the foundational types for the PanelKit inspector
//! library:
//!
//! - **Value model**: the closed set of shapes a widget can hold
//! - **Input events**: the channel a rendering layer uses to drive widgets
//! - **Error taxonomy**: hard failures vs. logged degradations
//!
//! # Example
//!
//! ```rust
//! use panelkit_core::{Color, Value};
//!
//! let v = Value::from([0.0, 1.0, 2.0]);
//! assert_eq!(v.type_name(), "vector");
//!
//! let c = Color::from_hex(0x4080ff);
//! assert_eq!(c.to_hex_string(), "#4080ff");
//! ```

pub mod callback;
pub mod color;
pub mod error;
pub mod events;
pub mod value;

pub use callback::{ChangeCallback, UpdateCallback};
pub use color::Color;
pub use error::{Error, Result};
pub use events::{Event, EventData, EventType};
pub use value::{Components, Value};
