//! Callback type aliases shared by widget options.

use std::sync::Arc;

use crate::events::Event;
use crate::value::Value;

/// Per-widget edit callback, fired on every committed user edit.
///
/// Returning `Some(v)` replaces the committed value — a numeric widget can
/// use this to clamp the displayed value to its declared precision. The
/// replacement is pushed back into the widget and the value cache.
pub type ChangeCallback = Arc<dyn Fn(&Value, Option<&Event>) -> Option<Value> + Send + Sync>;

/// Pull-based refresh source: returns a fresh value from the external model.
pub type UpdateCallback = Arc<dyn Fn() -> Value + Send + Sync>;
