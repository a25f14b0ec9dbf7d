//! Widget value model
//!
//! Every widget binds a name to one `Value`. The enum is the closed set of
//! shapes the inspector knows how to cache, compare, and hand to callbacks;
//! per-widget configuration decides how a value is displayed and edited.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Color;

/// Inline storage for vector-widget components (vec2/vec3/vec4 stay on the stack).
pub type Components = SmallVec<[f64; 4]>;

/// A widget's current value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Vector(Components),
    Color(Color),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Components> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Variant name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Vector(_) => "vector",
            Value::Color(_) => "color",
            Value::List(_) => "list",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<&[f64]> for Value {
    fn from(comps: &[f64]) -> Self {
        Value::Vector(Components::from_slice(comps))
    }
}

impl From<[f64; 2]> for Value {
    fn from(comps: [f64; 2]) -> Self {
        Value::Vector(Components::from_slice(&comps))
    }
}

impl From<[f64; 3]> for Value {
    fn from(comps: [f64; 3]) -> Self {
        Value::Vector(Components::from_slice(&comps))
    }
}

impl From<[f64; 4]> for Value {
    fn from(comps: [f64; 4]) -> Self {
        Value::Vector(Components::from_slice(&comps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variants() {
        assert_eq!(Value::from(3.5).as_number(), Some(3.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("hi").as_text(), Some("hi"));
        assert_eq!(Value::from(3.5).as_bool(), None);
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_vector_from_array() {
        let v = Value::from([1.0, 2.0, 3.0]);
        assert_eq!(v.as_vector().map(|c| c.len()), Some(3));
        assert_eq!(v.type_name(), "vector");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Value::List(vec![
            Value::Number(1.0),
            Value::Text("two".into()),
            Value::Color(Color::RED),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
