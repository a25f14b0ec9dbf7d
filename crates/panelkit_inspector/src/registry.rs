//! Widget type registry
//!
//! Maps lowercase type keywords to factory functions. Factories receive the
//! inspector so they can run the common registration steps through
//! `Inspector::install`; the registry itself never constructs widgets.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use panelkit_core::Value;

use crate::inspector::Inspector;
use crate::options::WidgetOptions;
use crate::widgets::WidgetId;

/// Factory bound to a type keyword. Cloned out of the table before
/// invocation so the registry is not borrowed during dispatch.
pub type WidgetFactory = Arc<dyn Fn(&mut Inspector, WidgetSpec) -> Option<WidgetId> + Send + Sync>;

/// One widget-creation request, in options-bag form.
///
/// `kind` may be absent when the spec was assembled dynamically; dispatching
/// such a spec is a programmer error surfaced as `Error::MissingType`.
#[derive(Clone)]
pub struct WidgetSpec {
    pub kind: Option<String>,
    pub name: String,
    pub value: Value,
    pub options: WidgetOptions,
}

impl WidgetSpec {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            kind: Some(kind.into()),
            name: name.into(),
            value: value.into(),
            options: WidgetOptions::default(),
        }
    }

    /// A spec with no type keyword.
    pub fn untyped(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            kind: None,
            name: name.into(),
            value: value.into(),
            options: WidgetOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WidgetOptions) -> Self {
        self.options = options;
        self
    }
}

pub struct WidgetRegistry {
    factories: FxHashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    /// An empty registry (no built-in kinds).
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// A registry preloaded with the built-in kinds.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::widgets::register_builtins(&mut registry);
        registry
    }

    /// Add or overwrite a keyword → factory mapping. Keywords are
    /// case-insensitive; there is no removal operation.
    pub fn register(&mut self, keyword: &str, factory: WidgetFactory) {
        let keyword = keyword.to_ascii_lowercase();
        if self.factories.insert(keyword.clone(), factory).is_some() {
            tracing::debug!(kind = %keyword, "widget factory overwritten");
        }
    }

    /// Case-insensitive lookup. Unknown keywords log and return `None`; the
    /// caller is expected to no-op.
    pub fn resolve(&self, keyword: &str) -> Option<WidgetFactory> {
        let factory = self.factories.get(&keyword.to_ascii_lowercase()).cloned();
        if factory.is_none() {
            tracing::warn!(kind = %keyword, "unknown widget type");
        }
        factory
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.factories.contains_key(&keyword.to_ascii_lowercase())
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = WidgetRegistry::with_builtins();
        assert!(registry.resolve("CheckBox").is_some());
        assert!(registry.resolve("checkbox").is_some());
    }

    #[test]
    fn test_unknown_keyword_resolves_to_none() {
        let registry = WidgetRegistry::with_builtins();
        assert!(registry.resolve("hologram").is_none());
    }

    #[test]
    fn test_registration_overwrites() {
        let mut registry = WidgetRegistry::new();
        let factory: WidgetFactory = Arc::new(|_, _| None);
        registry.register("Custom", factory.clone());
        registry.register("custom", factory);
        assert_eq!(registry.kinds().count(), 1);
        assert!(registry.contains("CUSTOM"));
    }
}
