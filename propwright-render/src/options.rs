//! Render configuration.

use serde::{Deserialize, Serialize};

/// The default root namespace of the dialect.
pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Configuration for one render call.
///
/// Constructed once and passed by reference; never mutated mid-render, so
/// one instance is safely shared across concurrent renders. Each sort
/// toggle opts one structural category into canonical ordering; a disabled
/// toggle preserves author order for that category exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Namespace emitted on the root element. An empty string disables
    /// namespace emission entirely.
    pub namespace: String,
    /// Sort plain property groups by property name.
    pub sort_properties: bool,
    /// Sort item groups by (type, operation, spec).
    pub sort_items: bool,
    /// Sort each item's attribute-style and element-style metadata by key.
    pub sort_item_metadata: bool,
    /// Sort the categorized task-declaration collection by task name.
    pub sort_task_declarations: bool,
    /// Sort each task invocation's parameters by key.
    pub sort_task_parameters: bool,
}

impl RenderOptions {
    /// Options with every canonicalization toggle disabled: output element
    /// order exactly matches insertion order of every container.
    pub fn preserve_order() -> Self {
        Self {
            namespace: MSBUILD_NAMESPACE.to_string(),
            sort_properties: false,
            sort_items: false,
            sort_item_metadata: false,
            sort_task_declarations: false,
            sort_task_parameters: false,
        }
    }

    /// Replace the root namespace. Pass an empty string to disable.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

impl Default for RenderOptions {
    /// Canonical-by-default: the dialect namespace and every sort toggle
    /// enabled.
    fn default() -> Self {
        Self {
            namespace: MSBUILD_NAMESPACE.to_string(),
            sort_properties: true,
            sort_items: true,
            sort_item_metadata: true,
            sort_task_declarations: true,
            sort_task_parameters: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let options = RenderOptions::default();
        assert_eq!(options.namespace, MSBUILD_NAMESPACE);
        assert!(options.sort_properties);
        assert!(options.sort_items);
        assert!(options.sort_item_metadata);
        assert!(options.sort_task_declarations);
        assert!(options.sort_task_parameters);
    }

    #[test]
    fn test_preserve_order_disables_all_toggles() {
        let options = RenderOptions::preserve_order();
        assert!(!options.sort_properties);
        assert!(!options.sort_items);
        assert!(!options.sort_item_metadata);
        assert!(!options.sort_task_declarations);
        assert!(!options.sort_task_parameters);
    }

    #[test]
    fn test_with_namespace() {
        let options = RenderOptions::default().with_namespace("");
        assert!(options.namespace.is_empty());
    }
}
