//! Item constructs: pattern-based declarations grouped under an optional
//! condition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The operation an item performs on its spec.
///
/// Exactly one spec attribute is emitted per item, named after the
/// operation. The discriminant order participates in canonical item
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemOperation {
    /// Add the spec to the item list.
    Include,
    /// Remove the spec from the item list.
    Remove,
    /// Update metadata on items already in the list.
    Update,
}

impl ItemOperation {
    /// The serialized attribute name for this operation.
    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::Include => "Include",
            Self::Remove => "Remove",
            Self::Update => "Update",
        }
    }
}

/// A single item declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item type name (serialized element name).
    pub item_type: String,
    /// The operation applied to the spec.
    pub operation: ItemOperation,
    /// The path or pattern operated on, kept as opaque text.
    pub spec: String,
    /// Exclude pattern, kept as opaque text.
    pub exclude: Option<String>,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
    /// Attribute-style metadata. Keys are unique; inserting an existing key
    /// replaces its value.
    pub metadata: IndexMap<String, String>,
    /// Element-style metadata rendered as child nodes. Same key semantics
    /// as `metadata`.
    pub child_metadata: IndexMap<String, String>,
}

impl Item {
    fn new(item_type: impl Into<String>, operation: ItemOperation, spec: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            operation,
            spec: spec.into(),
            exclude: None,
            condition: None,
            metadata: IndexMap::new(),
            child_metadata: IndexMap::new(),
        }
    }

    /// Create an item that includes the given spec.
    pub fn include(item_type: impl Into<String>, spec: impl Into<String>) -> Self {
        Self::new(item_type, ItemOperation::Include, spec)
    }

    /// Create an item that removes the given spec.
    pub fn remove(item_type: impl Into<String>, spec: impl Into<String>) -> Self {
        Self::new(item_type, ItemOperation::Remove, spec)
    }

    /// Create an item that updates metadata on the given spec.
    pub fn update(item_type: impl Into<String>, spec: impl Into<String>) -> Self {
        Self::new(item_type, ItemOperation::Update, spec)
    }

    /// Attach an exclude pattern.
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    /// Attach a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Set an attribute-style metadata value.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set an element-style metadata value.
    pub fn with_child_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.child_metadata.insert(key.into(), value.into());
        self
    }
}

/// One entry in an item group: either a passthrough comment or an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemGroupEntry {
    /// A comment interleaved between items.
    Comment(String),
    /// An item declaration.
    Item(Item),
}

/// An ordered group of items, optionally labelled and conditioned.
///
/// Carries the same dual view as a property group: `entries` preserves
/// interleaved comments and is authoritative when non-empty, `items` is the
/// plain fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    /// Authoring label, rendered as a `Label` attribute.
    pub label: Option<String>,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
    /// Ordered entries (comments and items). Authoritative when non-empty.
    pub entries: Vec<ItemGroupEntry>,
    /// Plain item list, used when no interleaved entries were authored.
    pub items: Vec<Item>,
}

impl ItemGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an authoring label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Append an item to the entries view.
    pub fn with_item(mut self, item: Item) -> Self {
        self.entries.push(ItemGroupEntry::Item(item));
        self
    }

    /// Append a comment to the entries view.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.entries.push(ItemGroupEntry::Comment(text.into()));
        self
    }

    /// Resolve the authoritative view into one entry list.
    pub fn effective_entries(&self) -> Vec<ItemGroupEntry> {
        if !self.entries.is_empty() {
            self.entries.clone()
        } else {
            self.items.iter().cloned().map(ItemGroupEntry::Item).collect()
        }
    }

    /// Returns true if both views are empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_attribute_names() {
        assert_eq!(ItemOperation::Include.attribute_name(), "Include");
        assert_eq!(ItemOperation::Remove.attribute_name(), "Remove");
        assert_eq!(ItemOperation::Update.attribute_name(), "Update");
    }

    #[test]
    fn test_operation_order() {
        assert!(ItemOperation::Include < ItemOperation::Remove);
        assert!(ItemOperation::Remove < ItemOperation::Update);
    }

    #[test]
    fn test_metadata_insert_replaces_existing_key() {
        let item = Item::include("Compile", "a.cs")
            .with_metadata("Pack", "false")
            .with_metadata("Pack", "true");

        assert_eq!(item.metadata.len(), 1);
        assert_eq!(item.metadata.get("Pack").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_metadata_keeps_insertion_order() {
        let item = Item::include("Content", "assets/**")
            .with_metadata("z", "1")
            .with_metadata("a", "2");

        let keys: Vec<&str> = item.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_entries_view_wins_over_plain_list() {
        let group = ItemGroup {
            entries: vec![ItemGroupEntry::Item(Item::include("Compile", "a.cs"))],
            items: vec![Item::include("Compile", "b.cs")],
            ..Default::default()
        };

        assert_eq!(group.effective_entries().len(), 1);
    }
}
