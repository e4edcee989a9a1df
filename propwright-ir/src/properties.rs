//! Property constructs: name/value declarations grouped under an optional
//! condition.

use serde::{Deserialize, Serialize};

/// A single property declaration.
///
/// The name doubles as the serialized element name, so it must be non-empty
/// and a valid element name for the downstream tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name (serialized element name).
    pub name: String,
    /// Property value. An empty value is legal and collapses to an empty
    /// element.
    pub value: String,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
}

impl Property {
    /// Create a property with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            condition: None,
        }
    }

    /// Attach a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// One entry in a property group: either a passthrough comment or a
/// property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyGroupEntry {
    /// A comment interleaved between properties.
    Comment(String),
    /// A property declaration.
    Property(Property),
}

/// An ordered group of properties, optionally labelled and conditioned.
///
/// A group carries two views of its contents: the `entries` view, which
/// preserves comments interleaved between properties, and the plain
/// `properties` list. Whichever view is non-empty is authoritative;
/// `entries` wins when both are populated, and the two are never rendered
/// together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    /// Authoring label, rendered as a `Label` attribute.
    pub label: Option<String>,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
    /// Ordered entries (comments and properties). Authoritative when
    /// non-empty.
    pub entries: Vec<PropertyGroupEntry>,
    /// Plain property list, used when no interleaved entries were authored.
    pub properties: Vec<Property>,
}

impl PropertyGroup {
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

    /// Append a property to the entries view.
    pub fn with_property(mut self, property: Property) -> Self {
        self.entries.push(PropertyGroupEntry::Property(property));
        self
    }

    /// Append a name/value property to the entries view.
    pub fn with_value(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_property(Property::new(name, value))
    }

    /// Append a comment to the entries view.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.entries.push(PropertyGroupEntry::Comment(text.into()));
        self
    }

    /// Resolve the authoritative view into one entry list.
    pub fn effective_entries(&self) -> Vec<PropertyGroupEntry> {
        if !self.entries.is_empty() {
            self.entries.clone()
        } else {
            self.properties
                .iter()
                .cloned()
                .map(PropertyGroupEntry::Property)
                .collect()
        }
    }

    /// Returns true if both views are empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_view_wins_over_plain_list() {
        let group = PropertyGroup {
            entries: vec![PropertyGroupEntry::Property(Property::new("A", "1"))],
            properties: vec![Property::new("B", "2")],
            ..Default::default()
        };

        let entries = group.effective_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0],
            PropertyGroupEntry::Property(Property::new("A", "1"))
        );
    }

    #[test]
    fn test_plain_list_fallback() {
        let group = PropertyGroup {
            properties: vec![Property::new("B", "2"), Property::new("A", "1")],
            ..Default::default()
        };

        let entries = group.effective_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            PropertyGroupEntry::Property(Property::new("B", "2"))
        );
    }

    #[test]
    fn test_fluent_construction() {
        let group = PropertyGroup::new()
            .with_label("Defaults")
            .with_condition("'$(Configuration)' == ''")
            .with_value("Configuration", "Debug")
            .with_comment("overridable")
            .with_property(Property::new("Platform", "AnyCPU").with_condition("'$(Platform)' == ''"));

        assert_eq!(group.label.as_deref(), Some("Defaults"));
        assert_eq!(group.entries.len(), 3);
        assert!(matches!(group.entries[1], PropertyGroupEntry::Comment(_)));
    }
}
