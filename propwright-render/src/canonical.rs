//! Canonical ordering of project substructures.
//!
//! Each function resolves a container's authoritative view, clones it, and
//! imposes a deterministic total order when its toggle is enabled —
//! disabled toggles preserve author order exactly. Sorting owned copies
//! keeps rendering side-effect-free for the caller, so one IR instance can
//! be rendered concurrently.
//!
//! All string comparisons are byte-wise (ordinal), never locale-aware, and
//! every sort is stable: ties retain original relative order.

use std::collections::HashSet;

use indexmap::IndexMap;
use propwright_ir::{ItemGroup, ItemGroupEntry, PropertyGroup, PropertyGroupEntry, UsingTask};

/// Resolve and order a property group's entries.
///
/// The group is only reordered when the active view is a plain property
/// list with pairwise-distinct names. An interleaved comment or a
/// duplicate name freezes the whole group: relative placement around
/// comments carries author intent, and reordering duplicates could change
/// which same-named property wins under the downstream tool's
/// last-one-wins semantics.
pub fn property_entries(group: &PropertyGroup, sort: bool) -> Vec<PropertyGroupEntry> {
    let mut entries = group.effective_entries();
    if !sort {
        return entries;
    }

    let mut names = HashSet::new();
    for entry in &entries {
        match entry {
            PropertyGroupEntry::Comment(_) => return entries,
            PropertyGroupEntry::Property(property) => {
                if !names.insert(property.name.as_bytes()) {
                    return entries;
                }
            }
        }
    }

    entries.sort_by(|a, b| property_name(a).cmp(property_name(b)));
    entries
}

fn property_name(entry: &PropertyGroupEntry) -> &[u8] {
    match entry {
        PropertyGroupEntry::Comment(_) => &[],
        PropertyGroupEntry::Property(property) => property.name.as_bytes(),
    }
}

/// Resolve and order an item group's entries.
///
/// Items sort by the composite key (type, operation, spec); a stable sort
/// keeps equal keys in author order. Any interleaved comment freezes the
/// whole group.
pub fn item_entries(group: &ItemGroup, sort: bool) -> Vec<ItemGroupEntry> {
    let mut entries = group.effective_entries();
    if !sort {
        return entries;
    }

    if entries
        .iter()
        .any(|entry| matches!(entry, ItemGroupEntry::Comment(_)))
    {
        return entries;
    }

    entries.sort_by(|a, b| item_key(a).cmp(&item_key(b)));
    entries
}

fn item_key(entry: &ItemGroupEntry) -> (&[u8], u8, &[u8]) {
    match entry {
        ItemGroupEntry::Comment(_) => (&[], 0, &[]),
        ItemGroupEntry::Item(item) => (
            item.item_type.as_bytes(),
            item.operation as u8,
            item.spec.as_bytes(),
        ),
    }
}

/// Order a metadata or parameter map by key.
pub fn keyed_map(map: &IndexMap<String, String>, sort: bool) -> IndexMap<String, String> {
    let mut map = map.clone();
    if sort {
        map.sort_keys();
    }
    map
}

/// Order the categorized task-declaration collection by task name.
pub fn task_declarations(decls: &[UsingTask], sort: bool) -> Vec<UsingTask> {
    let mut decls = decls.to_vec();
    if sort {
        decls.sort_by(|a, b| a.task_name.as_bytes().cmp(b.task_name.as_bytes()));
    }
    decls
}

#[cfg(test)]
mod tests {
    use propwright_ir::{Item, Property};

    use super::*;

    fn plain_group(names: &[&str]) -> PropertyGroup {
        let mut group = PropertyGroup::new();
        for name in names {
            group = group.with_value(*name, "v");
        }
        group
    }

    fn entry_names(entries: &[PropertyGroupEntry]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                PropertyGroupEntry::Property(p) => Some(p.name.clone()),
                PropertyGroupEntry::Comment(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_properties_sort_by_name() {
        let group = plain_group(&["B", "A", "C"]);
        let entries = property_entries(&group, true);
        assert_eq!(entry_names(&entries), ["A", "B", "C"]);
    }

    #[test]
    fn test_properties_preserve_order_when_disabled() {
        let group = plain_group(&["B", "A", "C"]);
        let entries = property_entries(&group, false);
        assert_eq!(entry_names(&entries), ["B", "A", "C"]);
    }

    #[test]
    fn test_comment_freezes_property_group() {
        let group = PropertyGroup::new()
            .with_value("B", "2")
            .with_comment("keep B first")
            .with_value("A", "1");

        let entries = property_entries(&group, true);
        assert_eq!(entry_names(&entries), ["B", "A"]);
        assert!(matches!(entries[1], PropertyGroupEntry::Comment(_)));
    }

    #[test]
    fn test_duplicate_name_freezes_property_group() {
        let group = PropertyGroup::new()
            .with_value("A", "first")
            .with_value("B", "2")
            .with_value("A", "last");

        let entries = property_entries(&group, true);
        assert_eq!(entry_names(&entries), ["A", "B", "A"]);
    }

    #[test]
    fn test_property_sort_is_ordinal() {
        // byte-wise: uppercase sorts before lowercase
        let group = plain_group(&["a", "B"]);
        let entries = property_entries(&group, true);
        assert_eq!(entry_names(&entries), ["B", "a"]);
    }

    #[test]
    fn test_property_sort_is_idempotent() {
        let group = plain_group(&["B", "A"]);
        let once = property_entries(&group, true);
        let again = PropertyGroup {
            entries: once.clone(),
            ..Default::default()
        };
        assert_eq!(property_entries(&again, true), once);
    }

    #[test]
    fn test_plain_list_view_is_sorted_too() {
        let group = PropertyGroup {
            properties: vec![Property::new("B", "2"), Property::new("A", "1")],
            ..Default::default()
        };
        let entries = property_entries(&group, true);
        assert_eq!(entry_names(&entries), ["A", "B"]);
    }

    #[test]
    fn test_items_sort_by_composite_key() {
        let group = ItemGroup::new()
            .with_item(Item::include("Content", "z.txt"))
            .with_item(Item::remove("Compile", "a.cs"))
            .with_item(Item::include("Compile", "b.cs"))
            .with_item(Item::include("Compile", "a.cs"));

        let entries = item_entries(&group, true);
        let specs: Vec<&str> = entries
            .iter()
            .filter_map(|entry| match entry {
                ItemGroupEntry::Item(item) => Some(item.spec.as_str()),
                ItemGroupEntry::Comment(_) => None,
            })
            .collect();
        // Compile/Include before Compile/Remove before Content/Include
        assert_eq!(specs, ["a.cs", "b.cs", "a.cs", "z.txt"]);
    }

    #[test]
    fn test_item_sort_is_stable_on_equal_keys() {
        let first = Item::include("Compile", "a.cs").with_metadata("order", "1");
        let second = Item::include("Compile", "a.cs").with_metadata("order", "2");
        let group = ItemGroup::new().with_item(first.clone()).with_item(second.clone());

        let entries = item_entries(&group, true);
        assert_eq!(entries[0], ItemGroupEntry::Item(first));
        assert_eq!(entries[1], ItemGroupEntry::Item(second));
    }

    #[test]
    fn test_comment_freezes_item_group() {
        let group = ItemGroup::new()
            .with_item(Item::include("Compile", "b.cs"))
            .with_comment("keep order")
            .with_item(Item::include("Compile", "a.cs"));

        let entries = item_entries(&group, true);
        assert!(matches!(entries[1], ItemGroupEntry::Comment(_)));
        match &entries[0] {
            ItemGroupEntry::Item(item) => assert_eq!(item.spec, "b.cs"),
            entry => panic!("unexpected entry {entry:?}"),
        }
    }

    #[test]
    fn test_keyed_map_sorts_by_key() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), "1".to_string());
        map.insert("a".to_string(), "2".to_string());

        let sorted = keyed_map(&map, true);
        let keys: Vec<&str> = sorted.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "z"]);

        let preserved = keyed_map(&map, false);
        let keys: Vec<&str> = preserved.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_task_declarations_sort_by_name() {
        let decls = vec![
            UsingTask::from_file("Beta", "b.dll"),
            UsingTask::from_file("Alpha", "a.dll"),
        ];
        let sorted = task_declarations(&decls, true);
        assert_eq!(sorted[0].task_name, "Alpha");
        assert_eq!(sorted[1].task_name, "Beta");

        let preserved = task_declarations(&decls, false);
        assert_eq!(preserved[0].task_name, "Beta");
    }

    #[test]
    fn test_caller_containers_are_untouched() {
        let group = plain_group(&["B", "A"]);
        let before = group.clone();
        let _ = property_entries(&group, true);
        assert_eq!(group, before);
    }
}
