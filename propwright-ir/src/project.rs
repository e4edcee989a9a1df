//! The project root and its element containers.

use serde::{Deserialize, Serialize};

use crate::{ItemGroup, PropertyGroup, Target, UsingTask};

/// An external project reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Path of the imported project, kept as opaque text.
    pub project: String,
    /// SDK the import resolves against.
    pub sdk: Option<String>,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
}

impl Import {
    /// Import the project at the given path.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            sdk: None,
            condition: None,
        }
    }

    /// Resolve the import against an SDK.
    pub fn with_sdk(mut self, sdk: impl Into<String>) -> Self {
        self.sdk = Some(sdk.into());
        self
    }

    /// Attach a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// A conditional branch block. The downstream tool evaluates the branch
/// conditions; this model only carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choose {
    /// Ordered branches, tried in author order.
    pub whens: Vec<When>,
    /// Fallback branch when no `When` condition holds.
    pub otherwise: Option<Otherwise>,
}

impl Choose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a conditional branch.
    pub fn with_when(mut self, when: When) -> Self {
        self.whens.push(when);
        self
    }

    /// Set the fallback branch.
    pub fn with_otherwise(mut self, otherwise: Otherwise) -> Self {
        self.otherwise = Some(otherwise);
        self
    }
}

/// One conditional branch of a [`Choose`] block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct When {
    /// Branch condition, kept as opaque text.
    pub condition: String,
    pub property_groups: Vec<PropertyGroup>,
    pub item_groups: Vec<ItemGroup>,
}

impl When {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            property_groups: Vec::new(),
            item_groups: Vec::new(),
        }
    }

    pub fn with_property_group(mut self, group: PropertyGroup) -> Self {
        self.property_groups.push(group);
        self
    }

    pub fn with_item_group(mut self, group: ItemGroup) -> Self {
        self.item_groups.push(group);
        self
    }
}

/// The unconditioned fallback branch of a [`Choose`] block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Otherwise {
    pub property_groups: Vec<PropertyGroup>,
    pub item_groups: Vec<ItemGroup>,
}

impl Otherwise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property_group(mut self, group: PropertyGroup) -> Self {
        self.property_groups.push(group);
        self
    }

    pub fn with_item_group(mut self, group: ItemGroup) -> Self {
        self.item_groups.push(group);
        self
    }
}

/// One element of a project authored in the unified, interleaved style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectElement {
    Import(Import),
    Comment(String),
    Choose(Choose),
    PropertyGroup(PropertyGroup),
    ItemGroup(ItemGroup),
    UsingTask(UsingTask),
    Target(Target),
    /// A dialect construct this toolchain does not emit. Rendering a
    /// project containing one fails with an unsupported-construct error.
    Custom(String),
}

impl From<Import> for ProjectElement {
    fn from(import: Import) -> Self {
        Self::Import(import)
    }
}

impl From<Choose> for ProjectElement {
    fn from(choose: Choose) -> Self {
        Self::Choose(choose)
    }
}

impl From<PropertyGroup> for ProjectElement {
    fn from(group: PropertyGroup) -> Self {
        Self::PropertyGroup(group)
    }
}

impl From<ItemGroup> for ProjectElement {
    fn from(group: ItemGroup) -> Self {
        Self::ItemGroup(group)
    }
}

impl From<UsingTask> for ProjectElement {
    fn from(decl: UsingTask) -> Self {
        Self::UsingTask(decl)
    }
}

impl From<Target> for ProjectElement {
    fn from(target: Target) -> Self {
        Self::Target(target)
    }
}

/// The root of the model: everything that renders into one project file.
///
/// A project is authored in exactly one of two styles:
///
/// - **unified**: a single ordered [`elements`](Self::elements) sequence
///   preserving exact author interleaving;
/// - **categorized**: the six typed collections, rendered in fixed category
///   order (imports, chooses, property groups, item groups, task
///   declarations, targets) regardless of population order.
///
/// Populating both at once is a validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Authoring label, rendered as the first comment inside the root.
    pub label: Option<String>,
    /// Unified, author-ordered element sequence.
    pub elements: Vec<ProjectElement>,
    pub imports: Vec<Import>,
    pub chooses: Vec<Choose>,
    pub property_groups: Vec<PropertyGroup>,
    pub item_groups: Vec<ItemGroup>,
    pub task_declarations: Vec<UsingTask>,
    pub targets: Vec<Target>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an authoring label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append an element to the unified sequence.
    pub fn with_element(mut self, element: impl Into<ProjectElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Append a comment to the unified sequence.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.elements.push(ProjectElement::Comment(text.into()));
        self
    }

    /// Append to the categorized import collection.
    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Append to the categorized conditional-block collection.
    pub fn with_choose(mut self, choose: Choose) -> Self {
        self.chooses.push(choose);
        self
    }

    /// Append to the categorized property-group collection.
    pub fn with_property_group(mut self, group: PropertyGroup) -> Self {
        self.property_groups.push(group);
        self
    }

    /// Append to the categorized item-group collection.
    pub fn with_item_group(mut self, group: ItemGroup) -> Self {
        self.item_groups.push(group);
        self
    }

    /// Append to the categorized task-declaration collection.
    pub fn with_task_declaration(mut self, decl: UsingTask) -> Self {
        self.task_declarations.push(decl);
        self
    }

    /// Append to the categorized target collection.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Returns true if any categorized collection is populated.
    pub fn has_categorized(&self) -> bool {
        !self.imports.is_empty()
            || !self.chooses.is_empty()
            || !self.property_groups.is_empty()
            || !self.item_groups.is_empty()
            || !self.task_declarations.is_empty()
            || !self.targets.is_empty()
    }

    /// Returns true if the project renders no children at all (a label
    /// still counts as a child comment).
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.elements.is_empty() && !self.has_categorized()
    }
}
