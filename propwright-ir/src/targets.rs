//! Targets and their imperative steps.
//!
//! Step order inside a target is execution order and is always preserved
//! exactly as authored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ItemGroup, PropertyGroup};

/// A named target: an ordered sequence of imperative steps plus scheduling
/// attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Target name. Unique within a project by convention, not enforced.
    pub name: String,
    /// Authoring label, rendered as a `Label` attribute.
    pub label: Option<String>,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
    /// Targets this one runs before (semicolon-joined on render).
    pub before_targets: Vec<String>,
    /// Targets this one runs after.
    pub after_targets: Vec<String>,
    /// Targets this one depends on.
    pub depends_on: Vec<String>,
    /// Input files for incremental-build checks, kept as opaque text.
    pub inputs: Option<String>,
    /// Output files for incremental-build checks, kept as opaque text.
    pub outputs: Option<String>,
    /// Ordered steps, executed top to bottom by the downstream tool.
    pub steps: Vec<TargetStep>,
}

impl Target {
    /// Create an empty target with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
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

    /// Schedule this target before another.
    pub fn before(mut self, target: impl Into<String>) -> Self {
        self.before_targets.push(target.into());
        self
    }

    /// Schedule this target after another.
    pub fn after(mut self, target: impl Into<String>) -> Self {
        self.after_targets.push(target.into());
        self
    }

    /// Add a dependency on another target.
    pub fn depends_on(mut self, target: impl Into<String>) -> Self {
        self.depends_on.push(target.into());
        self
    }

    /// Set the incremental-build inputs.
    pub fn with_inputs(mut self, inputs: impl Into<String>) -> Self {
        self.inputs = Some(inputs.into());
        self
    }

    /// Set the incremental-build outputs.
    pub fn with_outputs(mut self, outputs: impl Into<String>) -> Self {
        self.outputs = Some(outputs.into());
        self
    }

    /// Append a step.
    pub fn with_step(mut self, step: impl Into<TargetStep>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append a comment step.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.steps.push(TargetStep::Comment(text.into()));
        self
    }
}

/// One imperative step inside a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetStep {
    /// Properties set while the target runs.
    PropertyGroup(PropertyGroup),
    /// Items manipulated while the target runs.
    ItemGroup(ItemGroup),
    /// Log a message.
    Message(MessageStep),
    /// Run a shell command.
    Exec(ExecStep),
    /// Invoke a declared task.
    Task(TaskStep),
    /// Raise a build error.
    Error(ErrorStep),
    /// Raise a build warning.
    Warning(WarningStep),
    /// A passthrough comment.
    Comment(String),
    /// A dialect construct this toolchain does not emit. Rendering a
    /// project containing one fails with an unsupported-construct error.
    Custom(String),
}

impl From<PropertyGroup> for TargetStep {
    fn from(group: PropertyGroup) -> Self {
        Self::PropertyGroup(group)
    }
}

impl From<ItemGroup> for TargetStep {
    fn from(group: ItemGroup) -> Self {
        Self::ItemGroup(group)
    }
}

impl From<MessageStep> for TargetStep {
    fn from(step: MessageStep) -> Self {
        Self::Message(step)
    }
}

impl From<ExecStep> for TargetStep {
    fn from(step: ExecStep) -> Self {
        Self::Exec(step)
    }
}

impl From<TaskStep> for TargetStep {
    fn from(step: TaskStep) -> Self {
        Self::Task(step)
    }
}

impl From<ErrorStep> for TargetStep {
    fn from(step: ErrorStep) -> Self {
        Self::Error(step)
    }
}

impl From<WarningStep> for TargetStep {
    fn from(step: WarningStep) -> Self {
        Self::Warning(step)
    }
}

/// Log a message at an optional importance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStep {
    pub text: String,
    /// Importance level (`high`, `normal`, `low`), kept as opaque text.
    pub importance: Option<String>,
    pub condition: Option<String>,
}

impl MessageStep {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            importance: None,
            condition: None,
        }
    }

    pub fn with_importance(mut self, importance: impl Into<String>) -> Self {
        self.importance = Some(importance.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Run a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecStep {
    /// Command line, kept as opaque text.
    pub command: String,
    pub working_directory: Option<String>,
    pub condition: Option<String>,
}

impl ExecStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_directory: None,
            condition: None,
        }
    }

    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Raise a build error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStep {
    pub text: String,
    /// Diagnostic code surfaced by the downstream tool.
    pub code: Option<String>,
    pub condition: Option<String>,
}

impl ErrorStep {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: None,
            condition: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Raise a build warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningStep {
    pub text: String,
    /// Diagnostic code surfaced by the downstream tool.
    pub code: Option<String>,
    pub condition: Option<String>,
}

impl WarningStep {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            code: None,
            condition: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Invoke a declared task with named parameters and output bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStep {
    /// Name of the task to invoke (serialized element name).
    pub task_name: String,
    pub condition: Option<String>,
    /// Named parameters. Keys are unique; inserting an existing key
    /// replaces its value.
    pub parameters: IndexMap<String, String>,
    /// Ordered output bindings.
    pub outputs: Vec<TaskOutput>,
}

impl TaskStep {
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            condition: None,
            parameters: IndexMap::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Set a named parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Append an output binding.
    pub fn with_output(mut self, output: TaskOutput) -> Self {
        self.outputs.push(output);
        self
    }
}

/// Binds one task output parameter to a property and/or an item list.
///
/// At least one of `property_name` and `item_name` must be set; the
/// validator rejects bindings naming neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutput {
    /// Source parameter on the invoked task.
    pub task_parameter: String,
    /// Property receiving the output value.
    pub property_name: Option<String>,
    /// Item list receiving the output value.
    pub item_name: Option<String>,
    pub condition: Option<String>,
}

impl TaskOutput {
    /// Bind a task parameter to a property.
    pub fn to_property(parameter: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            task_parameter: parameter.into(),
            property_name: Some(property.into()),
            ..Default::default()
        }
    }

    /// Bind a task parameter to an item list.
    pub fn to_item(parameter: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            task_parameter: parameter.into(),
            item_name: Some(item.into()),
            ..Default::default()
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_author_order() {
        let target = Target::new("Build")
            .with_step(MessageStep::new("start"))
            .with_step(ExecStep::new("dotnet build"))
            .with_step(MessageStep::new("done"));

        assert_eq!(target.steps.len(), 3);
        assert!(matches!(target.steps[0], TargetStep::Message(_)));
        assert!(matches!(target.steps[1], TargetStep::Exec(_)));
        assert!(matches!(target.steps[2], TargetStep::Message(_)));
    }

    #[test]
    fn test_scheduling_lists() {
        let target = Target::new("Pack")
            .after("Build")
            .depends_on("Restore")
            .depends_on("Build");

        assert_eq!(target.after_targets, ["Build"]);
        assert_eq!(target.depends_on, ["Restore", "Build"]);
    }

    #[test]
    fn test_task_parameter_replaces_existing_key() {
        let task = TaskStep::new("Csc")
            .with_parameter("Sources", "@(OldCompile)")
            .with_parameter("Sources", "@(Compile)");

        assert_eq!(task.parameters.len(), 1);
        assert_eq!(
            task.parameters.get("Sources").map(String::as_str),
            Some("@(Compile)")
        );
    }

    #[test]
    fn test_task_output_constructors() {
        let to_prop = TaskOutput::to_property("OutputPath", "FinalPath");
        assert_eq!(to_prop.property_name.as_deref(), Some("FinalPath"));
        assert!(to_prop.item_name.is_none());

        let to_item = TaskOutput::to_item("Assemblies", "Built");
        assert_eq!(to_item.item_name.as_deref(), Some("Built"));
        assert!(to_item.property_name.is_none());
    }
}
