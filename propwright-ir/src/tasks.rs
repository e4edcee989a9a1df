//! External task declarations: registrations binding a task name to an
//! implementation outside the project file.

use serde::{Deserialize, Serialize};

/// Where a declared task's implementation lives.
///
/// A declaration references its assembly by exactly one of path or name;
/// the closed enum makes specifying both unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAssembly {
    /// Path to an assembly file, kept as opaque text.
    File(String),
    /// Assembly reference name.
    Name(String),
}

/// A task declaration (`UsingTask`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsingTask {
    /// The task name registered for invocation.
    pub task_name: String,
    /// Assembly reference, by file path or by name.
    pub assembly: TaskAssembly,
    /// Task factory name.
    pub task_factory: Option<String>,
    /// Condition expression, kept as opaque text.
    pub condition: Option<String>,
}

impl UsingTask {
    /// Declare a task implemented in an assembly file.
    pub fn from_file(task_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            assembly: TaskAssembly::File(path.into()),
            task_factory: None,
            condition: None,
        }
    }

    /// Declare a task implemented in a named assembly.
    pub fn from_assembly_name(task_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            assembly: TaskAssembly::Name(name.into()),
            task_factory: None,
            condition: None,
        }
    }

    /// Attach a task factory name.
    pub fn with_task_factory(mut self, factory: impl Into<String>) -> Self {
        self.task_factory = Some(factory.into());
        self
    }

    /// Attach a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}
