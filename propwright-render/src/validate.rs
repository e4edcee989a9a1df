//! Structural pre-flight checks over a project graph.
//!
//! Validation runs before any text is emitted and aggregates every
//! violation found into one error, so an author can fix a batch of
//! problems in a single iteration instead of one at a time.

use propwright_ir::{
    Choose, Import, ItemGroup, ItemGroupEntry, Project, ProjectElement, PropertyGroup,
    PropertyGroupEntry, Target, TargetStep, TaskAssembly, TaskStep, UsingTask,
};

use crate::{Error, Result};

/// Check the structural sanity of a project.
///
/// Returns `Ok(())` or one [`Error::Validation`] listing every violation.
pub fn validate(project: &Project) -> Result<()> {
    let mut violations = Vec::new();

    if !project.elements.is_empty() && project.has_categorized() {
        violations.push(
            "project populates both the unified element sequence and the categorized \
             collections; author exactly one"
                .to_string(),
        );
    }

    for (index, element) in project.elements.iter().enumerate() {
        let scope = format!("element {}", index + 1);
        match element {
            ProjectElement::Import(import) => check_import(import, &scope, &mut violations),
            ProjectElement::Comment(_) => {}
            ProjectElement::Choose(choose) => check_choose(choose, &scope, &mut violations),
            ProjectElement::PropertyGroup(group) => {
                check_property_group(group, &scope, &mut violations)
            }
            ProjectElement::ItemGroup(group) => check_item_group(group, &scope, &mut violations),
            ProjectElement::UsingTask(decl) => check_using_task(decl, &scope, &mut violations),
            ProjectElement::Target(target) => check_target(target, &scope, &mut violations),
            ProjectElement::Custom(_) => {}
        }
    }

    for (index, import) in project.imports.iter().enumerate() {
        check_import(import, &format!("import {}", index + 1), &mut violations);
    }
    for (index, choose) in project.chooses.iter().enumerate() {
        check_choose(choose, &format!("choose {}", index + 1), &mut violations);
    }
    for (index, group) in project.property_groups.iter().enumerate() {
        check_property_group(group, &format!("property group {}", index + 1), &mut violations);
    }
    for (index, group) in project.item_groups.iter().enumerate() {
        check_item_group(group, &format!("item group {}", index + 1), &mut violations);
    }
    for (index, decl) in project.task_declarations.iter().enumerate() {
        check_using_task(decl, &format!("task declaration {}", index + 1), &mut violations);
    }
    for (index, target) in project.targets.iter().enumerate() {
        check_target(target, &format!("target {}", index + 1), &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(violations))
    }
}

fn check_import(import: &Import, scope: &str, violations: &mut Vec<String>) {
    if import.project.is_empty() {
        violations.push(format!("{scope}: import has an empty project path"));
    }
}

fn check_property_group(group: &PropertyGroup, scope: &str, violations: &mut Vec<String>) {
    for entry in group.effective_entries() {
        if let PropertyGroupEntry::Property(property) = entry {
            if property.name.is_empty() {
                violations.push(format!("{scope}: property has an empty name"));
            }
        }
    }
}

fn check_item_group(group: &ItemGroup, scope: &str, violations: &mut Vec<String>) {
    for entry in group.effective_entries() {
        if let ItemGroupEntry::Item(item) = entry {
            if item.item_type.is_empty() {
                violations.push(format!("{scope}: item has an empty type"));
            }
            if item.spec.is_empty() {
                violations.push(format!(
                    "{scope}: item '{}' has an empty spec",
                    item.item_type
                ));
            }
        }
    }
}

fn check_using_task(decl: &UsingTask, scope: &str, violations: &mut Vec<String>) {
    if decl.task_name.is_empty() {
        violations.push(format!("{scope}: task declaration has an empty task name"));
    }
    match &decl.assembly {
        TaskAssembly::File(path) if path.is_empty() => {
            violations.push(format!(
                "{scope}: task declaration '{}' has an empty assembly file path",
                decl.task_name
            ));
        }
        TaskAssembly::Name(name) if name.is_empty() => {
            violations.push(format!(
                "{scope}: task declaration '{}' has an empty assembly name",
                decl.task_name
            ));
        }
        _ => {}
    }
}

fn check_choose(choose: &Choose, scope: &str, violations: &mut Vec<String>) {
    if choose.whens.is_empty() {
        violations.push(format!("{scope}: choose has no when branches"));
    }
    for (index, when) in choose.whens.iter().enumerate() {
        let when_scope = format!("{scope}: when {}", index + 1);
        if when.condition.is_empty() {
            violations.push(format!("{when_scope}: empty condition"));
        }
        for (group_index, group) in when.property_groups.iter().enumerate() {
            let group_scope = format!("{when_scope}: property group {}", group_index + 1);
            check_property_group(group, &group_scope, violations);
        }
        for (group_index, group) in when.item_groups.iter().enumerate() {
            let group_scope = format!("{when_scope}: item group {}", group_index + 1);
            check_item_group(group, &group_scope, violations);
        }
    }
    if let Some(otherwise) = &choose.otherwise {
        let otherwise_scope = format!("{scope}: otherwise");
        for (group_index, group) in otherwise.property_groups.iter().enumerate() {
            let group_scope = format!("{otherwise_scope}: property group {}", group_index + 1);
            check_property_group(group, &group_scope, violations);
        }
        for (group_index, group) in otherwise.item_groups.iter().enumerate() {
            let group_scope = format!("{otherwise_scope}: item group {}", group_index + 1);
            check_item_group(group, &group_scope, violations);
        }
    }
}

fn check_target(target: &Target, scope: &str, violations: &mut Vec<String>) {
    if target.name.is_empty() {
        violations.push(format!("{scope}: target has an empty name"));
    }
    let scope = if target.name.is_empty() {
        scope.to_string()
    } else {
        format!("target '{}'", target.name)
    };

    for (index, step) in target.steps.iter().enumerate() {
        let step_scope = format!("{scope}: step {}", index + 1);
        match step {
            TargetStep::PropertyGroup(group) => {
                check_property_group(group, &step_scope, violations)
            }
            TargetStep::ItemGroup(group) => check_item_group(group, &step_scope, violations),
            TargetStep::Task(task) => check_task_step(task, &step_scope, violations),
            TargetStep::Exec(exec) => {
                if exec.command.is_empty() {
                    violations.push(format!("{step_scope}: exec has an empty command"));
                }
            }
            TargetStep::Message(_)
            | TargetStep::Error(_)
            | TargetStep::Warning(_)
            | TargetStep::Comment(_)
            | TargetStep::Custom(_) => {}
        }
    }
}

fn check_task_step(task: &TaskStep, scope: &str, violations: &mut Vec<String>) {
    if task.task_name.is_empty() {
        violations.push(format!("{scope}: task invocation has an empty name"));
    }
    for (index, output) in task.outputs.iter().enumerate() {
        if output.task_parameter.is_empty() {
            violations.push(format!(
                "{scope}: output binding {} has an empty task parameter",
                index + 1
            ));
        }
        if output.property_name.is_none() && output.item_name.is_none() {
            violations.push(format!(
                "{scope}: output binding {} names neither a property nor an item",
                index + 1
            ));
        }
    }
}
