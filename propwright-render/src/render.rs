//! Walks a project graph and emits the textual project file.
//!
//! Rendering is deterministic: the same project contents and options
//! reproduce the same bytes on every invocation and platform. Validation
//! runs first; canonical ordering is applied substructure-by-substructure
//! as the walk reaches each container.

use propwright_ir::{
    Choose, Import, Item, ItemGroup, ItemGroupEntry, MessageStep, Project, ProjectElement,
    PropertyGroup, PropertyGroupEntry, Target, TargetStep, TaskAssembly, TaskOutput, TaskStep,
    UsingTask,
};

use crate::{Error, RenderOptions, Result, canonical, validate::validate, xml::XmlWriter};

/// Render a project to its textual form.
///
/// Returns the complete document (ending in exactly one linefeed) or an
/// error with nothing emitted. The project is borrowed immutably and never
/// mutated, so the same instance may be rendered concurrently.
pub fn render(project: &Project, options: &RenderOptions) -> Result<String> {
    validate(project)?;

    let mut renderer = Renderer {
        options,
        xml: XmlWriter::new(),
    };
    renderer.project(project)?;
    Ok(renderer.xml.into_string())
}

struct Renderer<'a> {
    options: &'a RenderOptions,
    xml: XmlWriter,
}

fn push_attr<'v>(attrs: &mut Vec<(&'v str, &'v str)>, name: &'v str, value: Option<&'v str>) {
    if let Some(value) = value {
        attrs.push((name, value));
    }
}

impl Renderer<'_> {
    fn project(&mut self, project: &Project) -> Result<()> {
        let mut attrs = Vec::new();
        if !self.options.namespace.is_empty() {
            attrs.push(("xmlns", self.options.namespace.as_str()));
        }

        if project.is_empty() {
            self.xml.empty("Project", &attrs);
            return Ok(());
        }

        self.xml.open("Project", &attrs);
        if let Some(label) = &project.label {
            self.xml.comment(label);
        }

        if !project.elements.is_empty() {
            for element in &project.elements {
                self.element(element)?;
            }
        } else {
            for import in &project.imports {
                self.import(import);
            }
            for choose in &project.chooses {
                self.choose(choose);
            }
            for group in &project.property_groups {
                self.property_group(group);
            }
            for group in &project.item_groups {
                self.item_group(group);
            }
            let decls = canonical::task_declarations(
                &project.task_declarations,
                self.options.sort_task_declarations,
            );
            for decl in &decls {
                self.using_task(decl);
            }
            for target in &project.targets {
                self.target(target)?;
            }
        }

        self.xml.close("Project");
        Ok(())
    }

    fn element(&mut self, element: &ProjectElement) -> Result<()> {
        match element {
            ProjectElement::Import(import) => self.import(import),
            ProjectElement::Comment(text) => self.xml.comment(text),
            ProjectElement::Choose(choose) => self.choose(choose),
            ProjectElement::PropertyGroup(group) => self.property_group(group),
            ProjectElement::ItemGroup(group) => self.item_group(group),
            ProjectElement::UsingTask(decl) => self.using_task(decl),
            ProjectElement::Target(target) => self.target(target)?,
            ProjectElement::Custom(kind) => return Err(Error::unsupported(kind)),
        }
        Ok(())
    }

    fn import(&mut self, import: &Import) {
        let mut attrs = vec![("Project", import.project.as_str())];
        push_attr(&mut attrs, "Sdk", import.sdk.as_deref());
        push_attr(&mut attrs, "Condition", import.condition.as_deref());
        self.xml.empty("Import", &attrs);
    }

    fn choose(&mut self, choose: &Choose) {
        self.xml.open("Choose", &[]);
        for when in &choose.whens {
            let attrs = [("Condition", when.condition.as_str())];
            if when.property_groups.is_empty() && when.item_groups.is_empty() {
                self.xml.empty("When", &attrs);
                continue;
            }
            self.xml.open("When", &attrs);
            for group in &when.property_groups {
                self.property_group(group);
            }
            for group in &when.item_groups {
                self.item_group(group);
            }
            self.xml.close("When");
        }
        if let Some(otherwise) = &choose.otherwise {
            if otherwise.property_groups.is_empty() && otherwise.item_groups.is_empty() {
                self.xml.empty("Otherwise", &[]);
            } else {
                self.xml.open("Otherwise", &[]);
                for group in &otherwise.property_groups {
                    self.property_group(group);
                }
                for group in &otherwise.item_groups {
                    self.item_group(group);
                }
                self.xml.close("Otherwise");
            }
        }
        self.xml.close("Choose");
    }

    fn property_group(&mut self, group: &PropertyGroup) {
        let mut attrs = Vec::new();
        push_attr(&mut attrs, "Label", group.label.as_deref());
        push_attr(&mut attrs, "Condition", group.condition.as_deref());

        let entries = canonical::property_entries(group, self.options.sort_properties);
        if entries.is_empty() {
            self.xml.empty("PropertyGroup", &attrs);
            return;
        }

        self.xml.open("PropertyGroup", &attrs);
        for entry in &entries {
            match entry {
                PropertyGroupEntry::Comment(text) => self.xml.comment(text),
                PropertyGroupEntry::Property(property) => {
                    let mut attrs = Vec::new();
                    push_attr(&mut attrs, "Condition", property.condition.as_deref());
                    self.xml.leaf(&property.name, &attrs, &property.value);
                }
            }
        }
        self.xml.close("PropertyGroup");
    }

    fn item_group(&mut self, group: &ItemGroup) {
        let mut attrs = Vec::new();
        push_attr(&mut attrs, "Label", group.label.as_deref());
        push_attr(&mut attrs, "Condition", group.condition.as_deref());

        let entries = canonical::item_entries(group, self.options.sort_items);
        if entries.is_empty() {
            self.xml.empty("ItemGroup", &attrs);
            return;
        }

        self.xml.open("ItemGroup", &attrs);
        for entry in &entries {
            match entry {
                ItemGroupEntry::Comment(text) => self.xml.comment(text),
                ItemGroupEntry::Item(item) => self.item(item),
            }
        }
        self.xml.close("ItemGroup");
    }

    fn item(&mut self, item: &Item) {
        let metadata = canonical::keyed_map(&item.metadata, self.options.sort_item_metadata);
        let child_metadata =
            canonical::keyed_map(&item.child_metadata, self.options.sort_item_metadata);

        let mut attrs = vec![(item.operation.attribute_name(), item.spec.as_str())];
        push_attr(&mut attrs, "Exclude", item.exclude.as_deref());
        push_attr(&mut attrs, "Condition", item.condition.as_deref());
        for (key, value) in &metadata {
            attrs.push((key.as_str(), value.as_str()));
        }

        if child_metadata.is_empty() {
            self.xml.empty(&item.item_type, &attrs);
            return;
        }

        self.xml.open(&item.item_type, &attrs);
        for (key, value) in &child_metadata {
            self.xml.leaf(key, &[], value);
        }
        self.xml.close(&item.item_type);
    }

    fn using_task(&mut self, decl: &UsingTask) {
        let mut attrs = vec![("TaskName", decl.task_name.as_str())];
        match &decl.assembly {
            TaskAssembly::File(path) => attrs.push(("AssemblyFile", path.as_str())),
            TaskAssembly::Name(name) => attrs.push(("AssemblyName", name.as_str())),
        }
        push_attr(&mut attrs, "TaskFactory", decl.task_factory.as_deref());
        push_attr(&mut attrs, "Condition", decl.condition.as_deref());
        self.xml.empty("UsingTask", &attrs);
    }

    fn target(&mut self, target: &Target) -> Result<()> {
        let before = target.before_targets.join(";");
        let after = target.after_targets.join(";");
        let depends = target.depends_on.join(";");

        let mut attrs = vec![("Name", target.name.as_str())];
        if !before.is_empty() {
            attrs.push(("BeforeTargets", before.as_str()));
        }
        if !after.is_empty() {
            attrs.push(("AfterTargets", after.as_str()));
        }
        if !depends.is_empty() {
            attrs.push(("DependsOnTargets", depends.as_str()));
        }
        push_attr(&mut attrs, "Inputs", target.inputs.as_deref());
        push_attr(&mut attrs, "Outputs", target.outputs.as_deref());
        push_attr(&mut attrs, "Condition", target.condition.as_deref());
        push_attr(&mut attrs, "Label", target.label.as_deref());

        if target.steps.is_empty() {
            self.xml.empty("Target", &attrs);
            return Ok(());
        }

        self.xml.open("Target", &attrs);
        // Step order is execution order; only the contents of individual
        // steps are ever canonicalized.
        for step in &target.steps {
            self.step(step)?;
        }
        self.xml.close("Target");
        Ok(())
    }

    fn step(&mut self, step: &TargetStep) -> Result<()> {
        match step {
            TargetStep::PropertyGroup(group) => self.property_group(group),
            TargetStep::ItemGroup(group) => self.item_group(group),
            TargetStep::Message(message) => self.message(message),
            TargetStep::Exec(exec) => {
                let mut attrs = vec![("Command", exec.command.as_str())];
                push_attr(
                    &mut attrs,
                    "WorkingDirectory",
                    exec.working_directory.as_deref(),
                );
                push_attr(&mut attrs, "Condition", exec.condition.as_deref());
                self.xml.empty("Exec", &attrs);
            }
            TargetStep::Task(task) => self.task_step(task),
            TargetStep::Error(error) => {
                let mut attrs = vec![("Text", error.text.as_str())];
                push_attr(&mut attrs, "Code", error.code.as_deref());
                push_attr(&mut attrs, "Condition", error.condition.as_deref());
                self.xml.empty("Error", &attrs);
            }
            TargetStep::Warning(warning) => {
                let mut attrs = vec![("Text", warning.text.as_str())];
                push_attr(&mut attrs, "Code", warning.code.as_deref());
                push_attr(&mut attrs, "Condition", warning.condition.as_deref());
                self.xml.empty("Warning", &attrs);
            }
            TargetStep::Comment(text) => self.xml.comment(text),
            TargetStep::Custom(kind) => return Err(Error::unsupported(kind)),
        }
        Ok(())
    }

    fn message(&mut self, message: &MessageStep) {
        let mut attrs = vec![("Text", message.text.as_str())];
        push_attr(&mut attrs, "Importance", message.importance.as_deref());
        push_attr(&mut attrs, "Condition", message.condition.as_deref());
        self.xml.empty("Message", &attrs);
    }

    fn task_step(&mut self, task: &TaskStep) {
        let parameters =
            canonical::keyed_map(&task.parameters, self.options.sort_task_parameters);

        let mut attrs = Vec::new();
        push_attr(&mut attrs, "Condition", task.condition.as_deref());
        for (key, value) in &parameters {
            attrs.push((key.as_str(), value.as_str()));
        }

        if task.outputs.is_empty() {
            self.xml.empty(&task.task_name, &attrs);
            return;
        }

        self.xml.open(&task.task_name, &attrs);
        for output in &task.outputs {
            self.task_output(output);
        }
        self.xml.close(&task.task_name);
    }

    fn task_output(&mut self, output: &TaskOutput) {
        let mut attrs = vec![("TaskParameter", output.task_parameter.as_str())];
        push_attr(&mut attrs, "PropertyName", output.property_name.as_deref());
        push_attr(&mut attrs, "ItemName", output.item_name.as_deref());
        push_attr(&mut attrs, "Condition", output.condition.as_deref());
        self.xml.empty("Output", &attrs);
    }
}

#[cfg(test)]
mod tests {
    use propwright_ir::Property;

    use super::*;

    #[test]
    fn test_namespace_on_root_only() {
        let project = Project::new()
            .with_property_group(PropertyGroup::new().with_property(Property::new("A", "1")));
        let output = render(&project, &RenderOptions::default()).unwrap();

        assert!(output.starts_with(
            "<Project xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n"
        ));
        assert_eq!(output.matches("xmlns").count(), 1);
    }

    #[test]
    fn test_empty_namespace_disables_emission() {
        let project = Project::new()
            .with_property_group(PropertyGroup::new().with_property(Property::new("A", "1")));
        let options = RenderOptions::default().with_namespace("");
        let output = render(&project, &options).unwrap();

        assert!(output.starts_with("<Project>\n"));
        assert!(!output.contains("xmlns"));
    }

    #[test]
    fn test_fully_empty_project_collapses() {
        let output = render(
            &Project::new(),
            &RenderOptions::default().with_namespace(""),
        )
        .unwrap();
        assert_eq!(output, "<Project />\n");
    }

    #[test]
    fn test_single_trailing_linefeed() {
        let project = Project::new().with_target(Target::new("Build"));
        let output = render(&project, &RenderOptions::default()).unwrap();
        assert!(output.ends_with(">\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_no_declaration_line() {
        let project = Project::new();
        let output = render(&project, &RenderOptions::default()).unwrap();
        assert!(!output.contains("<?xml"));
    }
}
