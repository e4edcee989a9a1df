//! Package definitions: which projects a package ships and where.

use propwright_ir::Project;

/// Everything needed to emit one package's build assets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageDefinition {
    /// Package name, used as the base file name (`<name>.props`).
    pub name: String,
    /// The properties project, emitted as `<name>.props` when present.
    pub props: Option<Project>,
    /// The targets project, emitted as `<name>.targets` when present.
    pub targets: Option<Project>,
    /// Duplicate the pair under the transitive-consumers folder.
    pub include_transitive: bool,
    /// Emit an SDK-style pair under `Sdk/<sdk>/` with fixed file names.
    pub sdk: Option<String>,
}

impl PackageDefinition {
    /// Create an empty definition with the given package name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the properties project.
    pub fn with_props(mut self, project: Project) -> Self {
        self.props = Some(project);
        self
    }

    /// Set the targets project.
    pub fn with_targets(mut self, project: Project) -> Self {
        self.targets = Some(project);
        self
    }

    /// Also emit the pair for transitive consumers.
    pub fn with_transitive(mut self) -> Self {
        self.include_transitive = true;
        self
    }

    /// Also emit an SDK-style pair under the given SDK name.
    pub fn with_sdk(mut self, sdk: impl Into<String>) -> Self {
        self.sdk = Some(sdk.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_definition() {
        let package = PackageDefinition::new("Acme.Build")
            .with_props(Project::new())
            .with_transitive()
            .with_sdk("Acme.Sdk");

        assert_eq!(package.name, "Acme.Build");
        assert!(package.props.is_some());
        assert!(package.targets.is_none());
        assert!(package.include_transitive);
        assert_eq!(package.sdk.as_deref(), Some("Acme.Sdk"));
    }
}
