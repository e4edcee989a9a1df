//! Renders a package definition and writes it into the package layout.

use std::path::{Path, PathBuf};

use eyre::Result;
use propwright_render::{RenderOptions, render};

use crate::{PackageDefinition, layout};

/// Render and write a package's build assets under `out_dir`.
///
/// Every project is rendered before any file is touched, so a validation
/// or rendering failure leaves the output directory unchanged. Returns the
/// paths written, in emission order.
pub fn emit(
    package: &PackageDefinition,
    options: &RenderOptions,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let props = package
        .props
        .as_ref()
        .map(|project| render(project, options))
        .transpose()?;
    let targets = package
        .targets
        .as_ref()
        .map(|project| render(project, options))
        .transpose()?;

    let mut files: Vec<(PathBuf, &str)> = Vec::new();
    collect(&mut files, package, &props, layout::PROPS_EXTENSION, layout::SDK_PROPS_FILE);
    collect(&mut files, package, &targets, layout::TARGETS_EXTENSION, layout::SDK_TARGETS_FILE);

    let mut written = Vec::with_capacity(files.len());
    for (relative, content) in files {
        let path = out_dir.join(relative);
        write_file(&path, content)?;
        written.push(path);
    }
    Ok(written)
}

fn collect<'t>(
    files: &mut Vec<(PathBuf, &'t str)>,
    package: &PackageDefinition,
    text: &'t Option<String>,
    extension: &str,
    sdk_file: &str,
) {
    let Some(text) = text.as_deref() else {
        return;
    };

    let file_name = format!("{}.{}", package.name, extension);
    files.push((Path::new(layout::BUILD_DIR).join(&file_name), text));
    if package.include_transitive {
        files.push((Path::new(layout::BUILD_TRANSITIVE_DIR).join(&file_name), text));
    }
    if let Some(sdk) = &package.sdk {
        files.push((Path::new(layout::SDK_DIR).join(sdk).join(sdk_file), text));
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use propwright_ir::{Project, PropertyGroup, Target};
    use tempfile::TempDir;

    use super::*;

    fn sample_package() -> PackageDefinition {
        PackageDefinition::new("Acme.Build")
            .with_props(Project::new().with_property_group(
                PropertyGroup::new().with_value("AcmeEnabled", "true"),
            ))
            .with_targets(Project::new().with_target(Target::new("AcmeCheck")))
    }

    #[test]
    fn test_base_pair_lands_under_build() {
        let temp = TempDir::new().unwrap();
        let written = emit(&sample_package(), &RenderOptions::default(), temp.path()).unwrap();

        assert_eq!(
            written,
            vec![
                temp.path().join("build/Acme.Build.props"),
                temp.path().join("build/Acme.Build.targets"),
            ]
        );
        let props = fs::read_to_string(&written[0]).unwrap();
        assert!(props.contains("<AcmeEnabled>true</AcmeEnabled>"));
        assert!(props.ends_with("</Project>\n"));
    }

    #[test]
    fn test_transitive_duplicates_the_pair() {
        let temp = TempDir::new().unwrap();
        let package = sample_package().with_transitive();
        let written = emit(&package, &RenderOptions::default(), temp.path()).unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(
            fs::read_to_string(temp.path().join("build/Acme.Build.props")).unwrap(),
            fs::read_to_string(temp.path().join("buildTransitive/Acme.Build.props")).unwrap(),
        );
    }

    #[test]
    fn test_sdk_pair_uses_fixed_file_names() {
        let temp = TempDir::new().unwrap();
        let package = sample_package().with_sdk("Acme.Sdk");
        emit(&package, &RenderOptions::default(), temp.path()).unwrap();

        assert!(temp.path().join("Sdk/Acme.Sdk/Sdk.props").exists());
        assert!(temp.path().join("Sdk/Acme.Sdk/Sdk.targets").exists());
    }

    #[test]
    fn test_props_only_package_writes_no_targets() {
        let temp = TempDir::new().unwrap();
        let package = PackageDefinition::new("Acme.Build")
            .with_props(Project::new().with_label("props only"));
        let written = emit(&package, &RenderOptions::default(), temp.path()).unwrap();

        assert_eq!(written, vec![temp.path().join("build/Acme.Build.props")]);
    }

    #[test]
    fn test_render_failure_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let package = PackageDefinition::new("Acme.Build")
            .with_props(Project::new().with_property_group(
                PropertyGroup::new().with_value("", "1"),
            ))
            .with_targets(Project::new().with_target(Target::new("Ok")));

        let result = emit(&package, &RenderOptions::default(), temp.path());

        assert!(result.is_err());
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }
}
