use miette::Diagnostic;
use thiserror::Error;

/// Result type for render operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Structural violations detected before any emission. Aggregates every
    /// violation found in one pass so an author can fix a batch of problems
    /// per iteration.
    #[error("project failed validation:\n  - {}", violations.join("\n  - "))]
    #[diagnostic(
        code(propwright::validation),
        help("fix every listed violation and render again; nothing was emitted")
    )]
    Validation { violations: Vec<String> },

    /// The renderer reached a construct outside the dialect it emits.
    /// Signals a toolchain/version mismatch rather than bad input.
    #[error("unsupported construct '{kind}'")]
    #[diagnostic(
        code(propwright::unsupported_construct),
        help("this renderer does not emit '{kind}'; remove the construct or upgrade the toolchain")
    )]
    UnsupportedConstruct { kind: String },
}

impl Error {
    /// Create an aggregated validation error
    pub fn validation(violations: Vec<String>) -> Box<Self> {
        Box::new(Error::Validation { violations })
    }

    /// Create an unsupported-construct error
    pub fn unsupported(kind: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedConstruct { kind: kind.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_violation() {
        let err = Error::validation(vec![
            "property 1 has an empty name".to_string(),
            "import 2 has an empty project path".to_string(),
        ]);
        let message = err.to_string();
        assert!(message.contains("property 1 has an empty name"));
        assert!(message.contains("import 2 has an empty project path"));
    }

    #[test]
    fn test_unsupported_names_the_construct() {
        let err = Error::unsupported("ItemDefinitionGroup");
        assert_eq!(
            err.to_string(),
            "unsupported construct 'ItemDefinitionGroup'"
        );
    }
}
