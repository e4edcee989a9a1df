//! Path constants for the emitted package layout.
//!
//! This module centralizes the directory and file names of the package
//! convention, eliminating magic strings scattered throughout the emitter.

/// Folder consumed by direct package references.
pub const BUILD_DIR: &str = "build";

/// Folder consumed transitively by downstream projects.
pub const BUILD_TRANSITIVE_DIR: &str = "buildTransitive";

/// Root folder for SDK-style packages.
pub const SDK_DIR: &str = "Sdk";

/// File extension for property files.
pub const PROPS_EXTENSION: &str = "props";

/// File extension for target files.
pub const TARGETS_EXTENSION: &str = "targets";

/// Fixed property-file name inside an SDK folder.
pub const SDK_PROPS_FILE: &str = "Sdk.props";

/// Fixed target-file name inside an SDK folder.
pub const SDK_TARGETS_FILE: &str = "Sdk.targets";
