//! Package directory-layout emitter.
//!
//! Takes a [`PackageDefinition`] (the props/targets projects a package
//! ships plus layout flags), renders each project with
//! `propwright-render`, and writes the results into the package
//! convention:
//!
//! ```text
//! build/<name>.props              direct consumers
//! build/<name>.targets
//! buildTransitive/<name>.props    transitive consumers (opt-in)
//! buildTransitive/<name>.targets
//! Sdk/<sdk>/Sdk.props             SDK-style packages (opt-in)
//! Sdk/<sdk>/Sdk.targets
//! ```

mod emit;
pub mod layout;
mod package;

pub use emit::emit;
pub use package::PackageDefinition;
