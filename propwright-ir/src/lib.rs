//! Intermediate representation for MSBuild project-file authoring.
//!
//! This crate provides the in-memory model of a project file: properties,
//! items, conditional blocks, task declarations, and targets with their
//! imperative steps. The model is built once per generation request
//! (typically through the fluent constructors on each type), handed to
//! `propwright-render` for serialization, and discarded.
//!
//! # Architecture
//!
//! ```text
//! construction code → propwright-ir (model) → propwright-render (text) → propwright-emit (files)
//! ```
//!
//! The IR types are designed to be:
//! - Declarative (plain data; no rendering or validation logic)
//! - Order-preserving (every container keeps insertion order)
//! - Opaque about expressions (conditions, paths, and commands are strings
//!   that are never parsed or evaluated)

mod items;
mod project;
mod properties;
mod targets;
mod tasks;

pub use items::{Item, ItemGroup, ItemGroupEntry, ItemOperation};
pub use project::{Choose, Import, Otherwise, Project, ProjectElement, When};
pub use properties::{Property, PropertyGroup, PropertyGroupEntry};
pub use targets::{
    ErrorStep, ExecStep, MessageStep, Target, TargetStep, TaskOutput, TaskStep, WarningStep,
};
pub use tasks::{TaskAssembly, UsingTask};
