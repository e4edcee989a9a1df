//! Validation, canonical ordering, and rendering for MSBuild project-file
//! authoring.
//!
//! This crate turns a [`propwright_ir::Project`] graph into the dialect's
//! textual form with a fixed serialization contract: two-space
//! indentation, single-linefeed line breaks, no declaration line, a
//! configurable root namespace, and exactly one trailing linefeed.
//! Semantically identical models always produce byte-identical output.
//!
//! # Pipeline
//!
//! ```text
//! Project → validate (aggregate structural checks)
//!         → canonicalize (per-category ordering, toggle-gated)
//!         → render (fixed-format emission)
//! ```
//!
//! Canonicalization happens lazily during the render walk, container by
//! container, and always on cloned copies — rendering never mutates the
//! supplied graph, so one IR instance may be rendered concurrently.
//!
//! # Example
//!
//! ```
//! use propwright_ir::{Project, PropertyGroup};
//! use propwright_render::{RenderOptions, render};
//!
//! let project = Project::new().with_property_group(
//!     PropertyGroup::new().with_value("B", "2").with_value("A", "1"),
//! );
//! let text = render(&project, &RenderOptions::default()).unwrap();
//! // canonical ordering: A renders before B
//! assert!(text.find("<A>").unwrap() < text.find("<B>").unwrap());
//! ```

pub mod canonical;
mod error;
mod options;
mod render;
mod validate;
mod xml;

pub use error::{Error, Result};
pub use options::{MSBUILD_NAMESPACE, RenderOptions};
pub use render::render;
pub use validate::validate;
pub use xml::{escape_attr, escape_text};
