#![warn(clippy::pedantic)]
//! Object-table resolver for Xcode project files
//!
//! This crate turns the flat `objects` table of a `project.pbxproj` file into a
//! linked object graph: a project root, the group hierarchy below its main
//! group, and the file references, build files, targets and build phases the
//! hierarchy lists.
//!
//! ## Resolution
//!
//! Starting from the root identifier the resolver:
//!
//! 1. Builds the [`Project`](pbxproj_objects::nodes::Project) from the root
//!    record. This is the only step that can fail.
//! 2. Descends depth-first from the main group, attaching each container
//!    before its children and visiting children in declared order. A
//!    frameworks phase lists its build files in `files` and is descended the
//!    same way.
//! 3. Skips, and records as a [`Diagnostic`](errors::Diagnostic), every child
//!    that is missing from the table, has an unknown `isa`, fails field
//!    validation, is an ancestor of the container listing it, or was already
//!    attached under another container.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pbxproj_objects::table::ObjectTable;
//! use pbxproj_resolver::IndexBuilder;
//!
//! let table: ObjectTable = read_objects_section()?;
//! let index = IndexBuilder::new()
//!     .build_index(&table, "ROOT")?
//!     .index();
//!
//! for variant_group in index.variant_groups() {
//!     println!("{} at {}", variant_group.name, index.relative_path(variant_group.id));
//! }
//! ```
//!
//! ## Public Modules
//!
//! - [`errors`] - the fatal [`ResolveError`](errors::ResolveError) and the
//!   absorbed [`Diagnostic`](errors::Diagnostic)s
//! - [`index`] - [`ProjectIndex`](index::ProjectIndex), the query surface
//! - [`paths`] - relative and absolute path derivation

use std::path::PathBuf;

use log::info;
use pbxproj_objects::table::ObjectTable;

use crate::{errors::ResolveError, index::ProjectIndex, resolver::GraphResolver};

pub mod errors;
pub mod index;
pub mod paths;
mod resolver;

/// State of a builder that has not resolved anything yet.
#[derive(Default)]
pub struct IndexInitState {
    project_dir: Option<PathBuf>,
}

/// State of a builder whose resolution is complete.
pub struct IndexCompleteState {
    index: ProjectIndex,
}

/// Type alias for a completed builder ready to yield its index.
pub type CompletedIndexBuilder = IndexBuilder<IndexCompleteState>;

/// Builder for resolving an object table into a [`ProjectIndex`].
///
/// Uses the typestate pattern so the index can only be taken after
/// resolution has run.
pub struct IndexBuilder<S> {
    state: S,
}

impl Default for IndexBuilder<IndexInitState> {
    fn default() -> Self {
        IndexBuilder::new()
    }
}

impl IndexBuilder<IndexInitState> {
    #[must_use]
    pub fn new() -> Self {
        IndexBuilder {
            state: IndexInitState::default(),
        }
    }

    /// Directory that contains the `.xcodeproj` bundle. Absolute paths are
    /// only available when this is set.
    #[must_use]
    pub fn with_project_dir(mut self, project_dir: impl Into<PathBuf>) -> Self {
        self.state.project_dir = Some(project_dir.into());
        self
    }

    /// Resolve `table` starting at `root_key` and return a completed builder.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedRoot`] if `root_key` does not name a
    /// `PBXProject` record. Problems with any other record are recorded as
    /// diagnostics on the index instead.
    #[must_use = "returns builder with the project index, extract with .index()"]
    pub fn build_index(
        self,
        table: &ObjectTable,
        root_key: &str,
    ) -> Result<IndexBuilder<IndexCompleteState>, ResolveError> {
        let resolution = GraphResolver::new(table).resolve(root_key, self.state.project_dir)?;
        let index = ProjectIndex::new(resolution);
        info!(
            "resolved project `{root_key}`: {} objects, {} skipped",
            index.len(),
            index.diagnostics().len()
        );
        Ok(IndexBuilder {
            state: IndexCompleteState { index },
        })
    }
}

impl IndexBuilder<IndexCompleteState> {
    /// Consume the builder and return the project index.
    #[must_use = "consumes builder and returns the project index"]
    pub fn index(self) -> ProjectIndex {
        self.state.index
    }
}
