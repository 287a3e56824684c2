//! Graph Resolver
//!
//! Walks the object table from the project's main group and builds the
//! [`Arena`] that backs a [`ProjectIndex`](crate::index::ProjectIndex):
//!
//! 1. **resolve_root** - build the project from the root record (fatal on failure)
//! 2. **visit** - depth-first, pre-order descent from the main group through
//!    every container's declared children and every frameworks phase's
//!    `files`, in declared order
//!
//! Every record is attached at most once, under the first container that lists
//! it, with its parent and project links set at attachment. Later references
//! to it, and records that cannot be attached, are skipped and reported as
//! [`Diagnostic`]s. Each record is expanded once, so the traversal is bounded
//! by the size of the table.

use std::path::PathBuf;

use log::{debug, trace, warn};
use pbxproj_objects::{
    arena::{Arena, ObjectId},
    classify::{Classification, classify},
    errors::RecordError,
    nodes::{AnyObject, Isa, Project},
    table::ObjectTable,
    value::Value,
};
use rustc_hash::FxHashSet;

use crate::errors::{Diagnostic, ResolveError, RootDefect};

pub(crate) struct GraphResolver<'t> {
    table: &'t ObjectTable,
    arena: Arena,
    diagnostics: Vec<Diagnostic>,
    /// Identifiers currently being expanded on the active descent path.
    expansion_in_progress: FxHashSet<String>,
}

/// Result of one traversal, handed over to the index.
pub(crate) struct Resolution {
    pub(crate) arena: Arena,
    pub(crate) project_id: ObjectId,
    pub(crate) project: Project,
    pub(crate) main_group: Option<ObjectId>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'t> GraphResolver<'t> {
    pub(crate) fn new(table: &'t ObjectTable) -> Self {
        Self {
            table,
            arena: Arena::default(),
            diagnostics: Vec::new(),
            expansion_in_progress: FxHashSet::default(),
        }
    }

    /// Resolves the whole graph reachable from `root_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedRoot`] when `root_key` does not name a
    /// `PBXProject` record. No other condition fails the traversal.
    pub(crate) fn resolve(
        mut self,
        root_key: &str,
        project_dir: Option<PathBuf>,
    ) -> Result<Resolution, ResolveError> {
        let mut project = self.resolve_root(root_key)?;
        project.path = project_dir;
        let main_group_key = project.main_group.clone();
        let project_id = self.arena.add_project(project.clone());
        trace!("attached project `{root_key}` as {project_id}");

        let main_group = match main_group_key {
            Some(key) => {
                // The project record is an ancestor of everything below it.
                self.expansion_in_progress.insert(root_key.to_owned());
                let main_group = self.visit(&key, None, root_key);
                self.expansion_in_progress.remove(root_key);
                main_group
            }
            None => {
                debug!("project `{root_key}` declares no main group");
                None
            }
        };

        Ok(Resolution {
            arena: self.arena,
            project_id,
            project,
            main_group,
            diagnostics: self.diagnostics,
        })
    }

    fn resolve_root(&self, root_key: &str) -> Result<Project, ResolveError> {
        let malformed = |defect: RootDefect| {
            warn!("malformed root object `{root_key}`: {defect}");
            ResolveError::MalformedRoot {
                key: root_key.to_owned(),
                defect,
            }
        };

        let value = self
            .table
            .get(root_key)
            .ok_or_else(|| malformed(RootDefect::Missing))?;
        let record = value.as_record().ok_or_else(|| {
            malformed(RootDefect::NotARecord {
                found: value.type_name(),
            })
        })?;
        match classify(record) {
            Classification::Known(Isa::Project) => Ok(Project::from_record(root_key, record)),
            Classification::Known(isa) => Err(malformed(RootDefect::NotAProject {
                isa: Some(isa.as_str().to_owned()),
            })),
            Classification::Unknown(isa) => Err(malformed(RootDefect::NotAProject {
                isa: Some(isa.to_owned()),
            })),
            Classification::Missing => Err(malformed(RootDefect::NotAProject { isa: None })),
        }
    }

    /// Attaches the object for `key` under `parent`, then its children.
    ///
    /// Returns the handle of the attached object, or `None` if it was skipped.
    fn visit(&mut self, key: &str, parent: Option<ObjectId>, referrer: &str) -> Option<ObjectId> {
        if self.expansion_in_progress.contains(key) {
            debug!("`{referrer}` references its ancestor `{key}`, skipping");
            self.diagnostics.push(Diagnostic::CyclicReference {
                parent: referrer.to_owned(),
                key: key.to_owned(),
            });
            return None;
        }

        if self.arena.find_by_key(key).is_some() {
            debug!("`{referrer}` references already attached `{key}`, skipping");
            self.diagnostics.push(Diagnostic::DuplicateReference {
                parent: referrer.to_owned(),
                key: key.to_owned(),
            });
            return None;
        }

        let table = self.table;
        let Some(value) = table.get(key) else {
            self.dangling(key, referrer);
            return None;
        };
        let object = self.construct(key, value, referrer)?;
        let child_keys = object.child_keys().to_vec();
        let id = self.arena.add_node(object, parent);
        trace!("attached `{key}` as {id} under {parent:?}");

        if !child_keys.is_empty() {
            self.expansion_in_progress.insert(key.to_owned());
            for child_key in &child_keys {
                self.visit(child_key, Some(id), key);
            }
            self.expansion_in_progress.remove(key);
        }
        Some(id)
    }

    /// Classifies and constructs one record, recording why it was skipped if
    /// it cannot be attached.
    fn construct(&mut self, key: &str, value: &Value, referrer: &str) -> Option<AnyObject> {
        let Some(record) = value.as_record() else {
            let error = RecordError::NotARecord {
                key: key.to_owned(),
                found: value.type_name(),
            };
            warn!("{error}");
            self.diagnostics.push(error.into());
            return None;
        };

        let isa = match classify(record) {
            Classification::Known(Isa::Project) => {
                debug!("`{referrer}` references project record `{key}`, skipping");
                self.diagnostics.push(Diagnostic::NestedProject {
                    parent: referrer.to_owned(),
                    key: key.to_owned(),
                });
                return None;
            }
            Classification::Known(isa) => isa,
            Classification::Unknown(raw) => {
                debug!("skipping `{key}` with unmodeled isa `{raw}`");
                self.diagnostics.push(Diagnostic::UnknownDiscriminator {
                    key: key.to_owned(),
                    isa: Some(raw.to_owned()),
                });
                return None;
            }
            Classification::Missing => {
                debug!("skipping `{key}` without isa");
                self.diagnostics.push(Diagnostic::UnknownDiscriminator {
                    key: key.to_owned(),
                    isa: None,
                });
                return None;
            }
        };

        match AnyObject::from_record(isa, key, record) {
            Ok(object) => Some(object),
            Err(error) => {
                warn!("{error}");
                self.diagnostics.push(error.into());
                None
            }
        }
    }

    fn dangling(&mut self, key: &str, referrer: &str) {
        debug!("`{referrer}` references missing object `{key}`, skipping");
        self.diagnostics.push(Diagnostic::DanglingReference {
            parent: referrer.to_owned(),
            key: key.to_owned(),
        });
    }
}
