//! Project Index - read-only view over a resolved object graph
//!
//! [`ProjectIndex`] owns the [`Arena`] produced by one traversal and exposes:
//!
//! - the flat object list in traversal order ([`objects`](ProjectIndex::objects))
//! - typed views such as [`variant_groups`](ProjectIndex::variant_groups),
//!   computed by matching each element against the wanted kind
//! - navigation: [`children`](ProjectIndex::children),
//!   [`parent`](ProjectIndex::parent), [`files`](ProjectIndex::files)
//! - relative and absolute paths
//! - the [`Diagnostic`]s recorded for everything that was skipped
//!
//! The index holds no interior mutability and can be shared across threads
//! once built.
//!
//! ```text
//! ProjectIndex
//! ├─ Arena
//! │  ├─ Project (root, not part of the object list)
//! │  └─ main group → children → ... (depth-first, declared order)
//! ├─ project: Project (copy of the root, always present)
//! ├─ main_group: Option<ObjectId>
//! └─ diagnostics: Vec<Diagnostic>
//! ```

use std::path::PathBuf;

use pbxproj_objects::{
    arena::{Arena, Node, ObjectId},
    nodes::{
        AnyObject, BuildFile, FileReference, FrameworksBuildPhase, Group, Isa, NativeTarget,
        ObjectKind, Project, VariantGroup,
    },
};

use crate::{errors::Diagnostic, paths, resolver::Resolution};

#[derive(Clone, Debug)]
pub struct ProjectIndex {
    arena: Arena,
    project_id: ObjectId,
    project: Project,
    main_group: Option<ObjectId>,
    diagnostics: Vec<Diagnostic>,
}

impl ProjectIndex {
    pub(crate) fn new(resolution: Resolution) -> Self {
        Self {
            arena: resolution.arena,
            project_id: resolution.project_id,
            project: resolution.project,
            main_group: resolution.main_group,
            diagnostics: resolution.diagnostics,
        }
    }

    /// The project root resolved for this index.
    #[must_use]
    pub fn project(&self) -> Node<'_, Project> {
        Node {
            id: self.project_id,
            object: &self.project,
        }
    }

    #[must_use]
    pub fn main_group(&self) -> Option<Node<'_, AnyObject>> {
        self.node(self.main_group?)
    }

    #[must_use]
    pub fn node(&self, id: ObjectId) -> Option<Node<'_, AnyObject>> {
        let object = self.arena.find_node(id)?;
        Some(Node { id, object })
    }

    /// Every resolved object except the project root, depth-first in declared
    /// child order.
    #[must_use]
    pub fn objects(&self) -> Vec<Node<'_, AnyObject>> {
        self.arena.objects().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Objects of kind `T`, in the relative order of [`objects`](Self::objects).
    #[must_use]
    pub fn objects_of<T: ObjectKind>(&self) -> Vec<Node<'_, T>> {
        self.arena.objects_of::<T>()
    }

    /// Objects whose discriminator is `isa`, including the shallow kinds.
    #[must_use]
    pub fn objects_with_isa(&self, isa: Isa) -> Vec<Node<'_, AnyObject>> {
        self.arena.filter_nodes(|object| object.isa() == isa)
    }

    #[must_use]
    pub fn groups(&self) -> Vec<Node<'_, Group>> {
        self.objects_of::<Group>()
    }

    #[must_use]
    pub fn variant_groups(&self) -> Vec<Node<'_, VariantGroup>> {
        self.objects_of::<VariantGroup>()
    }

    #[must_use]
    pub fn file_references(&self) -> Vec<Node<'_, FileReference>> {
        self.objects_of::<FileReference>()
    }

    #[must_use]
    pub fn build_files(&self) -> Vec<Node<'_, BuildFile>> {
        self.objects_of::<BuildFile>()
    }

    #[must_use]
    pub fn native_targets(&self) -> Vec<Node<'_, NativeTarget>> {
        self.objects_of::<NativeTarget>()
    }

    /// Resolved children of a container or frameworks phase, in declared
    /// order. Children that were skipped during resolution are absent.
    #[must_use]
    pub fn children(&self, id: ObjectId) -> Vec<Node<'_, AnyObject>> {
        self.arena
            .children(id)
            .iter()
            .filter_map(|child| self.node(*child))
            .collect()
    }

    #[must_use]
    pub fn parent(&self, id: ObjectId) -> Option<Node<'_, AnyObject>> {
        self.node(self.arena.find_parent_node(id)?)
    }

    /// The project `id` belongs to; `None` for the project itself.
    #[must_use]
    pub fn project_of(&self, id: ObjectId) -> Option<Node<'_, Project>> {
        self.arena.get::<Project>(self.arena.find_project_node(id)?)
    }

    /// The node attached for the record `key`, if it was resolved. The
    /// project root is not an element of the object list and is not found.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<Node<'_, AnyObject>> {
        let id = self.arena.find_by_key(key)?;
        if id == self.project_id {
            return None;
        }
        self.node(id)
    }

    /// The node attached for `key` as a `T`.
    #[must_use]
    pub fn find_as<T: ObjectKind>(&self, key: &str) -> Option<Node<'_, T>> {
        self.arena.get::<T>(self.arena.find_by_key(key)?)
    }

    /// Build files resolved from a frameworks phase's `files`, in list order.
    /// Identifiers that were dangling, malformed or already attached elsewhere
    /// are absent. Empty for anything that is not a frameworks phase.
    #[must_use]
    pub fn files(&self, phase: ObjectId) -> Vec<Node<'_, AnyObject>> {
        if self.arena.get::<FrameworksBuildPhase>(phase).is_none() {
            return Vec::new();
        }
        self.children(phase)
    }

    /// The file reference a build file points at, when it was resolved.
    #[must_use]
    pub fn file_reference(&self, build_file: ObjectId) -> Option<Node<'_, FileReference>> {
        let build_file = self.arena.get::<BuildFile>(build_file)?;
        self.find_as::<FileReference>(&build_file.object.file_ref)
    }

    #[must_use]
    pub fn relative_path(&self, id: ObjectId) -> String {
        paths::relative_path(&self.arena, id)
    }

    #[must_use]
    pub fn absolute_path(&self, id: ObjectId) -> Option<PathBuf> {
        paths::absolute_path(&self.arena, id)
    }

    /// Conditions absorbed during resolution, in the order they were met.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }
}
