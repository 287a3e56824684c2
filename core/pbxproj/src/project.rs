use std::path::{Path, PathBuf};

use pbxproj_objects::{
    arena::{Node, ObjectId},
    nodes::{AnyObject, Project, VariantGroup},
    table::ObjectTable,
};
use pbxproj_resolver::{IndexBuilder, index::ProjectIndex};
use serde::Serialize;

use crate::{
    bundle::{self, OpenOptions, ProjectFile},
    errors::ProjectError,
    reader::{PlistReader, PropertyListReader},
};

/// Project metadata read straight from the root record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub development_region: Option<String>,
}

/// An opened Xcode project.
///
/// Opening only reads the project file. Call [`parse`](Self::parse) to
/// resolve the object graph; the views below are empty until then.
#[derive(Clone, Debug)]
pub struct XcodeProject {
    file: ProjectFile,
    project_dir: Option<PathBuf>,
    index: Option<ProjectIndex>,
}

impl XcodeProject {
    /// Opens the bundle at `bundle` with default options.
    ///
    /// # Errors
    ///
    /// See [`open_with`](Self::open_with).
    pub fn open(bundle: impl AsRef<Path>) -> Result<Self, ProjectError> {
        Self::open_with(bundle, &OpenOptions::default(), &PlistReader)
    }

    /// Opens the bundle at `bundle`, reading its project file with `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::ProjectNotFound`], [`ProjectError::Unreadable`]
    /// or [`ProjectError::MissingEntry`] when the project file cannot be
    /// loaded.
    pub fn open_with(
        bundle: impl AsRef<Path>,
        options: &OpenOptions,
        reader: &impl PropertyListReader,
    ) -> Result<Self, ProjectError> {
        let bundle = bundle.as_ref();
        let file = bundle::load(bundle, options, reader)?;
        Ok(Self {
            file,
            project_dir: Some(bundle::project_dir(bundle)),
            index: None,
        })
    }

    /// Builds a project from an object table already in memory.
    #[must_use]
    pub fn from_table(
        objects: ObjectTable,
        root_object: impl Into<String>,
        project_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            file: ProjectFile {
                root_object: root_object.into(),
                objects,
                archive_version: None,
                object_version: None,
            },
            project_dir,
            index: None,
        }
    }

    /// Resolves the object graph, replacing the result of any earlier call.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::MalformedRoot`] when the root object is not a
    /// project record. The previous index, if any, is discarded.
    pub fn parse(&mut self) -> Result<&ProjectIndex, ProjectError> {
        self.index = None;
        let mut builder = IndexBuilder::new();
        if let Some(project_dir) = &self.project_dir {
            builder = builder.with_project_dir(project_dir.clone());
        }
        let index = builder
            .build_index(&self.file.objects, &self.file.root_object)?
            .index();
        Ok(&*self.index.insert(index))
    }

    #[must_use]
    pub fn index(&self) -> Option<&ProjectIndex> {
        self.index.as_ref()
    }

    #[must_use]
    pub fn project(&self) -> Option<Node<'_, Project>> {
        self.index.as_ref().map(ProjectIndex::project)
    }

    #[must_use]
    pub fn objects(&self) -> Vec<Node<'_, AnyObject>> {
        self.index
            .as_ref()
            .map(ProjectIndex::objects)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn variant_groups(&self) -> Vec<Node<'_, VariantGroup>> {
        self.index
            .as_ref()
            .map(ProjectIndex::variant_groups)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn relative_path(&self, id: ObjectId) -> Option<String> {
        Some(self.index.as_ref()?.relative_path(id))
    }

    #[must_use]
    pub fn absolute_path(&self, id: ObjectId) -> Option<PathBuf> {
        self.index.as_ref()?.absolute_path(id)
    }

    /// Reads the development region from the root record without resolving
    /// the graph. `None` when the root object is not a record.
    #[must_use]
    pub fn project_info(&self) -> Option<ProjectInfo> {
        let root = self.file.objects.record(&self.file.root_object)?;
        let project = Project::from_record(&self.file.root_object, root);
        Some(ProjectInfo {
            development_region: project.development_region,
        })
    }

    #[must_use]
    pub fn root_object(&self) -> &str {
        &self.file.root_object
    }

    #[must_use]
    pub fn objects_table(&self) -> &ObjectTable {
        &self.file.objects
    }

    #[must_use]
    pub fn project_dir(&self) -> Option<&Path> {
        self.project_dir.as_deref()
    }

    #[must_use]
    pub fn archive_version(&self) -> Option<&str> {
        self.file.archive_version.as_deref()
    }

    #[must_use]
    pub fn object_version(&self) -> Option<&str> {
        self.file.object_version.as_deref()
    }
}
