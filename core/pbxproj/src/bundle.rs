//! Bundle loading
//!
//! An `.xcodeproj` bundle is a directory; the project file inside it holds a
//! top-level map with the root object identifier, the object table and two
//! format versions.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use pbxproj_objects::{table::ObjectTable, value::Value};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ProjectError, ReadError},
    reader::PropertyListReader,
};

const ROOT_OBJECT: &str = "rootObject";
const OBJECTS: &str = "objects";
const ARCHIVE_VERSION: &str = "archiveVersion";
const OBJECT_VERSION: &str = "objectVersion";

/// Options for opening a bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OpenOptions {
    /// Name of the project file inside the bundle.
    pub project_file: String,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            project_file: "project.pbxproj".to_string(),
        }
    }
}

impl OpenOptions {
    #[must_use]
    pub fn with_project_file(mut self, project_file: impl Into<String>) -> Self {
        self.project_file = project_file.into();
        self
    }
}

/// Top-level contents of a project file.
#[derive(Clone, Debug)]
pub struct ProjectFile {
    pub root_object: String,
    pub objects: ObjectTable,
    pub archive_version: Option<String>,
    pub object_version: Option<String>,
}

impl ProjectFile {
    /// Splits a deserialized project file into its top-level entries.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::MissingEntry`] when `rootObject` is not a string
    /// or `objects` is not a map.
    pub fn from_value(value: Value) -> Result<Self, ProjectError> {
        let Value::Map(mut top) = value else {
            return Err(ProjectError::MissingEntry { entry: OBJECTS });
        };
        let root_object = match top.remove(ROOT_OBJECT) {
            Some(Value::Str(root)) => root,
            _ => return Err(ProjectError::MissingEntry { entry: ROOT_OBJECT }),
        };
        let objects = top
            .remove(OBJECTS)
            .and_then(ObjectTable::from_value)
            .ok_or(ProjectError::MissingEntry { entry: OBJECTS })?;
        let version = |value: Option<&Value>| match value? {
            Value::Str(version) => Some(version.clone()),
            Value::Int(version) => Some(version.to_string()),
            _ => None,
        };

        Ok(Self {
            root_object,
            objects,
            archive_version: version(top.get(ARCHIVE_VERSION)),
            object_version: version(top.get(OBJECT_VERSION)),
        })
    }
}

/// Reads and splits the project file of `bundle`.
///
/// # Errors
///
/// - [`ProjectError::ProjectNotFound`] if the project file does not exist
/// - [`ProjectError::Unreadable`] if it cannot be read or deserialized
/// - [`ProjectError::MissingEntry`] if its top level is incomplete
pub fn load(
    bundle: &Path,
    options: &OpenOptions,
    reader: &impl PropertyListReader,
) -> Result<ProjectFile, ProjectError> {
    let path = bundle.join(&options.project_file);
    debug!("loading project file {}", path.display());
    let bytes = fs::read(&path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => ProjectError::ProjectNotFound { path: path.clone() },
        _ => unreadable(&path, error.into()),
    })?;
    let value = reader
        .read(&bytes)
        .map_err(|error| unreadable(&path, error))?;
    ProjectFile::from_value(value)
}

/// Directory holding the bundle, used as the base for absolute paths.
#[must_use]
pub fn project_dir(bundle: &Path) -> PathBuf {
    bundle.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn unreadable(path: &Path, source: ReadError) -> ProjectError {
    ProjectError::Unreadable {
        path: path.to_path_buf(),
        source,
    }
}
