//! Errors for opening and parsing project bundles.

use std::path::PathBuf;

use pbxproj_resolver::errors::ResolveError;
use thiserror::Error;

/// Errors that keep a project from being opened or parsed.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum ProjectError {
    /// The bundle has no project file.
    #[error("no project file at {}", path.display())]
    ProjectNotFound { path: PathBuf },

    /// The project file exists but could not be read or deserialized.
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    /// A required top-level entry is missing or has the wrong shape.
    #[error("project file has no valid top-level `{entry}` entry")]
    MissingEntry { entry: &'static str },

    /// The root object could not be resolved.
    #[error(transparent)]
    MalformedRoot(#[from] ResolveError),
}

/// Underlying cause of [`ProjectError::Unreadable`].
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Rejected as a property list and as JSON; carries the property-list
    /// error.
    #[error("invalid property list: {0}")]
    Plist(#[from] plist::Error),
}
