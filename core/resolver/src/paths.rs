//! Path Resolver
//!
//! Relative paths are derived from the chain of parent links: each level
//! contributes its path component (see
//! [`AnyObject::path_component`](pbxproj_objects::nodes::AnyObject::path_component)),
//! levels without one are omitted, and the rest are joined root-to-leaf with
//! `/`. Absolute paths prefix the directory that holds the project bundle.

use std::path::PathBuf;

use pbxproj_objects::{
    arena::{Arena, ObjectId},
    nodes::Project,
};

const SEPARATOR: &str = "/";

/// Relative path of `id` inside the project's file hierarchy.
///
/// Returns an empty string for the project root, for unknown handles and for
/// nodes whose whole ancestry carries no path component.
#[must_use]
pub fn relative_path(arena: &Arena, id: ObjectId) -> String {
    let mut components = Vec::new();
    let mut current = Some(id);
    while let Some(node_id) = current {
        if let Some(component) = arena.find_node(node_id).and_then(|node| node.path_component()) {
            components.push(component);
        }
        current = arena.find_parent_node(node_id);
    }
    components.reverse();
    components.join(SEPARATOR)
}

/// Absolute path of `id`: the project's on-disk directory joined with
/// [`relative_path`].
///
/// Returns `None` when the node has no project or the project was not loaded
/// from disk.
#[must_use]
pub fn absolute_path(arena: &Arena, id: ObjectId) -> Option<PathBuf> {
    let project_id = arena.find_project_node(id)?;
    let project_dir = arena.get::<Project>(project_id)?.object.path.as_ref()?;
    let relative = relative_path(arena, id);
    if relative.is_empty() {
        Some(project_dir.clone())
    } else {
        Some(project_dir.join(relative))
    }
}
