#![warn(clippy::pedantic)]
//! Xcode project reader
//!
//! Opens an `.xcodeproj` bundle, reads its `project.pbxproj` file and resolves
//! the object table into a typed graph.
//!
//! ```ignore
//! use pbxproj::XcodeProject;
//!
//! let mut project = XcodeProject::open("Demo/Demo.xcodeproj")?;
//! let index = project.parse()?;
//! for variant_group in index.variant_groups() {
//!     println!("{}", index.relative_path(variant_group.id));
//! }
//! ```
//!
//! Opening fails when the project file is missing, unreadable or lacks its
//! top-level entries; parsing fails only for a malformed root object. Every
//! other defect in the file is recorded as a
//! [`Diagnostic`](pbxproj_resolver::errors::Diagnostic) on the index.

pub mod bundle;
pub mod errors;
pub mod project;
pub mod reader;

pub use bundle::OpenOptions;
pub use errors::ProjectError;
pub use pbxproj_objects as objects;
pub use pbxproj_resolver as resolver;
pub use project::{ProjectInfo, XcodeProject};
