#![warn(clippy::pedantic)]
//! Typed objects of an Xcode project file.
//!
//! This crate holds everything that does not depend on graph traversal:
//!
//! - [`value`] - the generic value tree property-list readers produce
//! - [`table`] - the `objects` section as an identifier → record table
//! - [`nodes`] - the typed object kinds, the [`Isa`](nodes::Isa) discriminator
//!   and the [`AnyObject`](nodes::AnyObject) union
//! - [`classify`] - discriminator lookup for raw records
//! - [`arena`] - storage for resolved objects with parent/child routes
//!
//! Constructors (`from_record`) live next to the node types and are pure:
//! they read a record and never touch the arena.

pub mod arena;
pub mod classify;
pub mod errors;
pub mod nodes;
pub(crate) mod nodes_impl;
pub mod table;
pub mod value;
