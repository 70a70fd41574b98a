//! Story Schema Migrations
//!
//! Upgrades persisted story JSON of any older schema version to the current
//! one by applying each intermediate migration exactly once, in strictly
//! increasing version order.
//!
//! # Core Concepts
//!
//! - [`Migration`]: one pure version-to-version document rewrite
//! - [`MigrationRegistry`]: the ordered, append-only version table
//! - [`migrate`]: the sequential pipeline driver
//! - [`load`]: migrate raw JSON, then deserialize and validate a
//!   [`story_model::StoryDocument`]
//!
//! # Example
//!
//! ```rust,ignore
//! use story_migration::{load, MigrationRegistry};
//!
//! let registry = MigrationRegistry::with_defaults();
//! let document = load(&registry, raw_json)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod migration;
mod migrations;
mod pipeline;
mod registry;

pub use error::{LoadError, MigrationError};
pub use migration::Migration;
pub use pipeline::{load, migrate};
pub use registry::MigrationRegistry;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
