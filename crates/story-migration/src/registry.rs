//! The ordered migration version table

use crate::error::MigrationError;
use crate::migration::Migration;
use crate::migrations;

/// Ordered, append-only registry of schema migrations
///
/// Entries are sorted ascending by version; adding a new schema version means
/// registering exactly one migration with a strictly higher version than all
/// existing entries.
#[derive(Debug, Default)]
pub struct MigrationRegistry {
    entries: Vec<Box<dyn Migration>>,
}

impl MigrationRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding the built-in migration chain
    #[must_use]
    pub fn with_defaults() -> Self {
        let entries = migrations::default_chain();
        debug_assert!(
            entries.windows(2).all(|w| w[0].version() < w[1].version()),
            "built-in chain must be strictly increasing"
        );
        Self { entries }
    }

    /// Append a migration for the next schema version
    ///
    /// # Errors
    /// Returns [`MigrationError::NonMonotonicVersion`] unless the migration's
    /// version is strictly greater than every registered version.
    pub fn register(&mut self, migration: Box<dyn Migration>) -> Result<(), MigrationError> {
        let current = self.latest_version();
        let incoming = migration.version();
        if incoming <= current {
            return Err(MigrationError::NonMonotonicVersion { incoming, current });
        }
        self.entries.push(migration);
        Ok(())
    }

    /// Highest registered version (0 when empty)
    #[inline]
    #[must_use]
    pub fn latest_version(&self) -> u32 {
        self.entries.last().map_or(0, |m| m.version())
    }

    /// Number of registered migrations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered versions, ascending
    #[must_use]
    pub fn versions(&self) -> Vec<u32> {
        self.entries.iter().map(|m| m.version()).collect()
    }

    /// Migrations in application order
    pub(crate) fn entries(&self) -> &[Box<dyn Migration>] {
        &self.entries
    }
}
