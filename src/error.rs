//! Hard errors raised by the resolution engine.
//!
//! Conflicts between candidates are not errors: they are reported as data
//! (see [`crate::diagnostics`]) so one pair's conflict never aborts the
//! resolution pass. The errors here indicate a broken caller contract.

use thiserror::Error;

use crate::ident::DeclId;

/// Errors that can occur while populating the candidate catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same declaration was registered twice with different contents.
    ///
    /// Re-adding an identical descriptor is idempotent; re-adding the same
    /// declaration with different fields means the symbol-analysis
    /// collaborator produced inconsistent descriptors.
    #[error("declaration {decl:?} was re-registered with a different descriptor")]
    ConflictingRedeclaration {
        /// The declaration that was re-registered.
        decl: DeclId,
    },
}
