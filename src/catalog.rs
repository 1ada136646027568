//! The candidate catalog.
//!
//! Stores every discovered conversion method for one compilation pass and
//! owns the derivation of declaration order. Candidates arrive in two
//! passes (own declaring scope, then each externally used mapper in
//! registration order), but the catalog re-derives the total order from
//! `(scope rank, source position)` itself, so resolution cannot depend on
//! the iteration order of the symbol-analysis collaborator.

use rustc_hash::FxHashMap;

use crate::candidate::{CandidateDescriptor, MappingCandidate};
use crate::error::CatalogError;
use crate::ident::{CandidateId, DeclId, DeclarationOrder};

/// Catalog of candidate conversion methods, keyed by declaration identity.
#[derive(Debug, Default)]
pub struct CandidateCatalog {
    /// Candidates in insertion order; `CandidateId` indexes this vec.
    candidates: Vec<MappingCandidate>,
    /// Declaration identity to catalog slot.
    by_decl: FxHashMap<DeclId, CandidateId>,
}

impl CandidateCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a discovered conversion method.
    ///
    /// Idempotent by declaration identity: re-adding an identical
    /// descriptor returns the original [`CandidateId`]. Re-adding the same
    /// declaration with different contents is a caller bug and fails with
    /// [`CatalogError::ConflictingRedeclaration`].
    pub fn add(&mut self, descriptor: CandidateDescriptor) -> Result<CandidateId, CatalogError> {
        if let Some(&existing) = self.by_decl.get(&descriptor.decl) {
            let known = &self.candidates[existing.index()];
            if known.matches_descriptor(&descriptor) {
                return Ok(existing);
            }
            return Err(CatalogError::ConflictingRedeclaration { decl: descriptor.decl });
        }

        let id = CandidateId::new(self.candidates.len() as u32);
        let order = DeclarationOrder::new(
            descriptor.scope,
            descriptor.source_position,
            self.candidates.len() as u32,
        );

        self.candidates.push(MappingCandidate {
            id,
            decl: descriptor.decl,
            owner_scope: descriptor.scope,
            source: descriptor.source,
            target: descriptor.target,
            has_explicit_marker: descriptor.has_explicit_marker,
            ignore: descriptor.ignore,
            is_default: descriptor.is_default,
            has_mapping_signature: descriptor.has_mapping_signature,
            order,
        });
        self.by_decl.insert(descriptor.decl, id);

        Ok(id)
    }

    /// Look up a candidate by its catalog identity.
    pub fn get(&self, id: CandidateId) -> Option<&MappingCandidate> {
        self.candidates.get(id.index())
    }

    /// Look up a candidate by the identity of its declaration.
    ///
    /// This is the explicit-reference path: ignored candidates never
    /// participate in automatic resolution but stay addressable here.
    pub fn by_decl(&self, decl: DeclId) -> Option<&MappingCandidate> {
        self.by_decl.get(&decl).map(|id| &self.candidates[id.index()])
    }

    /// All candidates sorted by declaration order.
    pub fn ordered(&self) -> Vec<&MappingCandidate> {
        let mut ordered: Vec<_> = self.candidates.iter().collect();
        ordered.sort_by_key(|c| c.order);
        ordered
    }

    /// All candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingCandidate> {
        self.candidates.iter()
    }

    /// Number of distinct declarations in the catalog.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
