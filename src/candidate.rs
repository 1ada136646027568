//! Candidate records for user-written conversion methods.

use crate::ident::{CandidateId, DeclId, DeclarationOrder, ScopeRank, TypeId, TypePair};

/// Raw descriptor of one discovered conversion method, as reported by the
/// symbol-analysis collaborator.
///
/// Descriptors are plain data: attribute-driven behavior (marker, ignore,
/// default) arrives as fields of this record, so discovery and selection
/// stay pure functions with no symbol-table dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDescriptor {
    /// Identity of the underlying method declaration.
    pub decl: DeclId,
    /// Rank of the declaring scope (own mapper or used-mapper slot).
    pub scope: ScopeRank,
    /// Source position of the declaration within its scope.
    pub source_position: u32,
    /// The type the method converts from.
    pub source: TypeId,
    /// The type the method converts to.
    pub target: TypeId,
    /// Whether an explicit user-mapping marker is present.
    pub has_explicit_marker: bool,
    /// Whether the method is explicitly excluded from automatic discovery.
    pub ignore: bool,
    /// `Some(true)` if explicitly requested as the default for its pair;
    /// unset means "ordinary, eligible if first".
    pub is_default: Option<bool>,
    /// Whether the method satisfies the structural shape of a mapping
    /// method signature for its scope.
    pub has_mapping_signature: bool,
}

/// One user-written conversion method known to the catalog.
///
/// Created once per discovered declaration, immutable thereafter.
#[derive(Debug, Clone)]
pub struct MappingCandidate {
    /// Stable identity within the catalog.
    pub id: CandidateId,
    /// Identity of the underlying method declaration.
    pub decl: DeclId,
    /// Rank of the declaring scope.
    pub owner_scope: ScopeRank,
    /// The type the method converts from.
    pub source: TypeId,
    /// The type the method converts to.
    pub target: TypeId,
    /// Whether an explicit user-mapping marker is present.
    pub has_explicit_marker: bool,
    /// Whether the method is excluded from automatic discovery.
    pub ignore: bool,
    /// `Some(true)` if explicitly requested as the default for its pair.
    pub is_default: Option<bool>,
    /// Whether the method satisfies the structural shape of a mapping
    /// method signature for its scope.
    pub has_mapping_signature: bool,
    /// Catalog-derived total declaration order.
    pub order: DeclarationOrder,
}

impl MappingCandidate {
    /// The type pair this candidate converts between.
    pub fn pair(&self) -> TypePair {
        TypePair::new(self.source, self.target)
    }

    /// Whether this candidate was explicitly requested as the default for
    /// its type pair.
    pub fn is_explicit_default(&self) -> bool {
        self.is_default == Some(true)
    }

    /// Whether this candidate came from the given descriptor.
    ///
    /// Used by the catalog to distinguish an idempotent re-registration
    /// from a conflicting one.
    pub(crate) fn matches_descriptor(&self, descriptor: &CandidateDescriptor) -> bool {
        self.decl == descriptor.decl
            && self.owner_scope == descriptor.scope
            && self.order.source_position() == descriptor.source_position
            && self.source == descriptor.source
            && self.target == descriptor.target
            && self.has_explicit_marker == descriptor.has_explicit_marker
            && self.ignore == descriptor.ignore
            && self.is_default == descriptor.is_default
            && self.has_mapping_signature == descriptor.has_mapping_signature
    }
}
