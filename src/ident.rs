//! Identifier types shared across the resolution engine.
//!
//! All identities here are opaque: the engine never inspects what a type
//! or declaration *is*, it only compares identities. Type identities are
//! assigned by the external type comparator, declaration identities by the
//! symbol-analysis collaborator; the engine assigns the rest itself.

use serde::Serialize;

/// Opaque, comparable identity of a type.
///
/// Two mappings convert between the same types iff their `TypeId`s are
/// equal. Any normalization (nullability, variance) happens in the external
/// comparator before a `TypeId` is handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a type identity from its externally assigned index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The externally assigned index.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Ordered (source, target) pair under which candidates are grouped.
///
/// Directionality matters: `(A, B)` and `(B, A)` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypePair {
    /// The type converted from.
    pub source: TypeId,
    /// The type converted to.
    pub target: TypeId,
}

impl TypePair {
    /// Create a pair from source and target type identities.
    pub fn new(source: TypeId, target: TypeId) -> Self {
        Self { source, target }
    }
}

/// Opaque identity of the underlying method declaration.
///
/// Assigned by the symbol-analysis collaborator; the catalog uses it to
/// keep insertion idempotent per declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DeclId(u64);

impl DeclId {
    /// Create a declaration identity from its externally assigned index.
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    /// The externally assigned index.
    pub fn index(self) -> u64 {
        self.0
    }
}

/// Stable identity of a candidate within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateId(u32);

impl CandidateId {
    /// Create a candidate identity from a catalog slot index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The catalog slot index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Rank of the scope a candidate was declared in.
///
/// `0` is the mapper's own declaring scope; `1, 2, …` are the externally
/// used mappers in the order their use was declared. Instance-registered
/// and static-registered mappers share this ranking space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ScopeRank(u32);

impl ScopeRank {
    /// The mapper's own declaring scope.
    pub fn own() -> Self {
        Self(0)
    }

    /// An externally used mapper, by its zero-based registration slot.
    pub fn used(slot: u32) -> Self {
        Self(slot + 1)
    }

    /// Whether this is the mapper's own declaring scope.
    pub fn is_own(self) -> bool {
        self.0 == 0
    }

    /// Whether this scope belongs to an externally used mapper.
    pub fn is_external(self) -> bool {
        self.0 != 0
    }
}

/// Total order of a candidate's declaration across all scopes.
///
/// Derived by the catalog from `(scope rank, source position)` so it never
/// depends on the iteration order of whatever enumerates declarations. The
/// catalog insertion sequence is the final component, which keeps the order
/// total even if a buggy collaborator reports two declarations at the same
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclarationOrder {
    scope: ScopeRank,
    position: u32,
    seq: u32,
}

impl DeclarationOrder {
    pub(crate) fn new(scope: ScopeRank, position: u32, seq: u32) -> Self {
        Self { scope, position, seq }
    }

    /// The rank of the declaring scope.
    pub fn scope_rank(self) -> ScopeRank {
        self.scope
    }

    /// The source position within the declaring scope.
    pub fn source_position(self) -> u32 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_pair_directionality() {
        let a = TypeId::new(1);
        let b = TypeId::new(2);

        assert_eq!(TypePair::new(a, b), TypePair::new(a, b));
        assert_ne!(TypePair::new(a, b), TypePair::new(b, a));
    }

    #[test]
    fn test_scope_rank_ordering() {
        assert!(ScopeRank::own() < ScopeRank::used(0));
        assert!(ScopeRank::used(0) < ScopeRank::used(1));
        assert!(ScopeRank::own().is_own());
        assert!(!ScopeRank::own().is_external());
        assert!(ScopeRank::used(0).is_external());
    }

    #[test]
    fn test_declaration_order_is_lexicographic() {
        // Scope rank dominates source position.
        let own_late = DeclarationOrder::new(ScopeRank::own(), 99, 0);
        let used_early = DeclarationOrder::new(ScopeRank::used(0), 1, 1);
        assert!(own_late < used_early);

        // Within a scope, source position decides.
        let first = DeclarationOrder::new(ScopeRank::own(), 3, 5);
        let second = DeclarationOrder::new(ScopeRank::own(), 7, 2);
        assert!(first < second);

        // Same scope and position: insertion sequence keeps the order total.
        let seq_a = DeclarationOrder::new(ScopeRank::own(), 3, 0);
        let seq_b = DeclarationOrder::new(ScopeRank::own(), 3, 1);
        assert!(seq_a < seq_b);
    }
}
