//! Default selection among the eligible candidates of one type pair.
//!
//! # Algorithm Overview
//!
//! 1. **Partition**: split the eligible candidates into explicit defaults
//!    and ordinary candidates.
//! 2. **Default conflict**: more than one explicit default is a hard
//!    conflict; no method is chosen for the pair.
//! 3. **Explicit default**: a single explicit default wins unconditionally
//!    over any number of ordinary candidates, without a diagnostic.
//! 4. **Sole candidate**: a single ordinary candidate resolves directly.
//! 5. **Implicit conflict**: several ordinary candidates resolve to the
//!    one with the lowest declaration order, best-effort, and the caller
//!    must surface a diagnostic.
//!
//! There is no scoring or type-compatibility ranking beyond exact type
//! pair equality; pairs differing only by nullability or variance are
//! distinct keys and never merged here.

use tracing::trace;

use crate::candidate::MappingCandidate;
use crate::ident::{CandidateId, TypePair};

/// Resolution outcome for one type pair.
///
/// Pairs with no eligible candidate have no outcome at all: they are
/// simply absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum ResolutionOutcome {
    /// Exactly one usable candidate.
    Resolved(CandidateId),
    /// More than one candidate is explicitly marked as default. Fatal for
    /// this pair: no implicit call site may be generated from this pass.
    AmbiguousDefault(Vec<CandidateId>),
    /// Several eligible candidates and no explicit default.
    AmbiguousImplicit {
        /// All competing candidates, in declaration order.
        candidates: Vec<CandidateId>,
        /// Best-effort fallback: the candidate with the lowest
        /// declaration order.
        chosen: CandidateId,
    },
}

impl ResolutionOutcome {
    /// The candidate an implicit call site should use, if any.
    ///
    /// `None` for a default conflict: the generator must not emit an
    /// implicit call for that pair.
    pub fn chosen(&self) -> Option<CandidateId> {
        match self {
            ResolutionOutcome::Resolved(id) => Some(*id),
            ResolutionOutcome::AmbiguousImplicit { chosen, .. } => Some(*chosen),
            ResolutionOutcome::AmbiguousDefault(_) => None,
        }
    }

    /// Whether this outcome represents a conflict that needs a diagnostic.
    pub fn is_conflict(&self) -> bool {
        !matches!(self, ResolutionOutcome::Resolved(_))
    }
}

/// Select the mapping to use for `pair` among its eligible candidates.
///
/// `eligible` must be non-empty and sorted by declaration order; the
/// catalog's [`ordered`](crate::catalog::CandidateCatalog::ordered) view
/// provides that invariant.
pub fn resolve(pair: TypePair, eligible: &[&MappingCandidate]) -> ResolutionOutcome {
    debug_assert!(!eligible.is_empty(), "resolve called with no candidates");

    let defaults: Vec<&&MappingCandidate> = eligible
        .iter()
        .filter(|c| c.is_explicit_default())
        .collect();

    if defaults.len() > 1 {
        trace!(?pair, count = defaults.len(), "conflicting explicit defaults");
        return ResolutionOutcome::AmbiguousDefault(
            defaults.iter().map(|c| c.id).collect(),
        );
    }

    if let Some(default) = defaults.first() {
        // A single explicit default wins over any number of ordinary
        // candidates, with no diagnostic.
        return ResolutionOutcome::Resolved(default.id);
    }

    if let [only] = eligible {
        return ResolutionOutcome::Resolved(only.id);
    }

    let chosen = eligible
        .iter()
        .min_by_key(|c| c.order)
        .map(|c| c.id)
        .expect("checked: eligible is non-empty");

    trace!(?pair, count = eligible.len(), ?chosen, "implicit ambiguity");
    ResolutionOutcome::AmbiguousImplicit {
        candidates: eligible.iter().map(|c| c.id).collect(),
        chosen,
    }
}
