//! Discovery filter: which candidates participate in implicit resolution.

use crate::candidate::MappingCandidate;

/// Decide whether a candidate participates in automatic resolution.
///
/// Pure classification; `auto_user_mappings` is supplied once per
/// resolution pass, there is no per-candidate override.
///
/// Rules, in order:
/// 1. Ignored methods are never eligible. They remain directly callable
///    by explicit reference.
/// 2. With `auto_user_mappings` enabled, every remaining candidate is
///    eligible.
/// 3. With it disabled, only explicitly marked candidates are eligible;
///    candidates from externally used mappers must additionally look like
///    that mapper's own externally visible mapping surface, the same shape
///    rule applied to partial, declared-but-unimplemented mapping
///    signatures.
pub fn is_eligible(candidate: &MappingCandidate, auto_user_mappings: bool) -> bool {
    if candidate.ignore {
        return false;
    }

    if auto_user_mappings {
        return true;
    }

    if !candidate.has_explicit_marker {
        return false;
    }

    if candidate.owner_scope.is_external() {
        return candidate.has_mapping_signature;
    }

    true
}
