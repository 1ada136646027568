//! The resolution registry.
//!
//! The registry is the aggregate result of one resolution pass: for every
//! type pair with at least one eligible candidate, the outcome the code
//! generator should act on. It is built once over an already-materialized
//! catalog, published immutable, and rebuilt from scratch on the next
//! pass; `lookup` is a pure read and returns the same outcome for the same
//! pair for the registry's whole lifetime.

use indexmap::IndexMap;
use tracing::debug;

use crate::candidate::MappingCandidate;
use crate::catalog::CandidateCatalog;
use crate::config::ResolutionConfig;
use crate::diagnostics::Diagnostic;
use crate::discovery;
use crate::ident::TypePair;
use crate::select::{self, ResolutionOutcome};

/// Immutable resolution results for one compilation pass.
#[derive(Debug)]
pub struct ResolutionRegistry {
    /// Outcome per type pair, keyed in declaration order of the first
    /// eligible candidate.
    outcomes: IndexMap<TypePair, ResolutionOutcome>,
    /// Conflicts recorded during construction.
    diagnostics: Vec<Diagnostic>,
}

impl ResolutionRegistry {
    /// Build the registry for a catalog and configuration.
    ///
    /// Groups the candidates that survive discovery by type pair and runs
    /// default selection on each group. Each group's resolution is
    /// self-contained over its own candidate slice; a conflict in one pair
    /// never affects another.
    pub fn build(catalog: &CandidateCatalog, config: &ResolutionConfig) -> Self {
        let mut groups: IndexMap<TypePair, Vec<&MappingCandidate>> = IndexMap::new();
        for candidate in catalog.ordered() {
            if !discovery::is_eligible(candidate, config.auto_user_mappings) {
                continue;
            }
            groups.entry(candidate.pair()).or_default().push(candidate);
        }

        let mut outcomes = IndexMap::with_capacity(groups.len());
        let mut diagnostics = Vec::new();

        for (pair, eligible) in groups {
            let outcome = select::resolve(pair, &eligible);
            match &outcome {
                ResolutionOutcome::AmbiguousDefault(ids) => {
                    diagnostics.push(Diagnostic::multiple_defaults(pair, ids.clone()));
                }
                ResolutionOutcome::AmbiguousImplicit { candidates, .. } => {
                    diagnostics.push(Diagnostic::multiple_implicit(
                        pair,
                        candidates.clone(),
                        config.implicit_conflict_severity,
                    ));
                }
                ResolutionOutcome::Resolved(_) => {}
            }
            outcomes.insert(pair, outcome);
        }

        debug!(
            candidates = catalog.len(),
            pairs = outcomes.len(),
            conflicts = diagnostics.len(),
            "resolution registry built"
        );

        Self { outcomes, diagnostics }
    }

    /// The outcome for a type pair, or `None` if no eligible candidate
    /// exists for it.
    ///
    /// This is the only query surface exposed to the code-generation
    /// collaborator. An absent pair is not an error; the broader pipeline
    /// falls back to its built-in generation strategies.
    pub fn lookup(&self, pair: TypePair) -> Option<&ResolutionOutcome> {
        self.outcomes.get(&pair)
    }

    /// Conflicts recorded while building this registry, one per ambiguous
    /// pair, in registry order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// All resolved pairs and their outcomes, in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (TypePair, &ResolutionOutcome)> {
        self.outcomes.iter().map(|(pair, outcome)| (*pair, outcome))
    }

    /// Number of type pairs with an outcome.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no pair resolved at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
