//! Diagnostics for ambiguous or conflicting mapping configurations.
//!
//! Diagnostics are returned as data, never raised: the caller decides how
//! to surface them, and no diagnostic suppresses resolution of independent
//! type pairs. Locating and rendering them in source is the diagnostics
//! collaborator's job; records here carry only the involved type pair and
//! candidate identities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ident::{CandidateId, TypePair};

/// Severity of a resolution diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A correctness requirement was violated.
    Error,
    /// Suspicious but resolvable configuration.
    Warning,
    /// Informational notice.
    Note,
    /// A hint the user may act on.
    Help,
}

/// Stable machine-readable code of a resolution diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticCode {
    /// Several eligible candidates compete for one pair without an
    /// explicit default.
    MultipleImplicitMappings,
    /// More than one candidate is explicitly marked as the default for
    /// one pair.
    MultipleDefaultMappings,
}

impl DiagnosticCode {
    /// The stable code string.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::MultipleImplicitMappings => "MAP0601",
            DiagnosticCode::MultipleDefaultMappings => "MAP0602",
        }
    }
}

/// One conflict surfaced while building a resolution registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Machine-readable code.
    pub code: DiagnosticCode,
    /// Severity chosen for this occurrence.
    pub severity: Severity,
    /// The type pair the conflict is local to.
    pub pair: TypePair,
    /// The candidates involved, in declaration order.
    pub candidates: Vec<CandidateId>,
}

impl Diagnostic {
    /// More than one explicit default for a pair. Always an error: two
    /// simultaneous "the" defaults are a contradiction, not an ambiguity.
    pub(crate) fn multiple_defaults(pair: TypePair, candidates: Vec<CandidateId>) -> Self {
        Self {
            code: DiagnosticCode::MultipleDefaultMappings,
            severity: Severity::Error,
            pair,
            candidates,
        }
    }

    /// Several eligible candidates and no explicit default. The severity
    /// is configurable per resolution pass.
    pub(crate) fn multiple_implicit(
        pair: TypePair,
        candidates: Vec<CandidateId>,
        severity: Severity,
    ) -> Self {
        Self {
            code: DiagnosticCode::MultipleImplicitMappings,
            severity,
            pair,
            candidates,
        }
    }

    /// Whether this diagnostic forbids generating an implicit call site
    /// for its pair.
    pub fn is_fatal_for_pair(&self) -> bool {
        self.code == DiagnosticCode::MultipleDefaultMappings
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            DiagnosticCode::MultipleDefaultMappings => write!(
                f,
                "{}: multiple mappings are marked as default for the conversion \
                 from type {} to type {}",
                self.code.as_str(),
                self.pair.source.index(),
                self.pair.target.index(),
            )?,
            DiagnosticCode::MultipleImplicitMappings => write!(
                f,
                "{}: multiple user mappings discovered for the conversion \
                 from type {} to type {}; the first declared is used",
                self.code.as_str(),
                self.pair.source.index(),
                self.pair.target.index(),
            )?,
        }

        write!(f, " (candidates ")?;
        for (i, id) in self.candidates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "#{}", id.index())?;
        }
        write!(f, ")")
    }
}
