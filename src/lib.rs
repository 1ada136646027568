//! User-mapping resolution engine for generated object-to-object mappers.
//!
//! When a mapper generator needs to convert between a source and a target
//! type, a hand-written conversion method the developer supplied may have
//! to be used instead of a generated one. This crate decides which one:
//! it catalogs the candidate methods, filters them for automatic
//! discovery, selects at most one method per `(source, target)` pair, and
//! reports ambiguous or conflicting configurations as diagnostics.
//!
//! The engine never generates a conversion itself, and it never touches
//! program symbols: candidates arrive as plain descriptors from the
//! surrounding tool, results leave as a read-only registry.
//!
//! # Resolution flow
//!
//! 1. **Collect**: the symbol-analysis collaborator feeds descriptors into
//!    a [`CandidateCatalog`], own scope first, then each externally used
//!    mapper in registration order. The catalog derives a total
//!    declaration order from `(scope rank, source position)`, so the feed
//!    order never matters.
//! 2. **Resolve**: [`ResolutionRegistry::build`] filters candidates
//!    ([`discovery`]), groups them by [`TypePair`], and selects a default
//!    per group ([`select`]). Conflicts become [`Diagnostic`] records, not
//!    errors; every pair resolves independently.
//! 3. **Query**: the code generator calls
//!    [`lookup`](ResolutionRegistry::lookup) per pair. Once built, the
//!    registry is immutable and safe to read from many threads.
//!
//! # Example
//!
//! ```
//! use mapres::{
//!     CandidateCatalog, CandidateDescriptor, DeclId, ResolutionConfig,
//!     ResolutionOutcome, ResolutionRegistry, ScopeRank, TypeId, TypePair,
//! };
//!
//! let mut catalog = CandidateCatalog::new();
//! catalog
//!     .add(CandidateDescriptor {
//!         decl: DeclId::new(1),
//!         scope: ScopeRank::own(),
//!         source_position: 4,
//!         source: TypeId::new(10),
//!         target: TypeId::new(11),
//!         has_explicit_marker: true,
//!         ignore: false,
//!         is_default: None,
//!         has_mapping_signature: true,
//!     })
//!     .unwrap();
//!
//! let registry = ResolutionRegistry::build(&catalog, &ResolutionConfig::default());
//!
//! let pair = TypePair::new(TypeId::new(10), TypeId::new(11));
//! assert!(matches!(
//!     registry.lookup(pair),
//!     Some(ResolutionOutcome::Resolved(_))
//! ));
//! assert!(registry.diagnostics().is_empty());
//! ```

pub mod candidate;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod ident;
pub mod registry;
pub mod select;

pub use candidate::{CandidateDescriptor, MappingCandidate};
pub use catalog::CandidateCatalog;
pub use config::ResolutionConfig;
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use error::CatalogError;
pub use ident::{CandidateId, DeclId, DeclarationOrder, ScopeRank, TypeId, TypePair};
pub use registry::ResolutionRegistry;
pub use select::ResolutionOutcome;
