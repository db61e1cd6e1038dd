//! Greenclaim Domain Layer
//!
//! Core value types for evaluating environmental marketing claims. This crate
//! holds no infrastructure: embedding models and trained classifiers are
//! reached only through the traits in [`traits`].
//!
//! ## Key Concepts
//!
//! - **ClaimRecord**: the submitted claim plus the answers to the review form
//! - **SupportDocument**: claim and support text synthesized from a record
//! - **DocumentVerdict**: compliant or greenwashing risk, with a confidence
//! - **SemanticVerdict**: one of five clarity categories
//! - **FinalVerdict**: document verdict plus the optional semantic verdict
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Predictors are injected by callers through trait objects or generics
//! - Every type here is immutable once built, apart from the semantic verdict
//!   threaded through the override chain by the gate crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod certification;
pub mod record;
pub mod synthesis;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use certification::Certification;
pub use record::{ClaimRecord, InputError, NeutralityBasis, ProductScope};
pub use synthesis::{synthesize, SupportDocument};
pub use verdict::{DocumentLabel, DocumentVerdict, FinalVerdict, SemanticCategory, SemanticVerdict};
