//! # Error Types
//!
//! Errors in this crate are construction-time validation failures:
//! an attempt to build a diagram whose morphisms do not fit together,
//! or to read an id that was never assigned.
//!
//! This aligns with the categorical view: a span whose legs have
//! different domains is not a "buggy span", it is not a span at all.
//! Every variant is raised eagerly, before any malformed value escapes
//! to a caller.

use thiserror::Error;

/// Validation failures for diagram construction and access.
///
/// All three variants are unrecoverable at the call site that triggered
/// them: they indicate a programming-logic error to fix, not a transient
/// condition to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// A structural invariant was violated: leg domains/codomains
    /// disagree, an edge's morphism does not match its endpoint objects,
    /// or parallel input sequences differ in length.
    ///
    /// `at` locates the disagreement (e.g. `"leg 2"`, `"edge triple 0
    /// source"`); `expected`/`got` are the `Debug` renderings of the two
    /// sides.
    #[error("shape mismatch at {at}: expected {expected}, got {got}")]
    ShapeMismatch {
        at: String,
        expected: String,
        got: String,
    },

    /// Positional or id-based access beyond the valid range.
    #[error("index {index} out of range ({len} element(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// An object/morphism attribute was read for an id with no bound
    /// attribute. `kind` is `"vertex"` or `"edge"`.
    #[error("no attribute bound for {kind} id {id}")]
    MissingAttribute { kind: &'static str, id: usize },
}
