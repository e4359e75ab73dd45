//! # Free Diagrams
//!
//! Finite, freely generated diagrams of objects and morphisms in an
//! abstract category, with conversions between the common fixed shapes
//! and one fully general representation:
//!
//! - **Fixed shapes**: [`Multispan`]/[`Span`], [`Multicospan`]/[`Cospan`],
//!   [`ParallelMorphisms`]/[`ParallelPair`], validated at construction
//! - **General shape**: [`FreeDiagram`], an attributed directed
//!   multigraph with objects on vertices and morphisms on edges
//! - **Converters**: deterministic embeddings of each fixed shape into
//!   the general one (the [`FixedShape`] protocol)
//! - **Decorated cospans**: [`DecoratedCospan`] for open-network carriers
//!
//! Free diagrams are the standard input shape for limit/colimit engines
//! (products, pullbacks, equalizers and their duals). This crate defines
//! the representation and its structural invariants; it computes no
//! limits itself.
//!
//! ## The category boundary
//!
//! Everything is generic over a morphism type implementing [`Morphism`]:
//! the ambient category supplies `dom`, `cod`, and equality, nothing
//! more. Two sample morphism types ([`Arrow`], [`FinFun`]) are included
//! for tests and toy categories.
//!
//! ## Example
//!
//! ```
//! use free_diagrams::{Arrow, Span};
//!
//! let f = Arrow::new("f", "A", "B");
//! let g = Arrow::new("g", "A", "C");
//! let span = Span::pair(f.clone(), g.clone()).unwrap();
//! assert_eq!(span.apex(), &"A");
//!
//! let diagram = span.to_free_diagram();
//! assert_eq!(diagram.vertex_count(), 3);
//! assert_eq!(diagram.edge_count(), 2);
//! ```
//!
//! All types are immutable after construction (fixed shapes) or
//! append-only ([`FreeDiagram`]); build on one thread, then share
//! read-only.

pub mod cat;
pub mod convert;
pub mod cospan;
pub mod decorated;
pub mod diagram;
pub mod error;
pub mod parallel;
pub mod span;

// Re-export key types at crate root for convenience
pub use cat::{Arrow, FinFun, Morphism};
pub use convert::FixedShape;
pub use cospan::{Cospan, Multicospan};
pub use decorated::{DecoratedCospan, Decorator};
pub use diagram::FreeDiagram;
pub use error::DiagramError;
pub use parallel::{ParallelMorphisms, ParallelPair};
pub use span::{Multispan, Span};
