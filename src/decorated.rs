//! # Decorated Cospans - Cospans Carrying a Payload
//!
//! Open-network modeling pairs a cospan with auxiliary data: a
//! *decoration* (the value attached to the network) and a *decorator*
//! (the capability used to combine decorations when cospans are composed
//! along shared legs). Composition itself lives in an external layer;
//! this module only defines the carrier.
//!
//! The decorator is deliberately opaque: [`Decorator`] mandates no
//! behavior beyond a name for diagnostics. It is held as a shared
//! [`Arc`] reference, while the cospan and decoration are owned.

use std::fmt;
use std::sync::Arc;

use crate::cat::Morphism;
use crate::cospan::Multicospan;

/// Marker trait for decoration-combining capabilities.
///
/// No behavior is mandated here; an external open-network composition
/// layer defines what a decorator actually does. The name hook exists
/// for diagnostics only.
pub trait Decorator {
    /// Human-readable name for this decorator.
    fn decorator_name(&self) -> &'static str;
}

/// A cospan together with a decoration value and a shared decorator
/// capability.
///
/// No validation beyond what the wrapped cospan already carries: the
/// decorator's compatibility with the decoration is the decorator's own
/// responsibility.
pub struct DecoratedCospan<H: Morphism, F: Decorator + ?Sized, D> {
    cospan: Multicospan<H>,
    decorator: Arc<F>,
    decoration: D,
}

impl<H: Morphism, F: Decorator + ?Sized, D> DecoratedCospan<H, F, D> {
    /// Wrap a cospan with a decorator capability and a decoration value.
    pub fn new(cospan: Multicospan<H>, decorator: Arc<F>, decoration: D) -> Self {
        Self {
            cospan,
            decorator,
            decoration,
        }
    }

    /// The shared decorator capability.
    pub fn decorator(&self) -> &Arc<F> {
        &self.decorator
    }

    /// The decoration value.
    pub fn decoration(&self) -> &D {
        &self.decoration
    }

    /// Unwrap, returning the underlying cospan.
    pub fn undecorate(self) -> Multicospan<H> {
        self.cospan
    }

    /// The wrapped cospan's base.
    pub fn base(&self) -> &H::Ob {
        self.cospan.base()
    }

    /// The wrapped cospan's first leg.
    pub fn left(&self) -> &H {
        self.cospan.left()
    }

    /// The wrapped cospan's second leg.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped cospan has fewer than two legs, like
    /// [`Multicospan::right`].
    pub fn right(&self) -> &H {
        self.cospan.right()
    }

    /// The wrapped cospan, by reference.
    pub fn cospan(&self) -> &Multicospan<H> {
        &self.cospan
    }
}

impl<H: Morphism, F: Decorator + ?Sized, D: Clone> Clone for DecoratedCospan<H, F, D> {
    fn clone(&self) -> Self {
        Self {
            cospan: self.cospan.clone(),
            decorator: Arc::clone(&self.decorator),
            decoration: self.decoration.clone(),
        }
    }
}

impl<H: Morphism, F: Decorator + ?Sized, D: fmt::Debug> fmt::Debug for DecoratedCospan<H, F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratedCospan")
            .field("cospan", &self.cospan)
            .field("decorator", &self.decorator.decorator_name())
            .field("decoration", &self.decoration)
            .finish()
    }
}
