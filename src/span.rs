//! # Spans - Morphisms Radiating from a Shared Apex
//!
//! A multispan is a non-empty family of morphisms with a common domain,
//! the *apex*:
//!
//! ```text
//!           A
//!         / | \
//!        f  g  h
//!       /   |   \
//!      B    C    D
//! ```
//!
//! Spans are the input shape for limits such as products and pullbacks.
//!
//! ## Invariant
//!
//! `leg.dom() == apex` for every leg, and there is at least one leg. The
//! validating constructors establish this eagerly; values are immutable
//! afterwards, so the invariant cannot be broken later.
//!
//! The two-leg case is [`Span`], a type alias rather than a separate
//! nominal type: a span is just a multispan whose leg count happens to be
//! two, with [`left`](Multispan::left)/[`right`](Multispan::right)
//! convenience accessors.

use std::slice;

use crate::cat::Morphism;
use crate::error::DiagramError;

/// A non-empty family of morphisms sharing a common domain.
///
/// # Example
///
/// ```
/// use free_diagrams::{Arrow, Multispan};
///
/// let f = Arrow::new("f", "A", "B");
/// let g = Arrow::new("g", "A", "C");
/// let span = Multispan::new(vec![f.clone(), g.clone()]).unwrap();
///
/// assert_eq!(span.apex(), &"A");
/// assert_eq!(span.left(), &f);
/// assert_eq!(span.right(), &g);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Multispan<H: Morphism> {
    apex: H::Ob,
    legs: Vec<H>,
}

/// A two-leg [`Multispan`], built with [`Multispan::pair`].
pub type Span<H> = Multispan<H>;

impl<H: Morphism> Multispan<H> {
    /// Trusted constructor: takes the apex as given and checks only that
    /// the leg sequence is non-empty.
    ///
    /// The caller is responsible for `leg.dom() == apex` on every leg;
    /// use [`Multispan::new`] to have that validated.
    pub fn from_parts(apex: H::Ob, legs: Vec<H>) -> Result<Self, DiagramError> {
        if legs.is_empty() {
            return Err(DiagramError::ShapeMismatch {
                at: "legs".to_string(),
                expected: "at least one leg".to_string(),
                got: "an empty sequence".to_string(),
            });
        }
        Ok(Self { apex, legs })
    }

    /// Derive the apex from the legs and validate that every leg's domain
    /// equals it.
    ///
    /// Fails with [`DiagramError::ShapeMismatch`] naming the first leg
    /// whose domain disagrees.
    pub fn new(legs: Vec<H>) -> Result<Self, DiagramError> {
        let first = legs.first().ok_or_else(|| DiagramError::ShapeMismatch {
            at: "legs".to_string(),
            expected: "at least one leg".to_string(),
            got: "an empty sequence".to_string(),
        })?;
        let apex = first.dom();
        for (i, leg) in legs.iter().enumerate().skip(1) {
            if leg.dom() != apex {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("leg {i}"),
                    expected: format!("domain {apex:?}"),
                    got: format!("domain {:?}", leg.dom()),
                });
            }
        }
        Ok(Self { apex, legs })
    }

    /// The two-leg ([`Span`]) constructor.
    ///
    /// Fails with [`DiagramError::ShapeMismatch`] if the two domains
    /// differ.
    pub fn pair(left: H, right: H) -> Result<Self, DiagramError> {
        Self::new(vec![left, right])
    }

    /// The shared domain of all legs.
    pub fn apex(&self) -> &H::Ob {
        &self.apex
    }

    /// The legs, in construction order.
    pub fn legs(&self) -> &[H] {
        &self.legs
    }

    /// Number of legs. Always at least one.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false; kept for the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Bounds-checked leg access.
    pub fn leg(&self, index: usize) -> Result<&H, DiagramError> {
        self.legs.get(index).ok_or(DiagramError::IndexOutOfRange {
            index,
            len: self.legs.len(),
        })
    }

    /// The first leg. Total: spans are never empty.
    pub fn left(&self) -> &H {
        &self.legs[0]
    }

    /// The second leg.
    ///
    /// # Panics
    ///
    /// Panics if the span has fewer than two legs. Values built with
    /// [`Multispan::pair`] always have two.
    pub fn right(&self) -> &H {
        &self.legs[1]
    }

    /// Iterate over the legs in order. Finite and restartable.
    pub fn iter(&self) -> slice::Iter<'_, H> {
        self.legs.iter()
    }
}

impl<'a, H: Morphism> IntoIterator for &'a Multispan<H> {
    type Item = &'a H;
    type IntoIter = slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::Arrow;

    fn leg(name: &str, dom: &str, cod: &str) -> Arrow<String> {
        Arrow::new(name, dom.to_string(), cod.to_string())
    }

    #[test]
    fn test_new_derives_apex() {
        let span = Multispan::new(vec![leg("f", "A", "B"), leg("g", "A", "C")]).unwrap();
        assert_eq!(span.apex(), "A");
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_new_rejects_mismatched_domains() {
        let result = Multispan::new(vec![leg("f", "A", "B"), leg("g", "X", "C")]);
        let err = result.unwrap_err();
        assert!(matches!(err, DiagramError::ShapeMismatch { .. }));
        assert!(err.to_string().contains("leg 1"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = Multispan::<Arrow<String>>::new(vec![]);
        assert!(matches!(result, Err(DiagramError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_from_parts_is_trusted() {
        // from_parts does not cross-check the apex against the legs
        let span = Multispan::from_parts("Z".to_string(), vec![leg("f", "A", "B")]).unwrap();
        assert_eq!(span.apex(), "Z");
    }

    #[test]
    fn test_from_parts_rejects_empty() {
        let result = Multispan::<Arrow<String>>::from_parts("A".to_string(), vec![]);
        assert!(matches!(result, Err(DiagramError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_pair_left_right() {
        let f = leg("f", "A", "B");
        let g = leg("g", "A", "C");
        let span = Span::pair(f.clone(), g.clone()).unwrap();
        assert_eq!(span.left(), &f);
        assert_eq!(span.right(), &g);
    }

    #[test]
    fn test_pair_rejects_mismatched_domains() {
        let result = Span::pair(leg("f", "A", "B"), leg("g", "X", "C"));
        assert!(matches!(result, Err(DiagramError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_leg_bounds_checked() {
        let span = Multispan::new(vec![leg("f", "A", "B")]).unwrap();
        assert!(span.leg(0).is_ok());
        assert!(matches!(
            span.leg(1),
            Err(DiagramError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_iteration_is_ordered_and_restartable() {
        let f = leg("f", "A", "B");
        let g = leg("g", "A", "C");
        let span = Multispan::new(vec![f.clone(), g.clone()]).unwrap();

        let once: Vec<_> = span.iter().collect();
        let twice: Vec<_> = (&span).into_iter().collect();
        assert_eq!(once, vec![&f, &g]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equality_is_structural_and_order_sensitive() {
        let f = leg("f", "A", "B");
        let g = leg("g", "A", "C");
        let fg = Multispan::new(vec![f.clone(), g.clone()]).unwrap();
        let gf = Multispan::new(vec![g, f]).unwrap();
        assert_eq!(fg, fg.clone());
        assert_ne!(fg, gf);
    }
}
