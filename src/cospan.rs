//! # Cospans - Morphisms Converging on a Shared Base
//!
//! The dual of [`crate::span`]: a multicospan is a non-empty family of
//! morphisms with a common codomain, the *base*:
//!
//! ```text
//!      B    C    D
//!       \   |   /
//!        f  g  h
//!         \ | /
//!           A
//! ```
//!
//! Cospans are the input shape for colimits such as pushouts, and the
//! carrier of open-network composition (see [`crate::decorated`]).
//!
//! Invariant: `leg.cod() == base` for every leg, non-empty. The contract
//! mirrors [`Multispan`](crate::span::Multispan) exactly with `base`
//! replacing `apex`.

use std::slice;

use crate::cat::Morphism;
use crate::error::DiagramError;

/// A non-empty family of morphisms sharing a common codomain.
#[derive(Debug, Clone, PartialEq)]
pub struct Multicospan<H: Morphism> {
    base: H::Ob,
    legs: Vec<H>,
}

/// A two-leg [`Multicospan`], built with [`Multicospan::pair`].
pub type Cospan<H> = Multicospan<H>;

impl<H: Morphism> Multicospan<H> {
    /// Trusted constructor: takes the base as given and checks only that
    /// the leg sequence is non-empty.
    pub fn from_parts(base: H::Ob, legs: Vec<H>) -> Result<Self, DiagramError> {
        if legs.is_empty() {
            return Err(DiagramError::ShapeMismatch {
                at: "legs".to_string(),
                expected: "at least one leg".to_string(),
                got: "an empty sequence".to_string(),
            });
        }
        Ok(Self { base, legs })
    }

    /// Derive the base from the legs and validate that every leg's
    /// codomain equals it.
    pub fn new(legs: Vec<H>) -> Result<Self, DiagramError> {
        let first = legs.first().ok_or_else(|| DiagramError::ShapeMismatch {
            at: "legs".to_string(),
            expected: "at least one leg".to_string(),
            got: "an empty sequence".to_string(),
        })?;
        let base = first.cod();
        for (i, leg) in legs.iter().enumerate().skip(1) {
            if leg.cod() != base {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("leg {i}"),
                    expected: format!("codomain {base:?}"),
                    got: format!("codomain {:?}", leg.cod()),
                });
            }
        }
        Ok(Self { base, legs })
    }

    /// The two-leg ([`Cospan`]) constructor.
    ///
    /// Fails with [`DiagramError::ShapeMismatch`] if the two codomains
    /// differ.
    pub fn pair(left: H, right: H) -> Result<Self, DiagramError> {
        Self::new(vec![left, right])
    }

    /// The shared codomain of all legs.
    pub fn base(&self) -> &H::Ob {
        &self.base
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

    /// The first leg. Total: cospans are never empty.
    pub fn left(&self) -> &H {
        &self.legs[0]
    }

    /// The second leg.
    ///
    /// # Panics
    ///
    /// Panics if the cospan has fewer than two legs. Values built with
    /// [`Multicospan::pair`] always have two.
    pub fn right(&self) -> &H {
        &self.legs[1]
    }

    /// Iterate over the legs in order. Finite and restartable.
    pub fn iter(&self) -> slice::Iter<'_, H> {
        self.legs.iter()
    }
}

impl<'a, H: Morphism> IntoIterator for &'a Multicospan<H> {
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
    fn test_new_derives_base() {
        let cospan = Multicospan::new(vec![leg("f", "B", "A"), leg("g", "C", "A")]).unwrap();
        assert_eq!(cospan.base(), "A");
        assert_eq!(cospan.len(), 2);
    }

    #[test]
    fn test_new_rejects_mismatched_codomains() {
        let result = Multicospan::new(vec![leg("f", "B", "A"), leg("g", "C", "X")]);
        let err = result.unwrap_err();
        assert!(matches!(err, DiagramError::ShapeMismatch { .. }));
        assert!(err.to_string().contains("leg 1"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = Multicospan::<Arrow<String>>::new(vec![]);
        assert!(matches!(result, Err(DiagramError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_pair_left_right() {
        let f = leg("f", "B", "A");
        let g = leg("g", "C", "A");
        let cospan = Cospan::pair(f.clone(), g.clone()).unwrap();
        assert_eq!(cospan.left(), &f);
        assert_eq!(cospan.right(), &g);
        assert_eq!(cospan.base(), "A");
    }

    #[test]
    fn test_pair_rejects_mismatched_codomains() {
        let result = Cospan::pair(leg("f", "B", "A"), leg("g", "C", "X"));
        assert!(matches!(result, Err(DiagramError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_leg_bounds_checked() {
        let cospan = Multicospan::new(vec![leg("f", "B", "A")]).unwrap();
        assert!(cospan.leg(0).is_ok());
        assert!(cospan.leg(3).is_err());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let f = leg("f", "B", "A");
        let g = leg("g", "C", "A");
        let fg = Multicospan::new(vec![f.clone(), g.clone()]).unwrap();
        let gf = Multicospan::new(vec![g, f]).unwrap();
        assert_ne!(fg, gf);
    }
}
