//! # Parallel Morphisms - A Family Between Two Fixed Objects
//!
//! A non-empty family of morphisms sharing both their domain and their
//! codomain:
//!
//! ```text
//!         f
//!       ────▶
//!     A ────▶ B
//!       ────▶
//!         h
//! ```
//!
//! This is the input shape for equalizers and coequalizers. Unlike spans
//! and cospans, both endpoints are shared, so the validating constructor
//! checks two invariants independently and reports which one failed.
//!
//! The two-morphism case is [`ParallelPair`], a type alias over the
//! general family (same tagged representation as [`crate::span::Span`]).

use std::slice;

use crate::cat::Morphism;
use crate::error::DiagramError;

/// A non-empty family of morphisms with a common domain and codomain.
///
/// # Example
///
/// ```
/// use free_diagrams::{Arrow, ParallelPair};
///
/// let f = Arrow::new("f", "A", "B");
/// let g = Arrow::new("g", "A", "B");
/// let pair = ParallelPair::pair(f, g).unwrap();
///
/// assert_eq!(pair.dom(), &"A");
/// assert_eq!(pair.codom(), &"B");
/// assert_eq!(pair.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelMorphisms<H: Morphism> {
    dom: H::Ob,
    cod: H::Ob,
    homs: Vec<H>,
}

/// A two-morphism [`ParallelMorphisms`], built with
/// [`ParallelMorphisms::pair`].
pub type ParallelPair<H> = ParallelMorphisms<H>;

impl<H: Morphism> ParallelMorphisms<H> {
    /// Trusted constructor: takes the endpoints as given and checks only
    /// that the morphism sequence is non-empty.
    pub fn from_parts(dom: H::Ob, cod: H::Ob, homs: Vec<H>) -> Result<Self, DiagramError> {
        if homs.is_empty() {
            return Err(DiagramError::ShapeMismatch {
                at: "homs".to_string(),
                expected: "at least one morphism".to_string(),
                got: "an empty sequence".to_string(),
            });
        }
        Ok(Self { dom, cod, homs })
    }

    /// Derive the common domain and codomain from the first morphism and
    /// validate both across all elements.
    ///
    /// Fails with [`DiagramError::ShapeMismatch`] stating whether the
    /// domain or the codomain side disagreed, and at which index.
    pub fn new(homs: Vec<H>) -> Result<Self, DiagramError> {
        let first = homs.first().ok_or_else(|| DiagramError::ShapeMismatch {
            at: "homs".to_string(),
            expected: "at least one morphism".to_string(),
            got: "an empty sequence".to_string(),
        })?;
        let dom = first.dom();
        let cod = first.cod();
        for (i, hom) in homs.iter().enumerate().skip(1) {
            if hom.dom() != dom {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("morphism {i} domain"),
                    expected: format!("{dom:?}"),
                    got: format!("{:?}", hom.dom()),
                });
            }
            if hom.cod() != cod {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("morphism {i} codomain"),
                    expected: format!("{cod:?}"),
                    got: format!("{:?}", hom.cod()),
                });
            }
        }
        Ok(Self { dom, cod, homs })
    }

    /// The two-morphism ([`ParallelPair`]) constructor.
    ///
    /// Validates domain and codomain equality independently; the error
    /// says which side mismatched.
    pub fn pair(f: H, g: H) -> Result<Self, DiagramError> {
        Self::new(vec![f, g])
    }

    /// The shared domain.
    pub fn dom(&self) -> &H::Ob {
        &self.dom
    }

    /// The shared codomain.
    pub fn codom(&self) -> &H::Ob {
        &self.cod
    }

    /// The morphisms, in construction order.
    pub fn homs(&self) -> &[H] {
        &self.homs
    }

    /// Number of morphisms. Always at least one.
    pub fn len(&self) -> usize {
        self.homs.len()
    }

    /// Always false; kept for the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.homs.is_empty()
    }

    /// Bounds-checked element access.
    pub fn hom(&self, index: usize) -> Result<&H, DiagramError> {
        self.homs.get(index).ok_or(DiagramError::IndexOutOfRange {
            index,
            len: self.homs.len(),
        })
    }

    /// The first morphism. Total: the family is never empty.
    pub fn first(&self) -> &H {
        &self.homs[0]
    }

    /// The last morphism. Total: the family is never empty.
    pub fn last(&self) -> &H {
        &self.homs[self.homs.len() - 1]
    }

    /// Iterate over the morphisms in order. Finite and restartable.
    pub fn iter(&self) -> slice::Iter<'_, H> {
        self.homs.iter()
    }
}

impl<'a, H: Morphism> IntoIterator for &'a ParallelMorphisms<H> {
    type Item = &'a H;
    type IntoIter = slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.homs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::Arrow;

    fn arrow(name: &str, dom: &str, cod: &str) -> Arrow<String> {
        Arrow::new(name, dom.to_string(), cod.to_string())
    }

    #[test]
    fn test_new_derives_endpoints() {
        let fam = ParallelMorphisms::new(vec![
            arrow("f", "A", "B"),
            arrow("g", "A", "B"),
            arrow("h", "A", "B"),
        ])
        .unwrap();
        assert_eq!(fam.dom(), "A");
        assert_eq!(fam.codom(), "B");
        assert_eq!(fam.len(), 3);
    }

    #[test]
    fn test_new_rejects_mismatched_domain() {
        let err = ParallelMorphisms::new(vec![arrow("f", "A", "B"), arrow("g", "X", "B")])
            .unwrap_err();
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_new_rejects_mismatched_codomain() {
        let err = ParallelMorphisms::new(vec![arrow("f", "A", "B"), arrow("g", "A", "X")])
            .unwrap_err();
        assert!(err.to_string().contains("codomain"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = ParallelMorphisms::<Arrow<String>>::new(vec![]);
        assert!(matches!(result, Err(DiagramError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_pair_reports_which_side_mismatched() {
        let dom_err =
            ParallelPair::pair(arrow("f", "A", "B"), arrow("g", "X", "B")).unwrap_err();
        assert!(dom_err.to_string().contains("domain"));
        assert!(!dom_err.to_string().contains("codomain"));

        let cod_err =
            ParallelPair::pair(arrow("f", "A", "B"), arrow("g", "A", "X")).unwrap_err();
        assert!(cod_err.to_string().contains("codomain"));
    }

    #[test]
    fn test_indexed_access() {
        let f = arrow("f", "A", "B");
        let g = arrow("g", "A", "B");
        let fam = ParallelMorphisms::new(vec![f.clone(), g.clone()]).unwrap();

        assert_eq!(fam.hom(0).unwrap(), &f);
        assert_eq!(fam.hom(1).unwrap(), &g);
        assert!(matches!(
            fam.hom(2),
            Err(DiagramError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_first_last() {
        let f = arrow("f", "A", "B");
        let g = arrow("g", "A", "B");
        let fam = ParallelMorphisms::new(vec![f.clone(), g.clone()]).unwrap();
        assert_eq!(fam.first(), &f);
        assert_eq!(fam.last(), &g);

        let single = ParallelMorphisms::new(vec![f.clone()]).unwrap();
        assert_eq!(single.first(), single.last());
    }

    #[test]
    fn test_from_parts_is_trusted() {
        let fam = ParallelMorphisms::from_parts(
            "X".to_string(),
            "Y".to_string(),
            vec![arrow("f", "A", "B")],
        )
        .unwrap();
        assert_eq!(fam.dom(), "X");
        assert_eq!(fam.codom(), "Y");
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let f = arrow("f", "A", "B");
        let g = arrow("g", "A", "B");
        let fg = ParallelMorphisms::new(vec![f.clone(), g.clone()]).unwrap();
        let gf = ParallelMorphisms::new(vec![g, f]).unwrap();
        assert_ne!(fg, gf);
    }
}
