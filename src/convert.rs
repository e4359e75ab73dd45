//! # Shape Converters - Embedding Fixed Shapes into Free Diagrams
//!
//! Every fixed shape has a canonical, deterministic embedding into a
//! [`FreeDiagram`]. The insertion orders below are part of the contract:
//! downstream (co)limit algorithms index into the result by position
//! ("the first two legs of a cospan-derived diagram are its original two
//! legs"), so vertex and edge ids must come out exactly as documented.
//!
//! - span: apex at vertex 0, then one vertex per leg codomain in leg
//!   order; one edge per leg out of vertex 0, in leg order
//! - cospan: one vertex per leg domain in leg order, then the base last;
//!   one edge per leg into the base, in leg order
//! - parallel morphisms: vertex 0 = dom, vertex 1 = cod; one edge
//!   `0 -> 1` per morphism, in original order
//!
//! The reverse direction is not provided: a diagram of arbitrary shape is
//! not in general recognizable as a span, cospan, or parallel family.
//!
//! All converters are pure (they take `&self` and build a fresh diagram)
//! and infallible: the shape's construction-time invariant is exactly the
//! diagram edge invariant, so insertion skips re-validation.

use crate::cat::Morphism;
use crate::cospan::Multicospan;
use crate::diagram::FreeDiagram;
use crate::parallel::ParallelMorphisms;
use crate::span::Multispan;

/// The protocol shared by all fixed diagram shapes: an ordered morphism
/// sequence and a canonical embedding into the general representation.
pub trait FixedShape<H: Morphism> {
    /// The morphisms of the shape, in construction order.
    fn homs(&self) -> &[H];

    /// Number of morphisms.
    fn len(&self) -> usize {
        self.homs().len()
    }

    /// Always false for the shapes in this crate (all are non-empty).
    fn is_empty(&self) -> bool {
        self.homs().is_empty()
    }

    /// Embed this shape into a freshly constructed [`FreeDiagram`].
    fn to_free_diagram(&self) -> FreeDiagram<H>;
}

impl<H: Morphism> Multispan<H> {
    /// Embed the span: apex at vertex 0, leg codomains at `1..=len`, one
    /// edge per leg from vertex 0, in leg order.
    ///
    /// The result has `1 + len` vertices and `len` edges; vertex 0 is the
    /// unique source of every edge.
    pub fn to_free_diagram(&self) -> FreeDiagram<H> {
        let mut diagram = FreeDiagram::new();
        let apex = diagram.add_vertex(self.apex().clone());
        let tails: Vec<_> = self
            .legs()
            .iter()
            .map(|leg| diagram.add_vertex(leg.cod()))
            .collect();
        for (leg, tail) in self.legs().iter().zip(tails) {
            diagram.insert_edge_unchecked(apex, tail, leg.clone());
        }
        diagram
    }
}

impl<H: Morphism> Multicospan<H> {
    /// Embed the cospan: leg domains at `0..len`, base last (highest
    /// index), one edge per leg into the base, in leg order.
    ///
    /// The base vertex is the unique target of every edge.
    pub fn to_free_diagram(&self) -> FreeDiagram<H> {
        let mut diagram = FreeDiagram::new();
        let feet: Vec<_> = self
            .legs()
            .iter()
            .map(|leg| diagram.add_vertex(leg.dom()))
            .collect();
        let base = diagram.add_vertex(self.base().clone());
        for (leg, foot) in self.legs().iter().zip(feet) {
            diagram.insert_edge_unchecked(foot, base, leg.clone());
        }
        diagram
    }
}

impl<H: Morphism> ParallelMorphisms<H> {
    /// Embed the family: vertex 0 = dom, vertex 1 = cod, one edge
    /// `0 -> 1` per morphism in original order.
    pub fn to_free_diagram(&self) -> FreeDiagram<H> {
        let mut diagram = FreeDiagram::new();
        let dom = diagram.add_vertex(self.dom().clone());
        let cod = diagram.add_vertex(self.codom().clone());
        for hom in self.homs() {
            diagram.insert_edge_unchecked(dom, cod, hom.clone());
        }
        diagram
    }
}

impl<H: Morphism> FixedShape<H> for Multispan<H> {
    fn homs(&self) -> &[H] {
        self.legs()
    }

    fn to_free_diagram(&self) -> FreeDiagram<H> {
        Multispan::to_free_diagram(self)
    }
}

impl<H: Morphism> FixedShape<H> for Multicospan<H> {
    fn homs(&self) -> &[H] {
        self.legs()
    }

    fn to_free_diagram(&self) -> FreeDiagram<H> {
        Multicospan::to_free_diagram(self)
    }
}

impl<H: Morphism> FixedShape<H> for ParallelMorphisms<H> {
    fn homs(&self) -> &[H] {
        ParallelMorphisms::homs(self)
    }

    fn to_free_diagram(&self) -> FreeDiagram<H> {
        ParallelMorphisms::to_free_diagram(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::Arrow;
    use crate::diagram::NodeIndex;

    fn arrow(name: &str, dom: &str, cod: &str) -> Arrow<String> {
        Arrow::new(name, dom.to_string(), cod.to_string())
    }

    #[test]
    fn test_span_embedding_order() {
        let f = arrow("f", "A", "B");
        let g = arrow("g", "A", "C");
        let span = Multispan::pair(f.clone(), g.clone()).unwrap();
        let diagram = span.to_free_diagram();

        assert_eq!(diagram.vertex_count(), 3);
        assert_eq!(diagram.edge_count(), 2);
        assert_eq!(diagram.ob(NodeIndex::new(0)).unwrap(), "A");
        assert_eq!(diagram.ob(NodeIndex::new(1)).unwrap(), "B");
        assert_eq!(diagram.ob(NodeIndex::new(2)).unwrap(), "C");
        assert!(diagram.validate().is_ok());
    }

    #[test]
    fn test_cospan_embedding_base_is_last() {
        let f = arrow("f", "B", "A");
        let g = arrow("g", "C", "A");
        let cospan = Multicospan::pair(f, g).unwrap();
        let diagram = cospan.to_free_diagram();

        assert_eq!(diagram.vertex_count(), 3);
        assert_eq!(diagram.ob(NodeIndex::new(0)).unwrap(), "B");
        assert_eq!(diagram.ob(NodeIndex::new(1)).unwrap(), "C");
        assert_eq!(diagram.ob(NodeIndex::new(2)).unwrap(), "A");
        assert!(diagram.validate().is_ok());
    }

    #[test]
    fn test_parallel_embedding_two_vertices() {
        let fam =
            ParallelMorphisms::new(vec![arrow("f", "A", "B"), arrow("g", "A", "B")]).unwrap();
        let diagram = fam.to_free_diagram();

        assert_eq!(diagram.vertex_count(), 2);
        assert_eq!(diagram.edge_count(), 2);
        assert!(diagram.validate().is_ok());
    }

    #[test]
    fn test_fixed_shape_trait_is_uniform() {
        let span = Multispan::pair(arrow("f", "A", "B"), arrow("g", "A", "C")).unwrap();
        let cospan = Multicospan::pair(arrow("f", "B", "A"), arrow("g", "C", "A")).unwrap();
        let fam =
            ParallelMorphisms::pair(arrow("f", "A", "B"), arrow("g", "A", "B")).unwrap();

        fn edge_count<H: crate::cat::Morphism>(shape: &dyn FixedShape<H>) -> usize {
            shape.to_free_diagram().edge_count()
        }

        assert_eq!(edge_count(&span), 2);
        assert_eq!(edge_count(&cospan), 2);
        assert_eq!(edge_count(&fam), 2);
        assert_eq!(FixedShape::len(&span), 2);
        assert!(!FixedShape::is_empty(&span));
    }
}
