//! # Free Diagrams - The General Shape
//!
//! A [`FreeDiagram`] is an attributed directed multigraph: vertices carry
//! objects, edges carry morphisms, and every edge must satisfy
//!
//! ```text
//!     hom(e).dom() == ob(src(e))   and   hom(e).cod() == ob(tgt(e))
//! ```
//!
//! This is the uniform representation that generic limit/colimit
//! algorithms consume; the fixed shapes in [`crate::span`],
//! [`crate::cospan`] and [`crate::parallel`] all embed into it (see
//! [`crate::convert`]).
//!
//! ## Storage
//!
//! The backing structure is a [`petgraph`] [`DiGraph`] whose node and
//! edge weights are the attribute columns. Under append-only use,
//! [`NodeIndex`]/[`EdgeIndex`] are dense ids assigned contiguously from
//! zero in insertion order, so insertion order is observable through ids.
//! There is no deletion interface: diagrams are built once and then only
//! read.

use std::fmt;

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

pub use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::cat::Morphism;
use crate::error::DiagramError;

/// A free diagram: objects on vertices, morphisms on edges.
///
/// # Example
///
/// ```
/// use free_diagrams::{Arrow, FreeDiagram};
///
/// let mut diagram = FreeDiagram::new();
/// let a = diagram.add_vertex("A");
/// let b = diagram.add_vertex("B");
/// let e = diagram.add_edge(a, b, Arrow::new("f", "A", "B")).unwrap();
///
/// assert_eq!(diagram.ob(a).unwrap(), &"A");
/// assert_eq!(diagram.hom(e).unwrap().name, "f");
/// ```
#[derive(Debug, Clone)]
pub struct FreeDiagram<H: Morphism> {
    pub(crate) graph: DiGraph<H::Ob, H>,
}

impl<H: Morphism> FreeDiagram<H> {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Bulk constructor from an object list and `(source_index,
    /// target_index, morphism)` triples.
    ///
    /// The whole edge list is validated before anything is inserted:
    /// index bounds ([`DiagramError::IndexOutOfRange`]) and the edge
    /// invariant ([`DiagramError::ShapeMismatch`], naming the first
    /// offending triple). On success, all vertices are inserted in input
    /// order, then all edges, so ids reproduce the input positions.
    pub fn from_parts(
        objects: Vec<H::Ob>,
        edges: Vec<(usize, usize, H)>,
    ) -> Result<Self, DiagramError> {
        let len = objects.len();
        for (i, (src, tgt, hom)) in edges.iter().enumerate() {
            let src_ob = objects.get(*src).ok_or(DiagramError::IndexOutOfRange {
                index: *src,
                len,
            })?;
            let tgt_ob = objects.get(*tgt).ok_or(DiagramError::IndexOutOfRange {
                index: *tgt,
                len,
            })?;
            if hom.dom() != *src_ob {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("edge triple {i} source"),
                    expected: format!("{src_ob:?}"),
                    got: format!("{:?}", hom.dom()),
                });
            }
            if hom.cod() != *tgt_ob {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("edge triple {i} target"),
                    expected: format!("{tgt_ob:?}"),
                    got: format!("{:?}", hom.cod()),
                });
            }
        }

        let mut diagram = Self::new();
        let vertices = diagram.add_vertices(objects);
        for (src, tgt, hom) in edges {
            diagram.insert_edge_unchecked(vertices[src], vertices[tgt], hom);
        }
        Ok(diagram)
    }

    /// Add one vertex carrying an object attribute; returns its id.
    pub fn add_vertex(&mut self, ob: H::Ob) -> NodeIndex {
        self.graph.add_node(ob)
    }

    /// Add many vertices at once; the returned ids are contiguous and
    /// insertion-ordered.
    pub fn add_vertices<I>(&mut self, obs: I) -> Vec<NodeIndex>
    where
        I: IntoIterator<Item = H::Ob>,
    {
        obs.into_iter().map(|ob| self.graph.add_node(ob)).collect()
    }

    /// Add one edge carrying a morphism attribute; returns its id.
    ///
    /// Both endpoints must already exist
    /// ([`DiagramError::MissingAttribute`] otherwise), and the morphism's
    /// domain/codomain must equal the endpoint objects
    /// ([`DiagramError::ShapeMismatch`]).
    pub fn add_edge(
        &mut self,
        src: NodeIndex,
        tgt: NodeIndex,
        hom: H,
    ) -> Result<EdgeIndex, DiagramError> {
        self.check_edge(src, tgt, &hom)?;
        Ok(self.graph.add_edge(src, tgt, hom))
    }

    /// Add many edges at once from parallel source/target/morphism
    /// sequences.
    ///
    /// Fails with [`DiagramError::ShapeMismatch`] if the three sequences
    /// differ in length. All edges are validated before any is inserted,
    /// so a failure leaves the diagram unchanged.
    pub fn add_edges(
        &mut self,
        srcs: &[NodeIndex],
        tgts: &[NodeIndex],
        homs: Vec<H>,
    ) -> Result<Vec<EdgeIndex>, DiagramError> {
        if srcs.len() != tgts.len() || srcs.len() != homs.len() {
            return Err(DiagramError::ShapeMismatch {
                at: "edge lists".to_string(),
                expected: "three sequences of equal length".to_string(),
                got: format!(
                    "{} sources, {} targets, {} morphisms",
                    srcs.len(),
                    tgts.len(),
                    homs.len()
                ),
            });
        }
        for ((src, tgt), hom) in srcs.iter().zip(tgts).zip(&homs) {
            self.check_edge(*src, *tgt, hom)?;
        }
        Ok(srcs
            .iter()
            .zip(tgts)
            .zip(homs)
            .map(|((src, tgt), hom)| self.insert_edge_unchecked(*src, *tgt, hom))
            .collect())
    }

    /// Check the edge invariant for a prospective edge without inserting
    /// it.
    fn check_edge(&self, src: NodeIndex, tgt: NodeIndex, hom: &H) -> Result<(), DiagramError> {
        let src_ob = self.ob(src)?;
        if hom.dom() != *src_ob {
            return Err(DiagramError::ShapeMismatch {
                at: format!("edge source (vertex {})", src.index()),
                expected: format!("{src_ob:?}"),
                got: format!("{:?}", hom.dom()),
            });
        }
        let tgt_ob = self.ob(tgt)?;
        if hom.cod() != *tgt_ob {
            return Err(DiagramError::ShapeMismatch {
                at: format!("edge target (vertex {})", tgt.index()),
                expected: format!("{tgt_ob:?}"),
                got: format!("{:?}", hom.cod()),
            });
        }
        Ok(())
    }

    /// Insert an edge without re-validating the edge invariant.
    ///
    /// Used by the shape converters, whose inputs established the
    /// invariant at their own construction time.
    pub(crate) fn insert_edge_unchecked(
        &mut self,
        src: NodeIndex,
        tgt: NodeIndex,
        hom: H,
    ) -> EdgeIndex {
        self.graph.add_edge(src, tgt, hom)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the given vertex id is present.
    pub fn has_vertex(&self, v: NodeIndex) -> bool {
        self.graph.node_weight(v).is_some()
    }

    /// Whether the given edge id is present.
    pub fn has_edge(&self, e: EdgeIndex) -> bool {
        self.graph.edge_weight(e).is_some()
    }

    /// The object attribute of a vertex.
    ///
    /// Fails with [`DiagramError::MissingAttribute`] if the id has no
    /// bound object; an unset attribute is surfaced immediately, never
    /// coerced to a default.
    pub fn ob(&self, v: NodeIndex) -> Result<&H::Ob, DiagramError> {
        self.graph
            .node_weight(v)
            .ok_or(DiagramError::MissingAttribute {
                kind: "vertex",
                id: v.index(),
            })
    }

    /// The morphism attribute of an edge.
    ///
    /// Fails with [`DiagramError::MissingAttribute`] if the id has no
    /// bound morphism.
    pub fn hom(&self, e: EdgeIndex) -> Result<&H, DiagramError> {
        self.graph
            .edge_weight(e)
            .ok_or(DiagramError::MissingAttribute {
                kind: "edge",
                id: e.index(),
            })
    }

    /// The source vertex of an edge.
    ///
    /// Fails with [`DiagramError::IndexOutOfRange`] for an absent edge id.
    pub fn src(&self, e: EdgeIndex) -> Result<NodeIndex, DiagramError> {
        self.graph
            .edge_endpoints(e)
            .map(|(s, _)| s)
            .ok_or(DiagramError::IndexOutOfRange {
                index: e.index(),
                len: self.graph.edge_count(),
            })
    }

    /// The target vertex of an edge.
    ///
    /// Fails with [`DiagramError::IndexOutOfRange`] for an absent edge id.
    pub fn tgt(&self, e: EdgeIndex) -> Result<NodeIndex, DiagramError> {
        self.graph
            .edge_endpoints(e)
            .map(|(_, t)| t)
            .ok_or(DiagramError::IndexOutOfRange {
                index: e.index(),
                len: self.graph.edge_count(),
            })
    }

    /// Read-only access to the backing graph, for consumers that need
    /// indexed traversal (e.g. outgoing-edge walks).
    pub fn graph(&self) -> &DiGraph<H::Ob, H> {
        &self.graph
    }

    /// Re-check the edge invariant across the whole diagram.
    ///
    /// Construction through this crate's interfaces already enforces the
    /// invariant; `validate` exists for diagrams assembled by untrusted
    /// code paths.
    pub fn validate(&self) -> Result<(), DiagramError> {
        for edge in self.graph.edge_references() {
            let hom = edge.weight();
            let src_ob = self.ob(edge.source())?;
            if hom.dom() != *src_ob {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("edge {} source", edge.id().index()),
                    expected: format!("{src_ob:?}"),
                    got: format!("{:?}", hom.dom()),
                });
            }
            let tgt_ob = self.ob(edge.target())?;
            if hom.cod() != *tgt_ob {
                return Err(DiagramError::ShapeMismatch {
                    at: format!("edge {} target", edge.id().index()),
                    expected: format!("{tgt_ob:?}"),
                    got: format!("{:?}", hom.cod()),
                });
            }
        }
        Ok(())
    }
}

impl<H: Morphism> Default for FreeDiagram<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same attribute value and same endpoints at every
/// vertex/edge id. With contiguous insertion-ordered ids this is exactly
/// "built from the same input in the same order".
impl<H: Morphism> PartialEq for FreeDiagram<H> {
    fn eq(&self, other: &Self) -> bool {
        if self.vertex_count() != other.vertex_count() || self.edge_count() != other.edge_count()
        {
            return false;
        }
        for v in self.graph.node_indices() {
            if self.graph.node_weight(v) != other.graph.node_weight(v) {
                return false;
            }
        }
        for e in self.graph.edge_indices() {
            if self.graph.edge_weight(e) != other.graph.edge_weight(e)
                || self.graph.edge_endpoints(e) != other.graph.edge_endpoints(e)
            {
                return false;
            }
        }
        true
    }
}

impl<H: Morphism> fmt::Display for FreeDiagram<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FreeDiagram({} vertices, {} edges)",
            self.vertex_count(),
            self.edge_count()
        )
    }
}
