//! # Morphisms - The Category Boundary
//!
//! Every shape in this crate is generic over a morphism type from some
//! ambient category. The category itself stays external; all a shape
//! constructor ever asks of a morphism is its domain, its codomain, and
//! equality. The [`Morphism`] trait captures exactly that boundary.
//!
//! Two sample morphism types are provided for tests, doctests, and toy
//! categories:
//!
//! - [`Arrow`]: a named arrow between objects of any equatable type
//! - [`FinFun`]: a function between finite sets `{0..n}`
//!
//! Downstream crates implement [`Morphism`] for their own morphism types
//! without this crate knowing anything about composition or identities.

use std::fmt;

use crate::error::DiagramError;

/// The capability every diagram shape requires of its morphism type:
/// domain, codomain, and equality (with equatable objects).
///
/// Implementations return objects by value; object types are expected to
/// be cheap to clone (ids, names, small descriptors).
pub trait Morphism: Clone + PartialEq + fmt::Debug {
    /// The object type of the ambient category.
    type Ob: Clone + PartialEq + fmt::Debug;

    /// The domain (source object) of this morphism.
    fn dom(&self) -> Self::Ob;

    /// The codomain (target object) of this morphism.
    fn cod(&self) -> Self::Ob;
}

/// A named arrow `name: dom → cod` between objects of type `O`.
///
/// The simplest possible [`Morphism`]: it carries its endpoints
/// explicitly and has no notion of application or composition.
///
/// # Example
///
/// ```
/// use free_diagrams::{Arrow, Morphism};
///
/// let f = Arrow::new("f", "A", "B");
/// assert_eq!(f.dom(), "A");
/// assert_eq!(f.cod(), "B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrow<O> {
    pub name: String,
    pub dom: O,
    pub cod: O,
}

impl<O> Arrow<O> {
    /// Create a named arrow with the given endpoints.
    pub fn new(name: impl Into<String>, dom: O, cod: O) -> Self {
        Self {
            name: name.into(),
            dom,
            cod,
        }
    }
}

impl<O: Clone + PartialEq + fmt::Debug> Morphism for Arrow<O> {
    type Ob = O;

    fn dom(&self) -> O {
        self.dom.clone()
    }

    fn cod(&self) -> O {
        self.cod.clone()
    }
}

impl<O: fmt::Display> fmt::Display for Arrow<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.name, self.dom, self.cod)
    }
}

/// A total function between finite sets, `{0..table.len()} → {0..target}`.
///
/// Objects are cardinalities (`Ob = usize`): `dom` is the table length and
/// `cod` is `target`. The constructor rejects any table entry outside the
/// target set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FinFun {
    table: Vec<usize>,
    target: usize,
}

impl FinFun {
    /// Create a finite function from its value table and target
    /// cardinality.
    ///
    /// Fails with [`DiagramError::IndexOutOfRange`] if any entry is
    /// `>= target`.
    pub fn new(table: Vec<usize>, target: usize) -> Result<Self, DiagramError> {
        for &value in &table {
            if value >= target {
                return Err(DiagramError::IndexOutOfRange {
                    index: value,
                    len: target,
                });
            }
        }
        Ok(Self { table, target })
    }

    /// The identity function on `{0..n}`.
    pub fn identity(n: usize) -> Self {
        Self {
            table: (0..n).collect(),
            target: n,
        }
    }

    /// The value table.
    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Apply the function to an element of its domain.
    pub fn apply(&self, x: usize) -> Result<usize, DiagramError> {
        self.table
            .get(x)
            .copied()
            .ok_or(DiagramError::IndexOutOfRange {
                index: x,
                len: self.table.len(),
            })
    }
}

impl Morphism for FinFun {
    type Ob = usize;

    fn dom(&self) -> usize {
        self.table.len()
    }

    fn cod(&self) -> usize {
        self.target
    }
}

impl fmt::Display for FinFun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {} → {}", self.table, self.dom(), self.cod())
    }
}
