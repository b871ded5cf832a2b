//! Arity shapes.
//!
//! Every node stores its children in one of four shapes. Fixed shapes keep
//! their children inline, so "an abstraction always has a variable and a body"
//! holds by construction instead of being checked while walking the tree.

use std::{fmt, marker::PhantomData};

use crate::index::NodeId;

use super::{handle::sealed::Sealed, Handle};

/// How many children a node has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// No children.
    Nullary,
    /// Exactly one child.
    Unary,
    /// Exactly two children.
    Binary,
    /// A growable list of children of one category.
    Multi,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Nullary => write!(f, "nullary"),
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
            Arity::Multi => write!(f, "multi"),
        }
    }
}

/// Uniform access to the children of a shape.
pub trait Shape {
    const ARITY: Arity;

    /// The direct children, in order.
    fn nodes(&self) -> &[NodeId];
}

/// A shape without children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nullary;

impl Shape for Nullary {
    const ARITY: Arity = Arity::Nullary;

    fn nodes(&self) -> &[NodeId] {
        &[]
    }
}

/// A shape with a single child of category `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary<T> {
    nodes: [NodeId; 1],
    marker: PhantomData<T>,
}

impl<T: Handle> Unary<T> {
    pub(crate) fn new(child: T) -> Self {
        Self {
            nodes: [child.node()],
            marker: PhantomData,
        }
    }

    pub fn child(&self) -> T {
        T::from_node(self.nodes[0])
    }

    pub fn first(&self) -> T {
        self.child()
    }
}

impl<T> Shape for Unary<T> {
    const ARITY: Arity = Arity::Unary;

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

/// A shape with two children, of categories `L` and `R`.
///
/// `left`/`right` are the operator-style names of `first`/`second`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary<L, R> {
    nodes: [NodeId; 2],
    marker: PhantomData<(L, R)>,
}

impl<L: Handle, R: Handle> Binary<L, R> {
    pub(crate) fn new(left: L, right: R) -> Self {
        Self {
            nodes: [left.node(), right.node()],
            marker: PhantomData,
        }
    }

    pub fn first(&self) -> L {
        L::from_node(self.nodes[0])
    }

    pub fn second(&self) -> R {
        R::from_node(self.nodes[1])
    }

    pub fn left(&self) -> L {
        self.first()
    }

    pub fn right(&self) -> R {
        self.second()
    }
}

impl<L, R> Shape for Binary<L, R> {
    const ARITY: Arity = Arity::Binary;

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

/// An ordered list of children, all of category `T`.
///
/// The list only ever grows at the end: a child keeps its position once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multi<T> {
    nodes: Vec<NodeId>,
    marker: PhantomData<T>,
}

impl<T> Default for Multi<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            marker: PhantomData,
        }
    }
}

impl<T: Handle> Multi<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            marker: PhantomData,
        }
    }

    pub(crate) fn add_node(&mut self, node: T) {
        self.nodes.push(node.node());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.nodes.get(index).copied().map(T::from_node)
    }

    /// The children typed as `T`, in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.nodes.iter().copied().map(T::from_node)
    }
}

impl<T> Shape for Multi<T> {
    const ARITY: Arity = Arity::Multi;

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}
