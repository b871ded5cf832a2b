//! The lambda calculus Abstract Syntax Tree (AST).
//!
//! ```txt
//!            Node (kind, location, children)
//!             |
//!    +--------+-----------+
//!    |        |           |
//! Program  Statement     Term
//!             |           |
//!     +-------+--+    +---+---------+------------+
//!     |          |    |             |            |
//! Definition Evaluation Variable Abstraction Application
//! ```
//!
//! Nodes live in an [`Ast`] arena and refer to their children by [`NodeId`].
//! The concrete node types couple one language category with one [arity
//! shape](shape), and the typed [handles](Handle) keep each child slot
//! restricted to the category it expects.
//!
//! Adding a node kind means extending [`Kind`], [`NodeData`], the handles,
//! [`Ast::accept`] and [`Visitor`] together.

mod handle;
mod program;
pub mod shape;
mod stmt;
mod term;
mod tree;
mod visit;

use std::fmt;

use text_size::TextRange;

pub use handle::*;
pub use program::*;
pub use shape::{Arity, Binary, Multi, Nullary, Shape, Unary};
pub use stmt::*;
pub use term::*;
pub use tree::*;
pub use visit::*;

use crate::{
    index::NodeId,
    location::{Locatable, Location},
};

/// The kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // Misc
    Program,

    // Terms
    Variable,
    Abstraction,
    Application,

    // Statements
    Definition,
    Evaluation,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Program,
        Kind::Variable,
        Kind::Abstraction,
        Kind::Application,
        Kind::Definition,
        Kind::Evaluation,
    ];

    pub fn arity(self) -> Arity {
        match self {
            Kind::Program => Arity::Multi,
            Kind::Variable => Arity::Nullary,
            Kind::Abstraction | Kind::Application | Kind::Definition => Arity::Binary,
            Kind::Evaluation => Arity::Unary,
        }
    }

    pub fn is_term(self) -> bool {
        matches!(self, Kind::Variable | Kind::Abstraction | Kind::Application)
    }

    pub fn is_statement(self) -> bool {
        matches!(self, Kind::Definition | Kind::Evaluation)
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Program => "program",
            Kind::Variable => "variable",
            Kind::Abstraction => "abstraction",
            Kind::Application => "application",
            Kind::Definition => "definition",
            Kind::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of a node, one variant per [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData<S> {
    Program(Program),
    Variable(Variable<S>),
    Abstraction(Abstraction),
    Application(Application),
    Definition(Definition),
    Evaluation(Evaluation),
}

impl<S> NodeData<S> {
    pub fn kind(&self) -> Kind {
        match self {
            NodeData::Program(_) => Kind::Program,
            NodeData::Variable(_) => Kind::Variable,
            NodeData::Abstraction(_) => Kind::Abstraction,
            NodeData::Application(_) => Kind::Application,
            NodeData::Definition(_) => Kind::Definition,
            NodeData::Evaluation(_) => Kind::Evaluation,
        }
    }

    /// The direct children, in order.
    pub fn children(&self) -> &[NodeId] {
        match self {
            NodeData::Program(program) => program.shape().nodes(),
            NodeData::Variable(variable) => variable.shape().nodes(),
            NodeData::Abstraction(abstraction) => abstraction.shape().nodes(),
            NodeData::Application(application) => application.shape().nodes(),
            NodeData::Definition(definition) => definition.shape().nodes(),
            NodeData::Evaluation(evaluation) => evaluation.shape().nodes(),
        }
    }
}

/// A node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    data: NodeData<S>,
    location: Location,
}

impl<S> Node<S> {
    pub(crate) fn new(data: NodeData<S>) -> Self {
        Self {
            data,
            location: Location::unknown(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    pub fn arity(&self) -> Arity {
        self.kind().arity()
    }

    pub fn data(&self) -> &NodeData<S> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut NodeData<S> {
        &mut self.data
    }

    pub fn children(&self) -> &[NodeId] {
        self.data.children()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl<S> Locatable for Node<S> {
    fn range(&self) -> Option<TextRange> {
        self.location.range()
    }
}
