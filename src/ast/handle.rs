//! Typed node handles.
//!
//! A handle is a [`NodeId`] that is known to point at a node of a given
//! category. Handles are only produced by the [`Ast`](super::Ast) builder and
//! by the checked [`Ast::cast`](super::Ast::cast), so a handle taken from a
//! tree always names a node of the right kind in that tree.

use std::fmt;

use crate::index::NodeId;

use super::Kind;

pub(super) mod sealed {
    use crate::index::NodeId;

    pub trait Sealed {
        fn from_node(node: NodeId) -> Self;
    }
}

/// A node handle narrowed to one language category.
pub trait Handle: sealed::Sealed + Copy + Into<NodeId> {
    /// Human readable name of the category, used in error messages.
    const EXPECTED: &'static str;

    /// Returns `true` if a node of `kind` belongs to this category.
    fn accepts(kind: Kind) -> bool;

    fn node(self) -> NodeId;
}

impl sealed::Sealed for NodeId {
    fn from_node(node: NodeId) -> Self {
        node
    }
}

impl Handle for NodeId {
    const EXPECTED: &'static str = "node";

    fn accepts(_kind: Kind) -> bool {
        true
    }

    fn node(self) -> NodeId {
        self
    }
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $expected:literal, |$kind:ident| $accepts:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(NodeId);

        impl sealed::Sealed for $name {
            fn from_node(node: NodeId) -> Self {
                $name(node)
            }
        }

        impl Handle for $name {
            const EXPECTED: &'static str = $expected;

            fn accepts($kind: Kind) -> bool {
                $accepts
            }

            fn node(self) -> NodeId {
                self.0
            }
        }

        impl From<$name> for NodeId {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $expected, self.0)
            }
        }
    };
}

macro_rules! impl_upcast {
    ($($from:ident),+ => $to:ident) => {
        $(
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    $to(value.0)
                }
            }
        )+
    };
}

define_handle!(
    /// The root of a translation unit.
    ProgramId,
    "program",
    |kind| kind == Kind::Program
);
define_handle!(
    /// Any statement.
    StatementId,
    "statement",
    |kind| kind.is_statement()
);
define_handle!(DefinitionId, "definition", |kind| kind == Kind::Definition);
define_handle!(EvaluationId, "evaluation", |kind| kind == Kind::Evaluation);
define_handle!(
    /// Any term.
    TermId,
    "term",
    |kind| kind.is_term()
);
define_handle!(VariableId, "variable", |kind| kind == Kind::Variable);
define_handle!(AbstractionId, "abstraction", |kind| kind == Kind::Abstraction);
define_handle!(ApplicationId, "application", |kind| kind == Kind::Application);

impl_upcast!(DefinitionId, EvaluationId => StatementId);
impl_upcast!(VariableId, AbstractionId, ApplicationId => TermId);
