//! The syntax tree error type.

use text_size::TextRange;
use thiserror::Error;

use crate::{ast::Kind, index::NodeId};

/// A rejected construction or edit of an [`Ast`](crate::ast::Ast).
///
/// These are defects in the code building the tree. They are reported at the
/// point of construction so that an ill-formed tree never exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("node {node} does not belong to this tree")]
    UnknownNode { node: NodeId },
    #[error("node {node} is a {found}, expected {expected}")]
    KindMismatch {
        node: NodeId,
        expected: &'static str,
        found: Kind,
    },
    #[error("node {node} is already a child of {parent}")]
    AlreadyOwned { node: NodeId, parent: NodeId },
    #[error("location of {node} is already set to {range:?}")]
    LocationAlreadySet { node: NodeId, range: TextRange },
}

impl AstError {
    /// The node the error is about.
    pub fn node(&self) -> NodeId {
        match self {
            AstError::UnknownNode { node }
            | AstError::KindMismatch { node, .. }
            | AstError::AlreadyOwned { node, .. }
            | AstError::LocationAlreadySet { node, .. } => *node,
        }
    }
}
