use super::*;

/// The root AST node: an ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    shape: Multi<StatementId>,
}

impl Program {
    pub(crate) fn new(shape: Multi<StatementId>) -> Self {
        Self { shape }
    }

    pub(crate) fn add_statement(&mut self, stmt: StatementId) {
        self.shape.add_node(stmt);
    }

    /// The statements, in the order they were added.
    pub fn statements(
        &self,
    ) -> impl DoubleEndedIterator<Item = StatementId> + ExactSizeIterator + '_ {
        self.shape.iter()
    }

    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn shape(&self) -> &Multi<StatementId> {
        &self.shape
    }
}
