use super::*;

/// A definition binding `var` to the term `def` for the rest of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    shape: Binary<VariableId, TermId>,
}

impl Definition {
    pub(crate) fn new(var: VariableId, def: TermId) -> Self {
        Self {
            shape: Binary::new(var, def),
        }
    }

    pub fn var(&self) -> VariableId {
        self.shape.first()
    }

    pub fn def(&self) -> TermId {
        self.shape.second()
    }

    pub fn shape(&self) -> &Binary<VariableId, TermId> {
        &self.shape
    }
}

/// A request to evaluate `term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    shape: Unary<TermId>,
}

impl Evaluation {
    pub(crate) fn new(term: TermId) -> Self {
        Self {
            shape: Unary::new(term),
        }
    }

    pub fn term(&self) -> TermId {
        self.shape.child()
    }

    pub fn shape(&self) -> &Unary<TermId> {
        &self.shape
    }
}
