use super::*;

/// A variable: a term that refers to a name in the environment.
///
/// The variable references the interned symbol but does not own the name
/// table it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable<S> {
    shape: Nullary,
    symbol: S,
}

impl<S> Variable<S> {
    pub(crate) fn new(symbol: S) -> Self {
        Self {
            shape: Nullary,
            symbol,
        }
    }

    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn shape(&self) -> &Nullary {
        &self.shape
    }
}

impl<S: AsRef<str>> Variable<S> {
    /// The spelling of the referenced symbol.
    pub fn name(&self) -> &str {
        self.symbol.as_ref()
    }
}

/// An abstraction (lambda expression) binding `var` in `term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abstraction {
    shape: Binary<VariableId, TermId>,
}

impl Abstraction {
    pub(crate) fn new(var: VariableId, term: TermId) -> Self {
        Self {
            shape: Binary::new(var, term),
        }
    }

    pub fn var(&self) -> VariableId {
        self.shape.first()
    }

    pub fn term(&self) -> TermId {
        self.shape.second()
    }

    pub fn shape(&self) -> &Binary<VariableId, TermId> {
        &self.shape
    }
}

/// An application of `func` to `arg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    shape: Binary<TermId, TermId>,
}

impl Application {
    pub(crate) fn new(func: TermId, arg: TermId) -> Self {
        Self {
            shape: Binary::new(func, arg),
        }
    }

    pub fn func(&self) -> TermId {
        self.shape.first()
    }

    pub fn arg(&self) -> TermId {
        self.shape.second()
    }

    pub fn shape(&self) -> &Binary<TermId, TermId> {
        &self.shape
    }
}
