use std::{fmt, sync::OnceLock};

use text_size::TextRange;

/// A type that can be located in source text.
pub trait Locatable {
    /// Returns the source range, or `None` while it is still unknown.
    fn range(&self) -> Option<TextRange>;
}

/// Source position of a node.
///
/// Unknown by default. It can be attached at most once, which lets a builder
/// create a node before its position is known.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Location(OnceLock<TextRange>);

impl Location {
    /// A location that is not known yet.
    pub const fn unknown() -> Self {
        Location(OnceLock::new())
    }

    pub fn is_known(&self) -> bool {
        self.0.get().is_some()
    }

    /// Attaches `range`, returning the existing range if one was already set.
    pub(crate) fn set(&self, range: TextRange) -> Result<(), TextRange> {
        self.0.set(range).map_err(|_| self.0.get().copied().unwrap_or(range))
    }
}

impl From<TextRange> for Location {
    fn from(value: TextRange) -> Self {
        Location(OnceLock::from(value))
    }
}

impl From<Option<TextRange>> for Location {
    fn from(value: Option<TextRange>) -> Self {
        value.map_or_else(Location::unknown, Location::from)
    }
}

impl Locatable for Location {
    fn range(&self) -> Option<TextRange> {
        self.0.get().copied()
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(range) => write!(f, "{range:?}"),
            None => f.write_str("unknown"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
