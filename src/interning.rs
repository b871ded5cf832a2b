//! The string interner.
//!
//! Names referenced by [`Variable`](crate::ast::Variable) nodes are interned
//! outside of the tree. The tree is generic over the interned string type and
//! only needs a cheap, comparable handle that can give back its spelling.

use std::{collections::HashSet, rc::Rc};

use rustc_hash::FxBuildHasher;

/// The string interner.
pub trait StringInterner {
    type String: AsRef<str> + Clone;

    fn intern(&mut self, s: &str) -> Self::String;
}

impl<S: StringInterner> StringInterner for &mut S {
    type String = S::String;

    fn intern(&mut self, s: &str) -> Self::String {
        S::intern(self, s)
    }
}

/// A basic string interner.
///
/// Equal spellings always map to the same allocation, so two handles returned
/// by the same interner are identical iff `Rc::ptr_eq` holds.
#[derive(Debug, Default)]
pub struct BasicInterner(HashSet<Rc<str>, FxBuildHasher>);

impl BasicInterner {
    /// Returns the number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl StringInterner for BasicInterner {
    type String = Rc<str>;

    fn intern(&mut self, s: &str) -> Self::String {
        if let Some(s) = self.0.get(s) {
            s.clone()
        } else {
            let s = Rc::from(Box::from(s));
            self.0.insert(Rc::clone(&s));
            s
        }
    }
}
