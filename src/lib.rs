//! A reusable syntax tree for small expression languages, instantiated for the
//! untyped lambda calculus.
//!
//! ```txt
//!          +---------+   make_*   +-----+   accept   +---------+
//! builder  | symbols | ---------> | Ast | ---------> | Visitor |
//!          +---------+            +-----+            +---------+
//!                                    |
//!                         cast / is, typed accessors
//! ```
//!
//! Scanning, parsing and evaluation live outside of this crate: they produce
//! or consume [`Ast`]s through the builder and visitor interfaces.
//!
//! # Examples
//!
//! ```rust
//! use lambda_syntax::{
//!     ast::{Ast, Kind, TermId, VariableId},
//!     interning::{BasicInterner, StringInterner},
//! };
//!
//! let mut interner = BasicInterner::default();
//! let mut ast = Ast::new();
//!
//! // (\x. x) y
//! let x = ast.make_variable(interner.intern("x"));
//! let body = ast.make_variable(interner.intern("x"));
//! let id = ast.make_abstraction(x, body.into()).unwrap();
//! let y = ast.make_variable(interner.intern("y"));
//! let app = ast.make_application(id.into(), y.into()).unwrap();
//! let eval = ast.make_evaluation(app.into()).unwrap();
//! let program = ast.make_program_from([eval]).unwrap();
//!
//! assert_eq!(ast.program(program).len(), 1);
//! assert_eq!(ast.kind(ast.application(app).func()), Kind::Abstraction);
//! assert!(ast.is::<TermId>(app));
//! assert!(ast.cast::<VariableId>(app).is_none());
//! ```

// Pedantic warnings
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown, clippy::missing_errors_doc)]
// Restriction warnings
#![warn(clippy::restriction)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::implicit_return,
    clippy::min_ident_chars,
    clippy::missing_inline_in_public_items,
    clippy::missing_trait_methods,
    clippy::mod_module_files,
    clippy::module_name_repetitions,
    clippy::pattern_type_mismatch,
    clippy::pub_use,
    clippy::pub_with_shorthand,
    clippy::question_mark_used,
    clippy::redundant_test_prefix,
    clippy::semicolon_outside_block,
    clippy::shadow_reuse,
    clippy::single_call_fn,
    clippy::single_char_lifetime_names,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::unused_trait_names
)]
#![allow(
    clippy::allow_attributes_without_reason,
    clippy::missing_assert_message,
    clippy::missing_docs_in_private_items
)]
// Accessors assume a well-formed tree.
#![allow(
    clippy::indexing_slicing,
    clippy::panic,
    clippy::unreachable,
    clippy::unwrap_used
)]

pub mod ast;
pub mod error;
pub mod index;
pub mod interning;
pub mod location;

pub use ast::Ast;
pub use error::AstError;
