use crate::index::NodeId;

use super::*;

/// Traverse the syntax tree.
///
/// [`Ast::accept`] calls the most specific method for a node's kind. By
/// default a kind delegates to its category (`visit_definition` to
/// `visit_statement`, `visit_variable` to `visit_term`, ...), categories
/// delegate to [`visit_node`](Visitor::visit_node), and `visit_node` visits
/// every child in order. An overriding method replaces that behavior for its
/// node only; call [`walk_node`] from it to keep descending.
///
/// ```rust
/// use lambda_syntax::{
///     ast::{Ast, VariableId, Visitor},
///     interning::{BasicInterner, StringInterner},
/// };
///
/// #[derive(Default)]
/// struct Names(Vec<String>);
///
/// impl<S: AsRef<str>> Visitor<S> for Names {
///     fn visit_variable(&mut self, ast: &Ast<S>, var: VariableId) {
///         self.0.push(ast.variable(var).name().to_owned());
///     }
/// }
///
/// let mut interner = BasicInterner::default();
/// let mut ast = Ast::new();
/// let x = ast.make_variable(interner.intern("x"));
/// let y = ast.make_variable(interner.intern("y"));
/// let app = ast.make_application(x.into(), y.into()).unwrap();
///
/// let mut names = Names::default();
/// ast.accept(app, &mut names);
/// assert_eq!(names.0, ["x", "y"]);
/// ```
pub trait Visitor<S> {
    fn visit_node(&mut self, ast: &Ast<S>, node: NodeId) {
        walk_node(self, ast, node);
    }

    fn visit_program(&mut self, ast: &Ast<S>, program: ProgramId) {
        self.visit_node(ast, program.node());
    }

    fn visit_statement(&mut self, ast: &Ast<S>, stmt: StatementId) {
        self.visit_node(ast, stmt.node());
    }

    fn visit_definition(&mut self, ast: &Ast<S>, def: DefinitionId) {
        self.visit_statement(ast, def.into());
    }

    fn visit_evaluation(&mut self, ast: &Ast<S>, eval: EvaluationId) {
        self.visit_statement(ast, eval.into());
    }

    fn visit_term(&mut self, ast: &Ast<S>, term: TermId) {
        self.visit_node(ast, term.node());
    }

    fn visit_variable(&mut self, ast: &Ast<S>, var: VariableId) {
        self.visit_term(ast, var.into());
    }

    fn visit_abstraction(&mut self, ast: &Ast<S>, abs: AbstractionId) {
        self.visit_term(ast, abs.into());
    }

    fn visit_application(&mut self, ast: &Ast<S>, app: ApplicationId) {
        self.visit_term(ast, app.into());
    }
}

/// Dispatches every direct child of `node` to `visitor`, first to last.
pub fn walk_node<S, V: Visitor<S> + ?Sized>(
    visitor: &mut V,
    ast: &Ast<S>,
    node: impl Into<NodeId>,
) {
    let node: NodeId = node.into();
    for &child in ast.children(node) {
        ast.accept(child, visitor);
    }
}
