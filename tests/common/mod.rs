#![allow(dead_code)]

use std::{collections::HashMap, rc::Rc};

use lambda_syntax::{
    ast::{
        AbstractionId, ApplicationId, Ast, DefinitionId, EvaluationId, Kind, ProgramId,
        VariableId, Visitor, walk_node,
    },
    index::NodeId,
    interning::{BasicInterner, StringInterner},
};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Builder {
    pub interner: BasicInterner,
    pub ast: Ast<Rc<str>>,
}

impl Builder {
    pub fn new() -> Self {
        init();
        Self {
            interner: BasicInterner::default(),
            ast: Ast::new(),
        }
    }

    pub fn var(&mut self, name: &str) -> VariableId {
        let symbol = self.interner.intern(name);
        self.ast.make_variable(symbol)
    }
}

/// `(\x. x) x` evaluated in a one-statement program.
pub fn identity_program(b: &mut Builder) -> ProgramId {
    let x = b.var("x");
    let body = b.var("x");
    let abs = b.ast.make_abstraction(x, body.into()).unwrap();
    let arg = b.var("x");
    let app = b.ast.make_application(abs.into(), arg.into()).unwrap();
    let eval = b.ast.make_evaluation(app.into()).unwrap();
    let program = b.ast.make_program();
    b.ast.add_statement(program, eval).unwrap();
    program
}

/// Counts every node by the visit method that received it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KindCounter {
    pub counts: HashMap<Kind, usize>,
}

impl KindCounter {
    pub fn count(&self, kind: Kind) -> usize {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    fn bump<S>(&mut self, ast: &Ast<S>, node: impl Into<NodeId>, kind: Kind) {
        let node = node.into();
        *self.counts.entry(kind).or_default() += 1;
        walk_node(self, ast, node);
    }
}

impl<S> Visitor<S> for KindCounter {
    fn visit_program(&mut self, ast: &Ast<S>, program: ProgramId) {
        self.bump(ast, program, Kind::Program);
    }

    fn visit_definition(&mut self, ast: &Ast<S>, def: DefinitionId) {
        self.bump(ast, def, Kind::Definition);
    }

    fn visit_evaluation(&mut self, ast: &Ast<S>, eval: EvaluationId) {
        self.bump(ast, eval, Kind::Evaluation);
    }

    fn visit_variable(&mut self, ast: &Ast<S>, var: VariableId) {
        self.bump(ast, var, Kind::Variable);
    }

    fn visit_abstraction(&mut self, ast: &Ast<S>, abs: AbstractionId) {
        self.bump(ast, abs, Kind::Abstraction);
    }

    fn visit_application(&mut self, ast: &Ast<S>, app: ApplicationId) {
        self.bump(ast, app, Kind::Application);
    }
}
