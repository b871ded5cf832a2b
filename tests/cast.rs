mod common;

use common::{identity_program, Builder};
use lambda_syntax::{
    ast::{
        AbstractionId, ApplicationId, Arity, Ast, DefinitionId, EvaluationId, Handle, Kind,
        NodeData, ProgramId, Shape, StatementId, TermId, VariableId,
    },
    index::NodeId,
};

/// One node of every kind, with a program holding both statements.
fn every_kind(b: &mut Builder) -> ProgramId {
    let x = b.var("x");
    let body = b.var("x");
    let abs = b.ast.make_abstraction(x, body.into()).unwrap();
    let f = b.var("f");
    let a = b.var("a");
    let app = b.ast.make_application(f.into(), a.into()).unwrap();
    let id = b.var("id");
    let def = b.ast.make_definition(id, abs.into()).unwrap();
    let eval = b.ast.make_evaluation(app.into()).unwrap();
    let program = b.ast.make_program();
    b.ast.add_statement(program, def).unwrap();
    b.ast.add_statement(program, eval).unwrap();
    program
}

fn check_target<T: Handle + PartialEq + std::fmt::Debug, S>(
    ast: &Ast<S>,
    node: NodeId,
    belongs: bool,
) {
    let cast = ast.cast::<T>(node);
    assert_eq!(ast.is::<T>(node), belongs, "{node} as {}", T::EXPECTED);
    assert_eq!(cast.is_some(), belongs);
    if let Some(handle) = cast {
        assert_eq!(handle.node(), node);
    }
}

#[test]
fn test_downcast_matches_category() {
    let mut b = Builder::new();
    every_kind(&mut b);

    for (node, data) in b.ast.iter() {
        let kind = data.kind();
        check_target::<NodeId, _>(&b.ast, node, true);
        check_target::<ProgramId, _>(&b.ast, node, kind == Kind::Program);
        check_target::<StatementId, _>(&b.ast, node, kind.is_statement());
        check_target::<DefinitionId, _>(&b.ast, node, kind == Kind::Definition);
        check_target::<EvaluationId, _>(&b.ast, node, kind == Kind::Evaluation);
        check_target::<TermId, _>(&b.ast, node, kind.is_term());
        check_target::<VariableId, _>(&b.ast, node, kind == Kind::Variable);
        check_target::<AbstractionId, _>(&b.ast, node, kind == Kind::Abstraction);
        check_target::<ApplicationId, _>(&b.ast, node, kind == Kind::Application);
    }
}

#[test]
fn test_mismatch_downcast() {
    let mut b = Builder::new();
    let f = b.var("f");
    let a = b.var("a");
    let app = b.ast.make_application(f.into(), a.into()).unwrap();

    assert_eq!(b.ast.cast::<VariableId>(app), None);
    assert!(!b.ast.is::<VariableId>(app));
    let term = b.ast.cast::<TermId>(app).unwrap();
    assert_eq!(term.node(), app.node());
    assert_eq!(term, TermId::from(app));
    assert_eq!(b.ast.cast::<ApplicationId>(term), Some(app));
}

#[test]
fn test_cast_out_of_range() {
    let b = Builder::new();
    assert_eq!(b.ast.cast::<NodeId>(NodeId::from_usize(0)), None);
    assert!(!b.ast.is::<TermId>(NodeId::from_usize(7)));
}

#[test]
fn test_arity_invariants() {
    let mut b = Builder::new();
    let program = every_kind(&mut b);

    for (node, data) in b.ast.iter() {
        let children = data.children();
        assert_eq!(data.arity(), data.kind().arity());
        match data.arity() {
            Arity::Nullary => assert!(children.is_empty()),
            Arity::Unary => assert_eq!(children.len(), 1),
            Arity::Binary => assert_eq!(children.len(), 2),
            Arity::Multi => {
                let program = b.ast.program(b.ast.cast(node).unwrap());
                assert_eq!(children.len(), program.len());
            }
        }
        for &child in children {
            assert_eq!(b.ast.parent(child), Some(node));
        }
    }
    assert_eq!(b.ast.children(program).len(), 2);
}

#[test]
fn test_shape_matches_kind() {
    let mut b = Builder::new();
    every_kind(&mut b);

    for (_, node) in b.ast.iter() {
        let arity = match node.data() {
            NodeData::Program(program) => {
                assert_eq!(program.shape().nodes(), node.children());
                Arity::Multi
            }
            NodeData::Variable(variable) => {
                assert_eq!(variable.shape().nodes(), node.children());
                Arity::Nullary
            }
            NodeData::Abstraction(abs) => {
                assert_eq!(abs.shape().nodes(), [abs.var().node(), abs.term().node()]);
                Arity::Binary
            }
            NodeData::Application(app) => {
                assert_eq!(app.shape().nodes(), [app.func().node(), app.arg().node()]);
                Arity::Binary
            }
            NodeData::Definition(def) => {
                assert_eq!(def.shape().nodes(), [def.var().node(), def.def().node()]);
                Arity::Binary
            }
            NodeData::Evaluation(eval) => {
                assert_eq!(eval.shape().nodes(), [eval.term().node()]);
                Arity::Unary
            }
        };
        assert_eq!(node.arity(), arity);
    }

    for kind in Kind::ALL {
        assert!(!(kind.is_term() && kind.is_statement()));
    }
}

#[test]
fn test_accessors_follow_kinds() {
    let mut b = Builder::new();
    let program = identity_program(&mut b);

    let stmt = b.ast.program(program).statements().next().unwrap();
    let eval = b.ast.cast::<EvaluationId>(stmt).unwrap();
    let app = b.ast.cast::<ApplicationId>(b.ast.evaluation(eval).term()).unwrap();
    let abs = b.ast.cast::<AbstractionId>(b.ast.application(app).func()).unwrap();
    let body = b.ast.cast::<VariableId>(b.ast.abstraction(abs).term()).unwrap();
    assert_eq!(b.ast.variable(b.ast.abstraction(abs).var()).name(), "x");
    assert_eq!(b.ast.variable(body).name(), "x");
    assert_ne!(b.ast.abstraction(abs).var(), body);
}
