use std::{iter, ops::Index};

use index_vec::IndexVec;
use text_size::TextRange;

use crate::{error::AstError, index::NodeId, location::Locatable};

use super::{handle::sealed::Sealed, *};

/// An arena owning every node of one or more trees.
///
/// Nodes are created bottom-up: a child must exist before its parent, and each
/// node is adopted by at most one parent. Together this keeps every tree in
/// the arena acyclic, with exclusive ownership of children.
///
/// The arena is `Send` whenever the symbol type is, so a whole tree can be
/// moved to another thread. Appending to a program needs `&mut self`.
#[derive(Debug, Clone)]
pub struct Ast<S> {
    nodes: IndexVec<NodeId, Node<S>>,
    parents: IndexVec<NodeId, Option<NodeId>>,
}

impl<S> Default for Ast<S> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! typed_accessor {
    ($(#[$meta:meta])* $name:ident($id:ty) -> $variant:ident$(<$s:ident>)?) => {
        $(#[$meta])*
        ///
        /// # Panics
        ///
        /// Panics if the handle was not produced by this arena.
        pub fn $name(&self, id: $id) -> &$variant$(<$s>)? {
            match self.nodes[id.node()].data() {
                NodeData::$variant(node) => node,
                data => unreachable!(
                    "{} is a {}, not a {}",
                    id.node(),
                    data.kind(),
                    Kind::$variant,
                ),
            }
        }
    };
}

impl<S> Ast<S> {
    pub fn new() -> Self {
        Self {
            nodes: IndexVec::new(),
            parents: IndexVec::new(),
        }
    }

    /// Returns the number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, node: impl Into<NodeId>) -> Option<&Node<S>> {
        let node: NodeId = node.into();
        self.nodes.get(node)
    }

    /// Returns the node behind `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of this arena.
    pub fn node(&self, node: impl Into<NodeId>) -> &Node<S> {
        let node: NodeId = node.into();
        &self[node]
    }

    pub fn kind(&self, node: impl Into<NodeId>) -> Kind {
        let node: NodeId = node.into();
        self[node].kind()
    }

    pub fn children(&self, node: impl Into<NodeId>) -> &[NodeId] {
        let node: NodeId = node.into();
        self[node].children()
    }

    pub fn location(&self, node: impl Into<NodeId>) -> Option<TextRange> {
        let node: NodeId = node.into();
        self[node].range()
    }

    /// Returns the parent of `node`, or `None` for a root.
    pub fn parent(&self, node: impl Into<NodeId>) -> Option<NodeId> {
        let node: NodeId = node.into();
        self.parents.get(node).copied().flatten()
    }

    /// Returns the parent, grandparent, ... of `node`.
    pub fn ancestors(&self, node: impl Into<NodeId>) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.parent(node), |&node| self.parent(node))
    }

    /// Returns every node without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.parents
            .iter_enumerated()
            .filter(|(_, parent)| parent.is_none())
            .map(|(node, _)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> + '_ {
        self.nodes.iter_enumerated()
    }

    /// Walks the subtree rooted at `root` in pre-order.
    pub fn descendants(&self, root: impl Into<NodeId>) -> Descendants<'_, S> {
        Descendants {
            ast: self,
            stack: vec![root.into()],
        }
    }

    /// Narrows `node` to the category `T`.
    ///
    /// Returns `None` if the node is not a `T`, or not part of this arena.
    pub fn cast<T: Handle>(&self, node: impl Into<NodeId>) -> Option<T> {
        let node: NodeId = node.into();
        self.get(node)
            .filter(|data| T::accepts(data.kind()))
            .map(|_| T::from_node(node))
    }

    /// Returns `true` if [`cast`](Self::cast) would succeed.
    pub fn is<T: Handle>(&self, node: impl Into<NodeId>) -> bool {
        self.cast::<T>(node).is_some()
    }

    typed_accessor!(
        /// Returns the program behind `id`.
        program(ProgramId) -> Program
    );
    typed_accessor!(
        /// Returns the variable behind `id`.
        variable(VariableId) -> Variable<S>
    );
    typed_accessor!(
        /// Returns the abstraction behind `id`.
        abstraction(AbstractionId) -> Abstraction
    );
    typed_accessor!(
        /// Returns the application behind `id`.
        application(ApplicationId) -> Application
    );
    typed_accessor!(
        /// Returns the definition behind `id`.
        definition(DefinitionId) -> Definition
    );
    typed_accessor!(
        /// Returns the evaluation behind `id`.
        evaluation(EvaluationId) -> Evaluation
    );

    /// Dispatches `node` to the visit method of its kind.
    pub fn accept<V: Visitor<S> + ?Sized>(&self, node: impl Into<NodeId>, visitor: &mut V) {
        let node: NodeId = node.into();
        match self[node].data() {
            NodeData::Program(_) => visitor.visit_program(self, ProgramId::from_node(node)),
            NodeData::Variable(_) => visitor.visit_variable(self, VariableId::from_node(node)),
            NodeData::Abstraction(_) => {
                visitor.visit_abstraction(self, AbstractionId::from_node(node));
            }
            NodeData::Application(_) => {
                visitor.visit_application(self, ApplicationId::from_node(node));
            }
            NodeData::Definition(_) => {
                visitor.visit_definition(self, DefinitionId::from_node(node));
            }
            NodeData::Evaluation(_) => {
                visitor.visit_evaluation(self, EvaluationId::from_node(node));
            }
        }
    }

    /// Attaches a source range to a node built before its position was known.
    ///
    /// A location can only be set once.
    pub fn set_location(&self, node: impl Into<NodeId>, range: TextRange) -> Result<(), AstError> {
        let node: NodeId = node.into();
        let Some(data) = self.get(node) else {
            return Err(AstError::UnknownNode { node });
        };
        data.location()
            .set(range)
            .map_err(|range| AstError::LocationAlreadySet { node, range })
            .inspect_err(|err| log::warn!("{err}"))?;
        log::debug!("{node} located at {range:?}");
        Ok(())
    }

    pub fn make_variable(&mut self, symbol: S) -> VariableId {
        VariableId::from_node(self.push(NodeData::Variable(Variable::new(symbol))))
    }

    pub fn make_abstraction(
        &mut self,
        var: VariableId,
        term: TermId,
    ) -> Result<AbstractionId, AstError> {
        let first = self.check_child(var, &[])?;
        self.check_child(term, &[first])?;
        let node = self.push(NodeData::Abstraction(Abstraction::new(var, term)));
        Ok(AbstractionId::from_node(node))
    }

    pub fn make_application(
        &mut self,
        func: TermId,
        arg: TermId,
    ) -> Result<ApplicationId, AstError> {
        let first = self.check_child(func, &[])?;
        self.check_child(arg, &[first])?;
        let node = self.push(NodeData::Application(Application::new(func, arg)));
        Ok(ApplicationId::from_node(node))
    }

    pub fn make_definition(
        &mut self,
        var: VariableId,
        def: TermId,
    ) -> Result<DefinitionId, AstError> {
        let first = self.check_child(var, &[])?;
        self.check_child(def, &[first])?;
        let node = self.push(NodeData::Definition(Definition::new(var, def)));
        Ok(DefinitionId::from_node(node))
    }

    pub fn make_evaluation(&mut self, term: TermId) -> Result<EvaluationId, AstError> {
        self.check_child(term, &[])?;
        let node = self.push(NodeData::Evaluation(Evaluation::new(term)));
        Ok(EvaluationId::from_node(node))
    }

    /// Creates an empty program.
    pub fn make_program(&mut self) -> ProgramId {
        ProgramId::from_node(self.push(NodeData::Program(Program::default())))
    }

    /// Creates a program holding `statements`, in iteration order.
    pub fn make_program_from<I>(&mut self, statements: I) -> Result<ProgramId, AstError>
    where
        I: IntoIterator,
        I::Item: Into<StatementId>,
    {
        let mut nodes = Vec::new();
        for stmt in statements {
            let stmt: StatementId = stmt.into();
            let stmt = self.check_child(stmt, &nodes)?;
            nodes.push(stmt);
        }
        let node = self.push(NodeData::Program(Program::new(Multi::from_nodes(nodes))));
        Ok(ProgramId::from_node(node))
    }

    /// Appends `stmt` to the end of `program`.
    ///
    /// No child slot accepts a program, so a program is always a root and a
    /// statement can never contain it.
    pub fn add_statement(
        &mut self,
        program: ProgramId,
        stmt: impl Into<StatementId>,
    ) -> Result<(), AstError> {
        let stmt: StatementId = stmt.into();
        let parent = self.resolve(program)?;
        let node = self.check_child(stmt, &[])?;
        match self.nodes[parent].data_mut() {
            NodeData::Program(data) => data.add_statement(stmt),
            data => unreachable!("{parent} is a {}, not a program", data.kind()),
        }
        self.parents[node] = Some(parent);
        log::debug!("appended {node} to {parent}");
        Ok(())
    }

    /// Checks that `id` names a node of category `T` in this arena.
    fn resolve<T: Handle>(&self, id: T) -> Result<NodeId, AstError> {
        let node = id.node();
        let Some(data) = self.get(node) else {
            let err = AstError::UnknownNode { node };
            log::warn!("{err}");
            return Err(err);
        };
        if !T::accepts(data.kind()) {
            let err = AstError::KindMismatch {
                node,
                expected: T::EXPECTED,
                found: data.kind(),
            };
            log::warn!("{err}");
            return Err(err);
        }
        Ok(node)
    }

    /// Checks that `child` can be adopted by the next node, given the
    /// `siblings` already claimed for it.
    fn check_child<T: Handle>(&self, child: T, siblings: &[NodeId]) -> Result<NodeId, AstError> {
        let node = self.resolve(child)?;
        let parent = match self.parents[node] {
            Some(parent) => Some(parent),
            None if siblings.contains(&node) => Some(self.nodes.next_idx()),
            None => None,
        };
        if let Some(parent) = parent {
            let err = AstError::AlreadyOwned { node, parent };
            log::warn!("{err}");
            return Err(err);
        }
        Ok(node)
    }

    fn push(&mut self, data: NodeData<S>) -> NodeId {
        let kind = data.kind();
        let children = data.children().to_vec();
        let node = self.nodes.push(Node::new(data));
        let parent = self.parents.push(None);
        debug_assert_eq!(node, parent);
        for child in children {
            self.parents[child] = Some(node);
        }
        log::trace!("created {kind} {node}");
        node
    }
}

impl<S> Index<NodeId> for Ast<S> {
    type Output = Node<S>;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

/// Pre-order iterator over a subtree, see [`Ast::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a, S> {
    ast: &'a Ast<S>,
    stack: Vec<NodeId>,
}

impl<S> Iterator for Descendants<'_, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(self.ast.children(node).iter().rev());
        Some(node)
    }
}
