//! The index types used in the syntax tree.

index_vec::define_index_type! {
    /// The position of a node in its [`Ast`](crate::ast::Ast) arena.
    pub struct NodeId = u32;

    DEBUG_FORMAT = "NodeId({})";
    DISPLAY_FORMAT = "#{}";
}
