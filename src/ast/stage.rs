use crate::ast::Expr;

/// A single parsed filter stage.
///
/// Stages are the unit a pipeline runs: each one takes a value in and
/// produces a value out. An empty stage is the identity filter, which
/// is what `.`, an empty string, or a blank pipeline segment parse to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stage {
    /// Top-level accessors, applied left to right
    pub steps: Vec<Expr>,
}
