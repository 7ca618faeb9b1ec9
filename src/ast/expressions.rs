/// Expression nodes in a parsed filter stage.
///
/// A stage is a chain of accessors. Each dot after the first opens a
/// nested [`Expr::Access`], so `.a[0].b` parses to:
///
/// ```text
/// Access([
///     Key("a"),
///     Collect(Some(Number(0))),
///     Access([
///         Key("b"),
///     ]),
/// ])
/// ```
///
/// The evaluator walks this nesting outside-in, threading the current
/// value through each accessor in turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A dotted group of accessors, evaluated left to right
    Access(Vec<Expr>),

    /// Bare field access on an object
    ///
    /// # Examples
    /// ```text
    /// .name
    /// .user
    /// ```
    Key(String),

    /// Bracketed collect accessor
    ///
    /// With no body, takes an array whole. With a literal body, picks
    /// one element (numeric index) or one field (quoted key).
    ///
    /// # Examples
    /// ```text
    /// []
    /// [0]
    /// ["first name"]
    /// ```
    Collect(Option<Literal>),
}

/// Literal body of a collect accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Quoted object key
    String(String),

    /// Array index
    Number(usize),
}
