use std::fmt;

/// Lexical tokens of the filter language.
///
/// A stage like `.users[0]` lexes to the flat sequence `Dot`,
/// `Key("users")`, `CollectStart`, `Number("0")`, `CollectEnd`;
/// structure is the parser's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Accessors
    /// Access operator
    ///
    /// Introduces a field access, or stands alone as the identity
    /// filter.
    ///
    /// # Examples
    /// ```text
    /// .name
    /// .
    /// ```
    Dot,

    /// Bare field name
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores. Anything else needs a quoted key in brackets.
    ///
    /// # Examples
    /// ```text
    /// user
    /// item_count
    /// _internal
    /// ```
    Key(String),

    /// Left bracket opening a collect accessor
    CollectStart,

    /// Right bracket closing a collect accessor
    CollectEnd,

    // Literals
    /// String literal enclosed in double quotes
    ///
    /// Only valid between brackets, naming an object key.
    ///
    /// # Examples
    /// ```text
    /// "first name"
    /// "item #1"
    /// ```
    String(String),

    /// Unsigned decimal integer, carried as source text
    ///
    /// Only valid between brackets, naming an array index. Conversion
    /// to a numeric index happens at parse time.
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 42
    /// ```
    Number(String),

    /// Stage separator
    ///
    /// # Examples
    /// ```text
    /// .users | [0]
    /// ```
    Pipe,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Dot => write!(f, "."),
            Token::Key(name) => write!(f, "{}", name),
            Token::CollectStart => write!(f, "["),
            Token::CollectEnd => write!(f, "]"),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Pipe => write!(f, "|"),
        }
    }
}
