use std::error::Error;
use std::fmt;
use std::mem;

use crate::ast::{Expr, Literal, Stage, Token};

/// Error produced while parsing a token sequence into a [`Stage`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Stage began with something other than '.' or '['
    UnsupportedStage(Token),
    /// A '.' was not followed by a field name or '['
    ExpectedAccessor { found: Option<Token> },
    /// A '[' was still open when the stage ended
    UnclosedBracket,
    /// A ']' appeared with no '[' open
    UnmatchedBracketClose,
    /// Bracket body was not a single quoted key or numeric index
    InvalidCollectBody(Token),
    /// Numeric index does not fit in a usize
    InvalidIndex(String),
    /// Token has no meaning at this point in the stage
    UnexpectedToken(Token),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnsupportedStage(token) => {
                write!(
                    f,
                    "Filter stages must begin with '.' or '[', found '{}'",
                    token
                )
            }
            ParseError::ExpectedAccessor { found: Some(token) } => {
                write!(
                    f,
                    "Expected a field name or '[' after '.', found '{}'",
                    token
                )
            }
            ParseError::ExpectedAccessor { found: None } => {
                write!(f, "Expected a field name or '[' after '.', found end of stage")
            }
            ParseError::UnclosedBracket => {
                write!(f, "Unclosed '[': expected ']' before end of stage")
            }
            ParseError::UnmatchedBracketClose => {
                write!(f, "Unexpected ']' with no open '['")
            }
            ParseError::InvalidCollectBody(token) => {
                write!(
                    f,
                    "Expected a quoted key, numeric index, or ']' inside brackets, found '{}'",
                    token
                )
            }
            ParseError::InvalidIndex(digits) => {
                write!(f, "Array index '{}' is too large", digits)
            }
            ParseError::UnexpectedToken(token) => {
                write!(f, "Unexpected token '{}'", token)
            }
        }
    }
}

impl Error for ParseError {}

/// Parses one filter stage's tokens into a [`Stage`].
///
/// Each '.' after the first opens a nested [`Expr::Access`] group, so a
/// chain like `.a[0].b` comes out as a vine: the group after each dot
/// hangs off the end of the group before it. The parser tracks where the
/// next accessor lands with a stack of open groups; the innermost frame
/// is always the current insertion point.
pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
    current: Option<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens.into_iter();
        let current = tokens.next();
        Parser { tokens, current }
    }

    fn advance(&mut self) -> Option<Token> {
        mem::replace(&mut self.current, self.tokens.next())
    }

    pub fn parse(&mut self) -> Result<Stage, ParseError> {
        match &self.current {
            // No tokens at all is the identity filter.
            None => return Ok(Stage::default()),
            Some(Token::Dot) | Some(Token::CollectStart) => {}
            Some(other) => return Err(ParseError::UnsupportedStage(other.clone())),
        }

        let mut stack: Vec<Vec<Expr>> = Vec::new();
        let mut frame: Vec<Expr> = Vec::new();

        while let Some(token) = self.advance() {
            match token {
                Token::Dot => match &self.current {
                    // Open a new dotted group; it becomes the insertion point.
                    Some(Token::Key(_)) | Some(Token::CollectStart) => {
                        stack.push(mem::take(&mut frame));
                    }
                    None if stack.is_empty() && frame.is_empty() => {
                        // A lone '.' is the identity filter.
                        return Ok(Stage::default());
                    }
                    Some(other) => {
                        return Err(ParseError::ExpectedAccessor {
                            found: Some(other.clone()),
                        });
                    }
                    None => return Err(ParseError::ExpectedAccessor { found: None }),
                },
                Token::Key(name) => {
                    // Only valid directly after the dot that opened this group.
                    if stack.is_empty() || !frame.is_empty() {
                        return Err(ParseError::UnexpectedToken(Token::Key(name)));
                    }
                    frame.push(Expr::Key(name));
                }
                Token::CollectStart => frame.push(self.parse_collect()?),
                Token::CollectEnd => return Err(ParseError::UnmatchedBracketClose),
                other => return Err(ParseError::UnexpectedToken(other)),
            }
        }

        // Close every open group, nesting each one at the end of its parent.
        while let Some(mut parent) = stack.pop() {
            parent.push(Expr::Access(frame));
            frame = parent;
        }

        Ok(Stage { steps: frame })
    }

    fn parse_collect(&mut self) -> Result<Expr, ParseError> {
        let body = match self.advance() {
            Some(Token::CollectEnd) => return Ok(Expr::Collect(None)),
            Some(Token::String(key)) => Literal::String(key),
            Some(Token::Number(digits)) => match digits.parse::<usize>() {
                Ok(index) => Literal::Number(index),
                Err(_) => return Err(ParseError::InvalidIndex(digits)),
            },
            Some(other) => return Err(ParseError::InvalidCollectBody(other)),
            None => return Err(ParseError::UnclosedBracket),
        };

        match self.advance() {
            Some(Token::CollectEnd) => Ok(Expr::Collect(Some(body))),
            Some(other) => Err(ParseError::InvalidCollectBody(other)),
            None => Err(ParseError::UnclosedBracket),
        }
    }
}
