use std::error::Error;
use std::fmt;

use crate::ast::Token;

/// Error produced while scanning a filter stage.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    UnexpectedChar { ch: char, position: usize },
    UnterminatedString { position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                write!(f, "Unexpected character '{}' at position {}", ch, position)
            }
            LexError::UnterminatedString { position } => {
                write!(f, "Unterminated string starting at position {}", position)
            }
        }
    }
}

impl Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance(); // Consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\\') => result.push('\\'),
                        Some(other) => {
                            return Err(LexError::UnexpectedChar {
                                ch: other,
                                position: self.position,
                            });
                        }
                        None => return Err(LexError::UnterminatedString { position: start }),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_number(&mut self) -> String {
        let mut number = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        number
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(None),
            Some('.') => {
                self.advance();
                Ok(Some(Token::Dot))
            }
            Some('[') => {
                self.advance();
                Ok(Some(Token::CollectStart))
            }
            Some(']') => {
                self.advance();
                Ok(Some(Token::CollectEnd))
            }
            Some('|') => {
                self.advance();
                Ok(Some(Token::Pipe))
            }
            Some('"') => Ok(Some(Token::String(self.read_string()?))),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                Ok(Some(Token::Key(self.read_identifier())))
            }
            Some(ch) if ch.is_ascii_digit() => Ok(Some(Token::Number(self.read_number()))),
            Some(ch) => Err(LexError::UnexpectedChar {
                ch,
                position: self.position,
            }),
        }
    }
}

/// Scan a whole filter stage into its token sequence.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[test]
fn test_field_access() {
    let mut lexer = Lexer::new(".users[0]");
    assert_eq!(lexer.next_token(), Ok(Some(Token::Dot)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Key("users".to_string()))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::CollectStart)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Number("0".to_string()))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::CollectEnd)));
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn test_quoted_key() {
    let mut lexer = Lexer::new(r#".["first name"]"#);
    assert_eq!(lexer.next_token(), Ok(Some(Token::Dot)));
    assert_eq!(lexer.next_token(), Ok(Some(Token::CollectStart)));
    assert_eq!(
        lexer.next_token(),
        Ok(Some(Token::String("first name".to_string())))
    );
    assert_eq!(lexer.next_token(), Ok(Some(Token::CollectEnd)));
    assert_eq!(lexer.next_token(), Ok(None));
}
