pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Expr, Literal, Stage, Token};
pub use evaluator::{EvalError, evaluate};
pub use lexer::{LexError, Lexer, tokenize};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use pipeline::{CompileError, Pipeline};
pub use value::Value;
