use std::error::Error;
use std::fmt;

use crate::ast::Stage;
use crate::evaluator::{EvalError, evaluate};
use crate::lexer::{LexError, tokenize};
use crate::parser::{ParseError, Parser};
use crate::value::Value;

/// Error produced while compiling a filter string, tagged with the
/// one-based number of the stage it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Lex { stage: usize, error: LexError },
    Parse { stage: usize, error: ParseError },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex { stage, error } => write!(f, "Stage {}: {}", stage, error),
            CompileError::Parse { stage, error } => write!(f, "Stage {}: {}", stage, error),
        }
    }
}

impl Error for CompileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CompileError::Lex { error, .. } => Some(error),
            CompileError::Parse { error, .. } => Some(error),
        }
    }
}

/// A compiled filter: one or more stages run in sequence.
///
/// The filter string is split on '|' and each segment compiles on its
/// own; compilation stops at the first segment that fails. Whitespace-only
/// segments compile to the identity filter, so an empty filter string is
/// a valid pipeline that returns its input unchanged.
///
/// Running never mutates the pipeline, so one compiled instance can serve
/// any number of inputs, from one thread or many.
///
/// # Examples
///
/// ```
/// use sprig::{Pipeline, Value};
///
/// let pipeline = Pipeline::compile(".users | [0] | .name").unwrap();
/// let input = Value::from_json(r#"{"users": [{"name": "ada"}]}"#).unwrap();
///
/// let result = pipeline.run(input).unwrap();
/// assert_eq!(result, Value::String("ada".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Compile a filter string into a runnable pipeline.
    pub fn compile(filter: &str) -> Result<Pipeline, CompileError> {
        let mut stages = Vec::new();

        for (index, raw) in filter.split('|').enumerate() {
            let tokens = tokenize(raw).map_err(|error| CompileError::Lex {
                stage: index + 1,
                error,
            })?;
            let stage = Parser::new(tokens)
                .parse()
                .map_err(|error| CompileError::Parse {
                    stage: index + 1,
                    error,
                })?;
            stages.push(stage);
        }

        Ok(Pipeline { stages })
    }

    /// Run the pipeline, threading the value through each stage in turn.
    pub fn run(&self, input: Value) -> Result<Value, EvalError> {
        let mut current = input;
        for stage in &self.stages {
            current = evaluate(stage, &current)?;
        }
        Ok(current)
    }
}
