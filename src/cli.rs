//! CLI support for sprig
//!
//! Provides programmatic access to the filter runner for embedding in
//! other tools, and the error type the binary reports.

use std::io;

use crate::evaluator::EvalError;
use crate::output::{to_json, to_json_pretty};
use crate::pipeline::{CompileError, Pipeline};
use crate::value::Value;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Filter failed to compile
    Compile(CompileError),
    /// Evaluation error
    Eval(EvalError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Compile(e) => write!(f, "Filter error: {}", e),
            CliError::Eval(e) => write!(f, "Evaluation error: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Compile(e) => Some(e),
            CliError::Eval(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CompileError> for CliError {
    fn from(e: CompileError) -> Self {
        CliError::Compile(e)
    }
}

impl From<EvalError> for CliError {
    fn from(e: EvalError) -> Self {
        CliError::Eval(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Options for one filter run
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// The filter to run
    pub filter: String,
    /// JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Compile the filter, decode the input, and run the pipeline.
///
/// Returns the result rendered as JSON, compact or pretty per the
/// options.
pub fn run_filter(options: &FilterOptions) -> Result<String, CliError> {
    let pipeline = Pipeline::compile(&options.filter)?;

    let json = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document = Value::from_json(json)?;

    let result = pipeline.run(document)?;

    if options.pretty {
        Ok(to_json_pretty(&result))
    } else {
        Ok(to_json(&result))
    }
}
