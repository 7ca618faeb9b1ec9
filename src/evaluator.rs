use crate::{
    ast::{Expr, Literal, Stage},
    value::Value,
};

/// Errors that can occur while running a filter stage.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Object access with a key the object does not have
    MissingKey(String),

    /// Array access with an index past the end
    IndexOutOfRange(usize),

    /// Access or iteration applied to null, a boolean, a number, or a string
    CannotIndexScalar(&'static str),

    /// Accessor and value shape disagree (key on array, index on object)
    TypeError(String),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::MissingKey(key) => write!(f, "Missing key '{}' in object", key),
            EvalError::IndexOutOfRange(index) => {
                write!(f, "Array index {} out of range", index)
            }
            EvalError::CannotIndexScalar(kind) => {
                write!(f, "Cannot index into {} value", kind)
            }
            EvalError::TypeError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for EvalError {}

/// Returns a human-readable type name for a Value
fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Evaluates a single parsed stage against a value.
///
/// Applies the stage's accessors left to right, threading the value
/// through each one. A stage with no accessors is the identity filter
/// and returns the input unchanged.
///
/// # Arguments
///
/// * `stage` - The parsed stage to run
/// * `input` - The value the stage reads from
///
/// # Returns
///
/// The value the stage's last accessor produced, or the first error an
/// accessor hit.
///
/// # Examples
///
/// ```
/// use sprig::{evaluate, tokenize, Parser, Value};
///
/// let tokens = tokenize(".name").unwrap();
/// let stage = Parser::new(tokens).parse().unwrap();
/// let input = Value::from_json(r#"{"name": "ada"}"#).unwrap();
///
/// let result = evaluate(&stage, &input).unwrap();
/// assert_eq!(result, Value::String("ada".to_string()));
/// ```
pub fn evaluate(stage: &Stage, input: &Value) -> Result<Value, EvalError> {
    let mut current = input.clone();
    for step in &stage.steps {
        current = eval_expr(step, &current)?;
    }
    Ok(current)
}

fn eval_expr(expr: &Expr, input: &Value) -> Result<Value, EvalError> {
    match expr {
        Expr::Access(steps) => {
            let mut current = input.clone();
            for step in steps {
                current = eval_expr(step, &current)?;
            }
            Ok(current)
        }
        Expr::Key(name) => eval_key(name, input),
        Expr::Collect(body) => eval_collect(body.as_ref(), input),
    }
}

/// Bare field access: `.name`
fn eval_key(name: &str, input: &Value) -> Result<Value, EvalError> {
    match input {
        Value::Object(map) => map
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::MissingKey(name.to_string())),
        Value::Array(_) => Err(EvalError::TypeError(format!(
            "Cannot use key '{}' on an array; use a numeric index instead",
            name
        ))),
        scalar => Err(EvalError::CannotIndexScalar(type_name(scalar))),
    }
}

/// Bracketed access: `[]`, `[0]`, `["key"]`
fn eval_collect(body: Option<&Literal>, input: &Value) -> Result<Value, EvalError> {
    match (input, body) {
        // Empty brackets take the array whole; later accessors apply to
        // the array itself, not to each element.
        (Value::Array(_), None) => Ok(input.clone()),
        (Value::Array(items), Some(Literal::Number(index))) => items
            .get(*index)
            .cloned()
            .ok_or(EvalError::IndexOutOfRange(*index)),
        (Value::Array(_), Some(Literal::String(key))) => Err(EvalError::TypeError(format!(
            "Cannot use key '{}' on an array; use a numeric index instead",
            key
        ))),
        (Value::Object(map), Some(Literal::String(key))) => map
            .get(key)
            .cloned()
            .ok_or_else(|| EvalError::MissingKey(key.clone())),
        (Value::Object(_), Some(Literal::Number(index))) => Err(EvalError::TypeError(format!(
            "Cannot use index {} on an object; only arrays support numeric indexing",
            index
        ))),
        (Value::Object(_), None) => Err(EvalError::TypeError(
            "Cannot iterate an object with '[]'; iteration applies to arrays".to_string(),
        )),
        (scalar, _) => Err(EvalError::CannotIndexScalar(type_name(scalar))),
    }
}
