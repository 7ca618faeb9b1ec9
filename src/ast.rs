//! # Filter Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the sprig filter
//! language, a small jq-style language for plucking values out of JSON
//! documents.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (accessors and literals)
//! - **[stage]** - A parsed filter stage, the unit a pipeline runs
//!
//! ## Quick Start
//!
//! ```text
//! .users[0].name
//! ```
//!
//! This filter digs into an object's `users` array, takes the first
//! element, and returns its `name` field.
//!
//! ## Core Concepts
//!
//! ### Pipeline Structure
//!
//! A filter is a pipeline of stages separated by `|`. Each stage takes the
//! previous stage's output as its input:
//!
//! ```text
//! .users | [0] | .name
//! ```
//!
//! ### The Three Accessors
//!
//! - **Key** `.name` - Pick one field out of an object
//! - **Collect** `[0]`, `["key"]` - Pick one element or field by literal
//! - **Collect** `[]` - Take an array whole
//!
//! ### Identity
//!
//! A bare `.`, an empty stage, or a whitespace-only stage passes its input
//! through unchanged.
//!
//! ### Numeric Index Behavior
//!
//! Brackets hold at most one literal. A numeric index only applies to
//! arrays, a quoted key only to objects; mismatches are evaluation errors
//! rather than coercions.
//!
//! ## Examples
//!
//! ### Nested Field Access
//!
//! ```text
//! .user.address.city
//! ```
//!
//! ### Quoted Keys
//!
//! ```text
//! .["first name"]
//! ```
//!
//! ### Piped Stages
//!
//! ```text
//! .users | [1] | .email
//! ```
pub mod tokens;
pub mod expressions;
pub mod stage;

pub use tokens::Token;
pub use expressions::{Expr, Literal};
pub use stage::Stage;
