//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! token sequence into a `Program`:
//!
//! - Token cursor with one token of lookahead and no backtracking
//! - Statement dispatch (declarations or expression statements)
//! - Declaration parsing for `let` / `const`
//! - Expression parsing in precedence tiers (additive, multiplicative, primary)
//!
//! Statements and prefix expressions are dispatched through lookup tables
//! keyed by token kind. Parsing stops at the first error.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
