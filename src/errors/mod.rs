//! Error types for scanning and parsing.
//!
//! A single error structure carries the failure variant and the source
//! position it was raised at. Parsing aborts on the first error; there is no
//! recovery and no multi-error reporting.

pub mod errors;

#[cfg(test)]
mod tests;
