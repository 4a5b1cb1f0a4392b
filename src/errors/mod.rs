//! Error types and error reporting for the front end.
//!
//! This module defines the errors raised while lexing, parsing and type
//! checking. It includes:
//!
//! - Error structures carrying the offending source span
//! - A stable code and message template for every error variant
//! - The `ErrorPrinter` interface with a human readable and a
//!   machine readable implementation

pub mod errors;
pub mod printer;

#[cfg(test)]
mod tests;
