//! Type checking and semantic analysis module.
//!
//! This module walks the AST and validates it against the language's type
//! rules while:
//!
//! - Resolving variable and function references through scoped environments
//! - Inferring the sign and width of integer literals from their context
//! - Checking operator operands, call arguments and conditions
//! - Collecting every type error instead of stopping at the first
//!
//! Nothing is produced besides the verdict and the diagnostics; the AST is
//! left untouched.

pub mod environment;
pub mod operators;
pub mod type_checker;
pub mod typeres;
