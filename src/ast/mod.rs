/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node enums and the walker traits that dispatch over them
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for statements, parameters and items
/// - types: Type names as written in source
/// - printer: S-expression and source printers
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
