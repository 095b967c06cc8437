/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Stmt` / `Expr` node sets and the node-kind discriminator
/// - expressions: Expression node payloads and binary operators
/// - statements: Declaration nodes and the `Program` root
/// - printer: Source-form rendering of a tree
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
