/// GraphQL document model
///
/// Building, rendering and tokenizing executable documents.
/// Abstract Syntax Tree types
#[allow(missing_docs)]
pub mod ast;
/// GraphQL lexer
#[allow(missing_docs)]
pub mod lexer;

// Re-export main types
pub use ast::*;
pub use lexer::{Lexer, LexerError, Token};
