//! BEM authoring syntax: `block(...)`, `elem(...)` and `mod(...)`.

mod context;
mod lexer;
mod rewriter;
mod token;

pub use context::BemContext;
pub use lexer::tokenize;
pub use rewriter::SelectorRewriter;
pub use token::{Keyword, Token};
