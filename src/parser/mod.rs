pub mod error;
pub mod model;

mod tokenizer;

pub use error::ParseError;
pub use model::{Token, TokenKind, TokenValue};
pub use tokenizer::tokenize;
