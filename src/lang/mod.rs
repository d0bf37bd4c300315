/*!
# Language Module

This Rust module provides lexical analysis and parsing of Hyeo-ung
source text.

*/

#[macro_use]
mod error;
mod code;
mod lex;
mod parse;
mod token;
mod tree;

/// 1-based line and 0-based column of a character in the source text.
pub type Location = (usize, usize);

pub use code::Command;
pub use code::Kind;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexeme;
pub use parse::parse;
pub use token::is_hangul_syllable;
pub use token::Token;
pub use tree::Tree;
