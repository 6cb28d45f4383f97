//! Minimal CSS token and declaration model.
//!
//! The full tokenizer and declaration tree live in the surrounding pipeline;
//! this crate carries only the shapes the compatibility tables and the color
//! minifier need to agree on.

pub mod declaration;
pub mod property;
pub mod token;

pub use declaration::Declaration;
pub use property::Property;
pub use token::{Token, TokenKind};
