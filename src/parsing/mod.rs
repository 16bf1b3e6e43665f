
//! Turning a raw expression string into postfix tokens.

pub mod operator;
pub mod shunting_yard;
pub mod token;
pub mod tokenizer;

pub use shunting_yard::{to_postfix, ShuntingYardError};
pub use token::{Token, Paren};
pub use tokenizer::tokenize;
