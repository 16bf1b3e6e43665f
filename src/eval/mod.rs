
//! Evaluating postfix token sequences to a number.

pub mod arithmetic;
pub mod rpn;

pub use arithmetic::{operate, round_for_display};
pub use rpn::evaluate;
