
//! Infix to postfix conversion by the shunting yard algorithm.

use super::operator::OperatorSymbol;
use super::token::{Token, Paren};

use thiserror::Error;
use tracing::debug;

/// An entry on the pending-operator stack. Open parentheses remember
/// where they were opened so an unclosed one can be reported.
#[derive(Clone, Copy, Debug)]
enum StackEntry {
  Operator(OperatorSymbol),
  OpenParen { position: usize },
}

/// Parenthesis mismatches found during conversion. Positions are
/// indices into the infix token sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuntingYardError {
  #[error("Unbalanced parentheses: ')' at token {position} has no matching '('")]
  UnmatchedCloseParen { position: usize },
  #[error("Unbalanced parentheses: '(' at token {position} is never closed")]
  UnmatchedOpenParen { position: usize },
}

/// Converts an infix token sequence to postfix (reverse Polish)
/// order. Parentheses never appear in the output.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ShuntingYardError> {
  let mut operator_stack: Vec<StackEntry> = Vec::new();
  let mut output = Vec::with_capacity(tokens.len());
  for (position, token) in tokens.iter().enumerate() {
    match *token {
      Token::Number(_) => {
        output.push(*token);
      }
      Token::Paren(Paren::Open) => {
        operator_stack.push(StackEntry::OpenParen { position });
      }
      Token::Paren(Paren::Close) => {
        // Pop operators until we find the matching open paren, which
        // is discarded.
        loop {
          match operator_stack.pop() {
            Some(StackEntry::OpenParen { .. }) => break,
            Some(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
            None => return Err(ShuntingYardError::UnmatchedCloseParen { position }),
          }
        }
      }
      Token::Operator(op) => {
        while let Some(&StackEntry::Operator(top)) = operator_stack.last() {
          if !top.operator().yields_before(op.operator()) {
            break;
          }
          operator_stack.pop();
          output.push(Token::Operator(top));
        }
        operator_stack.push(StackEntry::Operator(op));
      }
    }
  }

  // Pop and emit remaining operators.
  while let Some(entry) = operator_stack.pop() {
    match entry {
      StackEntry::Operator(op) => output.push(Token::Operator(op)),
      StackEntry::OpenParen { position } => return Err(ShuntingYardError::UnmatchedOpenParen { position }),
    }
  }

  debug!(infix_len = tokens.len(), postfix_len = output.len(), "converted to postfix");
  Ok(output)
}
