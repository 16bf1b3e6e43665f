
//! Evaluation of postfix token sequences.

use super::arithmetic::{operate, round_for_display};
use crate::error::EvaluationError;
use crate::mode::{CalculationMode, PercentPolicy};
use crate::parsing::operator::OperatorSymbol;
use crate::parsing::token::Token;
use crate::stack::{Stack, StackError};

use tracing::{debug, trace};

/// Evaluates a postfix sequence with a single operand stack.
///
/// Under [`PercentPolicy::Contextual`], `%` looks at the token after
/// it to decide what it means; see [`apply_percent`]. The final value
/// is rounded for display unless `mode` has the raw-output flag set.
pub fn evaluate(postfix: &[Token], mode: &CalculationMode) -> Result<f64, EvaluationError> {
  let policy = mode.percent_policy();
  let mut operands: Stack<f64> = Stack::new();
  for (index, token) in postfix.iter().enumerate() {
    match *token {
      Token::Number(n) => {
        operands.push(n);
      }
      Token::Operator(OperatorSymbol::Percent) if policy == PercentPolicy::Contextual => {
        apply_percent(&mut operands, postfix.get(index + 1))?;
      }
      Token::Operator(op) => {
        let (left, right) = operands.pop_pair()?;
        operands.push(operate(op, left, right));
      }
      Token::Paren(_) => {
        return Err(EvaluationError::InvalidOperator(token.to_string()));
      }
    }
    trace!(index, %token, depth = operands.len(), "evaluated token");
  }

  let value = match operands.len() {
    0 => return Err(StackError::NotEnoughElements { expected: 1, actual: 0 }.into()),
    1 => operands.pop()?,
    count => return Err(EvaluationError::LeftoverOperands { count }),
  };
  debug!(value, "evaluated postfix sequence");
  if mode.has_raw_output_flag() {
    Ok(value)
  } else {
    Ok(round_for_display(value))
  }
}

/// Replaces the top of the stack with its percentage reading.
///
/// With nothing below it, `n%` is just `n / 100`. Otherwise the value
/// below stays on the stack for the pending binary operator, and the
/// percentage is taken of that value unless the next token is `×` or
/// `÷`, in which case it is a plain fraction. So `200 + 10%` is
/// `200 + 20` but `200 × 10%` is `200 × 0.1`.
fn apply_percent(operands: &mut Stack<f64>, next: Option<&Token>) -> Result<(), StackError> {
  let second = operands.pop()?;
  let value = match operands.peek() {
    Some(&first) if !next.is_some_and(Token::is_multiplicative) => first * second / 100.0,
    _ => second / 100.0,
  };
  operands.push(value);
  Ok(())
}
