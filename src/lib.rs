
//! Evaluation core of a pocket calculator.
//!
//! A raw expression such as `200+10%` goes through three stages: the
//! [tokenizer](parsing::tokenizer), the [shunting yard
//! conversion](parsing::shunting_yard) to postfix order, and the
//! [postfix evaluator](eval::rpn). [`evaluate_expression`] runs all
//! three.

pub mod error;
pub mod eval;
pub mod mode;
pub mod parsing;
pub mod stack;

pub use error::EvaluationError;
pub use mode::{CalculationMode, PercentPolicy};

use tracing::debug;

/// Evaluates a raw expression with the default [`CalculationMode`].
pub fn evaluate_expression(raw: &str) -> Result<f64, EvaluationError> {
  evaluate_expression_with(raw, &CalculationMode::default())
}

pub fn evaluate_expression_with(raw: &str, mode: &CalculationMode) -> Result<f64, EvaluationError> {
  let infix = parsing::tokenize(raw);
  let postfix = parsing::to_postfix(&infix)?;
  let value = eval::evaluate(&postfix, mode)?;
  debug!(expression = raw, value, "evaluated expression");
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::ShuntingYardError;

  #[test]
  fn test_evaluate_expression() {
    assert_eq!(evaluate_expression("12+3.5×2"), Ok(19.0));
    assert_eq!(evaluate_expression("10-3-2"), Ok(5.0));
    assert_eq!(evaluate_expression("(3+4)×2"), Ok(14.0));
    assert_eq!(evaluate_expression("2×3+4×5"), Ok(26.0));
    assert_eq!(evaluate_expression("100÷4÷5"), Ok(5.0));
  }

  #[test]
  fn test_percent_expressions() {
    assert_eq!(evaluate_expression("200+10%"), Ok(220.0));
    assert_eq!(evaluate_expression("200-10%"), Ok(180.0));
    assert_eq!(evaluate_expression("200×10%"), Ok(20.0));
    assert_eq!(evaluate_expression("200÷10%"), Ok(2000.0));
    assert_eq!(evaluate_expression("25%"), Ok(0.25));
    assert_eq!(evaluate_expression("(50+50)+10%"), Ok(110.0));
  }

  #[test]
  fn test_remainder_policy() {
    let mode = CalculationMode::new().with_percent_policy(PercentPolicy::Remainder);
    assert_eq!(evaluate_expression_with("17%5", &mode), Ok(2.0));
    assert_eq!(evaluate_expression_with("1+17%5×2", &mode), Ok(5.0));
  }

  #[test]
  fn test_rounds_final_result() {
    assert_eq!(evaluate_expression("0.1+0.2"), Ok(0.3));
    assert_eq!(evaluate_expression("10÷3"), Ok(3.33));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(evaluate_expression("5÷0"), Ok(f64::INFINITY));
    assert_eq!(evaluate_expression("1-5÷0"), Ok(f64::NEG_INFINITY));
  }

  #[test]
  fn test_huge_finite_result_stays_finite() {
    let literal = "9".repeat(308);
    let value = evaluate_expression(&literal).unwrap();
    assert!(value.is_finite());
    assert_eq!(value, literal.parse::<f64>().unwrap());
  }

  #[test]
  fn test_unbalanced() {
    assert_eq!(
      evaluate_expression("(3+4"),
      Err(EvaluationError::UnbalancedParentheses(ShuntingYardError::UnmatchedOpenParen { position: 0 })),
    );
    assert_eq!(
      evaluate_expression("3+4)"),
      Err(EvaluationError::UnbalancedParentheses(ShuntingYardError::UnmatchedCloseParen { position: 3 })),
    );
  }

  #[test]
  fn test_malformed() {
    assert!(matches!(evaluate_expression(""), Err(EvaluationError::StackUnderflow(_))));
    assert!(matches!(evaluate_expression("5+"), Err(EvaluationError::StackUnderflow(_))));
    assert_eq!(evaluate_expression("2(3)"), Err(EvaluationError::LeftoverOperands { count: 2 }));
  }

  #[test]
  fn test_digits_after_percent_are_rejected() {
    // The button-driven front end lets a digit follow `%`, and there
    // `200%10` quietly evaluated to the top of the stack (20). Here
    // the value nothing consumed is reported instead.
    assert_eq!(evaluate_expression("200%10"), Err(EvaluationError::LeftoverOperands { count: 2 }));
  }

  #[test]
  fn test_stateless_between_calls() {
    assert_eq!(evaluate_expression("200+10%"), evaluate_expression("200+10%"));
    let _ = evaluate_expression("(((");
    assert_eq!(evaluate_expression("1+1"), Ok(2.0));
  }
}
