
use crate::parsing::operator::OperatorSymbol;

/// Number of decimal places kept in a final result.
pub const DISPLAY_DECIMAL_PLACES: i32 = 2;

/// Applies a binary operator with IEEE-754 semantics. Division by zero
/// gives an infinity or `NaN`, never an error.
///
/// `%` here is the floating-point remainder. The percentage reading
/// of `%` depends on the surrounding expression and is handled by the
/// postfix evaluator instead.
pub fn operate(op: OperatorSymbol, left: f64, right: f64) -> f64 {
  match op {
    OperatorSymbol::Plus => left + right,
    OperatorSymbol::Minus => left - right,
    OperatorSymbol::Times => left * right,
    OperatorSymbol::Divide => left / right,
    OperatorSymbol::Percent => left % right,
  }
}

/// Rounds a final result to [`DISPLAY_DECIMAL_PLACES`], with halves
/// rounding up toward positive infinity. Non-finite values, and values
/// too large to scale without overflowing, are returned unchanged.
pub fn round_for_display(value: f64) -> f64 {
  let scale = 10f64.powi(DISPLAY_DECIMAL_PLACES);
  let scaled = value * scale;
  if !scaled.is_finite() {
    return value;
  }
  (scaled + 0.5).floor() / scale
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_operate() {
    assert_eq!(operate(OperatorSymbol::Plus, 2.0, 3.0), 5.0);
    assert_eq!(operate(OperatorSymbol::Minus, 2.0, 3.0), -1.0);
    assert_eq!(operate(OperatorSymbol::Times, 2.0, 3.0), 6.0);
    assert_abs_diff_eq!(operate(OperatorSymbol::Divide, 2.0, 3.0), 0.6666666, epsilon = 0.000001);
    assert_eq!(operate(OperatorSymbol::Percent, 7.0, 3.0), 1.0);
    assert_eq!(operate(OperatorSymbol::Percent, -7.0, 3.0), -1.0);
  }

  #[test]
  fn test_divide_by_zero() {
    assert_eq!(operate(OperatorSymbol::Divide, 5.0, 0.0), f64::INFINITY);
    assert_eq!(operate(OperatorSymbol::Divide, -5.0, 0.0), f64::NEG_INFINITY);
    assert!(operate(OperatorSymbol::Divide, 0.0, 0.0).is_nan());
    assert!(operate(OperatorSymbol::Percent, 5.0, 0.0).is_nan());
  }

  #[test]
  fn test_round_for_display() {
    assert_eq!(round_for_display(0.1 + 0.2), 0.3);
    assert_eq!(round_for_display(2.0 / 3.0), 0.67);
    assert_eq!(round_for_display(1.004), 1.0);
    assert_eq!(round_for_display(-1.006), -1.01);
    assert_eq!(round_for_display(220.0), 220.0);
  }

  #[test]
  fn test_round_for_display_non_finite() {
    assert_eq!(round_for_display(f64::INFINITY), f64::INFINITY);
    assert_eq!(round_for_display(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert!(round_for_display(f64::NAN).is_nan());
  }

  #[test]
  fn test_round_for_display_near_max() {
    assert_eq!(round_for_display(f64::MAX), f64::MAX);
    assert_eq!(round_for_display(-1e307), -1e307);
    assert!(round_for_display(1e306).is_finite());
  }
}
