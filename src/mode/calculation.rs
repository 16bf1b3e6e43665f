
use bitflags::bitflags;

/// The calculator's current calculation mode includes several bitwise
/// flags indicating how to evaluate expressions.
///
/// This structure is designed to be cheap to clone, but its exact
/// implementation is private.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculationMode {
  inner: CalculationModeBits,
}

bitflags! {
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
  struct CalculationModeBits: u8 {
    const REMAINDER_PERCENT = 0b0001;
    const RAW_OUTPUT = 0b0010;
  }
}

/// How the `%` operator is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentPolicy {
  /// `%` is a percentage whose meaning depends on the operator that
  /// follows it: `200 + 10%` is `220`, while `200 × 10%` is `20`.
  Contextual,
  /// `%` is the binary floating-point remainder, so `7 % 3` is `1`.
  Remainder,
}

impl CalculationMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// The remainder-percent flag is off by default, in which case `%`
  /// follows [`PercentPolicy::Contextual`]. When the flag is on, every
  /// `%` in the expression is a remainder operator instead.
  pub fn has_remainder_percent_flag(&self) -> bool {
    self.inner.contains(CalculationModeBits::REMAINDER_PERCENT)
  }

  pub fn set_remainder_percent_flag(&mut self, mode: bool) {
    self.inner.set(CalculationModeBits::REMAINDER_PERCENT, mode);
  }

  /// The raw-output flag is off by default. With it off, the final
  /// result is rounded to two decimal places to hide binary floating
  /// point noise. Intermediate values are never rounded.
  pub fn has_raw_output_flag(&self) -> bool {
    self.inner.contains(CalculationModeBits::RAW_OUTPUT)
  }

  pub fn set_raw_output_flag(&mut self, mode: bool) {
    self.inner.set(CalculationModeBits::RAW_OUTPUT, mode);
  }

  pub fn percent_policy(&self) -> PercentPolicy {
    if self.has_remainder_percent_flag() {
      PercentPolicy::Remainder
    } else {
      PercentPolicy::Contextual
    }
  }

  pub fn with_percent_policy(mut self, policy: PercentPolicy) -> Self {
    self.set_remainder_percent_flag(policy == PercentPolicy::Remainder);
    self
  }

  pub fn with_raw_output(mut self) -> Self {
    self.set_raw_output_flag(true);
    self
  }
}
