
//! Settings which change how an expression is evaluated.

mod calculation;

pub use calculation::{CalculationMode, PercentPolicy};
