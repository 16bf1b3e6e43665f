
use infix_calc::{CalculationMode, EvaluationError, PercentPolicy};
use infix_calc::eval::evaluate;
use infix_calc::parsing::{tokenize, to_postfix, Token};
use infix_calc::parsing::token::render;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::io::{self, BufRead};

/// Evaluate calculator expressions such as `200+10%` or `(3+4)×2`.
#[derive(Debug, Parser)]
#[command(name = "infix-calc", version, about)]
struct Cli {
  /// Expressions to evaluate. Reads one expression per line from
  /// standard input when none are given.
  expressions: Vec<String>,

  /// How to read the `%` operator.
  #[arg(long, value_enum, default_value_t = PercentArg::Contextual)]
  percent: PercentArg,

  /// Print the unrounded result.
  #[arg(long)]
  raw: bool,

  /// Print the infix tokens of each expression.
  #[arg(long)]
  show_tokens: bool,

  /// Print the postfix form of each expression.
  #[arg(long)]
  show_postfix: bool,

  /// Print one JSON object per expression.
  #[arg(long)]
  json: bool,

  /// Increase log verbosity (-v, -vv, -vvv).
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PercentArg {
  /// Percentage of the running total, or a plain fraction before × and ÷.
  Contextual,
  /// Floating-point remainder.
  Remainder,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
  expression: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  tokens: Option<Vec<Token>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  postfix: Option<Vec<Token>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  value: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<String>,
}

impl From<PercentArg> for PercentPolicy {
  fn from(arg: PercentArg) -> Self {
    match arg {
      PercentArg::Contextual => PercentPolicy::Contextual,
      PercentArg::Remainder => PercentPolicy::Remainder,
    }
  }
}

impl Cli {
  fn calculation_mode(&self) -> CalculationMode {
    let mut mode = CalculationMode::new().with_percent_policy(self.percent.into());
    mode.set_raw_output_flag(self.raw);
    mode
  }

  fn report<'a>(&self, expression: &'a str, mode: &CalculationMode) -> (Report<'a>, Result<f64, EvaluationError>) {
    let infix = tokenize(expression);
    let postfix = to_postfix(&infix);
    let result = postfix.clone()
      .map_err(EvaluationError::from)
      .and_then(|postfix| evaluate(&postfix, mode));
    let report = Report {
      expression,
      tokens: self.show_tokens.then(|| infix.clone()),
      postfix: postfix.ok().filter(|_| self.show_postfix),
      value: result.as_ref().ok().map(|v| v.to_string()),
      error: result.as_ref().err().map(|e| e.to_string()),
    };
    (report, result)
  }
}

fn init_tracing(verbose: u8) {
  let default_level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn read_stdin_expressions() -> anyhow::Result<Vec<String>> {
  let mut expressions = Vec::new();
  for line in io::stdin().lock().lines() {
    let line = line.context("failed to read expression from stdin")?;
    if !line.trim().is_empty() {
      expressions.push(line);
    }
  }
  Ok(expressions)
}

fn print_report(cli: &Cli, report: &Report<'_>) -> anyhow::Result<()> {
  if cli.json {
    let line = serde_json::to_string(report).context("failed to serialize result")?;
    println!("{line}");
    return Ok(());
  }
  if let Some(tokens) = &report.tokens {
    println!("tokens:  {}", render(tokens));
  }
  if let Some(postfix) = &report.postfix {
    println!("postfix: {}", render(postfix));
  }
  match (&report.value, &report.error) {
    (Some(value), _) => println!("{value}"),
    (None, Some(error)) => eprintln!("error: {}: {}", report.expression, error),
    (None, None) => {}
  }
  Ok(())
}

/// Evaluates and prints every expression. Fails if any of them did
/// not evaluate, which makes the process exit non-zero.
fn run(cli: &Cli, expressions: &[String]) -> anyhow::Result<()> {
  let mode = cli.calculation_mode();
  info!(count = expressions.len(), policy = ?mode.percent_policy(), "evaluating expressions");

  let mut failures = 0;
  for expression in expressions {
    let (report, result) = cli.report(expression, &mode);
    if let Err(err) = &result {
      warn!(expression = expression.as_str(), %err, "evaluation failed");
      failures += 1;
    }
    print_report(cli, &report)?;
  }

  if failures > 0 {
    anyhow::bail!("{failures} of {} expressions failed to evaluate", expressions.len());
  }
  Ok(())
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let expressions = if cli.expressions.is_empty() {
    read_stdin_expressions()?
  } else {
    cli.expressions.clone()
  };
  run(&cli, &expressions)
}
