
use rpnconv::Expression;
use rpnconv::eval;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use std::process::ExitCode;

/// Converts an infix arithmetic expression to postfix notation and
/// evaluates it.
#[derive(Debug, Parser)]
#[command(name = "rpnconv", version)]
struct Args {
  /// The expression, in infix notation unless `--postfix` is given.
  expr: String,

  /// Treat EXPR as postfix text and evaluate it directly.
  #[arg(long)]
  postfix: bool,

  #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
  format: OutputFormat,

  /// Enable debug logging. `RUST_LOG` takes precedence.
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
  Pretty,
  Json,
  LegacyJson,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
  infix: Option<&'a str>,
  postfix: &'a str,
  result: Option<f64>,
  error: Option<String>,
}

fn main() -> ExitCode {
  let args = Args::parse();
  init_logging(args.verbose);
  match run(&args) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("error: {:#}", err);
      ExitCode::FAILURE
    }
  }
}

fn init_logging(verbose: bool) {
  let default_filter = if verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
  let expr = if args.postfix {
    None
  } else {
    let mut expr = Expression::from_infix(args.expr.as_str());
    expr.convert_to_postfix();
    log::debug!("converted {:?} to {:?}", expr.infix(), expr.postfix());
    Some(expr)
  };
  let postfix = expr.as_ref().map_or(args.expr.as_str(), |expr| expr.postfix());
  let result = eval::evaluate_postfix(postfix);

  match args.format {
    OutputFormat::Pretty => {
      if let Some(expr) = &expr {
        println!("infix:   {}", expr.infix());
      }
      println!("postfix: {}", postfix.trim_end());
      if let Ok(value) = &result {
        println!("result:  {}", value);
      }
    }
    OutputFormat::Json => {
      let report = Report {
        infix: expr.as_ref().map(|expr| expr.infix()),
        postfix,
        result: result.as_ref().ok().copied(),
        error: result.as_ref().err().map(|err| err.to_string()),
      };
      let json = serde_json::to_string(&report).context("Failed to serialize report")?;
      println!("{}", json);
    }
    OutputFormat::LegacyJson => {
      let Some(expr) = &expr else {
        bail!("--format legacy-json requires an infix expression");
      };
      println!("{}", expr.to_json());
      if let Ok(value) = &result {
        println!("{}", value);
      }
    }
  }

  match result {
    Ok(_) => Ok(ExitCode::SUCCESS),
    Err(err) => {
      eprintln!("error: {}", err);
      Ok(ExitCode::FAILURE)
    }
  }
}
