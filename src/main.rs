use std::process::ExitCode;

use clap::Parser;
use yardcalc::{
    config::{DEFAULT_STACK_CAPACITY, EngineConfig},
    error::EngineError,
    interpreter::evaluator::core::Evaluator,
    render_postfix, to_postfix_with,
};

/// yardcalc evaluates arithmetic expressions with the shunting-yard
/// algorithm.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the postfix (reverse Polish) form of the expression before its
    /// value.
    #[arg(short, long)]
    rpn: bool,

    /// Maximum number of entries on each internal stack.
    #[arg(long, default_value_t = DEFAULT_STACK_CAPACITY)]
    capacity: usize,

    /// The expression to evaluate, e.g. "2 * max(1, 3, 4)".
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=yardcalc=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Transforms the expression once, optionally prints the program, then runs
/// it.
fn run(args: &Args) -> Result<f64, EngineError> {
    let config = EngineConfig { stack_capacity: args.capacity };
    let program = to_postfix_with(&args.expression, &config)?;

    if args.rpn {
        println!("{}", render_postfix(&program));
    }

    Evaluator::new(config.stack_capacity).eval(&program)
}

fn main() -> ExitCode {
    init_tracing();

    match run(&Args::parse()) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
