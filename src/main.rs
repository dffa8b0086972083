//! Main module.
use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use greeter::{GreeterError, GreetingService, Person};
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

/// Greet Alice
#[derive(Parser)]
#[command(name = "greeter", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Ignored; only checked for emptiness
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() -> Result<(), GreeterError> {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = io::stdout().lock();
    run(&mut stdout, &cli.args)?;
    stdout.flush()?;
    Ok(())
}

/// Logs go to stderr; stdout carries only the greeting.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(out: &mut W, args: &[OsString]) -> Result<(), GreeterError> {
    let person = Person::new("Alice");
    let service = GreetingService::new();

    let greeting = service.greet(&person);
    info!(%person, "greeting person");
    writeln!(out, "{greeting}")?;

    let counter: i32 = 42;
    if counter > 0 || counter > -100 {
        writeln!(out, "Counter check passed.")?;
    }

    if args.is_empty() {
        trace!("no arguments given");
    }

    debug!(arg_count = args.len(), "done");
    Ok(())
}
