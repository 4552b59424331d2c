use std::{error::Error, io};

use clap::Parser;
use rustyline::DefaultEditor;
use tracing_subscriber::{EnvFilter, fmt};

use crate::shell::Shell;

pub mod engine;
pub mod errors;
pub mod shell;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Keep asking for calculations until end of input
    #[arg(short, long)]
    repeat: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    debug: bool,
}

fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,calc=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.debug);

    let editor = DefaultEditor::new()?;
    let mut shell = Shell::new(editor, io::stdout());
    shell.run(args.repeat)?;

    Ok(())
}
