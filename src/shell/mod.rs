use std::io::Write;

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, warn};

use crate::{
    engine::dispatch,
    errors::{CalculationErr, ShellErr},
    shell::render::render,
};

pub mod render;

pub const BANNER: &str = "=== Simple Calculator ===";
pub const FIRST_PROMPT: &str = "Enter first number: ";
pub const OPERATOR_PROMPT: &str = "Enter operation (+, -, *, /): ";
pub const SECOND_PROMPT: &str = "Enter second number: ";

pub trait Prompter {
    fn prompt(&mut self, message: &str) -> Result<String, ReadlineError>;
}

impl Prompter for DefaultEditor {
    fn prompt(&mut self, message: &str) -> Result<String, ReadlineError> {
        self.readline(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Calculated {
        left: f64,
        symbol: String,
        right: f64,
        result: Result<f64, CalculationErr>,
    },
    Rejected(CalculationErr),
}

pub fn parse_operand(text: &str) -> Result<f64, CalculationErr> {
    text.trim().parse::<f64>().map_err(|_| {
        debug!(text, "operand is not a number");
        CalculationErr::InvalidNumber(text.to_string())
    })
}

pub struct Shell<P: Prompter, W: Write> {
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Shell<P, W> {
    pub fn new(prompter: P, out: W) -> Self {
        Self { prompter, out }
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    pub fn banner(&mut self) -> Result<(), ShellErr> {
        writeln!(self.out, "{BANNER}")?;
        Ok(())
    }

    pub fn read_calculation(&mut self) -> Result<Outcome, ShellErr> {
        let left = match parse_operand(&self.prompter.prompt(FIRST_PROMPT)?) {
            Ok(x) => x,
            Err(e) => return Ok(Outcome::Rejected(e)),
        };

        let symbol = self.prompter.prompt(OPERATOR_PROMPT)?;

        let right = match parse_operand(&self.prompter.prompt(SECOND_PROMPT)?) {
            Ok(x) => x,
            Err(e) => return Ok(Outcome::Rejected(e)),
        };

        let result = dispatch(&symbol, left, right);
        Ok(Outcome::Calculated {
            left,
            symbol,
            right,
            result,
        })
    }

    pub fn run_once(&mut self) -> Result<Outcome, ShellErr> {
        let outcome = self.read_calculation()?;
        writeln!(self.out, "{}", render(&outcome))?;
        self.out.flush()?;
        Ok(outcome)
    }

    pub fn run(&mut self, repeat: bool) -> Result<(), ShellErr> {
        self.banner()?;

        loop {
            match self.run_once() {
                Ok(_) if repeat => continue,
                Ok(_) => break,
                Err(ShellErr::Readline(ReadlineError::Interrupted)) => {
                    writeln!(self.out, "CTRL-C")?;
                    break;
                }
                Err(ShellErr::Readline(ReadlineError::Eof)) => {
                    writeln!(self.out, "CTRL-D")?;
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "session aborted");
                    return Err(e);
                }
            }
        }

        debug!("session finished");
        Ok(())
    }
}
