use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationErr {
    #[error("Please enter valid numbers")]
    InvalidNumber(String),
    #[error("Invalid operation")]
    InvalidOperation(String),
    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(Error, Debug)]
pub enum ShellErr {
    #[error("{0}")]
    Readline(ReadlineError),
    #[error("{0}")]
    Io(io::Error),
}

impl From<ReadlineError> for ShellErr {
    fn from(value: ReadlineError) -> Self {
        Self::Readline(value)
    }
}

impl From<io::Error> for ShellErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_err_messages() {
        assert_eq!(
            CalculationErr::InvalidNumber("abc".to_string()).to_string(),
            "Please enter valid numbers"
        );
        assert_eq!(
            CalculationErr::InvalidOperation("%".to_string()).to_string(),
            "Invalid operation"
        );
        assert_eq!(CalculationErr::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_shell_err_from_readline() {
        let err: ShellErr = ReadlineError::Eof.into();
        assert!(matches!(err, ShellErr::Readline(ReadlineError::Eof)));
    }
}
