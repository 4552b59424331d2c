use tracing::debug;

use crate::{engine::binary::BinaryOperator, errors::CalculationErr};

pub mod binary;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails for both `0.0` and `-0.0` divisors.
pub fn divide(a: f64, b: f64) -> Result<f64, CalculationErr> {
    if b == 0.0 {
        return Err(CalculationErr::DivisionByZero);
    }

    Ok(a / b)
}

/// Selects the operation by exact match on `symbol`, no trimming.
pub fn dispatch(symbol: &str, a: f64, b: f64) -> Result<f64, CalculationErr> {
    let Some(operator) = BinaryOperator::from_symbol(symbol) else {
        debug!(symbol, "unrecognised operator");
        return Err(CalculationErr::InvalidOperation(symbol.to_string()));
    };

    let result = operator.handle(a, b);
    debug!(%operator, a, b, ?result, "dispatched");
    result
}
