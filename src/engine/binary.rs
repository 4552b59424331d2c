use std::fmt;

use crate::{
    engine::{add, divide, multiply, subtract},
    errors::CalculationErr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn to_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn handle(&self, left: f64, right: f64) -> Result<f64, CalculationErr> {
        match self {
            Self::Add => Ok(add(left, right)),
            Self::Subtract => Ok(subtract(left, right)),
            Self::Multiply => Ok(multiply(left, right)),
            Self::Divide => divide(left, right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}
