use crate::shell::Outcome;

/// Shortest round-trip digits, always showing a fractional part, with a signed
/// two digit exponent when one is needed (`5.0`, `1e+16`, `1e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        return text.to_string();
    }

    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Calculated {
            left,
            symbol,
            right,
            result,
        } => {
            let value = match result {
                Ok(value) => format_number(*value),
                Err(e) => format!("Error: {e}"),
            };
            format!(
                "\nResult: {} {} {} = {}",
                format_number(*left),
                symbol,
                format_number(*right),
                value
            )
        }
        Outcome::Rejected(e) => format!("Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalculationErr;

    #[test]
    fn test_format_number_integral_keeps_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-15.0), "-15.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_format_number_shortest_digits() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_number_exponent() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(2.5e100), "2.5e+100");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn test_render_calculated_value() {
        let outcome = Outcome::Calculated {
            left: 5.0,
            symbol: "+".to_string(),
            right: 3.0,
            result: Ok(8.0),
        };
        assert_eq!(render(&outcome), "\nResult: 5.0 + 3.0 = 8.0");
    }

    #[test]
    fn test_render_calculated_error() {
        let outcome = Outcome::Calculated {
            left: 10.0,
            symbol: "/".to_string(),
            right: 0.0,
            result: Err(CalculationErr::DivisionByZero),
        };
        assert_eq!(
            render(&outcome),
            "\nResult: 10.0 / 0.0 = Error: Division by zero"
        );

        let outcome = Outcome::Calculated {
            left: 1.0,
            symbol: "%".to_string(),
            right: 2.0,
            result: Err(CalculationErr::InvalidOperation("%".to_string())),
        };
        assert_eq!(
            render(&outcome),
            "\nResult: 1.0 % 2.0 = Error: Invalid operation"
        );
    }

    #[test]
    fn test_render_rejected() {
        let outcome = Outcome::Rejected(CalculationErr::InvalidNumber("abc".to_string()));
        assert_eq!(render(&outcome), "Error: Please enter valid numbers");
    }
}
