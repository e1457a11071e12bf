//! calq engine
//!
//! Evaluates arithmetic expressions such as `((1 + 2) * 43) / 3.14 + 2 ^ 3`
//! to a single `f64`. Supports `+ - * / % ^`, parentheses, unary signs and
//! both `.` and `,` as decimal separators.
//!
//! Parsing works directly on the string: see [`node`] for how an expression
//! is split into a tree.
//!
//! # Example
//!
//! ```
//! assert_eq!(calq_engine::evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(calq_engine::compute("1/0"), "Division by zero");
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod operator;

pub use config::EvalConfig;
pub use error::{ErrorKind, EvalError, EvalResult};
pub use node::{ExpressionNode, NodeKind};
pub use operator::Operation;

use log::debug;

/// Evaluate an expression with the default configuration.
pub fn evaluate(source: &str) -> EvalResult<f64> {
    evaluate_with(source, &EvalConfig::default())
}

/// Evaluate an expression.
pub fn evaluate_with(source: &str, config: &EvalConfig) -> EvalResult<f64> {
    let result = ExpressionNode::parse_with(source, config).and_then(|node| node.evaluate());
    match &result {
        Ok(value) => debug!("evaluated `{source}` = {value}"),
        Err(e) => debug!("failed to evaluate `{source}`: {e}"),
    }
    result
}

/// Build and validate an expression without evaluating it.
///
/// Literal and arithmetic errors (bad numbers, zero divisors) only show up
/// during evaluation and are not reported here.
pub fn check(source: &str) -> EvalResult<()> {
    ExpressionNode::parse(source).map(|_| ())
}

/// Render a result the way front ends display it.
pub fn format_result(value: f64) -> String {
    value.to_string()
}

/// String in, string out: the formatted result, or the error message.
pub fn compute(source: &str) -> String {
    match evaluate(source) {
        Ok(value) => format_result(value),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_with_config() {
        let config = EvalConfig::new().with_max_depth(1);
        assert_eq!(evaluate_with("(1)+(2)+3", &config), Ok(6.0));
        assert_eq!(
            evaluate_with("((1))+2", &config),
            Err(EvalError::NestingTooDeep { limit: 1 })
        );
    }

    #[test]
    fn test_check_skips_evaluation() {
        assert_eq!(check("1/0"), Ok(()));
        assert_eq!(check("abc"), Ok(()));
        assert_eq!(
            check("(1"),
            Err(EvalError::UnbalancedParentheses {
                expression: "(1".into()
            })
        );
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(3.5), "3.5");
        assert_eq!(format_result(-1.0), "-1");
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_compute() {
        assert_eq!(compute("1,5 + 2"), "3.5");
        assert_eq!(compute(""), "0");
        assert_eq!(
            compute("2**2"),
            "Operators cannot directly follow each other: **"
        );
        assert_eq!(compute("5 % 0"), "Modulo by zero");
        assert_eq!(
            compute("(1"),
            "Not all parentheses are closed in expression: (1"
        );
    }

    #[test]
    fn test_independent_evaluations() {
        assert_eq!(compute("1+1"), "2");
        assert_eq!(compute("x"), "Number has an invalid format: x");
        assert_eq!(compute("1+1"), "2");
    }
}
