//! Errors raised while building or evaluating an expression.
//!
//! Every failure is terminal for the current input: it is returned at the
//! point of detection and propagated unchanged to the caller.

/// Shorthand for results produced by the engine.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation error.
///
/// The `Display` output is the human-readable message front ends show
/// in place of a numeric result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("Not all parentheses are closed in expression: {expression}")]
    UnbalancedParentheses { expression: String },

    #[error("Operators cannot directly follow each other: {pair}")]
    AdjacentOperators { pair: String },

    #[error("The expression cannot contain empty parentheses")]
    EmptyParentheses,

    #[error("Number has an invalid format: {text}")]
    InvalidNumber { text: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Expression is nested deeper than the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Fieldless classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnbalancedParentheses,
    AdjacentOperators,
    EmptyParentheses,
    InvalidNumber,
    DivisionByZero,
    ModuloByZero,
    NestingTooDeep,
}

impl ErrorKind {
    /// Stable snake_case name, suitable for machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnbalancedParentheses => "unbalanced_parentheses",
            ErrorKind::AdjacentOperators => "adjacent_operators",
            ErrorKind::EmptyParentheses => "empty_parentheses",
            ErrorKind::InvalidNumber => "invalid_number",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::ModuloByZero => "modulo_by_zero",
            ErrorKind::NestingTooDeep => "nesting_too_deep",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
            EvalError::AdjacentOperators { .. } => ErrorKind::AdjacentOperators,
            EvalError::EmptyParentheses => ErrorKind::EmptyParentheses,
            EvalError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::ModuloByZero => ErrorKind::ModuloByZero,
            EvalError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_carries_offending_text() {
        let err = EvalError::InvalidNumber {
            text: "1.2.3".into(),
        };
        assert_eq!(err.to_string(), "Number has an invalid format: 1.2.3");
    }

    #[test]
    fn test_adjacent_operator_message() {
        let err = EvalError::AdjacentOperators { pair: "**".into() };
        assert_eq!(
            err.to_string(),
            "Operators cannot directly follow each other: **"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EvalError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
        assert_eq!(ErrorKind::ModuloByZero.as_str(), "modulo_by_zero");
        assert_eq!(
            EvalError::NestingTooDeep { limit: 4 }.kind().to_string(),
            "nesting_too_deep"
        );
    }
}
