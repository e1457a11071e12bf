//! Binary operators and their precedence tiers.

use crate::error::{EvalError, EvalResult};

/// A binary arithmetic operation joining two sub-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    Exponentiation,
}

/// Operator tiers, highest precedence first.
///
/// The splitter walks these from the last tier to the first, so the
/// loosest-binding operator present at the top level becomes the root.
pub const PRECEDENCE_TIERS: &[&[Operation]] = &[
    &[Operation::Exponentiation],
    &[
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulo,
    ],
    &[Operation::Addition, Operation::Subtraction],
];

impl Operation {
    pub fn from_char(c: char) -> Option<Operation> {
        match c {
            '+' => Some(Operation::Addition),
            '-' => Some(Operation::Subtraction),
            '*' => Some(Operation::Multiplication),
            '/' => Some(Operation::Division),
            '%' => Some(Operation::Modulo),
            '^' => Some(Operation::Exponentiation),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
            Operation::Modulo => '%',
            Operation::Exponentiation => '^',
        }
    }

    /// Index into [`PRECEDENCE_TIERS`]; lower binds tighter.
    pub fn tier(self) -> usize {
        PRECEDENCE_TIERS
            .iter()
            .position(|tier| tier.contains(&self))
            .unwrap_or(PRECEDENCE_TIERS.len())
    }

    /// Combine two evaluated operands.
    ///
    /// Exponentiation is not guarded and may yield NaN or infinity.
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Operation::Addition => Ok(a + b),
            Operation::Subtraction => Ok(a - b),
            Operation::Multiplication => Ok(a * b),
            Operation::Division => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operation::Modulo => {
                if b == 0.0 {
                    return Err(EvalError::ModuloByZero);
                }
                Ok(a % b)
            }
            Operation::Exponentiation => Ok(a.powf(b)),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn is_operator_char(c: char) -> bool {
    Operation::from_char(c).is_some()
}

/// `+` or `-`, the only operators that may also act as a unary sign.
pub fn is_sign_char(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Operators that may be directly followed by a unary sign, as in `2*-3`.
/// A sign after `+` or `-` is an adjacency error.
pub fn takes_signed_operand(c: char) -> bool {
    matches!(c, '*' | '/' | '%' | '^')
}
