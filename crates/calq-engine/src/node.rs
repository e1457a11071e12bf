//! The expression tree.
//!
//! There is no tokenizer. A node is built straight from its source text by
//! finding the loosest-binding operator at parenthesis depth 0, splitting
//! the text around it and recursing into both halves. Text without such an
//! operator is a leaf: either a parenthesized group, whose interior is
//! parsed as a fresh expression, or a numeric literal.
//!
//! # Examples
//!
//! ```
//! use calq_engine::{ExpressionNode, Operation};
//!
//! let node = ExpressionNode::parse("2 - 2 - 1").unwrap();
//! assert_eq!(node.operation(), Some(Operation::Subtraction));
//! assert_eq!(node.left().unwrap().text(), "2-2");
//! assert_eq!(node.evaluate().unwrap(), -1.0);
//! ```

use log::trace;

use crate::config::EvalConfig;
use crate::error::{EvalError, EvalResult};
use crate::operator::{
    is_operator_char, is_sign_char, takes_signed_operand, Operation, PRECEDENCE_TIERS,
};

/// One (sub)expression. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionNode {
    text: String,
    kind: NodeKind,
}

/// What a node is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Numeric literal, parsed when the node is evaluated.
    Number,

    /// `( ... )` with no operator outside the outer pair.
    Group(Box<ExpressionNode>),

    /// Two operands joined by the operator at `position` in the node's text.
    Binary {
        operation: Operation,
        position: usize,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// Build and validate a tree using the default [`EvalConfig`].
    pub fn parse(source: &str) -> EvalResult<Self> {
        Self::parse_with(source, &EvalConfig::default())
    }

    /// Build and validate a tree.
    pub fn parse_with(source: &str, config: &EvalConfig) -> EvalResult<Self> {
        Self::build(source, 0, config)
    }

    fn build(source: &str, nesting: usize, config: &EvalConfig) -> EvalResult<Self> {
        if nesting > config.max_depth {
            return Err(EvalError::NestingTooDeep {
                limit: config.max_depth,
            });
        }

        let text = normalize(source);
        let kind = match resolve_split(&find_operator_positions(&text)) {
            Some((operation, position)) => {
                trace!("splitting `{text}` at `{operation}` (index {position})");
                // Children are built before this node is validated, so the
                // innermost failure is the one reported.
                let left = Self::build(&text[..position], nesting, config)?;
                let right = Self::build(&text[position + 1..], nesting, config)?;
                validate(&text)?;
                NodeKind::Binary {
                    operation,
                    position,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            }
            None => {
                validate(&text)?;
                if is_group(&text) {
                    let interior = Self::build(&text[1..text.len() - 1], nesting + 1, config)?;
                    NodeKind::Group(Box::new(interior))
                } else {
                    NodeKind::Number
                }
            }
        };

        Ok(Self { text, kind })
    }

    /// Evaluate the tree depth-first, left operand before right.
    pub fn evaluate(&self) -> EvalResult<f64> {
        match &self.kind {
            NodeKind::Binary {
                operation,
                left,
                right,
                ..
            } => {
                let a = left.evaluate()?;
                let b = right.evaluate()?;
                operation.apply(a, b)
            }
            NodeKind::Group(interior) => interior.evaluate(),
            NodeKind::Number => parse_number(&self.text),
        }
    }

    /// The normalized text this node was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn operation(&self) -> Option<Operation> {
        match &self.kind {
            NodeKind::Binary { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Byte index of the splitting operator within [`text`](Self::text).
    pub fn operator_position(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Binary { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&ExpressionNode> {
        match &self.kind {
            NodeKind::Binary { left, .. } => Some(left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&ExpressionNode> {
        match &self.kind {
            NodeKind::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self.kind, NodeKind::Binary { .. })
    }

    /// Number of levels below this node. A literal has depth 0.
    pub fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Number => 0,
            NodeKind::Group(interior) => 1 + interior.depth(),
            NodeKind::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl std::fmt::Display for ExpressionNode {
    /// Fully parenthesized form, e.g. `((2 - 2) - 1)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            NodeKind::Number => f.write_str(&self.text),
            NodeKind::Group(interior) => write!(f, "{interior}"),
            NodeKind::Binary {
                operation,
                left,
                right,
                ..
            } => write!(f, "({left} {operation} {right})"),
        }
    }
}

/// Strip all whitespace; blank input becomes `"0"`.
pub fn normalize(source: &str) -> String {
    if source.trim().is_empty() {
        return "0".to_string();
    }
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Right-most depth-0 position of each operator kind, in order of first
/// appearance.
///
/// A `+` or `-` directly after `*`, `/`, `%` or `^` is a unary sign and is
/// skipped, so `2*-3` only offers the `*`.
pub fn find_operator_positions(text: &str) -> Vec<(Operation, usize)> {
    let mut positions: Vec<(Operation, usize)> = Vec::new();
    let mut opening = 0usize;
    let mut closing = 0usize;
    let mut previous: Option<char> = None;

    for (index, c) in text.char_indices() {
        match c {
            '(' => opening += 1,
            ')' => closing += 1,
            _ => {
                if let Some(operation) = Operation::from_char(c) {
                    let unary = is_sign_char(c) && previous.is_some_and(takes_signed_operand);
                    if opening == closing && !unary {
                        match positions.iter_mut().find(|(op, _)| *op == operation) {
                            Some(entry) => entry.1 = index,
                            None => positions.push((operation, index)),
                        }
                    }
                }
            }
        }
        previous = Some(c);
    }

    positions
}

/// Pick the split point: the loosest tier that has a candidate, and within
/// it the right-most position.
pub fn resolve_split(candidates: &[(Operation, usize)]) -> Option<(Operation, usize)> {
    PRECEDENCE_TIERS.iter().rev().find_map(|tier| {
        candidates
            .iter()
            .filter(|(operation, _)| tier.contains(operation))
            .max_by_key(|(_, position)| *position)
            .copied()
    })
}

fn validate(text: &str) -> EvalResult<()> {
    if text.matches('(').count() != text.matches(')').count() {
        return Err(EvalError::UnbalancedParentheses {
            expression: text.to_string(),
        });
    }

    let chars: Vec<char> = text.chars().collect();
    for pair in chars.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let unary = takes_signed_operand(current) && is_sign_char(next);
        if is_operator_char(current) && is_operator_char(next) && !unary {
            return Err(EvalError::AdjacentOperators {
                pair: format!("{current}{next}"),
            });
        }
        if current == '(' && next == ')' {
            return Err(EvalError::EmptyParentheses);
        }
    }

    Ok(())
}

fn is_group(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('(') && text.ends_with(')')
}

/// Parse a literal, accepting `,` as the decimal separator.
fn parse_number(text: &str) -> EvalResult<f64> {
    let invalid = || EvalError::InvalidNumber {
        text: text.to_string(),
    };

    // Leading signs never reach here: a sign at index 0 is always a split
    // candidate, so a literal is digits and at most one separator.
    let literal = text.replace(',', ".");
    let well_formed = literal.chars().any(|c| c.is_ascii_digit())
        && literal.chars().all(|c| c.is_ascii_digit() || c == '.')
        && literal.matches('.').count() <= 1;
    if !well_formed {
        return Err(invalid());
    }

    literal.parse::<f64>().map_err(|_| invalid())
}
