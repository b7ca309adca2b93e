//! Decides which grammatical form a [`Node`] has.
//!
//! A node is either a literal, or a compound `[op, left, right]` whose head is
//! exactly one of the operator symbols. Forms are tried in the order literal,
//! then each [`Operator`] in declaration order; the first match wins.

use log::trace;
use nom::IResult;
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, preceded},
};
use strum::IntoEnumIterator;

use crate::error::EvalError;
use crate::expr::Operator;
use crate::node::Node;

/// The classification of a single node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Form<'a> {
    Literal(f64),
    Compound(Operator, &'a Node, &'a Node),
}

// Optional sign, then `12`, `12.`, `12.5` or `.5`
fn parse_decimal(i: &str) -> IResult<&str, &str> {
    let integer = pair(digit1, opt(preceded(char('.'), digit0)));
    let fraction = preceded(char('.'), digit1);

    recognize(pair(
        opt(one_of("+-")),
        alt((recognize(integer), recognize(fraction))),
    ))(i)
}

fn literal_value(node: &Node) -> Option<f64> {
    match node {
        Node::Number(v) if !v.is_nan() => Some(*v),
        Node::Number(_) => None,
        Node::Text(text) => match all_consuming(parse_decimal)(text.as_str()) {
            Ok((_, digits)) => digits.parse().ok(),
            Err(_) => None,
        },
        Node::List(_) => None,
    }
}

fn compound_parts(node: &Node) -> Option<(&str, &Node, &Node)> {
    match node {
        Node::List(items) => match items.as_slice() {
            [Node::Text(head), left, right] => Some((head.as_str(), left, right)),
            _ => None,
        },
        _ => None,
    }
}

pub fn is_literal(node: &Node) -> bool {
    literal_value(node).is_some()
}

/// Returns true if `node` is `[op, left, right]` with the head exactly `op`'s symbol
pub fn is_compound_with_operator(node: &Node, op: Operator) -> bool {
    matches!(compound_parts(node), Some((head, _, _)) if head == op.as_ref())
}

pub fn classify(node: &Node) -> Result<Form<'_>, EvalError> {
    if let Some(value) = literal_value(node) {
        trace!("literal {}", value);
        return Ok(Form::Literal(value));
    }

    if let Some((_, left, right)) = compound_parts(node) {
        for op in Operator::iter() {
            if is_compound_with_operator(node, op) {
                trace!("compound {}", op);
                return Ok(Form::Compound(op, left, right));
            }
        }
    }

    Err(malformed(node))
}

fn malformed(node: &Node) -> EvalError {
    let reason = match node {
        Node::List(items) => match items.split_first() {
            None => "empty expression".to_string(),
            Some((Node::Text(head), operands)) => match head.parse::<Operator>() {
                Ok(op) => format!(
                    "operator \"{}\" expects 2 operands, found {}",
                    op,
                    operands.len()
                ),
                Err(_) => format!("unrecognized operator \"{}\"", head),
            },
            Some((head, _)) => format!("expected an operator, found {}", head),
        },
        other => format!("{} is not a number", other),
    };
    EvalError::MalformedExpression(reason)
}
