use log::{debug, trace};

use crate::classifier::{classify, Form};
use crate::error::EvalError;
use crate::node::Node;

/// Evaluates nodes by structural recursion, optionally bounding the nesting depth.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    max_depth: Option<usize>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Default::default()
    }

    /// Rejects trees with more than `max_depth` nested compound levels
    pub fn with_max_depth(max_depth: usize) -> Evaluator {
        Evaluator {
            max_depth: Some(max_depth),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn evaluate(&self, node: &Node) -> Result<f64, EvalError> {
        let value = self.evaluate_at(node, 0)?;
        debug!("{} => {}", node, value);
        Ok(value)
    }

    fn evaluate_at(&self, node: &Node, depth: usize) -> Result<f64, EvalError> {
        match classify(node)? {
            Form::Literal(value) => Ok(value),
            Form::Compound(op, left, right) => {
                if let Some(max_depth) = self.max_depth {
                    if depth >= max_depth {
                        return Err(EvalError::DepthExceeded(max_depth));
                    }
                }

                let left = self.evaluate_at(left, depth + 1)?;
                let right = self.evaluate_at(right, depth + 1)?;
                trace!("{} {} {} at depth {}", left, op, right, depth);
                Ok(op.apply(left, right))
            }
        }
    }
}

/// Evaluates `node` with no depth limit
pub fn evaluate(node: &Node) -> Result<f64, EvalError> {
    Evaluator::default().evaluate(node)
}
