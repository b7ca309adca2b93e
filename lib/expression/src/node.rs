use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::expr::Expr;

/// An expression as the caller wrote it, before classification.
///
/// Mirrors the JSON shape of a program: `["-", "10", ["*", 2, "3"]]`. Nothing
/// here guarantees the node is well formed, see [`crate::classify`]. A
/// `Number` holding NaN is not a literal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Node {
    Number(f64),
    Text(String),
    List(Vec<Node>),
}

impl Node {
    pub fn text<S: Into<String>>(text: S) -> Node {
        Node::Text(text.into())
    }

    /// Builds the tagged list `[op, left, right]`
    pub fn compound(op: &str, left: Node, right: Node) -> Node {
        Node::List(vec![Node::text(op), left, right])
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

// Non-finite literals become `inf`/`NaN` text, which survives JSON but does not
// classify as a literal
impl From<&Expr> for Node {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Literal(v) => Node::Text(v.to_string()),
            Expr::Compound(op, l, r) => {
                Node::compound(op.as_ref(), Node::from(&**l), Node::from(&**r))
            }
        }
    }
}

impl FromStr for Node {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
