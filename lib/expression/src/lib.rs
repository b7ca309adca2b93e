//! Evaluator for a prefix-notation arithmetic language.
//!
//! Programs are nested lists such as `["+", ["*", "2", "3"], "4"]`. A [`Node`]
//! holds such a list as written, the [`classifier`] decides which form a node
//! has, and [`evaluate`] recurses through the tree applying one rule per form.
//! Well-formed trees can also be converted to the typed [`Expr`].

pub use classifier::{classify, is_compound_with_operator, is_literal, Form};
pub use error::EvalError;
pub use evaluator::{evaluate, Evaluator};
pub use expr::{Expr, Operator};
pub use node::Node;

pub mod classifier;
mod error;
mod evaluator;
mod expr;
mod node;
