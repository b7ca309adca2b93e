use std::convert::TryFrom;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::classifier::{classify, Form};
use crate::error::EvalError;
use crate::node::Node;

/// Binary operators, declared in the order the classifier tries them
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    /// Division follows IEEE-754: a zero divisor yields an infinity or NaN
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// A well-formed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    Compound(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn compound(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Compound(op, Box::new(left), Box::new(right))
    }

    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Literal(v) => *v,
            Expr::Compound(op, l, r) => op.apply(l.evaluate(), r.evaluate()),
        }
    }
}

impl TryFrom<&Node> for Expr {
    type Error = EvalError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match classify(node)? {
            Form::Literal(v) => Ok(Expr::Literal(v)),
            Form::Compound(op, l, r) => Ok(Expr::compound(
                op,
                Expr::try_from(l)?,
                Expr::try_from(r)?,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_operator_symbols() -> Result<(), Box<dyn std::error::Error>> {
        let symbols: Vec<_> = Operator::iter().map(|op| op.to_string()).collect();
        assert_eq!(symbols, vec!["+", "-", "*", "/"]);

        assert_eq!("/".parse::<Operator>()?, Operator::Div);
        assert_eq!(Operator::Mul.as_ref(), "*");
        assert!("%".parse::<Operator>().is_err());
        assert!(" +".parse::<Operator>().is_err());
        assert!("\\".parse::<Operator>().is_err());
        Ok(())
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2., 3.), 5.);
        assert_eq!(Operator::Sub.apply(10., 4.), 6.);
        assert_eq!(Operator::Mul.apply(6., 3.), 18.);
        assert_eq!(Operator::Div.apply(7., 2.), 3.5);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Div.apply(1., 0.), f64::INFINITY);
        assert_eq!(Operator::Div.apply(-1., 0.), f64::NEG_INFINITY);
        assert!(Operator::Div.apply(0., 0.).is_nan());
    }

    #[test]
    fn test_try_from() -> Result<(), Box<dyn std::error::Error>> {
        let node: Node = r#"["+", ["*", "2", "3"], ["-", "5", "1"]]"#.parse()?;
        let expr = Expr::try_from(&node)?;

        match &expr {
            Expr::Compound(Operator::Add, l, r) => {
                assert_eq!(
                    **l,
                    Expr::compound(Operator::Mul, Expr::Literal(2.), Expr::Literal(3.))
                );
                assert_eq!(
                    **r,
                    Expr::compound(Operator::Sub, Expr::Literal(5.), Expr::Literal(1.))
                );
            }
            _ => panic!("{:?} doesn't match", expr),
        }
        assert_eq!(expr.evaluate(), 10.);
        Ok(())
    }

    #[test]
    fn test_try_from_malformed() -> Result<(), Box<dyn std::error::Error>> {
        let node: Node = r#"["+", "1", ["%", "1", "2"]]"#.parse()?;

        match Expr::try_from(&node) {
            Err(EvalError::MalformedExpression(_)) => (),
            r => panic!("{:?} doesn't match", r),
        }
        Ok(())
    }
}
