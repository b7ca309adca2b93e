use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum EvalError {
    #[display(fmt = "Malformed Expression: {}", _0)]
    MalformedExpression(String),

    #[display(fmt = "Expression nested deeper than {} levels", _0)]
    DepthExceeded(usize),
}

impl std::error::Error for EvalError {}
