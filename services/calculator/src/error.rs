use derive_more::Display;

use expression::EvalError;
use telemetry::IsErr;

#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),

    #[display(fmt = "Invalid Program: {}", _0)]
    InvalidProgram(String),

    #[display(fmt = "{}", _0)]
    Evaluation(EvalError),

    #[display(fmt = "Metrics Error: {}", _0)]
    MetricsError(String),
}

impl std::error::Error for AppError {}

impl From<::config::ConfigError> for AppError {
    fn from(e: ::config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidProgram(e.to_string())
    }
}

impl From<EvalError> for AppError {
    fn from(e: EvalError) -> Self {
        Self::Evaluation(e)
    }
}

// Bad programs are the caller's mistake, not an evaluator failure
impl IsErr for AppError {
    fn is_err(&self) -> bool {
        !matches!(
            self,
            AppError::InvalidProgram(_) | AppError::Evaluation(EvalError::MalformedExpression(_))
        )
    }
}
