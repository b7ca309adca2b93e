use serde::Deserialize;

use expression::Evaluator;

pub const DEFAULT_PROGRAM: &str = r#"["*", ["*", "2", "3"], "3"]"#;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Program in JSON prefix notation
    pub program: String,
    pub max_depth: Option<usize>,
    /// Dump prometheus metrics to stderr after evaluating
    pub metrics: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            program: DEFAULT_PROGRAM.to_string(),
            max_depth: None,
            metrics: false,
        }
    }
}

impl Config {
    /// Reads `APP_PROGRAM`, `APP_MAX_DEPTH` and `APP_METRICS`
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        let mut cfg = ::config::Config::new();
        cfg.merge(::config::Environment::with_prefix("APP").separator("__"))?;
        cfg.try_into()
    }

    pub fn evaluator(&self) -> Evaluator {
        match self.max_depth {
            Some(max_depth) => Evaluator::with_max_depth(max_depth),
            None => Evaluator::new(),
        }
    }
}
