#[macro_use]
extern crate lazy_static;

use log::{error, info};

use expression::Node;
use telemetry::Measure;

use crate::config::Config;
use crate::error::AppError;

mod config;
mod error;

lazy_static! {
    static ref EVALUATE_MEASURE: Measure = Measure::new("evaluator", "evaluate");
}

/// Integral values print without a fractional part, non-finite ones as `Infinity`/`NaN`
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        n.to_string()
    }
}

fn run(config: &Config, source: Option<String>) -> Result<String, AppError> {
    let source = source.unwrap_or_else(|| config.program.clone());

    let program: Node = source.parse()?;
    info!("evaluating {}", program);

    let evaluator = config.evaluator();
    let result =
        EVALUATE_MEASURE.stats(|| evaluator.evaluate(&program).map_err(AppError::from))?;

    if config.metrics {
        let metrics = telemetry::encode().map_err(|e| AppError::MetricsError(e.to_string()))?;
        eprint!("{}", metrics);
    }

    Ok(format_number(result))
}

fn main() {
    env_logger::init();

    let result = Config::from_env()
        .map_err(AppError::from)
        .and_then(|config| run(&config, std::env::args().nth(1)));

    match result {
        Ok(result) => println!("result: {}", result),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
