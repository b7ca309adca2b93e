#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;

use std::convert::Infallible;

use prometheus::{Encoder, Histogram, HistogramVec, IntCounter, IntCounterVec, TextEncoder};

lazy_static! {
    static ref CALLS: IntCounterVec = register_int_counter_vec!(
        "calls_total",
        "Calls by outcome",
        &["app_layer", "class_function", "outcome"]
    )
    .unwrap();
    static ref DURATION: HistogramVec = register_histogram_vec!(
        "call_duration_seconds",
        "Call duration in seconds",
        &["app_layer", "class_function"]
    )
    .unwrap();
}

// This trait allows certain classes of errors to not be considered failures
pub trait IsErr {
    fn is_err(&self) -> bool {
        true
    }
}

impl IsErr for Infallible {
    fn is_err(&self) -> bool {
        false
    }
}

/// Call outcome and duration metrics for one function of one layer
#[derive(Clone)]
pub struct Measure {
    success: IntCounter,
    failure: IntCounter,
    duration: Histogram,
}

impl Measure {
    pub fn new(layer: &str, function: &str) -> Measure {
        Measure {
            success: CALLS.with_label_values(&[layer, function, "success"]),
            failure: CALLS.with_label_values(&[layer, function, "failure"]),
            duration: DURATION.with_label_values(&[layer, function]),
        }
    }

    /// Runs `inner`, timing it and counting the outcome
    pub fn stats<F, T, E>(&self, inner: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: IsErr,
    {
        let r = self.duration.observe_closure_duration(inner);
        let counter = match &r {
            Err(e) if e.is_err() => &self.failure,
            _ => &self.success,
        };
        counter.inc();
        r
    }

    pub fn successes(&self) -> u64 {
        self.success.get() as u64
    }

    pub fn failures(&self) -> u64 {
        self.failure.get() as u64
    }
}

/// Renders every registered metric in the prometheus text format
pub fn encode() -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    enum TestError {
        Fatal,
        Recoverable,
    }

    impl IsErr for TestError {
        fn is_err(&self) -> bool {
            match self {
                Self::Fatal => true,
                Self::Recoverable => false,
            }
        }
    }

    fn slow<T>(r: T) -> T {
        std::thread::sleep(Duration::from_millis(50));
        r
    }

    fn assert_timed(layer: &str, function: &str) {
        let duration = DURATION.with_label_values(&[layer, function]);
        assert_eq!(duration.get_sample_count(), 1);
        assert!(duration.get_sample_sum() >= 0.05);
    }

    #[test]
    fn test_success() {
        let m = Measure::new("layer", "test_success");
        let _ = m.stats(|| slow(Ok::<_, Infallible>("")));

        assert_eq!((m.successes(), m.failures()), (1, 0));
        assert_timed("layer", "test_success");
    }

    #[test]
    fn test_failure() {
        let m = Measure::new("layer", "test_failure");
        let _ = m.stats(|| slow(Err::<(), _>(TestError::Fatal)));

        assert_eq!((m.successes(), m.failures()), (0, 1));
        assert_timed("layer", "test_failure");
    }

    #[test]
    fn test_recoverable() {
        let m = Measure::new("layer", "test_recoverable");
        let _ = m.stats(|| slow(Err::<(), _>(TestError::Recoverable)));

        assert_eq!((m.successes(), m.failures()), (1, 0));
        assert_timed("layer", "test_recoverable");
    }

    #[test]
    fn test_encode() -> Result<(), Box<dyn std::error::Error>> {
        let m = Measure::new("layer", "test_encode");
        m.stats(|| Ok::<_, Infallible>(()))?;

        let text = encode()?;
        assert!(text.contains(
            "calls_total{app_layer=\"layer\",class_function=\"test_encode\",outcome=\"success\"} 1"
        ));
        Ok(())
    }
}
