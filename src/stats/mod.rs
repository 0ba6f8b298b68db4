//! Hypothesis test catalog and result types
//!
//! This module implements a fixed menu of classical hypothesis tests computed
//! from numeric summary inputs (sample sizes, means, standard deviations,
//! counts). Each test derives a statistic, critical value(s) and p-value for
//! a chosen significance level and tail direction, and can render the result
//! as an annotated sampling-distribution figure via [`crate::vis`].
//!
//! The catalog is a closed enum ([`catalog::HypothesisTest`]); the string
//! identifiers of the original request protocol survive as serde tags, so a
//! JSON body selects a test by name while unknown names and malformed
//! parameter shapes are rejected at the boundary.

pub mod catalog;
pub mod distributions;

use crate::core::error::{Error, Result};
use crate::vis::config::PlotStyle;
use serde::{Deserialize, Serialize};

pub use catalog::{HypothesisTest, TEST_IDS};
pub use distributions::{Distribution, SamplingDistribution};

/// Which side(s) of the sampling distribution form the rejection region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailType {
    /// H₁: parameter is below the hypothesized value
    Left,
    /// H₁: parameter is above the hypothesized value
    Right,
    /// H₁: parameter differs from the hypothesized value
    TwoSided,
}

impl TailType {
    /// Parse the wire encoding used by callers (1=left, 2=right, 3=two-sided).
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(TailType::Left),
            2 => Ok(TailType::Right),
            3 => Ok(TailType::TwoSided),
            other => Err(Error::InvalidTailCode(other)),
        }
    }

    /// The wire encoding of this tail type.
    pub fn code(&self) -> i64 {
        match self {
            TailType::Left => 1,
            TailType::Right => 2,
            TailType::TwoSided => 3,
        }
    }
}

/// Critical value(s) bounding the rejection region.
///
/// Two-sided tests always carry a symmetric pair (α/2 of probability mass in
/// each tail); one-sided tests carry exactly one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CriticalValues {
    One(f64),
    Symmetric { lower: f64, upper: f64 },
}

impl CriticalValues {
    /// The boundary of the upper rejection region (or the single boundary).
    pub fn upper(&self) -> f64 {
        match *self {
            CriticalValues::One(value) => value,
            CriticalValues::Symmetric { upper, .. } => upper,
        }
    }
}

/// Outcome of evaluating a hypothesis test: the computed statistic together
/// with everything the renderer needs to draw the standard figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Human-readable test title
    pub test_name: String,
    /// Symbol of the test statistic ("z", "t", "χ²")
    pub stat_symbol: String,
    /// Computed test statistic
    pub statistic: f64,
    /// P-value of the test
    pub p_value: f64,
    /// Significance level the critical values were derived at
    pub alpha: f64,
    /// Effective tail direction (always [`TailType::Right`] for chi-square)
    pub tail: TailType,
    /// Degrees of freedom (if applicable)
    pub degrees_of_freedom: Option<f64>,
    /// Critical value(s) at the given significance level
    pub critical_values: CriticalValues,
    /// Sampling distribution of the statistic under H₀
    pub distribution: SamplingDistribution,
    /// Formatted lines for the figure's info panel
    pub info_lines: Vec<String>,
}

/// A complete test invocation as received over the JSON boundary.
///
/// The `test` field is the catalog identifier (e.g. `"one_sample_t_test"`);
/// the remaining keys are that test's parameters, `alpha`, and the integer
/// `tail_type` (1/2/3). `tail_type` defaults to 2 (right-tailed) — chi-square
/// requests omit it since those tests are always upper-tailed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRequest {
    #[serde(flatten)]
    pub test: HypothesisTest,
    pub alpha: f64,
    #[serde(default = "default_tail_code")]
    pub tail_type: i64,
}

fn default_tail_code() -> i64 {
    2
}

/// Evaluate and render the test described by a JSON request body, returning
/// the figure as base64-encoded PNG bytes.
pub fn run_request(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::InvalidValue(format!("malformed request: {}", e)))?;
    let id = value
        .get("test")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::UnknownTest("(missing test id)".to_string()))?;
    if !TEST_IDS.contains(&id) {
        return Err(Error::UnknownTest(id.to_string()));
    }
    let request: TestRequest = serde_json::from_value(value)
        .map_err(|e| Error::InvalidValue(format!("invalid request parameters: {}", e)))?;
    let tail = TailType::from_code(request.tail_type)?;
    request.test.render(request.alpha, tail, &PlotStyle::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_type_codes() {
        assert_eq!(TailType::from_code(1).unwrap(), TailType::Left);
        assert_eq!(TailType::from_code(2).unwrap(), TailType::Right);
        assert_eq!(TailType::from_code(3).unwrap(), TailType::TwoSided);
        assert!(matches!(
            TailType::from_code(0),
            Err(Error::InvalidTailCode(0))
        ));
        assert!(TailType::from_code(4).is_err());
        for code in 1..=3 {
            assert_eq!(TailType::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_request_deserialization() {
        let body = r#"{
            "test": "one_sample_z_test",
            "n": 25, "sigma": 10.0, "x_bar": 52.0, "mu": 50.0,
            "alpha": 0.05, "tail_type": 2
        }"#;
        let request: TestRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.alpha, 0.05);
        assert_eq!(request.tail_type, 2);
        assert_eq!(request.test.id(), "one_sample_z_test");
    }

    #[test]
    fn test_request_tail_type_defaults_to_right() {
        let body = r#"{
            "test": "chi_square_gof_test",
            "observed": [10.0, 20.0, 30.0], "expected": [20.0, 20.0, 20.0],
            "alpha": 0.05
        }"#;
        let request: TestRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.tail_type, 2);
    }

    #[test]
    fn test_run_request_rejects_unknown_test() {
        let err = run_request(r#"{"test": "anova", "alpha": 0.05}"#).unwrap_err();
        assert!(matches!(err, Error::UnknownTest(id) if id == "anova"));
    }

    #[test]
    fn test_run_request_rejects_bad_tail_code() {
        let body = r#"{
            "test": "one_sample_z_test",
            "n": 25, "sigma": 10.0, "x_bar": 52.0, "mu": 50.0,
            "alpha": 0.05, "tail_type": 7
        }"#;
        assert!(matches!(
            run_request(body),
            Err(Error::InvalidTailCode(7))
        ));
    }

    #[test]
    fn test_run_request_rejects_malformed_body() {
        assert!(matches!(
            run_request("not json"),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            run_request(r#"{"alpha": 0.05}"#),
            Err(Error::UnknownTest(_))
        ));
    }
}
