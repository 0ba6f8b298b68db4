//! The hypothesis test catalog
//!
//! One enum variant per supported test, each carrying exactly the summary
//! parameters that test needs. The serde tag is the external string
//! identifier, so a JSON request body selects a test by name while the
//! parameter shape stays compile-time checked.
//!
//! Every test reduces to the same pipeline: validate inputs, compute the
//! statistic and its sampling distribution, derive critical value(s) and the
//! p-value from the tail direction, then hand the outcome to the renderer.
//! Chi-square statistics are non-negative and grow with deviation in either
//! direction, so chi-square tests always use the upper-tail rule no matter
//! which tail the caller asked for.

use crate::core::error::{Error, Result};
use crate::stats::distributions::{Distribution, SamplingDistribution};
use crate::stats::{CriticalValues, TailType, TestOutcome};
use crate::vis::config::PlotStyle;
use crate::vis::figure::{self, RenderRequest};
use crate::vis::format::{format_alpha, format_value};
use serde::{Deserialize, Serialize};

/// Guards against division by zero in the Welch and McNemar denominators.
const EPSILON: f64 = 1e-15;

/// External identifiers of every test in the catalog.
pub const TEST_IDS: [&str; 12] = [
    "one_sample_t_test",
    "one_sample_z_test",
    "one_sample_proportion_z_test",
    "two_dependent_z_test",
    "two_dependent_t_test",
    "two_dependent_proportion_test",
    "two_independent_z_test",
    "two_independent_t_test",
    "two_independent_proportion_z_test",
    "chi_square_gof_test",
    "chi_square_independence_test",
    "chi_square_homogeneity_test",
];

/// A hypothesis test together with its required summary parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test")]
pub enum HypothesisTest {
    /// One-sample t-test for a mean with unknown population variance.
    #[serde(rename = "one_sample_t_test")]
    OneSampleT { n: u64, s: f64, x_bar: f64, mu: f64 },

    /// One-sample z-test for a mean with known population variance.
    #[serde(rename = "one_sample_z_test")]
    OneSampleZ { n: u64, sigma: f64, x_bar: f64, mu: f64 },

    /// One-sample z-test for a proportion.
    #[serde(rename = "one_sample_proportion_z_test")]
    OneSampleProportionZ { n: u64, p_hat: f64, p: f64 },

    /// Paired-difference z-test with known σ of the differences.
    #[serde(rename = "two_dependent_z_test")]
    TwoDependentZ { n: u64, sigma_d: f64, d_bar: f64 },

    /// Paired-difference t-test.
    #[serde(rename = "two_dependent_t_test")]
    TwoDependentT { n: u64, s_d: f64, d_bar: f64 },

    /// McNemar's test for paired proportions, with continuity correction.
    /// `n10`/`n01` are the discordant cell counts, `n11`/`n00` the concordant
    /// ones (shown in the summary but not part of the statistic).
    #[serde(rename = "two_dependent_proportion_test")]
    TwoDependentProportion { n10: u64, n01: u64, n11: u64, n00: u64 },

    /// Two-independent-sample z-test with known population variances.
    #[serde(rename = "two_independent_z_test")]
    TwoIndependentZ {
        n1: u64,
        n2: u64,
        sigma1: f64,
        sigma2: f64,
        x_bar1: f64,
        x_bar2: f64,
    },

    /// Welch's two-sample t-test (no pooled variance), Satterthwaite df.
    #[serde(rename = "two_independent_t_test")]
    TwoIndependentT {
        n1: u64,
        n2: u64,
        s1: f64,
        s2: f64,
        x_bar1: f64,
        x_bar2: f64,
    },

    /// Two-independent-sample proportion z-test with pooled proportion.
    /// `x1`/`x2` are success counts.
    #[serde(rename = "two_independent_proportion_z_test")]
    TwoIndependentProportionZ { x1: u64, x2: u64, n1: u64, n2: u64 },

    /// Chi-square goodness-of-fit test.
    #[serde(rename = "chi_square_gof_test")]
    ChiSquareGof {
        observed: Vec<f64>,
        expected: Vec<f64>,
    },

    /// Pearson chi-square test of independence on a contingency table.
    #[serde(rename = "chi_square_independence_test")]
    ChiSquareIndependence { observed: Vec<Vec<f64>> },

    /// Chi-square test of homogeneity: identical arithmetic to the
    /// independence test, different null-hypothesis framing.
    #[serde(rename = "chi_square_homogeneity_test")]
    ChiSquareHomogeneity { observed: Vec<Vec<f64>> },
}

/// Intermediate result of the per-test computation, before tail handling.
struct Computed {
    statistic: f64,
    distribution: SamplingDistribution,
    param_lines: Vec<String>,
    formula: &'static str,
}

impl HypothesisTest {
    /// The external string identifier of this test.
    pub fn id(&self) -> &'static str {
        match self {
            HypothesisTest::OneSampleT { .. } => "one_sample_t_test",
            HypothesisTest::OneSampleZ { .. } => "one_sample_z_test",
            HypothesisTest::OneSampleProportionZ { .. } => "one_sample_proportion_z_test",
            HypothesisTest::TwoDependentZ { .. } => "two_dependent_z_test",
            HypothesisTest::TwoDependentT { .. } => "two_dependent_t_test",
            HypothesisTest::TwoDependentProportion { .. } => "two_dependent_proportion_test",
            HypothesisTest::TwoIndependentZ { .. } => "two_independent_z_test",
            HypothesisTest::TwoIndependentT { .. } => "two_independent_t_test",
            HypothesisTest::TwoIndependentProportionZ { .. } => {
                "two_independent_proportion_z_test"
            }
            HypothesisTest::ChiSquareGof { .. } => "chi_square_gof_test",
            HypothesisTest::ChiSquareIndependence { .. } => "chi_square_independence_test",
            HypothesisTest::ChiSquareHomogeneity { .. } => "chi_square_homogeneity_test",
        }
    }

    /// Human-readable test title used as the figure caption.
    pub fn title(&self) -> &'static str {
        match self {
            HypothesisTest::OneSampleT { .. } => "One-Sample T-Test",
            HypothesisTest::OneSampleZ { .. } => "One-Sample Z-Test",
            HypothesisTest::OneSampleProportionZ { .. } => "One-Sample Proportion Z-Test",
            HypothesisTest::TwoDependentZ { .. } => "Two-Dependent-Sample Z-Test",
            HypothesisTest::TwoDependentT { .. } => "Two-Dependent-Sample T-Test",
            HypothesisTest::TwoDependentProportion { .. } => {
                "Two-Dependent-Sample Proportion Test (McNemar)"
            }
            HypothesisTest::TwoIndependentZ { .. } => "Two-Independent-Sample Z-Test",
            HypothesisTest::TwoIndependentT { .. } => "Welch Two-Sample T-Test",
            HypothesisTest::TwoIndependentProportionZ { .. } => {
                "Two-Independent-Sample Proportion Z-Test"
            }
            HypothesisTest::ChiSquareGof { .. } => "Chi-Square Goodness of Fit Test",
            HypothesisTest::ChiSquareIndependence { .. } => "Chi-Square Independence Test",
            HypothesisTest::ChiSquareHomogeneity { .. } => "Chi-Square Homogeneity Test",
        }
    }

    /// Compute the statistic, critical value(s) and p-value for this test.
    ///
    /// Pure: identical inputs always produce identical outcomes. Invalid
    /// inputs error out before any statistic is formed.
    pub fn evaluate(&self, alpha: f64, tail_type: TailType) -> Result<TestOutcome> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }

        let computed = self.compute()?;
        let tail = if computed.distribution.is_upper_tail_only() {
            TailType::Right
        } else {
            tail_type
        };
        let dist = computed.distribution.realize()?;
        let (critical_values, p_value) = critical_and_p(&*dist, alpha, tail, computed.statistic);

        let symbol = computed.distribution.symbol();
        let mut info_lines = computed.param_lines;
        info_lines.push(critical_line(symbol, &critical_values));
        info_lines.push(format!("{} = {}", symbol, format_value(computed.statistic)));
        info_lines.push(format!("α = {}", format_alpha(alpha)));
        info_lines.push(computed.formula.to_string());

        Ok(TestOutcome {
            test_name: self.title().to_string(),
            stat_symbol: symbol.to_string(),
            statistic: computed.statistic,
            p_value,
            alpha,
            tail,
            degrees_of_freedom: computed.distribution.degrees_of_freedom(),
            critical_values,
            distribution: computed.distribution,
            info_lines,
        })
    }

    /// Evaluate the test and render the standard two-panel figure, returned
    /// as base64-encoded PNG bytes.
    pub fn render(&self, alpha: f64, tail_type: TailType, style: &PlotStyle) -> Result<String> {
        let outcome = self.evaluate(alpha, tail_type)?;
        let request = RenderRequest {
            distribution: outcome.distribution,
            alpha: outcome.alpha,
            tail: outcome.tail,
            statistic: outcome.statistic,
            p_value: outcome.p_value,
            critical_values: outcome.critical_values,
            test_name: &outcome.test_name,
            stat_symbol: &outcome.stat_symbol,
            info_lines: &outcome.info_lines,
        };
        figure::render_base64(&request, style)
    }

    fn compute(&self) -> Result<Computed> {
        match self {
            HypothesisTest::OneSampleT { n, s, x_bar, mu } => {
                let n_f = require_count("n", *n, 2)?;
                require_positive("s", *s)?;
                require_finite("x_bar", *x_bar)?;
                require_finite("mu", *mu)?;
                let statistic = (x_bar - mu) / (s / n_f.sqrt());
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::StudentT { df: n_f - 1.0 },
                    param_lines: vec![
                        format!("n = {}", n),
                        format!("df = {}", n - 1),
                        format!("x̄ = {}", format_value(*x_bar)),
                        format!("s = {}", format_value(*s)),
                        format!("μ = {}", format_value(*mu)),
                    ],
                    formula: "t = (x̄ − μ) / (s / √n)",
                })
            }

            HypothesisTest::OneSampleZ { n, sigma, x_bar, mu } => {
                let n_f = require_count("n", *n, 1)?;
                require_positive("sigma", *sigma)?;
                require_finite("x_bar", *x_bar)?;
                require_finite("mu", *mu)?;
                let statistic = (x_bar - mu) / (sigma / n_f.sqrt());
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::Normal,
                    param_lines: vec![
                        format!("n = {}", n),
                        format!("σ = {}", format_value(*sigma)),
                        format!("x̄ = {}", format_value(*x_bar)),
                        format!("μ = {}", format_value(*mu)),
                    ],
                    formula: "z = (x̄ − μ) / (σ / √n)",
                })
            }

            HypothesisTest::OneSampleProportionZ { n, p_hat, p } => {
                let n_f = require_count("n", *n, 1)?;
                require_probability("p", *p)?;
                if !(*p_hat >= 0.0 && *p_hat <= 1.0) {
                    return Err(Error::InvalidParameter {
                        name: "p_hat",
                        value: *p_hat,
                    });
                }
                let q = 1.0 - p;
                let statistic = (p_hat - p) / (p * q / n_f).sqrt();
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::Normal,
                    param_lines: vec![
                        format!("n = {}", n),
                        format!("p̂ = {}", format_value(*p_hat)),
                        format!("p = {}, q = 1 − p", format_value(*p)),
                    ],
                    formula: "z = (p̂ − p) / √(pq / n)",
                })
            }

            HypothesisTest::TwoDependentZ { n, sigma_d, d_bar } => {
                let n_f = require_count("n", *n, 1)?;
                require_positive("sigma_d", *sigma_d)?;
                require_finite("d_bar", *d_bar)?;
                let statistic = d_bar / (sigma_d / n_f.sqrt());
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::Normal,
                    param_lines: vec![
                        format!("n = {}", n),
                        format!("σ_d = {}", format_value(*sigma_d)),
                        format!("d̄ = {}", format_value(*d_bar)),
                    ],
                    formula: "z = (d̄ − 0) / (σ_d / √n)",
                })
            }

            HypothesisTest::TwoDependentT { n, s_d, d_bar } => {
                let n_f = require_count("n", *n, 2)?;
                require_positive("s_d", *s_d)?;
                require_finite("d_bar", *d_bar)?;
                let statistic = d_bar / (s_d / n_f.sqrt());
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::StudentT { df: n_f - 1.0 },
                    param_lines: vec![
                        format!("n = {}", n),
                        format!("df = {}", n - 1),
                        format!("s_d = {}", format_value(*s_d)),
                        format!("d̄ = {}", format_value(*d_bar)),
                    ],
                    formula: "t = (d̄ − 0) / (s_d / √n)",
                })
            }

            HypothesisTest::TwoDependentProportion { n10, n01, n11, n00 } => {
                let b = *n10 as f64;
                let c = *n01 as f64;
                // Continuity-corrected McNemar approximation
                let numerator = ((b - c).abs() - 1.0).max(0.0);
                let statistic = numerator / (b + c + EPSILON).sqrt();
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::Normal,
                    param_lines: vec![
                        format!("n₁₀ = {}", n10),
                        format!("n₀₁ = {}", n01),
                        format!("n₁₁ = {}", n11),
                        format!("n₀₀ = {}", n00),
                    ],
                    formula: "z = (|b − c| − 1) / √(b + c)",
                })
            }

            HypothesisTest::TwoIndependentZ {
                n1,
                n2,
                sigma1,
                sigma2,
                x_bar1,
                x_bar2,
            } => {
                let n1_f = require_count("n1", *n1, 1)?;
                let n2_f = require_count("n2", *n2, 1)?;
                require_positive("sigma1", *sigma1)?;
                require_positive("sigma2", *sigma2)?;
                require_finite("x_bar1", *x_bar1)?;
                require_finite("x_bar2", *x_bar2)?;
                let se = (sigma1.powi(2) / n1_f + sigma2.powi(2) / n2_f).sqrt();
                let statistic = (x_bar1 - x_bar2) / se;
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::Normal,
                    param_lines: vec![
                        format!("n₁ = {}", n1),
                        format!("n₂ = {}", n2),
                        format!("σ₁ = {}", format_value(*sigma1)),
                        format!("σ₂ = {}", format_value(*sigma2)),
                        format!("x̄₁ = {}", format_value(*x_bar1)),
                        format!("x̄₂ = {}", format_value(*x_bar2)),
                    ],
                    formula: "z = (x̄₁ − x̄₂) / √(σ₁²/n₁ + σ₂²/n₂)",
                })
            }

            HypothesisTest::TwoIndependentT {
                n1,
                n2,
                s1,
                s2,
                x_bar1,
                x_bar2,
            } => {
                let n1_f = require_count("n1", *n1, 2)?;
                let n2_f = require_count("n2", *n2, 2)?;
                require_positive("s1", *s1)?;
                require_positive("s2", *s2)?;
                require_finite("x_bar1", *x_bar1)?;
                require_finite("x_bar2", *x_bar2)?;
                let v1 = s1.powi(2) / n1_f;
                let v2 = s2.powi(2) / n2_f;
                let statistic = (x_bar1 - x_bar2) / (v1 + v2).sqrt();
                // Welch-Satterthwaite approximation for degrees of freedom
                let df = (v1 + v2).powi(2)
                    / (v1.powi(2) / (n1_f - 1.0) + v2.powi(2) / (n2_f - 1.0) + EPSILON);
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::StudentT { df },
                    param_lines: vec![
                        format!("n₁ = {}", n1),
                        format!("n₂ = {}", n2),
                        format!("s₁ = {}", format_value(*s1)),
                        format!("s₂ = {}", format_value(*s2)),
                        format!("x̄₁ = {}", format_value(*x_bar1)),
                        format!("x̄₂ = {}", format_value(*x_bar2)),
                        format!("df (Welch) = {}", format_value(df)),
                    ],
                    formula: "t = (x̄₁ − x̄₂) / √(s₁²/n₁ + s₂²/n₂)",
                })
            }

            HypothesisTest::TwoIndependentProportionZ { x1, x2, n1, n2 } => {
                let n1_f = require_count("n1", *n1, 1)?;
                let n2_f = require_count("n2", *n2, 1)?;
                if x1 > n1 {
                    return Err(Error::InvalidParameter {
                        name: "x1",
                        value: *x1 as f64,
                    });
                }
                if x2 > n2 {
                    return Err(Error::InvalidParameter {
                        name: "x2",
                        value: *x2 as f64,
                    });
                }
                let p1_hat = *x1 as f64 / n1_f;
                let p2_hat = *x2 as f64 / n2_f;
                let p_hat = (*x1 + *x2) as f64 / (n1_f + n2_f);
                let q_hat = 1.0 - p_hat;
                let se = (p_hat * q_hat * (1.0 / n1_f + 1.0 / n2_f)).sqrt();
                if !(se > 0.0) {
                    return Err(Error::InvalidValue(
                        "pooled proportion standard error is zero (all successes or all failures)"
                            .to_string(),
                    ));
                }
                let statistic = (p1_hat - p2_hat) / se;
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::Normal,
                    param_lines: vec![
                        format!("n₁ = {}", n1),
                        format!("n₂ = {}", n2),
                        format!("p̂₁ = {}", format_value(p1_hat)),
                        format!("p̂₂ = {}", format_value(p2_hat)),
                        format!("p̂ = {}, q̂ = 1 − p̂", format_value(p_hat)),
                    ],
                    formula: "z = (p̂₁ − p̂₂) / √(p̂q̂(1/n₁ + 1/n₂))",
                })
            }

            HypothesisTest::ChiSquareGof { observed, expected } => {
                if observed.is_empty() || expected.is_empty() {
                    return Err(Error::EmptyData(
                        "observed and expected frequencies cannot be empty".to_string(),
                    ));
                }
                if observed.len() != expected.len() {
                    return Err(Error::DimensionMismatch(format!(
                        "observed has {} categories, expected has {}",
                        observed.len(),
                        expected.len()
                    )));
                }
                if observed.len() < 2 {
                    return Err(Error::InvalidValue(
                        "goodness-of-fit test needs at least 2 categories".to_string(),
                    ));
                }
                let mut statistic = 0.0;
                for (&o, &e) in observed.iter().zip(expected.iter()) {
                    if !(o >= 0.0) {
                        return Err(Error::InvalidParameter {
                            name: "observed",
                            value: o,
                        });
                    }
                    if !(e > 0.0) {
                        return Err(Error::InvalidParameter {
                            name: "expected",
                            value: e,
                        });
                    }
                    statistic += (o - e).powi(2) / e;
                }
                let k = observed.len();
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::ChiSquare {
                        df: (k - 1) as f64,
                    },
                    param_lines: vec![format!("k = {}", k), format!("df = {}", k - 1)],
                    formula: "χ² = Σ (O − E)² / E",
                })
            }

            HypothesisTest::ChiSquareIndependence { observed }
            | HypothesisTest::ChiSquareHomogeneity { observed } => {
                let (statistic, df, rows, cols) = pearson_chi_square(observed)?;
                Ok(Computed {
                    statistic,
                    distribution: SamplingDistribution::ChiSquare { df },
                    param_lines: vec![
                        format!("rows = {}", rows),
                        format!("cols = {}", cols),
                        format!("df = {}", df as usize),
                    ],
                    formula: "χ² = Σ (O − E)² / E",
                })
            }
        }
    }
}

/// Critical value(s) and p-value for a statistic under the given tail rule.
fn critical_and_p(
    dist: &dyn Distribution,
    alpha: f64,
    tail: TailType,
    statistic: f64,
) -> (CriticalValues, f64) {
    match tail {
        TailType::Left => (
            CriticalValues::One(dist.inverse_cdf(alpha)),
            dist.cdf(statistic),
        ),
        TailType::Right => (
            CriticalValues::One(dist.inverse_cdf(1.0 - alpha)),
            1.0 - dist.cdf(statistic),
        ),
        TailType::TwoSided => (
            CriticalValues::Symmetric {
                lower: dist.inverse_cdf(alpha / 2.0),
                upper: dist.inverse_cdf(1.0 - alpha / 2.0),
            },
            2.0 * (1.0 - dist.cdf(statistic.abs())),
        ),
    }
}

fn critical_line(symbol: &str, critical_values: &CriticalValues) -> String {
    match critical_values {
        CriticalValues::One(value) => format!("{}_c = {}", symbol, format_value(*value)),
        CriticalValues::Symmetric { upper, .. } => {
            format!("{}_c = ±{}", symbol, format_value(*upper))
        }
    }
}

/// Pearson chi-square statistic on a contingency table. Expected cell
/// frequencies come from the product of row and column margins.
fn pearson_chi_square(observed: &[Vec<f64>]) -> Result<(f64, f64, usize, usize)> {
    if observed.is_empty() || observed[0].is_empty() {
        return Err(Error::EmptyData(
            "contingency table cannot be empty".to_string(),
        ));
    }
    let rows = observed.len();
    let cols = observed[0].len();
    if rows < 2 || cols < 2 {
        return Err(Error::InvalidValue(format!(
            "contingency table must be at least 2x2, got {}x{}",
            rows, cols
        )));
    }
    for row in observed {
        if row.len() != cols {
            return Err(Error::DimensionMismatch(
                "all rows of the contingency table must have the same length".to_string(),
            ));
        }
    }

    let mut row_totals = vec![0.0; rows];
    let mut col_totals = vec![0.0; cols];
    let mut grand_total = 0.0;
    for (i, row) in observed.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if !(value >= 0.0) {
                return Err(Error::InvalidParameter {
                    name: "observed",
                    value,
                });
            }
            row_totals[i] += value;
            col_totals[j] += value;
            grand_total += value;
        }
    }
    if grand_total == 0.0 {
        return Err(Error::InvalidValue(
            "total frequency cannot be zero".to_string(),
        ));
    }

    let mut statistic = 0.0;
    for i in 0..rows {
        for j in 0..cols {
            let expected = row_totals[i] * col_totals[j] / grand_total;
            if !(expected > 0.0) {
                return Err(Error::InvalidParameter {
                    name: "expected_frequency",
                    value: expected,
                });
            }
            statistic += (observed[i][j] - expected).powi(2) / expected;
        }
    }

    let df = ((rows - 1) * (cols - 1)) as f64;
    Ok((statistic, df, rows, cols))
}

fn require_count(name: &'static str, n: u64, min: u64) -> Result<f64> {
    if n < min {
        return Err(Error::InvalidParameter {
            name,
            value: n as f64,
        });
    }
    Ok(n as f64)
}

fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(Error::InvalidParameter { name, value });
    }
    Ok(())
}

fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter { name, value });
    }
    Ok(())
}

fn require_probability(name: &'static str, value: f64) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(Error::InvalidParameter { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_catalog() {
        let tests = [
            HypothesisTest::OneSampleT {
                n: 16,
                s: 4.0,
                x_bar: 105.0,
                mu: 100.0,
            },
            HypothesisTest::OneSampleZ {
                n: 25,
                sigma: 10.0,
                x_bar: 52.0,
                mu: 50.0,
            },
            HypothesisTest::OneSampleProportionZ {
                n: 100,
                p_hat: 0.6,
                p: 0.5,
            },
            HypothesisTest::TwoDependentZ {
                n: 30,
                sigma_d: 2.0,
                d_bar: 0.5,
            },
            HypothesisTest::TwoDependentT {
                n: 30,
                s_d: 2.0,
                d_bar: 0.5,
            },
            HypothesisTest::TwoDependentProportion {
                n10: 20,
                n01: 5,
                n11: 30,
                n00: 45,
            },
            HypothesisTest::TwoIndependentZ {
                n1: 30,
                n2: 30,
                sigma1: 5.0,
                sigma2: 8.0,
                x_bar1: 50.0,
                x_bar2: 45.0,
            },
            HypothesisTest::TwoIndependentT {
                n1: 30,
                n2: 30,
                s1: 5.0,
                s2: 8.0,
                x_bar1: 50.0,
                x_bar2: 45.0,
            },
            HypothesisTest::TwoIndependentProportionZ {
                x1: 45,
                x2: 30,
                n1: 100,
                n2: 100,
            },
            HypothesisTest::ChiSquareGof {
                observed: vec![10.0, 20.0, 30.0],
                expected: vec![20.0, 20.0, 20.0],
            },
            HypothesisTest::ChiSquareIndependence {
                observed: vec![vec![10.0, 15.0, 25.0], vec![20.0, 10.0, 15.0]],
            },
            HypothesisTest::ChiSquareHomogeneity {
                observed: vec![vec![10.0, 15.0, 25.0], vec![20.0, 10.0, 15.0]],
            },
        ];
        for (test, id) in tests.iter().zip(TEST_IDS.iter()) {
            assert_eq!(test.id(), *id);
            // serde tag must agree with the id() accessor
            let json = serde_json::to_value(test).unwrap();
            assert_eq!(json["test"], *id);
        }
    }

    #[test]
    fn test_alpha_must_be_in_open_unit_interval() {
        let test = HypothesisTest::OneSampleZ {
            n: 25,
            sigma: 10.0,
            x_bar: 52.0,
            mu: 50.0,
        };
        for alpha in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = test.evaluate(alpha, TailType::Right).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "alpha", .. }));
        }
    }

    #[test]
    fn test_invalid_spread_parameters_are_rejected() {
        let err = HypothesisTest::OneSampleT {
            n: 16,
            s: 0.0,
            x_bar: 105.0,
            mu: 100.0,
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "s", .. }));

        let err = HypothesisTest::OneSampleZ {
            n: 25,
            sigma: -1.0,
            x_bar: 52.0,
            mu: 50.0,
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "sigma", .. }));
    }

    #[test]
    fn test_t_tests_need_at_least_two_observations() {
        let err = HypothesisTest::OneSampleT {
            n: 1,
            s: 4.0,
            x_bar: 105.0,
            mu: 100.0,
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "n", .. }));

        let err = HypothesisTest::TwoIndependentT {
            n1: 1,
            n2: 30,
            s1: 5.0,
            s2: 8.0,
            x_bar1: 50.0,
            x_bar2: 45.0,
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "n1", .. }));
    }

    #[test]
    fn test_hypothesized_proportion_must_be_interior() {
        for p in [0.0, 1.0] {
            let err = HypothesisTest::OneSampleProportionZ {
                n: 100,
                p_hat: 0.5,
                p,
            }
            .evaluate(0.05, TailType::Right)
            .unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "p", .. }));
        }
    }

    #[test]
    fn test_successes_cannot_exceed_trials() {
        let err = HypothesisTest::TwoIndependentProportionZ {
            x1: 101,
            x2: 30,
            n1: 100,
            n2: 100,
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "x1", .. }));
    }

    #[test]
    fn test_degenerate_pooled_proportion_is_rejected() {
        let err = HypothesisTest::TwoIndependentProportionZ {
            x1: 0,
            x2: 0,
            n1: 100,
            n2: 100,
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn test_gof_input_validation() {
        let err = HypothesisTest::ChiSquareGof {
            observed: vec![10.0, 20.0],
            expected: vec![20.0, 20.0, 20.0],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch(_)));

        let err = HypothesisTest::ChiSquareGof {
            observed: vec![10.0, 20.0, 30.0],
            expected: vec![20.0, 0.0, 40.0],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "expected",
                ..
            }
        ));

        let err = HypothesisTest::ChiSquareGof {
            observed: vec![],
            expected: vec![],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::EmptyData(_)));
    }

    #[test]
    fn test_contingency_table_validation() {
        let err = HypothesisTest::ChiSquareIndependence {
            observed: vec![vec![10.0, 15.0], vec![20.0]],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch(_)));

        let err = HypothesisTest::ChiSquareIndependence {
            observed: vec![vec![10.0, 15.0, 25.0]],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));

        let err = HypothesisTest::ChiSquareIndependence {
            observed: vec![vec![10.0, -1.0], vec![20.0, 5.0]],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "observed",
                ..
            }
        ));

        // A zero column margin makes an expected frequency zero
        let err = HypothesisTest::ChiSquareIndependence {
            observed: vec![vec![10.0, 0.0], vec![20.0, 0.0]],
        }
        .evaluate(0.05, TailType::Right)
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "expected_frequency",
                ..
            }
        ));
    }

    #[test]
    fn test_info_lines_carry_all_inputs() {
        let outcome = HypothesisTest::OneSampleT {
            n: 16,
            s: 4.0,
            x_bar: 105.0,
            mu: 100.0,
        }
        .evaluate(0.05, TailType::TwoSided)
        .unwrap();
        let joined = outcome.info_lines.join("\n");
        assert!(joined.contains("n = 16"));
        assert!(joined.contains("df = 15"));
        assert!(joined.contains("x̄ = 105.00"));
        assert!(joined.contains("s = 4.00"));
        assert!(joined.contains("μ = 100.00"));
        assert!(joined.contains("α = 0.05"));
        assert!(joined.contains("t = 5.00"));
        assert!(joined.contains("t_c = ±"));
    }
}
