//! Sampling distributions for hypothesis testing
//!
//! This module provides the closed family of sampling distributions the test
//! catalog draws from (standard normal, Student's t, chi-square), together
//! with the display metadata the renderer needs: plot windows, density
//! clipping, and the anchor position for the null-hypothesis label.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF, Normal, StudentsT};

/// Trait for probability distributions
pub trait Distribution {
    /// Probability density function (PDF)
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function (CDF)
    fn cdf(&self, x: f64) -> f64;

    /// Inverse CDF (quantile function)
    fn inverse_cdf(&self, p: f64) -> f64;
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        Continuous::pdf(self, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        ContinuousCDF::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        ContinuousCDF::inverse_cdf(self, p)
    }
}

impl Distribution for StudentsT {
    fn pdf(&self, x: f64) -> f64 {
        Continuous::pdf(self, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        ContinuousCDF::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        ContinuousCDF::inverse_cdf(self, p)
    }
}

impl Distribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        Continuous::pdf(self, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        ContinuousCDF::cdf(self, x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        ContinuousCDF::inverse_cdf(self, p)
    }
}

/// The sampling distribution a test statistic is referred to.
///
/// Degrees of freedom travel inside the variant, so a t or chi-square
/// distribution can never be constructed without them; invalid values are
/// rejected by [`SamplingDistribution::realize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SamplingDistribution {
    /// Standard normal N(0, 1)
    Normal,
    /// Student's t with `df` degrees of freedom
    StudentT { df: f64 },
    /// Chi-square with `df` degrees of freedom
    ChiSquare { df: f64 },
}

impl SamplingDistribution {
    /// Degrees of freedom, where the family has them.
    pub fn degrees_of_freedom(&self) -> Option<f64> {
        match *self {
            SamplingDistribution::Normal => None,
            SamplingDistribution::StudentT { df } | SamplingDistribution::ChiSquare { df } => {
                Some(df)
            }
        }
    }

    /// Symbol used for the test statistic on axes and annotations.
    pub fn symbol(&self) -> &'static str {
        match self {
            SamplingDistribution::Normal => "z",
            SamplingDistribution::StudentT { .. } => "t",
            SamplingDistribution::ChiSquare { .. } => "χ²",
        }
    }

    /// Legend label for the density curve.
    pub fn curve_label(&self) -> &'static str {
        match self {
            SamplingDistribution::Normal => "z-distribution",
            SamplingDistribution::StudentT { .. } => "t-distribution",
            SamplingDistribution::ChiSquare { .. } => "χ²-distribution",
        }
    }

    /// Whether this family only supports upper-tail rejection regions.
    pub fn is_upper_tail_only(&self) -> bool {
        matches!(self, SamplingDistribution::ChiSquare { .. })
    }

    /// Upper bound applied to displayed density values. Chi-square densities
    /// spike toward infinity for df < 2, which would dwarf the rest of the
    /// curve, so they are clipped at 1.0 for display.
    pub fn density_ceiling(&self) -> f64 {
        match self {
            SamplingDistribution::ChiSquare { .. } => 1.0,
            _ => f64::INFINITY,
        }
    }

    /// Realize into a concrete distribution, validating parameters.
    pub fn realize(&self) -> Result<Box<dyn Distribution>> {
        match *self {
            SamplingDistribution::Normal => Ok(Box::new(Normal::new(0.0, 1.0)?)),
            SamplingDistribution::StudentT { df } => {
                check_df(df)?;
                Ok(Box::new(StudentsT::new(0.0, 1.0, df)?))
            }
            SamplingDistribution::ChiSquare { df } => {
                check_df(df)?;
                Ok(Box::new(ChiSquared::new(df)?))
            }
        }
    }

    /// Display window for the density curve.
    ///
    /// Normal uses the fixed window [-4, 4]; Student's t spans the 0.1st to
    /// 99.9th percentile for the given df; chi-square runs from 0 (or a hair
    /// above it when df <= 2, where the density diverges at the origin) to
    /// the 99.9th percentile.
    pub fn display_window(&self, dist: &dyn Distribution) -> (f64, f64) {
        match *self {
            SamplingDistribution::Normal => (-4.0, 4.0),
            SamplingDistribution::StudentT { .. } => {
                (dist.inverse_cdf(0.001), dist.inverse_cdf(0.999))
            }
            SamplingDistribution::ChiSquare { df } => {
                let lower = if df > 2.0 { 0.0 } else { 1e-6 };
                (lower, dist.inverse_cdf(0.999))
            }
        }
    }

    /// Anchor for the H₀ label, positioned to stay clear of the curve.
    pub fn null_label_anchor(&self, dist: &dyn Distribution) -> (f64, f64) {
        match *self {
            SamplingDistribution::Normal | SamplingDistribution::StudentT { .. } => {
                (0.0, dist.pdf(0.0) * 0.5)
            }
            SamplingDistribution::ChiSquare { df } => {
                let (x, factor) = if df == 1.0 {
                    (0.5, 0.25)
                } else if df == 2.0 {
                    (1.0, 0.4)
                } else {
                    (df - 2.0, 0.45)
                };
                (x, (dist.pdf(x) * factor).min(1.0))
            }
        }
    }
}

fn check_df(df: f64) -> Result<()> {
    if !df.is_finite() || df <= 0.0 {
        return Err(Error::Distribution(format!(
            "degrees of freedom must be finite and positive, got {}",
            df
        )));
    }
    Ok(())
}
