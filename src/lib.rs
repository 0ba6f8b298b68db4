//! StatViz: hypothesis test visualization engine
//!
//! StatViz evaluates a fixed catalog of classical hypothesis tests from
//! numeric summary inputs and renders each result as a standardized figure:
//! an info panel listing the inputs, statistic, critical value(s) and
//! significance level, above an annotated plot of the sampling distribution
//! under H₀ with the rejection region shaded and the observed statistic
//! marked. Figures are produced fully in memory as base64-encoded PNGs.
//!
//! # Example
//!
//! ```no_run
//! use statviz::{HypothesisTest, PlotStyle, TailType};
//!
//! let test = HypothesisTest::OneSampleZ {
//!     n: 25,
//!     sigma: 10.0,
//!     x_bar: 52.0,
//!     mu: 50.0,
//! };
//! let outcome = test.evaluate(0.05, TailType::Right)?;
//! assert!(outcome.p_value > 0.0 && outcome.p_value < 1.0);
//! let png_base64 = test.render(0.05, TailType::Right, &PlotStyle::default())?;
//! # Ok::<(), statviz::Error>(())
//! ```
//!
//! Requests can also arrive as JSON bodies that select a test by its string
//! identifier; see [`stats::run_request`].

pub mod core;
pub mod stats;
pub mod vis;

pub use crate::core::error::{Error, Result};
pub use crate::stats::{
    run_request, CriticalValues, Distribution, HypothesisTest, SamplingDistribution, TailType,
    TestOutcome, TestRequest, TEST_IDS,
};
pub use crate::vis::{PlotStyle, RenderRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
