//! Numeric formatting for figure annotations
//!
//! All values shown on a figure pass through these helpers so that the info
//! panel, legend and axis annotations stay consistent with each other.

/// Format a statistic or critical value for display.
///
/// Values of small magnitude get four decimals so that z/t statistics near
/// zero stay readable; larger values get two.
pub fn format_value(value: f64) -> String {
    if value.abs() < 2.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a significance level. Common levels (0.05, 0.01) print short;
/// anything below 0.01 keeps five decimals.
pub fn format_alpha(alpha: f64) -> String {
    if alpha >= 0.01 {
        format!("{:.2}", alpha)
    } else {
        format!("{:.5}", alpha)
    }
}

/// Format a p-value in scientific notation with a three-digit mantissa.
/// An exact zero prints as "0" rather than "0.000e0".
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{:.3e}", value)
    }
}
