//! Figure styling configuration

use plotters::style::RGBColor;

/// Ink color for text, axes and marker lines.
pub const TEXT_COLOR: RGBColor = RGBColor(80, 75, 56);
/// Density curve color.
pub const CURVE_COLOR: RGBColor = RGBColor(173, 178, 212);
/// Fill color for the shaded rejection region.
pub const SHADE_COLOR: RGBColor = RGBColor(199, 217, 221);

/// Styling and geometry of the rendered figure.
///
/// The default is a 3600x2400 canvas (a 12x8 inch figure at 300 DPI) split
/// into an info panel on the left and the distribution plot to its right.
/// All font and line sizes are in pixels at that resolution;
/// [`PlotStyle::with_size`] rescales them for smaller canvases.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Fraction of the canvas width given to the info panel
    pub info_panel_ratio: f64,
    /// Text, axis and marker color
    pub text_color: RGBColor,
    /// Density curve color
    pub curve_color: RGBColor,
    /// Rejection region fill color
    pub shade_color: RGBColor,
    /// Opacity of the rejection region fill
    pub shade_opacity: f64,
    /// Vertical headroom multiplier applied to marker line tops
    pub headroom: f64,
    /// Number of sample points along the density curve
    pub curve_samples: usize,
    pub title_font_size: u32,
    pub info_font_size: u32,
    pub label_font_size: u32,
    pub legend_font_size: u32,
    /// Stroke width of the curve and marker lines
    pub line_width: u32,
    /// Radius of the dot drawn at the base of each marker line
    pub marker_radius: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            width: 3600,
            height: 2400,
            info_panel_ratio: 0.2,
            text_color: TEXT_COLOR,
            curve_color: CURVE_COLOR,
            shade_color: SHADE_COLOR,
            shade_opacity: 0.7,
            headroom: 1.15,
            curve_samples: 1000,
            title_font_size: 84,
            info_font_size: 60,
            label_font_size: 54,
            legend_font_size: 54,
            line_width: 6,
            marker_radius: 12,
            margin: 40,
            x_label_area: 140,
            y_label_area: 180,
        }
    }
}

impl PlotStyle {
    /// A style for the given canvas size, with fonts, strokes and label areas
    /// scaled down proportionally from the full-resolution default.
    pub fn with_size(width: u32, height: u32) -> Self {
        let base = PlotStyle::default();
        let scale = width as f64 / base.width as f64;
        let scaled = |v: u32| ((v as f64 * scale).round() as u32).max(1);
        PlotStyle {
            width,
            height,
            title_font_size: scaled(base.title_font_size),
            info_font_size: scaled(base.info_font_size),
            label_font_size: scaled(base.label_font_size),
            legend_font_size: scaled(base.legend_font_size),
            line_width: scaled(base.line_width),
            marker_radius: scaled(base.marker_radius),
            margin: scaled(base.margin),
            x_label_area: scaled(base.x_label_area),
            y_label_area: scaled(base.y_label_area),
            ..base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_canvas_contract() {
        let style = PlotStyle::default();
        assert_eq!(style.width, 3600);
        assert_eq!(style.height, 2400);
        assert_eq!(style.text_color, RGBColor(80, 75, 56));
        assert_eq!(style.curve_color, RGBColor(173, 178, 212));
        assert_eq!(style.shade_color, RGBColor(199, 217, 221));
        assert!(style.info_panel_ratio > 0.0 && style.info_panel_ratio < 1.0);
    }

    #[test]
    fn test_with_size_scales_fonts_down() {
        let small = PlotStyle::with_size(900, 600);
        assert_eq!(small.width, 900);
        assert_eq!(small.height, 600);
        assert_eq!(small.title_font_size, 21);
        assert!(small.line_width >= 1);
        assert_eq!(small.curve_samples, PlotStyle::default().curve_samples);
    }
}
