//! The standard two-panel hypothesis test figure
//!
//! Every test renders to the same layout: an info panel on the left carrying
//! the test title and the formatted summary lines, and to its right the
//! sampling distribution under H₀ with the rejection region shaded, the
//! critical value(s) dashed, the observed statistic as a solid marker, and a
//! legend carrying the curve label, critical value(s), statistic and p-value.
//!
//! Rendering happens entirely in memory: the figure is drawn into an RGB
//! buffer with plotters' bitmap backend, PNG-encoded, and (for the request
//! entry point) base64-encoded.

use crate::core::error::Result;
use crate::stats::distributions::{Distribution, SamplingDistribution};
use crate::stats::{CriticalValues, TailType};
use crate::vis::config::PlotStyle;
use crate::vis::format::{format_alpha, format_scientific, format_value};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

/// Everything the renderer needs to draw one figure.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub distribution: SamplingDistribution,
    pub alpha: f64,
    pub tail: TailType,
    pub statistic: f64,
    pub p_value: f64,
    pub critical_values: CriticalValues,
    pub test_name: &'a str,
    pub stat_symbol: &'a str,
    pub info_lines: &'a [String],
}

/// Render the figure into PNG bytes.
pub fn render_png(request: &RenderRequest, style: &PlotStyle) -> Result<Vec<u8>> {
    let (width, height) = (style.width, style.height);
    let mut rgb = vec![0u8; (width as usize) * (height as usize) * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        draw_figure(&root, request, style)?;
        root.present()?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&rgb, width, height, ColorType::Rgb8)?;
    Ok(png)
}

/// Render the figure and return it as a base64-encoded PNG.
pub fn render_base64(request: &RenderRequest, style: &PlotStyle) -> Result<String> {
    Ok(BASE64.encode(render_png(request, style)?))
}

/// Draw the two-panel figure onto an arbitrary drawing area.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    request: &RenderRequest,
    style: &PlotStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let info_width = (style.width as f64 * style.info_panel_ratio) as u32;
    let (info_area, plot_area) = root.split_horizontally(info_width);
    draw_info_panel(&info_area, request, style)?;
    draw_distribution_panel(&plot_area, request, style)?;
    Ok(())
}

/// The formatted summary lines, stacked and centered in the left panel.
fn draw_info_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    request: &RenderRequest,
    style: &PlotStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let centered = Pos::new(HPos::Center, VPos::Center);
    let line_style = ("sans-serif", style.info_font_size)
        .into_font()
        .color(&style.text_color)
        .pos(centered);

    let top = height as f64 * 0.12;
    let step = (height as f64 * 0.78) / request.info_lines.len().max(1) as f64;
    for (i, line) in request.info_lines.iter().enumerate() {
        let y = (top + step * (i as f64 + 0.5)) as i32;
        area.draw(&Text::new(line.clone(), (width as i32 / 2, y), line_style.clone()))?;
    }
    Ok(())
}

/// The annotated sampling-distribution plot.
fn draw_distribution_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    request: &RenderRequest,
    style: &PlotStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let dist = request.distribution.realize()?;
    let ceiling = request.distribution.density_ceiling();
    let (x_min, x_max) = request.distribution.display_window(&*dist);

    let curve: Vec<(f64, f64)> = linspace(x_min, x_max, style.curve_samples)
        .map(|x| (x, dist.pdf(x).min(ceiling)))
        .collect();
    let peak = curve.iter().map(|&(_, y)| y).fold(0.0, f64::max);
    let y_max = peak * style.headroom;

    let title_font = FontDesc::new(
        FontFamily::SansSerif,
        style.title_font_size as f64,
        FontStyle::Bold,
    )
    .color(&style.text_color);
    let mut chart = ChartBuilder::on(area)
        .caption(request.test_name, title_font)
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    let label_font = ("sans-serif", style.label_font_size)
        .into_font()
        .color(&style.text_color);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .axis_style(style.text_color.stroke_width(2))
        .label_style(label_font.clone())
        .x_desc(format!("{} value", request.stat_symbol))
        .y_desc("Probability Density")
        .axis_desc_style(label_font)
        .draw()?;

    // Density curve
    let curve_color = style.curve_color;
    let line_width = style.line_width;
    chart
        .draw_series(LineSeries::new(
            curve.clone(),
            curve_color.stroke_width(line_width),
        ))?
        .label(request.distribution.curve_label())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 40, y)], curve_color.stroke_width(line_width))
        });

    // Shaded rejection region(s), clamped to the display window
    let shade = style.shade_color.mix(style.shade_opacity);
    let regions: Vec<(f64, f64)> = match (request.tail, request.critical_values) {
        (TailType::Left, CriticalValues::One(c)) => vec![(x_min, c.min(x_max))],
        (TailType::Right, CriticalValues::One(c)) => vec![(c.max(x_min), x_max)],
        (_, CriticalValues::Symmetric { lower, upper }) => {
            vec![(x_min, lower.min(x_max)), (upper.max(x_min), x_max)]
        }
        // One-sided pair that should not arise; shade per the tail anyway
        (TailType::TwoSided, CriticalValues::One(c)) => vec![(c.max(x_min), x_max)],
    };
    let shade_label = format!("Rejection region (α = {})", format_alpha(request.alpha));
    for (i, &(from, to)) in regions.iter().enumerate() {
        if to <= from {
            continue;
        }
        let points: Vec<(f64, f64)> = linspace(from, to, 200)
            .map(|x| (x, dist.pdf(x).min(ceiling)))
            .collect();
        let anno = chart.draw_series(AreaSeries::new(points, 0.0, shade))?;
        if i == 0 {
            anno.label(shade_label.clone())
                .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 40, y + 8)], shade.filled()));
        }
    }

    // Critical value marker(s), dashed
    let text_color = style.text_color;
    let (marker_xs, critical_label) = match request.critical_values {
        CriticalValues::One(c) => (vec![c], format!("Critical value = {}", format_value(c))),
        CriticalValues::Symmetric { lower, upper } => (
            vec![lower, upper],
            format!("Critical values = ±{}", format_value(upper)),
        ),
    };
    for (i, &c) in marker_xs.iter().enumerate() {
        let x = c.clamp(x_min, x_max);
        let top = (dist.pdf(x).min(ceiling) * style.headroom).min(y_max);
        let anno = chart.draw_series(DashedLineSeries::new(
            vec![(x, 0.0), (x, top)],
            10,
            8,
            text_color.stroke_width(line_width / 2 + 1),
        ))?;
        if i == 0 {
            anno.label(critical_label.clone()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 40, y)], text_color.stroke_width(2))
            });
        }
        chart.draw_series(std::iter::once(Circle::new(
            (x, 0.0),
            style.marker_radius as i32,
            text_color.filled(),
        )))?;
    }

    // Observed statistic, solid; drawn at the window edge when off-screen
    let stat_x = request.statistic.clamp(x_min, x_max);
    let stat_top = (dist.pdf(stat_x).min(ceiling) * style.headroom).min(y_max);
    chart
        .draw_series(LineSeries::new(
            vec![(stat_x, 0.0), (stat_x, stat_top)],
            text_color.stroke_width(line_width),
        ))?
        .label(format!(
            "{} = {}",
            request.stat_symbol,
            format_value(request.statistic)
        ))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 40, y)], text_color.stroke_width(line_width))
        });
    chart.draw_series(std::iter::once(Circle::new(
        (stat_x, 0.0),
        style.marker_radius,
        text_color.filled(),
    )))?;

    // Text-only legend entry for the p-value
    chart
        .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
        .label(format!("p-value = {}", format_scientific(request.p_value)))
        .legend(|(x, y)| PathElement::new(vec![(x, y)], TRANSPARENT));

    // H₀ label, anchored where the curve leaves room for it
    let (h0_x, h0_y) = request.distribution.null_label_anchor(&*dist);
    let h0_style = ("sans-serif", style.label_font_size)
        .into_font()
        .color(&style.text_color)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(
        "H₀".to_string(),
        (h0_x, h0_y.min(y_max)),
        h0_style,
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(style.text_color)
        .label_font(
            ("sans-serif", style.legend_font_size)
                .into_font()
                .color(&style.text_color),
        )
        .draw()?;

    Ok(())
}

/// Evenly spaced sample points over `[start, end]`, inclusive of both ends.
fn linspace(start: f64, end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let n = samples.max(2);
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |i| start + step * i as f64)
}
