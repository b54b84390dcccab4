use crate::histogram::Histogram;
use crate::scale::tick_step;
use crate::tooltip::{format_humidity, on_pointer_enter};
use humidity_chart_common::{ChartConfig, Result};
use std::fmt::Write as FmtWrite;

const X_AXIS_TICKS: usize = 10;
const TICK_LENGTH: f64 = 6.0;
const LABEL_OFFSET: f64 = 5.0;

/// Render the histogram into a standalone SVG document. Hover behavior
/// (tooltip opacity 0 -> 1) is carried by an embedded stylesheet, so the
/// host viewer's pointer events drive it without any script.
pub fn render_svg(histogram: &Histogram, config: &ChartConfig) -> Result<String> {
    let dims = &histogram.dims;
    let bounded_w = dims.bounded_width();
    let bounded_h = dims.bounded_height();
    let mut svg = String::with_capacity(16 * 1024);

    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" role=\"figure\" tabindex=\"0\">",
        config.wrapper_id, dims.width, dims.height, dims.width, dims.height,
    )?;
    writeln!(
        svg,
        "<title>Histogram looking at the distribution of humidity</title>"
    )?;

    write_stylesheet(&mut svg)?;

    // bounds group: everything below draws in bounded coordinates
    writeln!(
        svg,
        "<g transform=\"translate({}, {})\">",
        dims.margin.left, dims.margin.top,
    )?;

    writeln!(
        svg,
        "<g tabindex=\"0\" role=\"list\" aria-label=\"histogram bars\">"
    )?;
    for (i, bin) in histogram.bins.iter().enumerate() {
        let geo = histogram.bar_geometry(bin);
        writeln!(
            svg,
            "<g class=\"bin\" tabindex=\"0\" role=\"listitem\" aria-label=\"There were {} days between {} and {} humidity levels.\">",
            bin.count,
            format_humidity(bin.x0),
            format_humidity(bin.x1),
        )?;
        writeln!(
            svg,
            "<rect class=\"bar\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>",
            geo.x, geo.y, geo.width, geo.height,
        )?;
        // labels are suppressed for empty bins
        if bin.count > 0 {
            let center = histogram.x_scale.scale(bin.x0)
                + (histogram.x_scale.scale(bin.x1) - histogram.x_scale.scale(bin.x0)) / 2.0;
            writeln!(
                svg,
                "<text class=\"bar-label\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" role=\"presentation\" aria-hidden=\"true\">{}</text>",
                center,
                geo.y - LABEL_OFFSET,
                bin.count,
            )?;
        }
        write_tooltip(&mut svg, histogram, config, i)?;
        writeln!(svg, "</g>")?;
    }
    writeln!(svg, "</g>")?;

    write_mean_line(&mut svg, histogram)?;
    write_x_axis(&mut svg, histogram, bounded_w, bounded_h)?;

    writeln!(svg, "</g>")?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn write_stylesheet(svg: &mut String) -> Result<()> {
    writeln!(svg, "<style>")?;
    writeln!(svg, ".bar {{ fill: cornflowerblue; }}")?;
    writeln!(
        svg,
        "text {{ font-family: sans-serif; font-size: 10px; fill: #34495e; }}"
    )?;
    writeln!(
        svg,
        ".mean {{ stroke: maroon; stroke-dasharray: 2px 4px; }}"
    )?;
    writeln!(svg, ".x-axis-label {{ font-size: 14px; fill: black; }}")?;
    writeln!(svg, ".axis-domain, .tick {{ stroke: black; }}")?;
    writeln!(
        svg,
        ".tooltip {{ opacity: 0; pointer-events: none; }}"
    )?;
    writeln!(svg, ".bin:hover .tooltip {{ opacity: 1; }}")?;
    writeln!(svg, ".tooltip rect {{ fill: white; stroke: #ddd; }}")?;
    writeln!(svg, "</style>")?;
    Ok(())
}

/// One tooltip panel per bar, prepositioned from the pointer-enter state
/// and toggled by the hover rule. Tooltip coordinates are outer, so the
/// enclosing bounds translation is subtracted back out.
fn write_tooltip(
    svg: &mut String,
    histogram: &Histogram,
    config: &ChartConfig,
    bin_index: usize,
) -> Result<()> {
    let state = match on_pointer_enter(histogram, bin_index) {
        Some(s) => s,
        None => return Ok(()),
    };
    let x = state.x - histogram.dims.margin.left;
    let y = state.y - histogram.dims.margin.top;
    writeln!(
        svg,
        "<g class=\"tooltip\" id=\"{}-{}\" transform=\"translate({:.2}, {:.2})\">",
        config.tooltip_id, bin_index, x, y,
    )?;
    writeln!(svg, "<rect x=\"-45\" y=\"-36\" width=\"90\" height=\"32\"/>")?;
    writeln!(
        svg,
        "<text class=\"tooltip-count\" y=\"-24\" text-anchor=\"middle\">{}</text>",
        state.count,
    )?;
    writeln!(
        svg,
        "<text class=\"tooltip-range\" y=\"-10\" text-anchor=\"middle\">{}</text>",
        state.range,
    )?;
    writeln!(svg, "</g>")?;
    Ok(())
}

fn write_mean_line(svg: &mut String, histogram: &Histogram) -> Result<()> {
    let mean_px = histogram.x_scale.scale(histogram.mean);
    let bounded_h = histogram.dims.bounded_height();
    writeln!(
        svg,
        "<line class=\"mean\" x1=\"{mean_px:.2}\" x2=\"{mean_px:.2}\" y1=\"-15\" y2=\"{bounded_h:.2}\"/>"
    )?;
    writeln!(
        svg,
        "<text x=\"{:.2}\" y=\"-20\" fill=\"maroon\" text-anchor=\"middle\" role=\"presentation\" aria-hidden=\"true\">mean {}</text>",
        mean_px,
        format_humidity(histogram.mean),
    )?;
    Ok(())
}

fn write_x_axis(
    svg: &mut String,
    histogram: &Histogram,
    bounded_w: f64,
    bounded_h: f64,
) -> Result<()> {
    writeln!(svg, "<g transform=\"translate(0, {bounded_h:.2})\">")?;
    writeln!(
        svg,
        "<line class=\"axis-domain\" x1=\"0\" x2=\"{bounded_w:.2}\" y1=\"0\" y2=\"0\"/>"
    )?;
    let (lo, hi) = histogram.x_scale.domain();
    let step = tick_step(lo, hi, X_AXIS_TICKS);
    for tick in histogram.x_scale.ticks(X_AXIS_TICKS) {
        let x = histogram.x_scale.scale(tick);
        writeln!(
            svg,
            "<line class=\"tick\" x1=\"{x:.2}\" x2=\"{x:.2}\" y1=\"0\" y2=\"{TICK_LENGTH}\"/>"
        )?;
        writeln!(
            svg,
            "<text x=\"{:.2}\" y=\"20\" text-anchor=\"middle\" role=\"presentation\" aria-hidden=\"true\">{}</text>",
            x,
            format_tick(tick, step),
        )?;
    }
    writeln!(
        svg,
        "<text class=\"x-axis-label\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" role=\"presentation\" aria-hidden=\"true\">Humidity</text>",
        bounded_w / 2.0,
        histogram.dims.margin.bottom - 10.0,
    )?;
    writeln!(svg, "</g>")?;
    Ok(())
}

/// Tick label precision follows the tick step: whole steps print as
/// integers, fractional steps with just enough decimal places.
fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}
