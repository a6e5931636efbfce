//! Adaptive chart layout solvers.
//!
//! Given a chart width and an item count, compute geometry that fits every
//! item inside the viewport without overlap: bar width and spacing for
//! categorical charts, radii for donut/pie charts, point spacing for line
//! charts. The solvers are total pure functions: degenerate inputs (zero
//! items, the minimum supported width) still produce finite, non-negative,
//! usable geometry.

use serde::Serialize;
use tracing::debug;

/// Narrowest chart the views ever lay out; smaller viewports are clamped up.
pub const MIN_CHART_WIDTH: f64 = 280.0;

/// Horizontal screen padding around a chart.
const CHART_PADDING: f64 = 32.0;

/// Default leading/trailing gap inside a bar chart.
pub const DEFAULT_INITIAL_SPACING: f64 = 10.0;

const LINE_INITIAL_SPACING: f64 = 20.0;

/// Oversized-screen shrink factor for radial charts.
const WIDE_RADIUS_SHRINK: f64 = 0.3;

const PIE_TEXT_SIZE: f64 = 12.0;

/// Usable chart width for a viewport: padding trimmed, floored at
/// [`MIN_CHART_WIDTH`].
pub fn chart_width(viewport_width: f64) -> f64 {
    (viewport_width - CHART_PADDING).max(MIN_CHART_WIDTH)
}

/// Viewport width band. Each band carries its own sizing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Narrow,
    Medium,
    Wide,
}

impl DeviceClass {
    pub fn from_width(width: f64) -> Self {
        if width < 400.0 {
            DeviceClass::Narrow
        } else if width < 768.0 {
            DeviceClass::Medium
        } else {
            DeviceClass::Wide
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BandLimits {
    min_bar_width: f64,
    max_bar_width: f64,
    min_spacing: f64,
}

/// Sizing policy per band. Narrow screens scale their bounds with the item
/// count so every bar stays visible; medium and wide use fixed constants.
fn band_limits(device: DeviceClass, chart_width: f64, num_bars: usize) -> BandLimits {
    match device {
        DeviceClass::Narrow => {
            let bars = num_bars.max(1) as f64;
            BandLimits {
                min_bar_width: (chart_width / (bars * 2.0)).floor().max(6.0),
                max_bar_width: ((chart_width / bars) * 0.7).floor().min(25.0),
                min_spacing: 1.0,
            }
        }
        DeviceClass::Medium => BandLimits {
            min_bar_width: 12.0,
            max_bar_width: 35.0,
            min_spacing: 3.0,
        },
        DeviceClass::Wide => BandLimits {
            min_bar_width: 15.0,
            max_bar_width: 45.0,
            min_spacing: 5.0,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarChartLayout {
    pub bar_width: f64,
    pub spacing: f64,
    pub initial_spacing: f64,
}

/// Solve bar width and spacing so `num_bars` bars fill `chart_width` without
/// overflowing it. The candidate width is the floor of an even split after
/// reserving minimum gaps, clamped into the band bounds; spacing then soaks
/// up the leftover, never dropping below the band minimum.
pub fn bar_chart_layout(chart_width: f64, num_bars: usize, initial_spacing: f64) -> BarChartLayout {
    let device = DeviceClass::from_width(chart_width);
    let limits = band_limits(device, chart_width, num_bars);
    let available = chart_width - initial_spacing * 2.0;

    let mut bar_width = limits.min_bar_width;
    let mut spacing = limits.min_spacing;

    if num_bars == 0 {
        debug!(
            target: "moodpulse::charts",
            chart_width, "bar layout requested for zero bars"
        );
    } else {
        let bars = num_bars as f64;
        let gaps = num_bars.saturating_sub(1) as f64;

        let candidate = ((available - limits.min_spacing * gaps) / bars).floor();
        bar_width = candidate.min(limits.max_bar_width).max(limits.min_bar_width);

        if num_bars > 1 {
            let leftover = available - bar_width * bars;
            spacing = (leftover / gaps).floor().max(limits.min_spacing);
        }
    }

    BarChartLayout {
        bar_width,
        spacing,
        initial_spacing,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieChartLayout {
    pub radius: f64,
    pub inner_radius: f64,
    pub text_size: f64,
}

/// Radii for a pie or donut chart. Wide screens shrink the base radius so
/// the chart doesn't dwarf the rest of the view; the donut hole is half the
/// outer radius, floored.
pub fn pie_chart_layout(chart_width: f64, donut: bool) -> PieChartLayout {
    let mut radius = chart_width / 3.0;
    if DeviceClass::from_width(chart_width) == DeviceClass::Wide {
        radius *= WIDE_RADIUS_SHRINK;
    }

    let inner_radius = if donut { (radius / 2.0).floor() } else { 0.0 };

    PieChartLayout {
        radius,
        inner_radius,
        text_size: PIE_TEXT_SIZE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineChartLayout {
    pub spacing: f64,
    pub initial_spacing: f64,
}

/// Point spacing for a line chart: an even split of the width, or half the
/// width when there is nothing to plot yet.
pub fn line_chart_layout(chart_width: f64, num_points: usize) -> LineChartLayout {
    let spacing = if num_points > 0 {
        chart_width / num_points as f64
    } else {
        chart_width / 2.0
    };

    LineChartLayout {
        spacing,
        initial_spacing: LINE_INITIAL_SPACING,
    }
}
