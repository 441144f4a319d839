//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Consumption series color.
pub const CONSUMPTION_COLOR: Color = Color::Cyan;
/// Cost series color.
pub const COST_COLOR: Color = Color::Yellow;
/// Emissions series color.
pub const EMISSIONS_COLOR: Color = Color::Magenta;
/// Facility target color.
pub const TARGET_COLOR: Color = Color::Green;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Table header color.
pub const TABLE_HEADER_FG: Color = Color::LightBlue;

/// Returns a color for a sector performance score.
pub fn performance_color(pct: u32) -> Color {
    if pct >= 85 {
        Color::Green
    } else if pct >= 70 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Returns a color for a headline delta: falling totals are good news.
pub fn delta_color(delta_pct: f64) -> Color {
    if delta_pct <= 0.0 {
        Color::Green
    } else {
        Color::Red
    }
}

/// Computes Y-axis bounds across several series with 10% padding.
pub fn auto_bounds_y(series: &[&[(f64, f64)]]) -> [f64; 2] {
    let all = series.iter().flat_map(|s| s.iter()).map(|&(_, y)| y);
    let min = all.clone().fold(f64::INFINITY, f64::min);
    let max = all.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let range = (max - min).max(1.0);
    let pad = range * 0.1;
    [(min - pad).max(0.0), max + pad]
}
