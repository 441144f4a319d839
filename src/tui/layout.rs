//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
};

use super::runtime::App;
use super::style;
use crate::metrics::labels::MONTHS;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(4), // KPI cards
            Constraint::Length(8), // sectors
            Constraint::Min(10), // projections
            Constraint::Length(6), // benchmarks
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_kpis(frame, app, chunks[1]);
    render_sectors(frame, app, chunks[2]);
    render_projections(frame, app, chunks[3]);
    render_benchmarks(frame, app, chunks[4]);
    render_footer(frame, chunks[5]);
}

/// Header bar: seed, refresh count, interval, run state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (state_icon, state_label) = if app.paused {
        ("‖", "PAUSED")
    } else {
        ("▶", "LIVE")
    };
    let seed = app
        .seed
        .map_or_else(|| "random".to_string(), |s| format!("seed {s}"));

    let header = Line::from(vec![
        Span::styled(
            " ENERWISE 360 ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {seed} │ refresh #{} │ {}ms │ {state_icon} {state_label} ",
            app.refreshes, app.refresh_ms,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Headline totals with their deltas.
fn render_kpis(frame: &mut Frame, app: &App, area: Rect) {
    let s = &app.snapshot.summary;
    let cards = [
        (
            " Consumption ",
            format!("{} kWh", s.total_consumption_kwh),
            s.consumption_delta_pct,
        ),
        (
            " Cost ",
            format!("R$ {:.2}", s.total_cost_brl),
            s.cost_delta_pct,
        ),
        (
            " Emissions ",
            format!("{:.0} kg CO2", s.total_emissions_kg_co2),
            s.emissions_delta_pct,
        ),
    ];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((title, value, delta), col) in cards.into_iter().zip(cols.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{delta:+.0}%"),
                Style::default().fg(style::delta_color(delta)),
            )),
        ];
        let card = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(card, *col);
    }
}

/// Sector table alongside a consumption bar chart.
fn render_sectors(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let header = Row::new(["Sector", "kWh", "Perf", "°C", "R$", "kg CO2"])
        .style(Style::default().fg(style::TABLE_HEADER_FG));
    let rows: Vec<Row> = app
        .snapshot
        .sectors
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.sector.clone()),
                Cell::from(s.consumption_kwh.to_string()),
                Cell::from(format!("{}%", s.performance_pct))
                    .style(Style::default().fg(style::performance_color(s.performance_pct))),
                Cell::from(format!("{:.1}", s.temperature_c)),
                Cell::from(format!("{:.2}", s.cost_brl)),
                Cell::from(format!("{:.1}", s.emissions_kg_co2)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(13),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(7),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Real-time Monitoring ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, cols[0]);

    let bars: Vec<(&str, u64)> = app
        .snapshot
        .sectors
        .iter()
        .map(|s| (s.sector.as_str(), u64::from(s.consumption_kwh)))
        .collect();
    let chart = BarChart::default()
        .block(Block::default().title(" kWh by Sector ").borders(Borders::ALL))
        .data(bars.as_slice())
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(style::CONSUMPTION_COLOR));
    frame.render_widget(chart, cols[1]);
}

/// Cumulative projection lines for consumption, cost, and emissions.
fn render_projections(frame: &mut Frame, app: &App, area: Rect) {
    let points = &app.snapshot.projections;
    let consumption: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.consumption_kwh as f64))
        .collect();
    let cost: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.cost_brl))
        .collect();
    let emissions: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.emissions_kg_co2))
        .collect();

    let y_bounds = style::auto_bounds_y(&[
        consumption.as_slice(),
        cost.as_slice(),
        emissions.as_slice(),
    ]);
    let x_hi = (MONTHS.len() - 1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("kWh")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::CONSUMPTION_COLOR))
            .data(&consumption),
        Dataset::default()
            .name("R$")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::COST_COLOR))
            .data(&cost),
        Dataset::default()
            .name("kg CO2")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::EMISSIONS_COLOR))
            .data(&emissions),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Monthly Projections ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("month")
                .bounds([0.0, x_hi])
                .labels(vec![MONTHS[0], MONTHS[MONTHS.len() / 2], MONTHS[MONTHS.len() - 1]]),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(vec![format!("{:.0}", y_bounds[0]), format!("{:.0}", y_bounds[1])]),
        );

    frame.render_widget(chart, area);
}

/// Facility benchmark table.
fn render_benchmarks(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(["Facility", "Avg kWh", "Target", "Gap", "Avg R$", "kg CO2"])
        .style(Style::default().fg(style::TABLE_HEADER_FG));
    let rows: Vec<Row> = app
        .snapshot
        .benchmarks
        .iter()
        .map(|b| {
            Row::new(vec![
                Cell::from(b.facility.clone()),
                Cell::from(b.avg_consumption_kwh.to_string()),
                Cell::from(b.target_kwh.to_string())
                    .style(Style::default().fg(style::TARGET_COLOR)),
                Cell::from(format!("{:.1}%", b.target_gap_pct())),
                Cell::from(format!("{:.2}", b.avg_cost_brl)),
                Cell::from(format!("{:.1}", b.emissions_kg_co2)),
            ])
        })
        .collect();
    let widths = [
        Constraint::Length(11),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Facility Benchmarking ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  r:Refresh  Space:Pause  +/-:Interval",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
