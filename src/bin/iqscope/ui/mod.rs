//! TUI module for iqscope
//!
//! Lays out the status bar, two stacked charts and the key help line.

mod spectrum;
mod status;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

use spectrum::{render_complex_spectra, render_real_spectra};
use status::render_status;
use waveform::{render_iq, render_reconstruction};

/// Most points handed to a single chart dataset
const MAX_PLOT_POINTS: usize = 800;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Status bar
            Constraint::Min(6),    // Upper chart
            Constraint::Min(6),    // Lower chart
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_status(frame, chunks[0], app);

    match app.view {
        View::Time => {
            render_reconstruction(frame, chunks[1], &app.output);
            render_iq(frame, chunks[2], &app.output);
        }
        View::Spectrum => {
            render_real_spectra(frame, chunks[1], &app.output);
            render_complex_spectra(frame, chunks[2], &app.output);
        }
    }

    let help = Paragraph::new(
        " [Q] Quit  [Tab] View  [M] Preset  [S] Signal  [←/→] LO  [↑/↓] Noise  [ [ ] ] Taps  [c/C] Cutoff  [F] Filter  [R] Redraw noise",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Pair `xs` with `ys` and thin to at most `max_points` by fixed stride.
///
/// Display only; the computed arrays are never decimated.
pub(crate) fn downsample(xs: &[f64], ys: &[f64], max_points: usize) -> Vec<(f64, f64)> {
    let len = xs.len().min(ys.len());
    let stride = len.div_ceil(max_points.max(1)).max(1);
    (0..len).step_by(stride).map(|i| (xs[i], ys[i])).collect()
}

/// Symmetric y-axis bound that fits every series, never below `min`.
pub(crate) fn y_bound(series: &[&[(f64, f64)]], min: f64) -> f64 {
    series
        .iter()
        .flat_map(|s| s.iter())
        .fold(min, |acc, &(_, y)| acc.max(y.abs()))
}
