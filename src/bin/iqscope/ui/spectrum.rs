//! Spectrum charts
//!
//! One-sided spectra for the real input/reconstruction, two-sided (DC centered)
//! for I/Q before and after the low-pass filter. Levels are dB relative to each
//! spectrum's own peak.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use iqscope::dsp::DbSpectrum;
use iqscope::PipelineOutput;

use super::{downsample, MAX_PLOT_POINTS};

fn points(spectrum: &DbSpectrum) -> Vec<(f64, f64)> {
    downsample(&spectrum.frequencies, &spectrum.levels_db, MAX_PLOT_POINTS)
}

fn spectrum_chart<'a>(
    title: &'a str,
    datasets: Vec<Dataset<'a>>,
    x_bounds: [f64; 2],
    floor: f64,
) -> Chart<'a> {
    Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Hz")
                .bounds(x_bounds)
                .labels(vec![
                    format!("{:.0}", x_bounds[0]),
                    format!("{:.0}", (x_bounds[0] + x_bounds[1]) / 2.0),
                    format!("{:.0}", x_bounds[1]),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("dB")
                .bounds([floor, 0.0])
                .labels(vec![format!("{:.0}", floor), format!("{:.0}", floor / 2.0), "0".to_string()])
                .style(Style::default().fg(Color::DarkGray)),
        )
}

fn dataset<'a>(name: &'a str, color: Color, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

/// Render input and reconstruction spectra, 0 Hz to Nyquist
pub fn render_real_spectra(frame: &mut Frame, area: Rect, output: &PipelineOutput) {
    let db = output.db_spectra();
    let input = points(&db.input);
    let rebuilt = points(&db.reconstructed);
    let floor = output.db_floor().min(-1.0);
    let nyquist = output.sample_rate / 2.0;

    let chart = spectrum_chart(
        " Spectrum: input vs. reconstruction ",
        vec![
            dataset("input", Color::Cyan, &input),
            dataset("rebuilt", Color::Yellow, &rebuilt),
        ],
        [0.0, nyquist],
        floor,
    );
    frame.render_widget(chart, area);
}

/// Render I/Q spectra before and after filtering, -Nyquist to +Nyquist
pub fn render_complex_spectra(frame: &mut Frame, area: Rect, output: &PipelineOutput) {
    let db = output.db_spectra();
    let noisy = points(&db.noisy_iq);
    let filtered = points(&db.filtered_iq);
    let floor = output.db_floor().min(-1.0);
    let nyquist = output.sample_rate / 2.0;

    let chart = spectrum_chart(
        " Spectrum: I/Q before and after low-pass ",
        vec![
            dataset("mixer", Color::Red, &noisy),
            dataset("filtered", Color::Green, &filtered),
        ],
        [-nyquist, nyquist],
        floor,
    );
    frame.render_widget(chart, area);
}
