//! Time-domain charts: input vs. reconstruction, and the filtered I/Q pair

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use iqscope::PipelineOutput;

use super::{downsample, y_bound, MAX_PLOT_POINTS};

fn line<'a>(name: &'a str, color: Color, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn time_chart<'a>(title: &'a str, datasets: Vec<Dataset<'a>>, duration: f64, bound: f64) -> Chart<'a> {
    Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("t (s)")
                .bounds([0.0, duration.max(f64::EPSILON)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-bound, bound])
                .labels(vec![format!("{:.1}", -bound), "0".to_string(), format!("{:.1}", bound)])
                .style(Style::default().fg(Color::DarkGray)),
        )
}

/// Render the original signal over the gain-corrected reconstruction
pub fn render_reconstruction(frame: &mut Frame, area: Rect, output: &PipelineOutput) {
    let scaled: Vec<f64> = output
        .reconstructed
        .iter()
        .map(|&x| x * output.snr.scale)
        .collect();

    let input = downsample(&output.time, &output.input, MAX_PLOT_POINTS);
    let rebuilt = downsample(&output.time, &scaled, MAX_PLOT_POINTS);
    let bound = y_bound(&[&input, &rebuilt], 1.0);
    let duration = output.time.last().copied().unwrap_or(0.0);

    let chart = time_chart(
        " Input vs. reconstruction (gain fitted) ",
        vec![
            line("input", Color::Cyan, &input),
            line("rebuilt", Color::Yellow, &rebuilt),
        ],
        duration,
        bound,
    );
    frame.render_widget(chart, area);
}

/// Render filtered I and Q
pub fn render_iq(frame: &mut Frame, area: Rect, output: &PipelineOutput) {
    let i = downsample(&output.time, &output.filtered_iq.i, MAX_PLOT_POINTS);
    let q = downsample(&output.time, &output.filtered_iq.q, MAX_PLOT_POINTS);
    let bound = y_bound(&[&i, &q], 0.5);
    let duration = output.time.last().copied().unwrap_or(0.0);

    let chart = time_chart(
        " Filtered I/Q ",
        vec![line("I", Color::Green, &i), line("Q", Color::Magenta, &q)],
        duration,
        bound,
    );
    frame.render_widget(chart, area);
}
