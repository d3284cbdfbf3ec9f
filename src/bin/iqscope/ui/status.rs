//! Status bar widget - shows the active settings and the measured SNR

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use iqscope::pipeline::FilterDesign;

use crate::app::App;

fn format_snr(db: f64) -> String {
    if db.is_infinite() {
        "∞ dB".to_string()
    } else {
        format!("{:.1} dB", db)
    }
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" iqscope · {} ", app.mode.name()))
        .borders(Borders::ALL);

    let config = &app.config;
    let output = &app.output;

    let filter = match config.filter.design {
        FilterDesign::MovingAverage => format!("{} × {}", config.filter.design.name(), config.filter.taps),
        FilterDesign::WindowedSinc(_) => format!(
            "{} × {} @ {:.0} Hz",
            config.filter.design.name(),
            config.filter.taps,
            config.filter.cutoff_hz
        ),
    };

    let settings = Line::from(vec![
        Span::styled(
            format!(" {}  ", config.signal),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("LO {:.0} Hz  ", config.carrier_freq),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!("LPF {}  ", filter), Style::default().fg(Color::White)),
        Span::styled(
            format!("noise {:.2}  ", config.noise_power),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:.1} kHz · {} samples", output.sample_rate / 1000.0, output.time.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let result = match &app.message {
        Some(message) => Line::from(Span::styled(
            format!(" rejected: {}", message),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::styled(
                format!(" SNR {}  ", format_snr(output.snr.db)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("gain fit ×{:.3} over {} samples", output.snr.scale, output.snr.samples),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    };

    let paragraph = Paragraph::new(vec![settings, result]).block(block);
    frame.render_widget(paragraph, area);
}
