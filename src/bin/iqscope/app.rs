//! Application state and keyboard controls

use std::time::Duration;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use iqscope::{pipeline, PipelineOutput, SimConfig};

const CARRIER_STEP_HZ: f64 = 5.0;
const CUTOFF_STEP_HZ: f64 = 5.0;
const NOISE_STEP: f64 = 0.05;
const TAPS_STEP: usize = 2;

/// Which pair of plots fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Time,
    Spectrum,
}

/// Which preset the controls started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Guided,
    Receiver,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Guided => "guided",
            Mode::Receiver => "receiver",
        }
    }
}

pub struct App {
    pub config: SimConfig,
    pub output: PipelineOutput,
    pub view: View,
    pub mode: Mode,
    /// Last rejected setting, shown until the next successful run
    pub message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: SimConfig) -> EyreResult<Self> {
        let output = pipeline::run(&config).wrap_err("initial settings are invalid")?;
        Ok(Self {
            config,
            output,
            view: View::Time,
            mode: Mode::Guided,
            message: None,
            should_quit: false,
        })
    }

    /// Redraw and handle keys until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| crate::ui::render(frame, self))
                .wrap_err("failed to draw frame")?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        let mut next = self.config.clone();

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.view = match self.view {
                    View::Time => View::Spectrum,
                    View::Spectrum => View::Time,
                };
                return;
            }
            KeyCode::Char('m') => {
                (self.mode, next) = match self.mode {
                    Mode::Guided => (Mode::Receiver, SimConfig::receiver()),
                    Mode::Receiver => (Mode::Guided, SimConfig::guided()),
                };
            }
            KeyCode::Char('s') => next.signal = next.signal.next(),
            KeyCode::Left => next.carrier_freq = (next.carrier_freq - CARRIER_STEP_HZ).max(0.0),
            KeyCode::Right => next.carrier_freq += CARRIER_STEP_HZ,
            KeyCode::Up => next.noise_power += NOISE_STEP,
            KeyCode::Down => next.noise_power = (next.noise_power - NOISE_STEP).max(0.0),
            KeyCode::Char('[') => next.filter.taps = next.filter.taps.saturating_sub(TAPS_STEP).max(1),
            KeyCode::Char(']') => next.filter.taps += TAPS_STEP,
            KeyCode::Char('c') => next.filter.cutoff_hz -= CUTOFF_STEP_HZ,
            KeyCode::Char('C') => next.filter.cutoff_hz += CUTOFF_STEP_HZ,
            KeyCode::Char('f') => next.filter.design = next.filter.design.next(),
            // Fresh noise draw with the same settings
            KeyCode::Char('r') => {}
            _ => return,
        }

        self.apply(next);
    }

    /// Re-run the pipeline; keep the old result if the new settings are rejected.
    fn apply(&mut self, next: SimConfig) {
        match pipeline::run(&next) {
            Ok(output) => {
                self.config = next;
                self.output = output;
                self.message = None;
            }
            Err(err) => {
                log::warn!("rejected settings: {err}");
                self.message = Some(err.to_string());
            }
        }
    }
}
