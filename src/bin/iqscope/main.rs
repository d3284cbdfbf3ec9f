//! iqscope - terminal front-end for the I/Q downconversion simulator
//!
//! Run with: cargo run
//! Logging goes to stderr and is off unless RUST_LOG is set.

mod app;
mod ui;

use app::App;
use iqscope::SimConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let mut app = App::new(SimConfig::guided())?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
