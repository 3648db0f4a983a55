//! Command line options.

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "simulator", about = "Desktop simulator for the AQI gauge dashboard")]
pub struct Cli {
    /// JSON-lines feed to display, `-` for stdin. Without it the demo feed is used.
    #[arg(long, short)]
    pub input: Option<String>,

    /// Seconds between timer ticks. Drives the demo feed, or redraws the last
    /// reading when an input is given. No timer without it.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: Option<u64>,

    /// Window pixel scale.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=4))]
    pub scale: u32,

    /// Header title and window caption.
    #[arg(long, default_value = "AQI Dashboard")]
    pub title: String,
}

impl Cli {
    pub fn refresh_interval(&self) -> Option<Duration> { self.refresh_secs.map(Duration::from_secs) }

    /// Demo readings only run when nothing live is configured.
    pub const fn uses_demo_feed(&self) -> bool { self.input.is_none() }
}
