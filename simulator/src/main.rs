//! AQI Dashboard Simulator for desktop platforms.
//!
//! Renders the dashboard into an `embedded-graphics-simulator` window, fed by
//! a JSON-lines stream (`--input`) or by synthetic demo readings.
//!
//! Set `RUST_LOG` to adjust logging, e.g. `RUST_LOG=debug`.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod cli;
mod demo;
mod stream;
mod timing;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use aqi_dashboard_common::colors::BLACK;
use aqi_dashboard_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use aqi_dashboard_common::{Canvas, Dashboard, Reading};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::demo::DemoFeed;
use crate::timing::{FRAME_TIME, Ticker};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let cli = Cli::parse();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    display.clear(BLACK).ok();
    let mut dashboard = Dashboard::new(Canvas::new(display)).context("dashboard layout does not fit the display")?;

    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new(&cli.title, &output_settings);

    dashboard.bootstrap(&cli.title);
    window.update(dashboard.surface().target());

    let feed = match cli.input.as_deref() {
        Some(path) => Some(open_feed(path)?),
        None => None,
    };
    let mut demo = cli.uses_demo_feed().then(DemoFeed::new);
    let mut ticker = cli.refresh_interval().map(|interval| Ticker::new(interval, Instant::now()));
    if feed.is_none() && ticker.is_none() {
        warn!("no --input and no --refresh-secs, showing an empty dashboard");
    }

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown {
                    keycode: Keycode::R,
                    repeat: false,
                    ..
                } => dashboard.redraw(),
                _ => {}
            }
        }

        // Live readings, in arrival order
        if let Some(rx) = &feed {
            for reading in rx.try_iter() {
                dashboard.on_reading(reading);
            }
        }

        if let Some(ticker) = ticker.as_mut()
            && ticker.due(frame_start)
        {
            match demo.as_mut() {
                Some(demo) => dashboard.on_reading(demo.next_reading(unix_secs())),
                None => dashboard.redraw(),
            }
        }

        window.update(dashboard.surface().target());

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Open the input (`-` is stdin) and start its reader thread.
fn open_feed(path: &str) -> anyhow::Result<Receiver<Reading>> {
    let reader: Box<dyn BufRead + Send> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(path).with_context(|| format!("failed to open input `{path}`"))?;
        Box::new(BufReader::new(file))
    };
    info!(input = path, "reading frames");
    stream::spawn(reader).context("failed to start the reader thread")
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
