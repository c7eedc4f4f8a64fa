//! KODE_OS terminal desktop entry point.
//!
//! Reads lines from stdin and feeds them to a terminal session; plain lines
//! are typed and submitted, `:up`/`:down` walk the history, `:min`, `:max`,
//! `:close` and `:reboot` click the window chrome, `:brand` prints the brand
//! logo and `:quit` exits. The session is ticked on a fixed frame step and
//! its transcript is printed to stdout as it appears.

mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use input::AppCommand;
use kode_platform::DesktopPlatform;
use kode_terminal::TerminalSession;
use kode_types::config::TerminalConfig;
use kode_ui::{BrandLogo, Loader};
use render::TranscriptPrinter;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config path from CLI arg or KODE_CONFIG env var; defaults otherwise.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("KODE_CONFIG").ok())
    {
        Some(path) => TerminalConfig::load(&PathBuf::from(path))?,
        None => TerminalConfig::default(),
    };
    log::info!(
        "Starting KODE_OS terminal as {} ({}x{})",
        config.prompt_identity(),
        config.viewport_width,
        config.viewport_height,
    );

    let frame_ms = config.frame_ms;
    let mut session = TerminalSession::new(config, Box::new(DesktopPlatform::new()))?;
    let mut brand = BrandLogo::new();
    let mut loader = Loader::new();
    let mut printer = TranscriptPrinter::new();

    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut input_closed = false;

    'running: loop {
        loop {
            match rx.try_recv() {
                Ok(line) => match input::parse_line(&line) {
                    AppCommand::Events(events) => {
                        for event in &events {
                            session.handle_input(event);
                        }
                    },
                    AppCommand::ShowBrand => {
                        writeln!(out)?;
                        write!(out, "{}", render::brand_line(&brand))?;
                    },
                    AppCommand::Quit => break 'running,
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    input_closed = true;
                    break;
                },
            }
        }

        session.tick(frame_ms);
        brand.tick(frame_ms);
        if loader.tick(frame_ms) {
            log::info!("loader done, brand animation running");
        }

        printer.print(&session, &mut out)?;
        out.flush()?;

        if input_closed && session.is_idle() {
            break;
        }
        thread::sleep(Duration::from_millis(u64::from(frame_ms)));
    }

    writeln!(out)?;
    log::info!("KODE_OS terminal shut down cleanly");
    Ok(())
}
