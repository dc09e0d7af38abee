mod app;
mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

use forma_dom::{FocusState, Terminal};
use log::{error, info};
use simplelog::{Config, WriteLogger};

use crate::app::DemoApp;
use crate::config::DemoConfig;
use crate::error::DemoError;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    if let Err(e) = run() {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::from_env()?;
    let log_path = init_logging(&config)?;
    info!("forma-demo starting, logging to {}", log_path.display());

    let mut terminal = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut app = DemoApp::new();

    while !app.should_quit() {
        let mut root = app.element();

        // focused element may have vanished, e.g. headers while the table loads
        if let Some(blur) = focus.retain_valid(&root) {
            app.handle_event(&blur);
            root = app.element();
        }
        focus.apply(&mut root);
        terminal.render(&root)?;

        let raw = terminal.poll(Some(POLL_INTERVAL))?;
        if raw.is_empty() {
            continue;
        }
        for event in focus.process_events(&raw, &root, terminal.layout()) {
            app.handle_event(&event);
            if app.should_quit() {
                break;
            }
        }
    }

    info!("forma-demo exiting");
    Ok(())
}

/// Install the file logger. Logs never go to the terminal the demo draws on.
fn init_logging(config: &DemoConfig) -> Result<PathBuf, DemoError> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => {
            paths::rotate_logs();
            paths::log_file().ok_or(DemoError::NoCacheDir)?
        }
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(config.log_level, Config::default(), file)?;
    Ok(path)
}
