use std::{fs::File, io, panic, path::PathBuf};

use anyhow::{Context, Result};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use simplelog::{ConfigBuilder, WriteLogger};

use statusview::config::ViewerConfig;
use statusview::model::Status;
use statusview::ui::App;

fn init_logging(config: &ViewerConfig) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    WriteLogger::init(
        config.level_filter()?,
        ConfigBuilder::new().set_time_format_rfc3339().build(),
        file,
    )?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ViewerConfig::load()?;
    init_logging(&config)?;

    // Set up panic hook for cleanup
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let status = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Some(
            Status::load(&path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => {
            log::warn!("No status file given, showing an empty view");
            None
        }
    };

    let app = App::new(status, config);

    if let Err(err) = app.run().await {
        // Clean up terminal before handling the error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("Viewer failed: {:?}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
