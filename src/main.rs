use std::io::{self, stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{info, warn};

mod app;
mod catalog;
mod cli;
mod config;
mod error;
mod export;
mod images;
mod logging;
mod models;
mod session;
mod theme;
mod ui;
mod utils;

use app::App;
use cli::{parse_args, print_usage, Command, VERSION};
use config::{resolve_image_root, SurveyConfig, IMAGE_ROOT_ENV};

fn main() -> io::Result<()> {
    let cli_config = match parse_args() {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("glare-survey {}", VERSION);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            return Err(e);
        }
    };

    let image_root = resolve_image_root(cli_config.image_root, std::env::var_os(IMAGE_ROOT_ENV));
    let mut config = match SurveyConfig::load(&image_root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(io::Error::other(e));
        }
    };
    if let Some(dir) = cli_config.output_dir {
        config.output_dir = dir;
    }
    if let Some(path) = cli_config.log_file {
        config.log_file = path;
    }

    if let Err(e) = logging::init(&config.log_file) {
        eprintln!(
            "Warning: logging disabled, cannot open {}: {}",
            config.log_file.display(),
            e
        );
    }
    info!("Image root: {}", config.image_root.display());

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Some(status) = &app.export_status {
        match status {
            app::ExportStatus::Saved(path) => println!("Results saved to {}", path.display()),
            app::ExportStatus::Failed(message) => {
                warn!("Exited without a saved result");
                eprintln!("Results were not saved: {}", message);
            }
        }
    }
    info!("Session closed at stage {:?}", app.session.stage);

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.refresh_images();
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Nothing changes without input, so block until the next event
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
