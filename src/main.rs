use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use drop_four::config::AppConfig;
use drop_four::ui::App;

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "drop-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Skip the size menu and play on a board with this many rows
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Skip the size menu and play on a board with this many columns
    #[arg(long, requires = "rows")]
    cols: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut app = match (cli.rows, cli.cols) {
        (Some(rows), Some(cols)) => {
            if rows == 0 || cols == 0 {
                bail!("--rows and --cols must be greater than zero");
            }
            App::with_board(config, rows, cols)
        }
        _ => App::new(config),
    };

    run(&mut app)
}

fn run(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
