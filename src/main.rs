use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::Game;
use connect_four::ui::{App, PromptShell};
use connect_four::logging;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the line-based prompt instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // The full-screen UI owns the terminal, so only the prompt may log to stderr
    logging::init(&config.logging, cli.plain).context("initialising logging")?;
    tracing::info!(plain = cli.plain, "starting connect four");

    if cli.plain {
        run_prompt(&config)
    } else {
        run_tui(&config).context("running terminal UI")
    }
}

fn run_prompt(config: &AppConfig) -> Result<()> {
    let mut game = Game::new(&config.game);
    let stdin = io::stdin();
    let mut shell =
        PromptShell::new(stdin.lock(), io::stdout()).with_clear_screen(config.ui.clear_screen);
    let result = shell.run(&mut game).context("running prompt")?;
    tracing::info!(?result, moves = game.move_count(), "prompt finished");
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
