//! duet CLI - side-by-side text comparison viewer

mod app;
mod config;
mod plain;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use duet_core::{Session, Transform};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(author, version, about = "A side-by-side text comparison viewer")]
struct Args {
    /// Left-hand input, or - for stdin
    left: PathBuf,

    /// Right-hand input, or - for stdin
    right: PathBuf,

    /// Normalize both inputs before comparing (repeatable):
    /// lowercase, sort-lines, collapse-whitespace, join-lines
    #[arg(short, long, value_name = "NAME")]
    transform: Vec<Transform>,

    /// Print the comparison once and exit instead of opening the viewer
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colors in plain output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Two aligned text columns
    Plain,
    /// The full comparison as JSON (blocks, rows, diff count)
    Json,
}

/// Read one input side: a file path, or stdin for `-`.
fn read_input(path: &Path) -> Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok((text, "(stdin)".to_string()))
    } else {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read: {}", path.display()))?;
        Ok((text, path.display().to_string()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::Config::load();

    if args.left.as_os_str() == "-" && args.right.as_os_str() == "-" {
        anyhow::bail!("only one side can read from stdin");
    }

    let (left_text, left_name) = read_input(&args.left)?;
    let (right_text, right_name) = read_input(&args.right)?;

    let mut session = Session::new(left_text, right_text);
    for transform in config.default_transforms() {
        session.apply(transform);
    }
    for transform in &args.transform {
        session.apply(*transform);
    }

    // One-shot output for pipes or an explicit --format.
    if args.format.is_some() || !io::stdout().is_terminal() {
        let comparison = session.compare();
        match args.format.unwrap_or(OutputFormat::Plain) {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            }
            OutputFormat::Plain => {
                let color = !args.no_color && io::stdout().is_terminal();
                print!(
                    "{}",
                    plain::render(&comparison, color, config.ui.line_numbers)
                );
            }
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, left_name, right_name, &config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
