//! Topix - a terminal-based topic catalog browser.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use topix::app::{App, Theme};
use topix::ui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "topix")]
#[command(about = "A terminal-based catalog browser for data-structure topics", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Disable the particle burst effect
    #[arg(long)]
    no_effects: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Topix");
    }

    let theme = if args.light {
        Theme::PurpleLight
    } else {
        Theme::PurpleDark
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(theme, args.no_effects)?;
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Topix exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Search mode - handle separately; the filter updates live
            if app.search.is_active() {
                match key.code {
                    KeyCode::Enter => app.search.accept(),
                    KeyCode::Esc => {
                        app.search.cancel();
                        app.clamp_cursor();
                    },
                    KeyCode::Backspace => {
                        app.search.backspace();
                        app.clamp_cursor();
                    },
                    KeyCode::Char(c) => {
                        app.search.input(c);
                        app.clamp_cursor();
                    },
                    _ => {},
                }
                continue;
            }

            // Normal mode
            match (key.modifiers, key.code) {
                // Quit
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                // Navigation
                (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                    app.cursor_up();
                },
                (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                    app.cursor_down();
                },

                // Vim navigation
                (KeyModifiers::NONE, KeyCode::Char('g')) => {
                    if pending_g {
                        app.goto_first();
                        pending_g = false;
                    } else {
                        pending_g = true;
                    }
                },
                (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                    app.goto_last();
                },
                (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                    for _ in 0..3 {
                        app.cursor_down();
                    }
                },
                (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
                    for _ in 0..3 {
                        app.cursor_up();
                    }
                },

                // Expand/collapse
                (KeyModifiers::NONE, KeyCode::Enter)
                | (KeyModifiers::NONE, KeyCode::Char(' '))
                | (KeyModifiers::NONE, KeyCode::Char('l'))
                | (KeyModifiers::NONE, KeyCode::Right) => {
                    app.toggle_current();
                },
                (KeyModifiers::NONE, KeyCode::Char('h'))
                | (KeyModifiers::NONE, KeyCode::Left) => {
                    if app.expanded.is_some() {
                        app.dismiss();
                    }
                },

                // Search
                (KeyModifiers::NONE, KeyCode::Char('/')) => {
                    app.search.start();
                },

                // Theme
                (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                    app.cycle_theme();
                },

                (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                    app.status = "Help: q=quit, j/k=nav, Enter=expand, /=search, T=theme"
                        .to_string();
                },

                // Escape - collapse the card, then clear the filter
                (KeyModifiers::NONE, KeyCode::Esc) => {
                    app.dismiss();
                },

                _ => {
                    pending_g = false;
                },
            }
        }
    }
}
