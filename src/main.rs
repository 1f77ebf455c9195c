//! sdsview - A terminal-based chemical Safety Data Sheet browser.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sdsview::app::{App, Theme};
use sdsview::catalog::{BuiltinSource, CatalogCache, CatalogSource, CsvSource};
use sdsview::config::ViewerConfig;
use sdsview::presentation::RecordView;
use sdsview::query::{HazardTag, Query};
use sdsview::{template, ui};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sdsview")]
#[command(about = "A terminal-based chemical Safety Data Sheet browser", long_about = None)]
struct Args {
    /// CSV catalog to browse instead of the built-in table
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Initial search text (name or formula)
    #[arg(long, short)]
    search: Option<String>,

    /// Initial hazard class filter; repeat for several
    #[arg(long = "hazard", value_name = "TAG", value_parser = parse_hazard)]
    hazards: Vec<HazardTag>,

    /// Directory the template export writes into
    #[arg(long)]
    export_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print matching records as plain text
    List {
        /// Search text (name or formula)
        #[arg(long, short)]
        search: Option<String>,

        /// Hazard class filter; repeat for several
        #[arg(long = "hazard", value_name = "TAG", value_parser = parse_hazard)]
        hazards: Vec<HazardTag>,
    },
    /// Write the blank SDS template CSV
    Template {
        /// Output path, or `-` for stdout
        #[arg(long, short, default_value = template::TEMPLATE_FILE_NAME)]
        output: PathBuf,
    },
}

fn parse_hazard(value: &str) -> std::result::Result<HazardTag, String> {
    HazardTag::parse(value).ok_or_else(|| {
        let known: Vec<&str> = HazardTag::ALL.iter().map(|t| t.label()).collect();
        format!("unknown hazard class '{}' (expected one of: {})", value, known.join(", "))
    })
}

fn build_query(search: Option<String>, hazards: &[HazardTag]) -> Query {
    Query::new(
        search.unwrap_or_default(),
        hazards.iter().map(|t| t.label()),
    )
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting sdsview");
    }

    let source: Box<dyn CatalogSource> = match &args.catalog {
        Some(path) => Box::new(CsvSource::new(path.clone())),
        None => Box::new(BuiltinSource),
    };
    let cache = CatalogCache::new(source);
    let catalog = cache
        .get()
        .with_context(|| format!("Could not load {}", cache.source().describe()))?
        .clone();

    match args.command {
        Some(Command::List { search, hazards }) => {
            let query = build_query(search, &hazards);
            let view = query.apply(catalog.records());
            let mut out = io::stdout().lock();
            if view.is_empty() {
                writeln!(out, "No chemicals match the given filters.")?;
            }
            for (i, record) in view.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", RecordView::new(record).to_plain_text())?;
            }
            return Ok(());
        },
        Some(Command::Template { output }) => {
            let bytes = template::template_bytes(&catalog)?;
            if output.as_os_str() == "-" {
                io::stdout().write_all(&bytes)?;
            } else {
                std::fs::write(&output, bytes)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                eprintln!("Template written to {}", output.display());
            }
            return Ok(());
        },
        None => {},
    }

    let mut config = ViewerConfig {
        initial_query: build_query(args.search, &args.hazards),
        ..ViewerConfig::default()
    };
    if args.light {
        config.theme = Theme::GruvboxLight;
    }
    if let Some(dir) = args.export_dir {
        config.export_dir = dir;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(catalog, cache.source().describe(), config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("sdsview stopped: {:#}", err);
    } else if args.log.is_some() {
        tracing::info!("sdsview exited");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Search mode - handle separately
        if app.search.is_active() {
            match key.code {
                KeyCode::Enter => app.search_submit(),
                KeyCode::Esc => app.search_cancel(),
                KeyCode::Backspace => app.search_backspace(),
                KeyCode::Char(c) => app.search_input(c),
                _ => {},
            }
            continue;
        }

        // Hazard selector mode
        if app.hazards.is_active() {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
                (KeyModifiers::NONE, KeyCode::Up)
                | (KeyModifiers::NONE, KeyCode::Char('k')) => app.hazards.cursor_up(),
                (KeyModifiers::NONE, KeyCode::Down)
                | (KeyModifiers::NONE, KeyCode::Char('j')) => app.hazards.cursor_down(),
                (KeyModifiers::NONE, KeyCode::Char(' '))
                | (KeyModifiers::NONE, KeyCode::Enter) => app.toggle_hazard(),
                (KeyModifiers::NONE, KeyCode::Char('x')) => app.clear_filters(),
                (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Tab) => {
                    app.hazards.blur();
                    app.status = app.match_summary();
                },
                (KeyModifiers::NONE, KeyCode::Char('/')) => {
                    app.hazards.blur();
                    app.search.start();
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
                app.results.cursor_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.results.cursor_down();
            },

            // Vim navigation
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.results.goto_first();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => app.results.goto_last(),

            // Filters
            (KeyModifiers::NONE, KeyCode::Char('/')) => app.search.start(),
            (KeyModifiers::NONE, KeyCode::Tab) => {
                app.hazards.focus();
                app.status = "Select hazard classes".to_string();
            },
            (KeyModifiers::NONE, KeyCode::Char('x')) => app.clear_filters(),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('t')) => app.toggle_details(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::NONE, KeyCode::Char('e')) => app.export_template(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_current(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.status = "Help: q=quit, j/k=nav, /=search, Tab=hazard classes, x=clear, e=export template, y=copy, T=theme".to_string();
            },

            // Details scrolling
            (KeyModifiers::CONTROL, KeyCode::Char('d')) | (KeyModifiers::SHIFT, KeyCode::Char('J')) => {
                app.scroll_details_down();
            },
            (KeyModifiers::CONTROL, KeyCode::Char('u')) | (KeyModifiers::SHIFT, KeyCode::Char('K')) => {
                app.scroll_details_up();
            },

            _ => {},
        }
        pending_g = false;
    }
}
