//! Interactive shell wrapper and entry point.
//!
//! This is the thin runtime around the library's event/action model. It reads
//! line commands from stdin, translates them into [`Event`]s, executes the
//! returned [`Action`]s (catalog fetches, rendering), and feeds fetch
//! outcomes back in as events.
//!
//! # Commands
//!
//! - `<text>` or `/<text>`: search the catalog (blank issues the default query)
//! - `f <n>`: toggle the n-th displayed item as a favorite
//! - `d <n>`: show the detail record for the n-th displayed item
//! - `v`: switch between search results and the favorites view
//! - `q`: quit

use animark::app::{handle_event, Action, Event};
use animark::catalog::{CatalogClient, HttpCatalogClient};
use animark::{initialize, observability, AppState, Config, ListStatus, ViewMode};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "animark", version, about = "Search the anime catalog and keep favorites")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the favorites file (overrides the configured one).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("animark: {e}");
        std::process::exit(1);
    }
}

fn run() -> animark::Result<()> {
    let cli = Cli::parse();
    observability::init_tracing(cli.log.as_deref());

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    let client = HttpCatalogClient::new(&config)?;
    let mut state = initialize(&config)?;

    println!("animark | search: <text>   favorite: f <n>   detail: d <n>   view: v   quit: q");

    // Startup fetch, same as submitting blank input.
    process(&mut state, &client, Event::SubmitQuery(String::new()))?;

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(event) = parse_command(&line, &state) else {
            continue;
        };

        if !process(&mut state, &client, event)? {
            break;
        }
    }

    Ok(())
}

/// Handles one event and executes the resulting actions.
///
/// Returns `false` when the user asked to quit.
fn process(state: &mut AppState, client: &HttpCatalogClient, event: Event) -> animark::Result<bool> {
    for action in handle_event(state, event)? {
        match action {
            Action::FetchCatalog { seq, query } => {
                let outcome = client.search(&query);
                process(state, client, Event::SearchCompleted { seq, outcome })?;
            }
            Action::FetchDetail { id } => match client.detail(id) {
                Ok(detail) => render_detail(&detail),
                Err(e) => println!("Could not load details: {e}"),
            },
            Action::Render => render(state),
            Action::Quit => return Ok(false),
        }
    }
    Ok(true)
}

/// Translates a command line into an event, or reports a usage problem.
fn parse_command(line: &str, state: &AppState) -> Option<Event> {
    let line = line.trim();
    match line {
        "" => None,
        "q" | "quit" => Some(Event::Quit),
        "v" => Some(Event::ToggleView),
        _ => {
            if let Some(index) = line.strip_prefix("f ") {
                return displayed_item(state, index).map(Event::ToggleFavorite);
            }
            if let Some(index) = line.strip_prefix("d ") {
                return displayed_item(state, index).map(|item| Event::ShowDetail(item.id));
            }
            let query = line.strip_prefix('/').unwrap_or(line);
            Some(Event::SubmitQuery(query.to_string()))
        }
    }
}

/// Resolves a 1-based index argument against the current display list.
fn displayed_item(state: &AppState, arg: &str) -> Option<animark::ItemSummary> {
    let list = state.display_list();
    let Ok(n) = arg.trim().parse::<usize>() else {
        println!("Expected an item number, got '{}'.", arg.trim());
        return None;
    };
    match n.checked_sub(1).and_then(|i| list.items.get(i)) {
        Some(item) => Some(item.summary.clone()),
        None => {
            println!("No item {n}; the list has {} entries.", list.items.len());
            None
        }
    }
}

fn render(state: &AppState) {
    let list = state.display_list();

    match list.provenance {
        ViewMode::SearchResults => {
            println!("\nResults for '{}'", state.last_query());
        }
        ViewMode::Favorites => println!("\nFavorites"),
    }

    match list.status {
        ListStatus::FetchFailed => {
            println!("  Search failed. Check your connection and try again.");
        }
        ListStatus::NoResults => match list.provenance {
            ViewMode::SearchResults => println!("  Nothing found."),
            ViewMode::Favorites => println!("  No favorites yet."),
        },
        ListStatus::Pending => println!("  Searching..."),
        ListStatus::Loaded => {
            for (i, item) in list.items.iter().enumerate() {
                let marker = if item.is_favorite { "*" } else { " " };
                let score = item
                    .summary
                    .score
                    .map_or_else(String::new, |s| format!("  [{s:.2}]"));
                println!("{:>3}. {marker} {}{score}", i + 1, item.summary.title);
            }
        }
    }
    println!();
}

fn render_detail(detail: &animark::ItemDetail) {
    println!("\n{} (#{})", detail.title, detail.id);
    if let Some(score) = detail.score {
        println!("  score: {score:.2}");
    }
    if let Some(episodes) = detail.episodes {
        println!("  episodes: {episodes}");
    }
    if let Some(synopsis) = &detail.synopsis {
        println!("\n  {synopsis}");
    }
    println!();
}
