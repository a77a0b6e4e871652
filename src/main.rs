use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use recipes::present::{Card, Detail, Surface};
use recipes::{browse, show, QueryInput, State};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes by name, or filter by category and area
    Search {
        term: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        area: Option<String>,
    },

    /// Show the full recipe for one id
    Show { id: String },

    /// List the available category and area filters
    Filters,
}

#[tokio::main]
async fn main() -> Result<()> {
    recipes::init_tracing();

    let args = Args::parse();
    let state = State::new().await?;
    let terminal = Terminal::new();

    match args.command {
        None => browse(&state.client, &QueryInput::default(), &terminal).await,
        Some(Command::Search {
            term,
            category,
            area,
        }) => {
            let input = QueryInput {
                term: term.unwrap_or_default(),
                category: category.unwrap_or_default(),
                area: area.unwrap_or_default(),
            };
            warn_unknown_filters(&state, &input);
            browse(&state.client, &input, &terminal).await;
        }
        Some(Command::Show { id }) => show(&state.client, &id, &terminal).await,
        Some(Command::Filters) => print_filters(&state),
    }

    Ok(())
}

fn warn_unknown_filters(state: &State, input: &QueryInput) {
    if !input.category.is_empty() && !state.taxonomy.known_category(&input.category) {
        warn!("category {:?} is not in the known category list", input.category);
    }
    if !input.area.is_empty() && !state.taxonomy.known_area(&input.area) {
        warn!("area {:?} is not in the known area list", input.area);
    }
}

fn print_filters(state: &State) {
    println!("Categories:");
    for option in &state.taxonomy.categories {
        println!("  {}", option.label);
    }

    println!();
    println!("Areas:");
    for option in &state.taxonomy.areas {
        println!("  {}", option.label);
    }
}

/// Terminal rendering surface: a spinner while a query is in flight,
/// plain text for everything else.
struct Terminal {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Terminal {
    fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Surface for Terminal {
    fn loading(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));

        self.spinner.lock().unwrap().replace(spinner);
    }

    fn cards(&self, cards: &[Card]) {
        self.finish_spinner();

        for card in cards {
            println!("{}  [{} / {}]", card.name, card.category, card.area);
            println!("    id {}  {}", card.id, card.thumb);
        }

        println!();
        println!(
            "{} recipe(s). Use `recipes show <id>` for the full recipe.",
            cards.len()
        );
    }

    fn detail(&self, detail: &Detail) {
        self.finish_spinner();

        println!("{}", detail.name);

        let mut tags: Vec<&str> = Vec::new();
        if let Some(category) = &detail.category {
            tags.push(category);
        }
        if let Some(area) = &detail.area {
            tags.push(area);
        }
        tags.extend(detail.tags.iter().map(String::as_str));
        if !tags.is_empty() {
            println!("[{}]", tags.join(", "));
        }
        println!("{}", detail.thumb);

        println!();
        println!("Ingredients:");
        for ingredient in &detail.ingredients {
            println!("  - {} ({})", ingredient.name, ingredient.measure);
        }

        println!();
        println!("Instructions:");
        println!("{}", detail.instructions);
    }

    fn no_results(&self) {
        self.finish_spinner();

        println!("No recipes found.");
        println!("Run `recipes` with no arguments for a random sample.");
    }

    fn error(&self, message: &str) {
        self.finish_spinner();

        eprintln!("{message}");
    }
}
