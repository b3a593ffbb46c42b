use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use log::debug;

use recipe_finder::{
    ConsoleSpeaker, CookingSession, FavoriteEntry, FavoritesStore, FinderConfig, JsonFileStore,
    Notice, NoticeKind, QueryFilters, RecipeClient, Render, SearchError, SnapshotStore, Step,
    StdinTranscriber, Transcriber, ViewController, ViewEffect, COMPLETION_MESSAGE,
    EMPTY_QUERY_MESSAGE, NO_STEPS_MESSAGE,
};

#[derive(Parser)]
#[command(name = "recipe-finder", version, about = "Find recipes, save favorites, cook along")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for recipes by free-text ingredients or structured filters
    Search {
        /// Comma-separated ingredients, e.g. "tomato,cheese".
        /// When given, the structured filters below are ignored.
        ingredients: Option<String>,
        /// Diet filter, repeatable (e.g. --diet vegan --diet vegetarian)
        #[arg(long)]
        diet: Vec<String>,
        /// Meal type filter, repeatable (e.g. --meal dinner)
        #[arg(long)]
        meal: Vec<String>,
        /// Cuisine filter, repeatable (e.g. --cuisine italian)
        #[arg(long)]
        cuisine: Vec<String>,
        /// Maximum preparation time in minutes
        #[arg(long)]
        max_time: Option<u32>,
    },
    /// List saved favorites
    Favorites,
    /// Show full detail for one recipe
    Detail { id: u64 },
    /// Save a recipe to favorites, or remove it if already saved
    Toggle { id: u64 },
    /// Walk through a recipe's steps with spoken narration
    Cook { id: u64 },
    /// Capture ingredients by voice, then search
    Voice,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = FinderConfig::load()?;
    let mut view = ViewController::new(FavoritesStore::open(JsonFileStore::new(
        &config.favorites_path,
    )));

    match cli.command {
        Command::Search {
            ingredients,
            diet,
            meal,
            cuisine,
            max_time,
        } => {
            let filters = QueryFilters {
                ingredients: ingredients.unwrap_or_default(),
                diets: diet,
                meals: meal,
                cuisines: cuisine,
                max_time,
            };
            let client = RecipeClient::from_config(&config)?;
            run_search(&client, &mut view, &filters).await;
        }

        Command::Favorites => {
            present(&view.show_favorites());
        }

        Command::Detail { id } => {
            let client = RecipeClient::from_config(&config)?;
            eprintln!("Loading details...");
            let detail = client.detail(id).await?;

            println!("{}", detail.title);
            if !detail.image.is_empty() {
                println!("{}", detail.image);
            }
            println!("\nIngredients:");
            for line in &detail.ingredient_lines {
                println!("  - {line}");
            }
            println!("\nInstructions:\n{}", detail.instructions_text);
            if !detail.steps.is_empty() {
                println!(
                    "\n{} steps available - run `recipe-finder cook {id}` for a guided walkthrough",
                    detail.steps.len()
                );
            }
        }

        Command::Toggle { id } => {
            let client = RecipeClient::from_config(&config)?;
            let detail = client.detail(id).await?;
            let effect = view.toggle_favorite(FavoriteEntry {
                id: detail.id,
                title: detail.title.clone(),
                image: detail.image,
            })?;

            if view.favorites().contains(id) {
                println!("Saved \"{}\" to favorites.", detail.title);
            } else {
                println!("Removed \"{}\" from favorites.", detail.title);
            }
            if effect == ViewEffect::RefreshFavorites {
                present(&view.show_favorites());
            }
        }

        Command::Cook { id } => {
            let client = RecipeClient::from_config(&config)?;
            eprintln!("Loading details...");
            let detail = client.detail(id).await?;
            cook_along(detail.steps);
        }

        Command::Voice => {
            let transcript = StdinTranscriber.capture().await?;
            debug!("voice transcript: {transcript}");
            let filters = QueryFilters {
                ingredients: transcript,
                ..Default::default()
            };
            let client = RecipeClient::from_config(&config)?;
            run_search(&client, &mut view, &filters).await;
        }
    }

    Ok(())
}

/// Run one search and present the outcome. The loading indicator is cleared
/// on both the success and the failure path.
async fn run_search<S: SnapshotStore>(
    client: &RecipeClient,
    view: &mut ViewController<S>,
    filters: &QueryFilters,
) {
    eprintln!("Searching...");
    match client.search(filters).await {
        Ok(results) => present(&view.show_results(&results)),
        Err(SearchError::NoCriteria) => present_notice(&Notice::warning(EMPTY_QUERY_MESSAGE)),
        Err(err) => present_notice(&Notice::error(err.to_string())),
    }
}

fn present(render: &Render) {
    match render {
        Render::Cards(cards) => {
            for card in cards {
                let mut line = format!("[{}] {}", card.id, card.title);
                if let Some(missing) = card.missing_ingredients {
                    line.push_str(&format!("  (missing ingredients: {missing})"));
                }
                line.push_str(&format!("  [{}]", card.favorite_label()));
                println!("{line}");
            }
        }
        Render::Notice(notice) => present_notice(notice),
        Render::Cleared => {}
    }
}

fn present_notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Warning | NoticeKind::Error => eprintln!("{}", notice.text),
        NoticeKind::NoData => println!("{}", notice.text),
    }
}

/// Interactive step-by-step loop: back, repeat, next, quit.
fn cook_along(steps: Vec<Step>) {
    let speaker = ConsoleSpeaker;
    let Some(mut session) = CookingSession::start(steps, &speaker) else {
        println!("{NO_STEPS_MESSAGE}");
        return;
    };

    let stdin = io::stdin();
    loop {
        if session.is_complete() {
            println!("{COMPLETION_MESSAGE}");
            return;
        }
        if let Some(step) = session.current_step() {
            println!("\nStep {} of {}", step.number, session.len());
            println!("{}", step.text);
        }

        print!("[n]ext / [b]ack / [r]epeat / [q]uit > ");
        let _ = io::stdout().flush();
        let mut input = String::new();
        if stdin.lock().read_line(&mut input).is_err() {
            return;
        }
        match input.trim() {
            "n" | "next" | "" => session.next(&speaker),
            "b" | "back" => session.prev(&speaker),
            "r" | "repeat" => session.repeat(&speaker),
            "q" | "quit" => return,
            other => println!("Unknown command: {other}"),
        }
    }
}
