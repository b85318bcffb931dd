//! Terminal browser for the character pipeline.
//!
//! Fetches one page through the same memoized pipeline the server uses and prints
//! it with empty values shown as `-`.
//!
//! # Usage
//!
//! ```bash
//! # First page, no filters
//! cargo run --bin browse
//!
//! # Third page of female characters
//! cargo run --bin browse -- --page 3 --gender Female
//!
//! # Filter by culture and birth
//! cargo run --bin browse -- --culture Northmen --born "In 283 AC"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`CHARACTERS_API_URL`, `AGE_API_URL`, `REDIS_URL`, ...);
//! see `got_tables::config`.

use got_tables::config;
use got_tables::domain::entities::{Character, CharacterPage, FilterSet};
use got_tables::server::{build_cache, build_page_service};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

/// Browse An API of Ice And Fire characters page by page.
#[derive(Parser)]
#[command(name = "browse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page number (1-indexed)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Filter by exact name
    #[arg(long, default_value = "")]
    name: String,

    /// Filter by gender
    #[arg(long, default_value = "")]
    gender: String,

    /// Filter by culture
    #[arg(long, default_value = "")]
    culture: String,

    /// Filter by birth description
    #[arg(long, default_value = "")]
    born: String,

    /// Filter by death description
    #[arg(long, default_value = "")]
    died: String,
}

impl Cli {
    fn filters(&self) -> FilterSet {
        FilterSet {
            name: self.name.clone(),
            gender: self.gender.clone(),
            culture: self.culture.clone(),
            born: self.born.clone(),
            died: self.died.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cache = build_cache(&config).await;
    let service = build_page_service(&config, cache).await?;

    let page = service
        .request_page(cli.page, &cli.filters())
        .await
        .with_context(|| format!("Failed to load page {}", cli.page))?;

    print_page(cli.page, &page);

    Ok(())
}

/// Prints the page header, navigation hints and one block per character.
fn print_page(current: u32, page: &CharacterPage) {
    let total = if page.is_page_count_known() {
        page.total_pages.to_string()
    } else {
        "?".to_string()
    };

    println!(
        "{}",
        format!("Page {} of {}", current, total).bright_blue().bold()
    );

    if current > 1 {
        println!("  {} --page {}", "previous:".bright_black(), current - 1);
    }
    if page.is_page_count_known() && i64::from(current) < page.total_pages {
        println!("  {} --page {}", "next:".bright_black(), current + 1);
    }
    println!();

    if page.characters.is_empty() {
        println!("{}", "  No characters found".yellow());
        return;
    }

    for character in &page.characters {
        print_character(character);
    }
}

fn print_character(character: &Character) {
    println!("{}", cell(&character.name).bright_white().bold());

    let scalars = [
        ("Gender", &character.gender),
        ("Culture", &character.culture),
        ("Born", &character.born),
        ("Died", &character.died),
        ("Father", &character.father),
        ("Mother", &character.mother),
        ("Spouse", &character.spouse),
        ("Estimated Age", &character.age),
    ];
    for (label, value) in scalars {
        println!("  {:<14} {}", label.cyan(), cell(value));
    }

    let lists = [
        ("Titles", &character.titles),
        ("Aliases", &character.aliases),
        ("Allegiances", &character.allegiances),
        ("Books", &character.books),
        ("POV Books", &character.pov_books),
        ("TV Series", &character.tv_series),
        ("Played By", &character.played_by),
    ];
    for (label, values) in lists {
        println!("  {:<14} {}", label.cyan(), list_cell(values));
    }

    println!();
}

/// Renders an empty value as `-`.
fn cell(value: &str) -> String {
    if value.is_empty() {
        "-".bright_black().to_string()
    } else {
        value.to_string()
    }
}

/// Joins the non-empty entries of a list, or `-` when none remain.
fn list_cell(values: &[String]) -> String {
    let non_empty: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .collect();

    if non_empty.is_empty() {
        "-".bright_black().to_string()
    } else {
        non_empty.join(", ")
    }
}
