//! Exploration harness for the catalog.
//!
//! Builds a small sample catalog, prints the derived queries and dumps a JSON
//! snapshot. Set `MAGAZINE_LOG_DIR` (absolute path) to also write a log file;
//! `MAGAZINE_LOG_LEVEL` overrides the build-mode default level.

use magazine_core::{default_log_level, init_logging, CatalogError, CatalogService};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "MAGAZINE_LOG_DIR";
const LOG_LEVEL_ENV: &str = "MAGAZINE_LOG_LEVEL";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = std::env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("magazine_core version={}", magazine_core::core_version());

    let mut catalog = CatalogService::in_memory();
    let author = catalog.create_author("Wandera")?;
    let tech = catalog.create_magazine("TechMag", "Technology")?;
    let health = catalog.create_magazine("HealthX", "Health")?;

    catalog.create_article(author, tech, "Future of AI")?;
    catalog.author_add_article(author, health, "How to Stay Fit")?;

    let name = catalog.author(author)?.name().to_string();
    let magazines: Vec<_> = catalog
        .author_magazines(author)?
        .iter()
        .map(|magazine| magazine.name())
        .collect();
    println!("{name} writes for: {}", magazines.join(", "));
    if let Some(topics) = catalog.author_topic_areas(author)? {
        println!("{name} topic areas: {}", topics.join(", "));
    }
    for magazine in [tech, health] {
        let titles = catalog.magazine_article_titles(magazine)?.unwrap_or_default();
        println!(
            "{} titles: {}",
            catalog.magazine(magazine)?.name(),
            titles.join(" | ")
        );
    }

    // A rejected rename must leave the magazine untouched.
    if let Err(CatalogError::InvalidArgument(err)) =
        catalog.rename_magazine(tech, "An Overly Long Magazine Name")
    {
        println!("rename rejected: {err}");
    }

    log::info!(
        "event=harness_done module=cli status=ok articles={}",
        catalog.all_articles().len()
    );
    println!("{}", serde_json::to_string_pretty(&catalog.snapshot())?);
    Ok(())
}
