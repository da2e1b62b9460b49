//! Command-line front end for the knowledge-base viewer.
//!
//! Usage:
//!   kbview routes [--json]
//!   kbview render /frontend/angular/components
//!   kbview fetch angular/components/componentanatomy
//!   kbview tree
//!   kbview export --out site/

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kbview::{
    Browser, CatalogIndex, Config, ConfigOverrides, ContentPath, FsContentSource, export_site,
    fetch_thread_content, logging, site_routes,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kbview")]
#[command(about = "Browse and export the knowledge-base catalog as HTML")]
struct Cli {
    /// Site root containing assets/data/threads.
    #[arg(long, global = true, env = "KBVIEW_ROOT")]
    root: Option<PathBuf>,
    /// Catalog file to load instead of the bundled catalog.
    #[arg(long, global = true, env = "KBVIEW_CATALOG")]
    catalog: Option<PathBuf>,
    /// Log filter, e.g. `info` or `kbview=debug`.
    #[arg(long, global = true, env = "KBVIEW_LOG")]
    log: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every route in catalog order.
    Routes {
        /// Emit JSON instead of one path per line.
        #[arg(long)]
        json: bool,
    },
    /// Print the HTML page for a URL path.
    Render { path: String },
    /// Print the processed markdown behind a thread content path.
    Fetch { content_path: String },
    /// Print the catalog hierarchy.
    Tree,
    /// Render every route into a static site directory.
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref());

    let config = Config::resolve(ConfigOverrides {
        root: cli.root,
        catalog: cli.catalog,
    })?;
    let index = config.load_index().context("loading catalog")?;
    let source = FsContentSource::new(&config.site_root);

    match cli.command {
        Command::Routes { json } => print_routes(&index, json),
        Command::Render { path } => {
            let mut browser = Browser::new(&index, source);
            browser.open(&path);
            print!("{}", browser.render());
            Ok(())
        }
        Command::Fetch { content_path } => {
            let markdown = fetch_thread_content(&source, &ContentPath(content_path))?;
            println!("{markdown}");
            Ok(())
        }
        Command::Tree => {
            print_tree(&index);
            Ok(())
        }
        Command::Export { out } => {
            if out.exists() && !out.is_dir() {
                bail!("{} exists and is not a directory", out.display());
            }
            let mut browser = Browser::new(&index, source);
            let report = export_site(&mut browser, &out)?;
            eprintln!(
                "exported {} pages to {} ({} threads without content)",
                report.pages_written,
                out.display(),
                report.missing_content.len()
            );
            Ok(())
        }
    }
}

fn print_routes(index: &CatalogIndex, json: bool) -> Result<()> {
    let routes = site_routes(index);
    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for route in routes {
            println!("{route}");
        }
    }
    Ok(())
}

fn print_tree(index: &CatalogIndex) {
    println!("{} ({})", index.title(), index.key());
    for category in index.categories() {
        println!("{} [{}]", category.name, category.id);
        for subcategory in &category.subcategories {
            println!("  {} [{}]", subcategory.name, subcategory.id);
            for topic in &subcategory.topics {
                println!("    {} [{}]", topic.title, topic.id);
                for thread in &topic.threads {
                    println!("      {} [{}] -> {}", thread.title, thread.id, thread.content_path);
                }
            }
        }
    }
    let summary = index.summary();
    println!(
        "{} categories, {} subcategories, {} topics, {} threads",
        summary.categories, summary.subcategories, summary.topics, summary.threads
    );
}
