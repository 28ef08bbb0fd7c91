use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use class_quest::{config, AppError, Catalog, ClassQuest, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON catalog to use instead of the embedded one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// TOML config file (defaults to ./class-quest.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible game rounds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file; the terminal UI owns stdout
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Load and check the catalog, print a summary and exit
    #[arg(long)]
    validate: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config: Config = config::load_config(args.config.as_deref())?;
    if args.catalog.is_some() {
        config.catalog = args.catalog;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let quest = ClassQuest::from_config(config)?;

    if args.validate {
        print_summary(quest.app().catalog());
        return Ok(());
    }

    quest.run()
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("class_quest=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_summary(catalog: &Catalog) {
    let supplemental: usize = catalog
        .subjects()
        .iter()
        .map(|s| s.id.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|id| catalog.supplemental_questions(id).len())
        .sum();

    println!(
        "catalog ok: {} subjects, {} topics, {} questions (+{} supplemental), {} games",
        catalog.subjects().len(),
        catalog.topics().len(),
        catalog.questions().len(),
        supplemental,
        catalog.games().len()
    );
}
