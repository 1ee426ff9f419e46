pub mod annotate;
pub mod cli;
pub mod format;
pub mod registry;
pub mod remove;
pub mod schema;
pub mod splice;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("schema_annotate", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Annotate(args) => annotate::execute(&args),
        Commands::Preview(args) => handle_preview(&args),
        Commands::Remove(args) => remove::execute(&args),
    }
}

fn handle_preview(args: &cli::PreviewArgs) -> Result<()> {
    let catalog = schema::Catalog::load(&args.catalog)
        .with_context(|| format!("Loading schema catalog from {:?}", args.catalog))?;
    let name = registry::canonical_name(&args.name, &args.extension);
    let columns = catalog.columns(&name).ok_or_else(|| {
        anyhow!(
            "'{}' is not a schema-backed entity in {:?}",
            registry::display_name(&name),
            args.catalog
        )
    })?;
    let header = format::render_header(&current_timestamp(), catalog.schema_version);
    print!("{}", format::render_block(columns, &header));
    Ok(())
}

pub(crate) fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
