//! The batch driver: resolves each requested entity, renders its block, and
//! splices it into the source file, continuing past per-entity failures.

use anyhow::{Result, anyhow};
use log::{error, info};

use crate::{
    cli::AnnotateArgs,
    format,
    registry::{self, Registry},
    splice,
};

pub fn execute(args: &AnnotateArgs) -> Result<()> {
    let registry = Registry::open(&args.catalog, &args.models_dir, &args.extension)?;
    // One header per run; every entity annotated in this batch shares it.
    let header = format::render_header(&crate::current_timestamp(), registry.schema_version());

    let tokens = if args.names.is_empty() {
        registry::discover(&args.models_dir, &args.extension)?
    } else {
        args.names.clone()
    };

    let mut annotated = 0usize;
    let mut failed = 0usize;
    for token in &tokens {
        let name = registry.canonical(token);
        let display = registry::display_name(&name);
        let Some(entity) = registry.resolve(&name) else {
            info!("Skipping {display}");
            continue;
        };
        info!("Annotating {display}");
        let block = format::render_block(&entity.columns, &header);
        match splice::annotate_file(&entity.source_file, &block) {
            Ok(()) => annotated += 1,
            Err(err) => {
                error!("Failed to annotate {display}: {err}");
                failed += 1;
            }
        }
    }

    info!("Annotated {annotated} of {} requested entity(ies)", tokens.len());
    if failed > 0 {
        return Err(anyhow!("{failed} entity(ies) could not be annotated"));
    }
    Ok(())
}
