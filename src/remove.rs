//! Strips annotation blocks without consulting the catalog; the inverse of
//! the annotate command.

use anyhow::{Result, anyhow};
use log::{error, info};

use crate::{cli::RemoveArgs, registry, splice};

pub fn execute(args: &RemoveArgs) -> Result<()> {
    let tokens = if args.names.is_empty() {
        registry::discover(&args.models_dir, &args.extension)?
    } else {
        args.names.clone()
    };

    let mut removed = 0usize;
    let mut failed = 0usize;
    for token in &tokens {
        let name = registry::canonical_name(token, &args.extension);
        let display = registry::display_name(&name);
        let path = registry::source_path(&args.models_dir, &name, &args.extension);
        match splice::strip_file(&path) {
            Ok(true) => {
                info!("Removed annotation from {display}");
                removed += 1;
            }
            Ok(false) => info!("Skipping {display}"),
            Err(err) => {
                error!("Failed to clean {display}: {err}");
                failed += 1;
            }
        }
    }

    info!("Removed annotations from {removed} of {} file(s)", tokens.len());
    if failed > 0 {
        return Err(anyhow!("{failed} file(s) could not be cleaned"));
    }
    Ok(())
}
