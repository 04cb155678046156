//! `pomgraft adapt` command

use anyhow::{Context, Result};

use crate::cli::AdaptArgs;
use pomgraft::ops::adapt_model;
use pomgraft::util::{fs, Config};

pub fn execute(args: AdaptArgs, config: &Config) -> Result<()> {
    let opts = super::adapt_options(args.model, config);
    let outcome = adapt_model(&opts)?;

    let document = outcome
        .model
        .to_json_pretty()
        .context("failed to serialize adapted model")?;

    match args.output {
        Some(path) => {
            fs::write_string(&path, &format!("{}\n", document))?;
            eprintln!(
                "     Adapted {} ({} managed, {} unmanaged) -> {}",
                outcome.model.coordinate(),
                outcome.report.resolved.len(),
                outcome.report.unmanaged.len(),
                path.display()
            );
        }
        None => println!("{}", document),
    }

    Ok(())
}
