//! Command implementations

pub mod adapt;
pub mod check;

use pomgraft::ops::AdaptOptions;
use pomgraft::util::Config;

use crate::cli::ModelArgs;

/// Build operation options from command-line arguments; flags win over config.
fn adapt_options(args: ModelArgs, config: &Config) -> AdaptOptions {
    let mut opts = AdaptOptions::from_config(args.model, args.repositories, config);
    opts.raw = args.raw;
    opts
}
