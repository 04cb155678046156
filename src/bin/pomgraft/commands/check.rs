//! `pomgraft check` command

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use pomgraft::ops::{adapt_model, format_report, unmanaged_diagnostics};
use pomgraft::util::diagnostic::emit;
use pomgraft::util::Config;

pub fn execute(args: CheckArgs, config: &Config, color: bool) -> Result<()> {
    let opts = super::adapt_options(args.model, config);
    let outcome = adapt_model(&opts)?;

    for problem in &outcome.problems {
        eprintln!("{}", problem);
    }

    print!("{}", format_report(&outcome.report));

    let diagnostics = unmanaged_diagnostics(&outcome.report);
    for diagnostic in &diagnostics {
        emit(diagnostic, color);
    }

    if !outcome.report.is_complete() {
        let count = outcome.report.unmanaged.len();
        bail!(
            "{} plugin dependenc{} without a managed version",
            count,
            if count == 1 { "y" } else { "ies" }
        );
    }

    Ok(())
}
