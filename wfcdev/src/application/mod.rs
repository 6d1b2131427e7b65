pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use wfc_core::error::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split {
            source,
            split,
            no_clobber,
        } => handlers::handle_split(source, split, no_clobber),
        Commands::Count {
            dir,
            keep_empty,
            no_clobber,
        } => handlers::handle_count(dir, keep_empty, no_clobber),
        Commands::Run {
            source,
            split,
            keep_empty,
            no_clobber,
        } => handlers::handle_run(source, split, keep_empty, no_clobber),
        Commands::Generate { source, copies } => handlers::handle_generate(source, copies),
    }
}
