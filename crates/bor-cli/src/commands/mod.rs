pub mod hash_file;
pub mod record;

use anyhow::Result;
use clap::Subcommand;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Record a compilation's dependencies: Makefile rules and/or an
    /// OmniBOR document
    Record(record::RecordArgs),
    /// Print the gitoid of one or more files
    HashFile(hash_file::HashFileArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Record(args) => record::run(args),
        Commands::HashFile(args) => hash_file::run(args),
    }
}
