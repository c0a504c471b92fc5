use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use bor_hash::hasher::Hasher;
use bor_hash::HashAlgorithm;

#[derive(Args)]
pub struct HashFileArgs {
    /// Hash algorithm (sha1 or sha256)
    #[arg(long, default_value = "sha1", value_parser = parse_algo)]
    hash: HashAlgorithm,

    /// Files to hash
    #[arg(value_name = "file", required = true)]
    files: Vec<String>,
}

pub(crate) fn parse_algo(name: &str) -> Result<HashAlgorithm, String> {
    HashAlgorithm::from_name(name).ok_or_else(|| format!("unknown hash algorithm '{name}'"))
}

pub fn run(args: &HashFileArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &args.files {
        let mut file = File::open(path).with_context(|| format!("cannot open '{path}'"))?;
        let oid = Hasher::hash_file(args.hash, &mut file)
            .with_context(|| format!("cannot hash '{path}'"))?;
        writeln!(out, "{}  {}", oid.to_hex(), path)?;
    }

    Ok(0)
}
