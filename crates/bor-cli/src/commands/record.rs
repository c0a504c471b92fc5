use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bor_deps::DepsSet;
use bor_hash::HashAlgorithm;
use bor_make::{write_make, MakeOptions};
use bor_store::{write_omnibor, OutFile};

use super::hash_file::parse_algo;

#[derive(Args)]
pub struct RecordArgs {
    /// Hash algorithm for OmniBOR emission (sha1 or sha256)
    #[arg(long, default_value = "sha1", value_parser = parse_algo)]
    hash: HashAlgorithm,

    /// Emit the OmniBOR document and metadata under this directory
    /// (empty means the current directory)
    #[arg(long = "bom-dir", value_name = "dir")]
    bom_dir: Option<PathBuf>,

    /// Write a Makefile fragment to this file, "-" for stdout
    #[arg(short = 'M', long = "make-file", value_name = "file")]
    make_file: Option<String>,

    /// The compilation's declared output file
    #[arg(short = 'o', value_name = "file")]
    output: Option<String>,

    /// Preprocess only; no output file is produced
    #[arg(short = 'E')]
    preprocess: bool,

    /// Stop after generating assembly
    #[arg(short = 'S')]
    assemble: bool,

    /// Stop after compiling to an object file
    #[arg(short = 'c')]
    compile: bool,

    /// Make targets for the dependency rule (default: derived from the
    /// first input)
    #[arg(long = "target", value_name = "name")]
    targets: Vec<String>,

    /// Colon-delimited vpath prefixes to strip from recorded paths
    #[arg(long, value_name = "dirs")]
    vpath: Option<String>,

    /// Emit a phony rule for every dependency after the first
    #[arg(long)]
    phony: bool,

    /// Wrap Makefile lines at this column, 0 to disable
    #[arg(long, default_value_t = 72)]
    columns: usize,

    /// Bind the compiled module interface as `name=cmi-file`
    #[arg(long = "module", value_name = "name=cmi")]
    module: Option<String>,

    /// Record an imported module
    #[arg(long = "module-dep", value_name = "name")]
    module_deps: Vec<String>,

    /// The source file followed by every file it depends on
    #[arg(value_name = "file", required = true)]
    files: Vec<String>,
}

pub fn run(args: &RecordArgs) -> Result<i32> {
    let mut deps = DepsSet::new();

    if let Some(vpath) = &args.vpath {
        deps.add_vpath(vpath);
    }
    for target in &args.targets {
        deps.add_target(target, true);
    }
    deps.add_default_target(&args.files[0]);
    for file in &args.files {
        deps.add_dep(file);
    }
    for module in &args.module_deps {
        deps.add_module_dep(module);
    }
    if let Some(binding) = &args.module {
        let (name, cmi) = binding
            .split_once('=')
            .context("--module expects name=cmi-file")?;
        deps.set_module_target(name, cmi, false);
    }

    if let Some(make_file) = &args.make_file {
        let opts = MakeOptions {
            columns: args.columns,
            phony_targets: args.phony,
            modules: args.module.is_some() || !args.module_deps.is_empty(),
        };
        if make_file == "-" {
            let stdout = io::stdout();
            write_make(&deps, &mut stdout.lock(), &opts)?;
        } else {
            let mut out = File::create(make_file)
                .with_context(|| format!("cannot create '{make_file}'"))?;
            write_make(&deps, &mut out, &opts)?;
        }
    }

    if let Some(bom_dir) = &args.bom_dir {
        let outfile = OutFile::infer(&option_tokens(args), &args.files);
        // Provenance is a best-effort side channel: a failed emission is
        // worth a warning, never a failed build.
        match write_omnibor(&deps, args.hash, Some(bom_dir), &outfile) {
            Ok(oid) => println!("{}", oid.to_hex()),
            Err(e) => eprintln!("warning: OmniBOR record not written: {e}"),
        }
    }

    Ok(0)
}

/// Reassemble the driver-style option tokens the output inference
/// parser understands.
fn option_tokens(args: &RecordArgs) -> Vec<String> {
    let mut tokens = Vec::new();
    if args.preprocess {
        tokens.push("-E".to_string());
    }
    if args.assemble {
        tokens.push("-S".to_string());
    }
    if args.compile {
        tokens.push("-c".to_string());
    }
    if let Some(output) = &args.output {
        tokens.push("-o".to_string());
        tokens.push(output.clone());
    }
    tokens
}
