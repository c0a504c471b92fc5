//! Compiled-output path inference.
//!
//! The metadata sidecar names the artifact a compilation produced. The
//! driver's recorded options tell us which file that is: an explicit
//! `-o`, or a name inferred from the compilation mode. This is a small
//! pure parser over already-split, already-unquoted option tokens,
//! deliberately decoupled from the hashing and storage code.

use std::env;
use std::path::{Path, PathBuf};

/// Printed in place of a path when the compilation produces no output
/// file (preprocess-only mode).
const NOT_AVAILABLE: &str = "not available";

/// The resolved output of a compilation, as recorded in metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutFile {
    /// Named explicitly with `-o`.
    Explicit(PathBuf),
    /// Inferred from the compilation mode and the first input file.
    Inferred(PathBuf),
    /// The output does not materialize as a file.
    NotAvailable,
}

impl OutFile {
    /// Determine the output file from option tokens and input files.
    ///
    /// `-o <path>` (or the joined `-o<path>` form) wins outright. With
    /// no explicit output: `-E` produces no file; `-S` and `-c` derive
    /// the name from the first input with the mode's extension; plain
    /// linking defaults to `a.out`. A trailing `-o` with no operand is
    /// silently ignored.
    pub fn infer(tokens: &[String], inputs: &[String]) -> Self {
        let mut preprocess = false;
        let mut assemble = false;
        let mut compile = false;

        let mut iter = tokens.iter();
        while let Some(tok) = iter.next() {
            match tok.as_str() {
                "-o" => {
                    if let Some(path) = iter.next() {
                        return OutFile::Explicit(PathBuf::from(path));
                    }
                }
                "-E" => preprocess = true,
                "-S" => assemble = true,
                "-c" => compile = true,
                other => {
                    if let Some(path) = other.strip_prefix("-o") {
                        if !path.is_empty() {
                            return OutFile::Explicit(PathBuf::from(path));
                        }
                    }
                }
            }
        }

        if preprocess {
            return OutFile::NotAvailable;
        }

        let extension = if assemble {
            "s"
        } else if compile {
            "o"
        } else {
            return OutFile::Inferred(PathBuf::from("a.out"));
        };

        match inputs.first() {
            Some(input) => {
                let base = Path::new(input)
                    .file_name()
                    .map(PathBuf::from)
                    .unwrap_or_default();
                OutFile::Inferred(base.with_extension(extension))
            }
            None => OutFile::NotAvailable,
        }
    }

    /// The `outfile:` line value — the absolute resolved path, or the
    /// not-available sentinel.
    pub fn outfile_line(&self) -> String {
        match self {
            OutFile::Explicit(p) | OutFile::Inferred(p) => {
                absolutize(p).display().to_string()
            }
            OutFile::NotAvailable => NOT_AVAILABLE.to_string(),
        }
    }

    /// The stem of the metadata sidecar file name.
    pub fn metadata_basename(&self) -> String {
        match self {
            OutFile::Explicit(p) | OutFile::Inferred(p) => p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            OutFile::NotAvailable => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Resolve `path` against the current directory without touching the
/// filesystem — the output file may not exist yet when metadata is
/// recorded.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn explicit_output_wins() {
        let out = OutFile::infer(&toks(&["-c", "-o", "build/foo.o"]), &toks(&["foo.c"]));
        assert_eq!(out, OutFile::Explicit(PathBuf::from("build/foo.o")));
    }

    #[test]
    fn joined_output_form() {
        let out = OutFile::infer(&toks(&["-obuild/foo.o", "-c"]), &toks(&["foo.c"]));
        assert_eq!(out, OutFile::Explicit(PathBuf::from("build/foo.o")));
    }

    #[test]
    fn explicit_output_beats_preprocess_mode() {
        let out = OutFile::infer(&toks(&["-E", "-o", "foo.i"]), &toks(&["foo.c"]));
        assert_eq!(out, OutFile::Explicit(PathBuf::from("foo.i")));
    }

    #[test]
    fn trailing_dash_o_is_ignored() {
        let out = OutFile::infer(&toks(&["-c", "-o"]), &toks(&["foo.c"]));
        assert_eq!(out, OutFile::Inferred(PathBuf::from("foo.o")));
    }

    #[test]
    fn compile_mode_derives_object_name() {
        let out = OutFile::infer(&toks(&["-c"]), &toks(&["src/foo.c"]));
        assert_eq!(out, OutFile::Inferred(PathBuf::from("foo.o")));
    }

    #[test]
    fn assemble_mode_derives_asm_name() {
        let out = OutFile::infer(&toks(&["-S"]), &toks(&["src/foo.c"]));
        assert_eq!(out, OutFile::Inferred(PathBuf::from("foo.s")));
    }

    #[test]
    fn link_mode_defaults_to_a_out() {
        let out = OutFile::infer(&toks(&[]), &toks(&["foo.c", "bar.c"]));
        assert_eq!(out, OutFile::Inferred(PathBuf::from("a.out")));
    }

    #[test]
    fn preprocess_mode_has_no_output_file() {
        let out = OutFile::infer(&toks(&["-E"]), &toks(&["foo.c"]));
        assert_eq!(out, OutFile::NotAvailable);
        assert_eq!(out.outfile_line(), "not available");
        assert_eq!(out.metadata_basename(), "not available");
    }

    #[test]
    fn compile_mode_without_inputs() {
        let out = OutFile::infer(&toks(&["-c"]), &[]);
        assert_eq!(out, OutFile::NotAvailable);
    }

    #[test]
    fn outfile_line_is_absolute() {
        let out = OutFile::Explicit(PathBuf::from("build/foo.o"));
        let line = out.outfile_line();
        assert!(Path::new(&line).is_absolute());
        assert!(line.ends_with("foo.o"));
    }

    #[test]
    fn absolute_explicit_path_is_kept() {
        let out = OutFile::Explicit(PathBuf::from("/abs/dir/foo.o"));
        assert_eq!(out.outfile_line(), "/abs/dir/foo.o");
        assert_eq!(out.metadata_basename(), "foo.o");
    }
}
