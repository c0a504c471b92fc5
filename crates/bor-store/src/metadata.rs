//! Metadata sidecar rendering.
//!
//! One sidecar per compiled output, recording which file was produced
//! and, for every input, its gitoid and resolved path. The `build_cmd:`
//! marker is reserved for the driver command line; the front end does
//! not know it, so the line is left empty.

use std::path::Path;

use crate::outfile::absolutize;
use crate::{Document, OutFile};

/// Render the sidecar body for `doc` and `outfile`.
///
/// The `infile:` lines appear in the same gitoid order as the document
/// itself, so sidecar and document can be correlated line by line.
pub(crate) fn render(doc: &Document, outfile: &OutFile) -> String {
    let mut body = String::new();

    body.push_str("outfile: ");
    body.push_str(&outfile.outfile_line());
    body.push('\n');

    for record in doc.records() {
        body.push_str("infile: ");
        body.push_str(&record.oid.to_hex());
        body.push_str(" path: ");
        body.push_str(&absolutize(Path::new(&record.path)).display().to_string());
        body.push('\n');
    }

    body.push_str("build_cmd:\n");
    body
}
