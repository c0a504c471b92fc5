//! OmniBOR provenance recording.
//!
//! Builds the per-compilation OmniBOR document — the sorted manifest of
//! dependency gitoids — and persists it in a sharded, content-addressed
//! object store, together with a metadata sidecar naming the compiled
//! output and every input. Everything here is best-effort from the host
//! build's point of view: failures surface as [`StoreError`] and the
//! caller decides how loudly to ignore them; they must never become a
//! compilation failure.
//!
//! Store layout, relative to the result directory:
//!
//! ```text
//! objects/gitoid_blob_sha1/ab/<38 hex chars>        document files
//! objects/gitoid_blob_sha256/ab/<62 hex chars>
//! metadata/gnu/gitoid_blob_sha{1,256}/<output>.metadata
//! ```

mod document;
mod metadata;
mod outfile;
mod store;

pub use document::{DepRecord, Document};
pub use outfile::OutFile;
pub use store::DocumentStore;

use std::path::{Path, PathBuf};

use bor_deps::DepsSet;
use bor_hash::{GitOid, HashAlgorithm};

/// Errors from document persistence and metadata recording.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unusable result directory '{path}': {source}")]
    ResultDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write document '{path}': {source}")]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write metadata '{path}': {source}")]
    WriteMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("hash error: {0}")]
    Hash(#[from] bor_hash::HashError),
}

/// Build and persist the OmniBOR record for one compilation.
///
/// Hashes the dependency set, writes the document into the object store
/// under `result_dir` (current directory when `None`), and records the
/// metadata sidecar for `outfile`. Document and metadata writes are
/// attempted independently — a sidecar failure does not prevent the
/// document from landing — but any failure is reported, so a caller
/// that gets `Ok` knows both artifacts exist.
///
/// Returns the document's own gitoid.
pub fn write_omnibor<P: AsRef<Path>>(
    deps: &DepsSet,
    algo: HashAlgorithm,
    result_dir: Option<P>,
    outfile: &OutFile,
) -> Result<GitOid, StoreError> {
    let doc = Document::build(deps, algo)?;
    let store = DocumentStore::open(result_dir);

    let doc_result = store.write_document(&doc);
    let meta_result = store.write_metadata(&doc, outfile);

    doc_result?;
    meta_result?;
    Ok(doc.oid())
}
