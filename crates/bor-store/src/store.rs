//! The sharded, content-addressed document store.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use bor_hash::GitOid;

use crate::{Document, OutFile, StoreError};

/// Interface to an OmniBOR result directory.
///
/// The store is shared between independent compiler processes in a
/// parallel build. That is safe without locking because every directory
/// creation treats "already exists" as success and every object file's
/// name is derived from its own content — racing writers always agree
/// on the final bytes, so an overwrite is byte-identical.
#[derive(Debug)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Open a store rooted at `result_dir`. `None` (or an empty path)
    /// means the current working directory. The directory need not
    /// exist yet; it is created, segment by segment, on first write.
    pub fn open<P: AsRef<Path>>(result_dir: Option<P>) -> Self {
        let root = match &result_dir {
            Some(dir) if !dir.as_ref().as_os_str().is_empty() => dir.as_ref().to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self { root }
    }

    /// The store root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The sharded path a document lands at:
    /// `<root>/objects/gitoid_blob_sha{1,256}/<2 hex>/<rest>`.
    pub fn document_path(&self, oid: &GitOid) -> PathBuf {
        self.root
            .join("objects")
            .join(oid.algorithm().store_dir())
            .join(oid.sharded_path())
    }

    /// The metadata sidecar path for a compiled output:
    /// `<root>/metadata/gnu/gitoid_blob_sha{1,256}/<basename>.metadata`.
    pub fn metadata_path(&self, doc: &Document, outfile: &OutFile) -> PathBuf {
        self.root
            .join("metadata")
            .join("gnu")
            .join(doc.algorithm().store_dir())
            .join(format!("{}.metadata", outfile.metadata_basename()))
    }

    /// Persist `doc` under its own gitoid, creating every missing
    /// directory level on the way. Re-writing an existing document is
    /// harmless: the destination name is its content hash.
    pub fn write_document(&self, doc: &Document) -> Result<PathBuf, StoreError> {
        let path = self.document_path(&doc.oid());

        if let Some(shard_dir) = path.parent() {
            ensure_dir_all(&self.root, shard_dir)?;
        }

        fs::write(&path, doc.text()).map_err(|source| StoreError::WriteDocument {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Write the metadata sidecar for `doc` and `outfile`.
    pub fn write_metadata(&self, doc: &Document, outfile: &OutFile) -> Result<PathBuf, StoreError> {
        let path = self.metadata_path(doc, outfile);

        if let Some(meta_dir) = path.parent() {
            ensure_dir_all(&self.root, meta_dir)?;
        }

        let body = crate::metadata::render(doc, outfile);
        fs::write(&path, body).map_err(|source| StoreError::WriteMetadata {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Create `target` and every missing ancestor, one segment at a time.
///
/// Walking component by component (rather than one recursive create)
/// keeps the failure unit small: the first segment that can be neither
/// created nor opened as a directory is reported, with everything
/// already created left in place for the next attempt. `AlreadyExists`
/// is success — concurrent invocations race to create shards and the
/// loser of the race is just as happy.
fn ensure_dir_all(root: &Path, target: &Path) -> Result<(), StoreError> {
    let mut current = PathBuf::new();

    for component in target.components() {
        match component {
            Component::Normal(name) => {
                current.push(name);
                create_one_dir(root, &current)?;
            }
            // Root, prefix, `.` and `..` segments are path plumbing, not
            // directories we are responsible for creating.
            other => current.push(other.as_os_str()),
        }
    }

    Ok(())
}

fn create_one_dir(root: &Path, path: &Path) -> Result<(), StoreError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => {
            // Distinguish a broken result root from a broken shard so
            // the caller's error reads right; both abort this emission.
            if path.starts_with(root) && path != root {
                Err(StoreError::CreateDir {
                    path: path.to_path_buf(),
                    source,
                })
            } else {
                Err(StoreError::ResultDir {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}
