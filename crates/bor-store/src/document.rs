//! OmniBOR document construction.

use std::fs::File;

use bor_deps::DepsSet;
use bor_hash::hasher::Hasher;
use bor_hash::{GitOid, HashAlgorithm};

use crate::StoreError;

/// One dependency's identity: its recorded path and its gitoid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepRecord {
    pub path: String,
    pub oid: GitOid,
}

/// The manifest of one compilation's dependency gitoids.
///
/// The text form is an algorithm tag line followed by one `blob <hex>`
/// line per dependency, sorted by gitoid so the document — and therefore
/// its own gitoid — does not depend on include-discovery order.
#[derive(Debug)]
pub struct Document {
    text: String,
    oid: GitOid,
    records: Vec<DepRecord>,
}

impl Document {
    /// Build the document for `deps` under `algo`.
    ///
    /// Dependencies that cannot be opened or hashed are skipped, not
    /// fatal. The surviving records are sorted by gitoid hex ascending:
    /// two invocations that discovered the same files in different
    /// orders produce byte-identical documents.
    pub fn build(deps: &DepsSet, algo: HashAlgorithm) -> Result<Self, StoreError> {
        let mut records = Vec::with_capacity(deps.deps().len());

        for path in deps.deps() {
            let Ok(mut file) = File::open(path) else {
                continue;
            };
            let Ok(oid) = Hasher::hash_file(algo, &mut file) else {
                continue;
            };
            records.push(DepRecord {
                path: path.clone(),
                oid,
            });
        }

        records.sort_by(|a, b| a.oid.cmp(&b.oid));

        let mut text = String::new();
        text.push_str(algo.document_tag());
        text.push('\n');
        for record in &records {
            text.push_str("blob ");
            text.push_str(&record.oid.to_hex());
            text.push('\n');
        }

        let oid = Hasher::hash_blob(algo, text.as_bytes())?;

        Ok(Self { text, oid, records })
    }

    /// The document text as persisted.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document's own gitoid — its name in the object store.
    pub fn oid(&self) -> GitOid {
        self.oid
    }

    /// The dependency records, in document (gitoid) order.
    pub fn records(&self) -> &[DepRecord] {
        &self.records
    }

    /// The algorithm the document was built with.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.oid.algorithm()
    }
}
