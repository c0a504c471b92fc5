//! Streaming hash computation and the gitoid blob convention.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::{GitOid, HashAlgorithm, HashError};

enum HasherInner {
    Sha1(Box<sha1_checked::Sha1>),
    Sha256(sha2::Sha256),
}

/// Streaming hash computation.
///
/// Wraps SHA-1 (with collision detection) and SHA-256 behind a single
/// interface. Data can be fed incrementally with [`update`](Hasher::update)
/// or through the [`std::io::Write`] implementation, then finalised into a
/// [`GitOid`].
pub struct Hasher {
    inner: HasherInner,
}

impl Hasher {
    /// Create a new hasher for the given algorithm.
    pub fn new(algo: HashAlgorithm) -> Self {
        use digest::Digest;
        let inner = match algo {
            HashAlgorithm::Sha1 => HasherInner::Sha1(Box::new(sha1_checked::Sha1::new())),
            HashAlgorithm::Sha256 => HasherInner::Sha256(sha2::Sha256::new()),
        };
        Self { inner }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        use digest::Digest;
        match &mut self.inner {
            HasherInner::Sha1(h) => h.update(data),
            HasherInner::Sha256(h) => h.update(data),
        }
    }

    /// Finalize and return the GitOid.
    ///
    /// Returns an error if SHA-1 collision detection fires.
    pub fn finalize(self) -> Result<GitOid, HashError> {
        match self.inner {
            HasherInner::Sha1(h) => {
                let result = h.try_finalize();
                if result.has_collision() {
                    return Err(HashError::Sha1Collision);
                }
                let mut bytes = [0u8; 20];
                bytes.copy_from_slice(result.hash().as_slice());
                Ok(GitOid::Sha1(bytes))
            }
            HasherInner::Sha256(h) => {
                use digest::Digest;
                let result = h.finalize();
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(result.as_slice());
                Ok(GitOid::Sha256(bytes))
            }
        }
    }

    /// Convenience: raw digest of data in one call, no blob header.
    pub fn digest(algo: HashAlgorithm, data: &[u8]) -> Result<GitOid, HashError> {
        let mut h = Self::new(algo);
        h.update(data);
        h.finalize()
    }

    /// Compute the gitoid of an in-memory buffer.
    ///
    /// Hashes `"blob <len>\0"` followed by the content, git's blob object
    /// construction.
    pub fn hash_blob(algo: HashAlgorithm, data: &[u8]) -> Result<GitOid, HashError> {
        let mut h = Self::new(algo);
        h.update(blob_header(data.len() as u64).as_bytes());
        h.update(data);
        h.finalize()
    }

    /// Compute the gitoid of an open file.
    ///
    /// The content length is determined by seeking to the end, then the
    /// file is rewound and streamed through the hasher. A file whose
    /// length cannot be determined fails with the underlying I/O error.
    pub fn hash_file(algo: HashAlgorithm, file: &mut File) -> Result<GitOid, HashError> {
        let len = file.seek(SeekFrom::End(0))?;
        file.seek(SeekFrom::Start(0))?;

        let mut h = Self::new(algo);
        h.update(blob_header(len).as_bytes());
        std::io::copy(&mut file.by_ref().take(len), &mut h)?;
        h.finalize()
    }
}

/// The canonical blob object header: `"blob <decimal len>\0"`.
fn blob_header(len: u64) -> String {
    format!("blob {}\0", len)
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
