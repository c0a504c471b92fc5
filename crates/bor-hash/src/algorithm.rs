use crate::GitOid;

/// Hash algorithms a gitoid can be computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-1 (default, 20 bytes / 160 bits).
    #[default]
    Sha1,
    /// SHA-256 (32 bytes / 256 bits).
    Sha256,
}

impl HashAlgorithm {
    /// Length of the hash digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Length of the hex representation.
    pub const fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// The per-algorithm directory under `objects/` and `metadata/gnu/`
    /// in an OmniBOR store.
    pub const fn store_dir(&self) -> &'static str {
        match self {
            Self::Sha1 => "gitoid_blob_sha1",
            Self::Sha256 => "gitoid_blob_sha256",
        }
    }

    /// The first line of an OmniBOR document produced with this algorithm
    /// (without the trailing newline).
    pub const fn document_tag(&self) -> &'static str {
        match self {
            Self::Sha1 => "gitoid:blob:sha1",
            Self::Sha256 => "gitoid:blob:sha256",
        }
    }

    /// Look up a hash algorithm by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha1" | "sha-1" => Some(Self::Sha1),
            "sha256" | "sha-256" => Some(Self::Sha256),
            _ => None,
        }
    }

    /// Look up a hash algorithm by hex length.
    pub fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            40 => Some(Self::Sha1),
            64 => Some(Self::Sha256),
            _ => None,
        }
    }

    /// The short name of this algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// The all-zeros gitoid for this algorithm.
    pub const fn null_oid(&self) -> GitOid {
        match self {
            Self::Sha1 => GitOid::Sha1([0u8; 20]),
            Self::Sha256 => GitOid::Sha256([0u8; 32]),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_lengths() {
        assert_eq!(HashAlgorithm::Sha1.digest_len(), 20);
        assert_eq!(HashAlgorithm::Sha256.digest_len(), 32);
    }

    #[test]
    fn hex_lengths() {
        assert_eq!(HashAlgorithm::Sha1.hex_len(), 40);
        assert_eq!(HashAlgorithm::Sha256.hex_len(), 64);
    }

    #[test]
    fn default_is_sha1() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha1);
    }

    #[test]
    fn store_dirs() {
        assert_eq!(HashAlgorithm::Sha1.store_dir(), "gitoid_blob_sha1");
        assert_eq!(HashAlgorithm::Sha256.store_dir(), "gitoid_blob_sha256");
    }

    #[test]
    fn document_tags() {
        assert_eq!(HashAlgorithm::Sha1.document_tag(), "gitoid:blob:sha1");
        assert_eq!(HashAlgorithm::Sha256.document_tag(), "gitoid:blob:sha256");
    }

    #[test]
    fn from_name() {
        assert_eq!(HashAlgorithm::from_name("sha1"), Some(HashAlgorithm::Sha1));
        assert_eq!(
            HashAlgorithm::from_name("sha256"),
            Some(HashAlgorithm::Sha256)
        );
        assert_eq!(HashAlgorithm::from_name("md5"), None);
    }

    #[test]
    fn from_hex_len() {
        assert_eq!(HashAlgorithm::from_hex_len(40), Some(HashAlgorithm::Sha1));
        assert_eq!(HashAlgorithm::from_hex_len(64), Some(HashAlgorithm::Sha256));
        assert_eq!(HashAlgorithm::from_hex_len(41), None);
    }

    #[test]
    fn null_oids() {
        let null1 = HashAlgorithm::Sha1.null_oid();
        assert_eq!(null1.as_bytes(), &[0u8; 20]);
        let null256 = HashAlgorithm::Sha256.null_oid();
        assert_eq!(null256.as_bytes(), &[0u8; 32]);
    }
}
