use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_to_string};
use crate::{HashAlgorithm, HashError};

/// A gitoid — the content-derived identifier of a byte sequence.
///
/// An enum with one variant per supported hash algorithm, carrying the
/// raw digest bytes inline. Ordering and equality are on the raw bytes,
/// which for same-algorithm oids coincides with ordering their lowercase
/// hex strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GitOid {
    Sha1([u8; 20]),
    Sha256([u8; 32]),
}

impl GitOid {
    /// Create a GitOid from raw digest bytes and an algorithm.
    pub fn from_bytes(bytes: &[u8], algo: HashAlgorithm) -> Result<Self, HashError> {
        let expected = algo.digest_len();
        if bytes.len() != expected {
            return Err(HashError::InvalidDigestLength {
                expected,
                actual: bytes.len(),
            });
        }
        match algo {
            HashAlgorithm::Sha1 => {
                let mut arr = [0u8; 20];
                arr.copy_from_slice(bytes);
                Ok(Self::Sha1(arr))
            }
            HashAlgorithm::Sha256 => {
                let mut arr = [0u8; 32];
                arr.copy_from_slice(bytes);
                Ok(Self::Sha256(arr))
            }
        }
    }

    /// Create a GitOid from a hex string. The algorithm is inferred from
    /// the length: 40 hex chars → SHA-1, 64 → SHA-256.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        let algo =
            HashAlgorithm::from_hex_len(hex.len()).ok_or(HashError::InvalidHexLength {
                expected: 40,
                actual: hex.len(),
            })?;
        match algo {
            HashAlgorithm::Sha1 => {
                let mut bytes = [0u8; 20];
                hex_decode(hex, &mut bytes)?;
                Ok(Self::Sha1(bytes))
            }
            HashAlgorithm::Sha256 => {
                let mut bytes = [0u8; 32];
                hex_decode(hex, &mut bytes)?;
                Ok(Self::Sha256(bytes))
            }
        }
    }

    /// Get the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Sha1(b) => b,
            Self::Sha256(b) => b,
        }
    }

    /// Get the hash algorithm this oid was computed with.
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Sha1(_) => HashAlgorithm::Sha1,
            Self::Sha256(_) => HashAlgorithm::Sha256,
        }
    }

    /// Get the lowercase hex string representation.
    pub fn to_hex(&self) -> String {
        hex_to_string(self.as_bytes())
    }

    /// Get the sharded store path component: `"xx/xxxx..."`, the first
    /// two hex characters as a directory and the remainder as the name.
    pub fn sharded_path(&self) -> String {
        let hex = self.to_hex();
        format!("{}/{}", &hex[..2], &hex[2..])
    }
}

impl fmt::Display for GitOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for GitOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GitOid({})", &self.to_hex()[..8])
    }
}

impl FromStr for GitOid {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA1_HEX: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    const SHA256_HEX: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn from_hex_sha1() {
        let oid = GitOid::from_hex(SHA1_HEX).unwrap();
        assert_eq!(oid.algorithm(), HashAlgorithm::Sha1);
        assert_eq!(oid.as_bytes().len(), 20);
    }

    #[test]
    fn from_hex_sha256() {
        let oid = GitOid::from_hex(SHA256_HEX).unwrap();
        assert_eq!(oid.algorithm(), HashAlgorithm::Sha256);
        assert_eq!(oid.as_bytes().len(), 32);
    }

    #[test]
    fn display_roundtrip() {
        let oid = GitOid::from_hex(SHA1_HEX).unwrap();
        let displayed = oid.to_string();
        assert_eq!(displayed, SHA1_HEX);
        let parsed: GitOid = displayed.parse().unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn debug_shows_short_hash() {
        let oid = GitOid::from_hex(SHA1_HEX).unwrap();
        assert_eq!(format!("{:?}", oid), "GitOid(da39a3ee)");
    }

    #[test]
    fn ordering_matches_hex_ordering() {
        let a = GitOid::from_hex("0000000000000000000000000000000000000001").unwrap();
        let b = GitOid::from_hex("0000000000000000000000000000000000000002").unwrap();
        assert!(a < b);
        assert!(a.to_hex() < b.to_hex());
    }

    #[test]
    fn from_bytes_roundtrip() {
        let oid = GitOid::from_hex(SHA1_HEX).unwrap();
        let reconstructed = GitOid::from_bytes(oid.as_bytes(), HashAlgorithm::Sha1).unwrap();
        assert_eq!(oid, reconstructed);
    }

    #[test]
    fn from_bytes_wrong_length() {
        let err = GitOid::from_bytes(&[0; 10], HashAlgorithm::Sha1).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidDigestLength {
                expected: 20,
                actual: 10
            }
        ));
    }

    #[test]
    fn invalid_hex_chars() {
        let err = GitOid::from_hex("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, HashError::InvalidHex { .. }));
    }

    #[test]
    fn invalid_hex_length() {
        let err = GitOid::from_hex("abcd").unwrap_err();
        assert!(matches!(err, HashError::InvalidHexLength { .. }));
    }

    #[test]
    fn sharded_path() {
        let oid = GitOid::from_hex(SHA1_HEX).unwrap();
        assert_eq!(oid.sharded_path(), format!("da/{}", &SHA1_HEX[2..]));
    }
}
