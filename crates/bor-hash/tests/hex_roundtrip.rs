use bor_hash::hex::{hex_decode, hex_to_string};
use bor_hash::{GitOid, HashAlgorithm};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hex_encode_decode_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let hex = hex_to_string(&bytes);
        let mut decoded = vec![0u8; bytes.len()];
        hex_decode(&hex, &mut decoded).unwrap();
        prop_assert_eq!(&decoded, &bytes);
    }

    #[test]
    fn hex_is_always_lowercase(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let hex = hex_to_string(&bytes);
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn hex_length_is_double(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let hex = hex_to_string(&bytes);
        prop_assert_eq!(hex.len(), bytes.len() * 2);
    }

    #[test]
    fn sha1_oid_hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 20..=20)) {
        let oid = GitOid::from_bytes(&bytes, HashAlgorithm::Sha1).unwrap();
        let parsed: GitOid = oid.to_hex().parse().unwrap();
        prop_assert_eq!(oid, parsed);
    }

    #[test]
    fn sha256_oid_hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 32..=32)) {
        let oid = GitOid::from_bytes(&bytes, HashAlgorithm::Sha256).unwrap();
        let parsed: GitOid = oid.to_hex().parse().unwrap();
        prop_assert_eq!(oid, parsed);
    }

    #[test]
    fn sharded_path_reassembles(bytes in proptest::collection::vec(any::<u8>(), 20..=20)) {
        let oid = GitOid::from_bytes(&bytes, HashAlgorithm::Sha1).unwrap();
        let path = oid.sharded_path();
        prop_assert_eq!(path.replace('/', ""), oid.to_hex());
        prop_assert_eq!(path.find('/'), Some(2));
    }
}
