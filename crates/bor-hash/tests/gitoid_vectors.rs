//! Known-answer tests for gitoid computation.
//!
//! The blob-header vectors match `git hash-object --stdin` (and its
//! `--object-format=sha256` variant), proving the recorded identifiers
//! interoperate with the git object database ecosystem.

use std::io::Write;

use bor_hash::hasher::Hasher;
use bor_hash::{GitOid, HashAlgorithm};

// ── raw digest vectors ──────────────────────────────────────────────

#[test]
fn sha1_empty_string() {
    let oid = Hasher::digest(HashAlgorithm::Sha1, b"").unwrap();
    assert_eq!(oid.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn sha256_empty_string() {
    let oid = Hasher::digest(HashAlgorithm::Sha256, b"").unwrap();
    assert_eq!(
        oid.to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

// ── gitoid (blob header) vectors ────────────────────────────────────

#[test]
fn gitoid_empty_blob() {
    let oid = Hasher::hash_blob(HashAlgorithm::Sha1, b"").unwrap();
    assert_eq!(oid.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
}

#[test]
fn gitoid_hello_world() {
    let oid = Hasher::hash_blob(HashAlgorithm::Sha1, b"hello world").unwrap();
    assert_eq!(oid.to_hex(), "95d09f2b10159347eece71399a7e2e907ea3df4f");
}

#[test]
fn gitoid_hello_world_newline() {
    let oid = Hasher::hash_blob(HashAlgorithm::Sha1, b"Hello, World!\n").unwrap();
    assert_eq!(oid.to_hex(), "8ab686eafeb1f44702738c8b0f24f2567c36da6d");
}

#[test]
fn gitoid_sha256_empty_blob() {
    let oid = Hasher::hash_blob(HashAlgorithm::Sha256, b"").unwrap();
    assert_eq!(
        oid.to_hex(),
        "473a0f4c3be8a93681a267e3b1e9a7dcda1185436fe141f7749120a303721813"
    );
}

// ── header convention ───────────────────────────────────────────────

#[test]
fn header_is_exactly_blob_len_nul() {
    // "ab\n" hashed with the header convention equals hashing the
    // literal bytes "blob 3\0ab\n".
    let via_blob = Hasher::hash_blob(HashAlgorithm::Sha1, b"ab\n").unwrap();
    let via_raw = Hasher::digest(HashAlgorithm::Sha1, b"blob 3\0ab\n").unwrap();
    assert_eq!(via_blob, via_raw);
}

#[test]
fn file_hash_matches_buffer_hash() {
    let content = b"#include <stdio.h>\nint main(void) { return 0; }\n";
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(content).unwrap();

    for algo in [HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
        let mut file = tmp.reopen().unwrap();
        let from_file = Hasher::hash_file(algo, &mut file).unwrap();
        let from_buf = Hasher::hash_blob(algo, content).unwrap();
        assert_eq!(from_file, from_buf);
        assert_eq!(from_file.algorithm(), algo);
    }
}

// ── oid parsing round-trips ─────────────────────────────────────────

#[test]
fn hex_parse_roundtrip() {
    let oid = Hasher::hash_blob(HashAlgorithm::Sha256, b"roundtrip").unwrap();
    let parsed: GitOid = oid.to_hex().parse().unwrap();
    assert_eq!(parsed, oid);
}
