//! Gitoid computation and content identity for the borr dependency recorder.
//!
//! A gitoid is the digest of `"blob <len>\0" + content` — the same
//! construction git uses for blob objects, which is what makes the
//! recorded identifiers interoperable with git tooling. This crate
//! provides the `GitOid` value type, the algorithm selector, hex
//! encoding/decoding, and the hashing entry points for both in-memory
//! buffers and open files.

mod algorithm;
mod error;
pub mod hasher;
pub mod hex;
mod oid;

pub use algorithm::HashAlgorithm;
pub use error::HashError;
pub use oid::GitOid;
