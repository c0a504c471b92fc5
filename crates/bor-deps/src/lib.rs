//! The per-compilation dependency set.
//!
//! A `DepsSet` records everything one compiler invocation learns about
//! its inputs and outputs: the build targets (with Make-quoting state),
//! the dependency files in discovery order, vpath rewrite rules, and
//! C++ module linkage. The Makefile writer and the OmniBOR recorder both
//! consume it at end-of-compilation.

mod save;
mod set;

pub use save::{restore_deps, save_deps};
pub use set::{DepsSet, ModuleTarget};

/// Errors from dependency-set serialization.
#[derive(Debug, thiserror::Error)]
pub enum DepsError {
    #[error("malformed dependency record: {0}")]
    InvalidRecord(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
