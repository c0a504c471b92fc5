//! Makefile fragment emission for a dependency set.
//!
//! Formats a [`bor_deps::DepsSet`] as `target...: dep...` rules with
//! Make-quoted names and column wrapping, plus the C++ module rule block
//! when module tracking is enabled.

mod quote;
mod write;

pub use quote::munge;
pub use write::{write_make, MakeOptions};
