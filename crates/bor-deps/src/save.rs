//! Binary save/restore of the dependency list.
//!
//! Used by the precompiled-header cache: the dependency paths recorded
//! while building a PCH are serialized into it, then read back on a
//! cache hit to reconstruct the Makefile dependencies without re-running
//! the preprocessor.
//!
//! Format: a record count, then per dependency a length prefix followed
//! by the raw path bytes. All integers are fixed-width big-endian u64.

use std::io::{Read, Write};

use crate::{DepsError, DepsSet};

/// Serialize the dependency list of `deps` to `w`.
pub fn save_deps<W: Write>(deps: &DepsSet, w: &mut W) -> Result<(), DepsError> {
    w.write_all(&(deps.deps().len() as u64).to_be_bytes())?;

    for dep in deps.deps() {
        w.write_all(&(dep.len() as u64).to_be_bytes())?;
        w.write_all(dep.as_bytes())?;
    }

    Ok(())
}

/// Read back a dependency list written with [`save_deps`], adding each
/// entry to `deps`.
///
/// If `skip` names a path, that one entry is dropped instead of added —
/// the PCH's own file must not reappear among the dependencies it
/// provides. Truncated or malformed input is an error; entries added
/// before the failure point remain in `deps`.
pub fn restore_deps<R: Read>(
    deps: &mut DepsSet,
    r: &mut R,
    skip: Option<&str>,
) -> Result<(), DepsError> {
    let count = read_u64(r)?;

    for _ in 0..count {
        let len = read_u64(r)? as usize;
        let mut buf = vec![0u8; len];
        r.read_exact(&mut buf)?;

        let path = String::from_utf8(buf)
            .map_err(|e| DepsError::InvalidRecord(format!("non-UTF-8 path: {e}")))?;
        if path.is_empty() {
            return Err(DepsError::InvalidRecord("empty path".to_string()));
        }

        if skip != Some(path.as_str()) {
            deps.add_dep(&path);
        }
    }

    Ok(())
}

fn read_u64<R: Read>(r: &mut R) -> Result<u64, DepsError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}
