//! Rule emission: targets, dependencies, and the module rule block.

use std::io::{self, Write};

use bor_deps::DepsSet;

use crate::quote::munge;

/// Narrowest column width the wrapper will honor.
const MIN_COLUMNS: usize = 34;

/// Options controlling Makefile fragment emission.
#[derive(Debug, Clone)]
pub struct MakeOptions {
    /// Wrap lines at this column; 0 disables wrapping. Values below 34
    /// are raised to 34.
    pub columns: usize,
    /// Emit a phony rule for every dependency after the first, so
    /// deleting a header does not break the build.
    pub phony_targets: bool,
    /// Emit C++ module rules (`.c++m` targets, `CXX_IMPORTS`).
    pub modules: bool,
}

impl Default for MakeOptions {
    fn default() -> Self {
        Self {
            columns: 72,
            phony_targets: false,
            modules: false,
        }
    }
}

/// Write `name` to `out` with a leading space (unless at column 0),
/// wrapping with a ` \`-newline when the name would exceed `colmax`.
/// Returns the new column. Iff `quote`, Make-quoting is applied and
/// `trail` appended.
fn write_name<W: Write>(
    name: &str,
    out: &mut W,
    mut col: usize,
    colmax: usize,
    quote: bool,
    trail: Option<&str>,
) -> io::Result<usize> {
    let quoted;
    let name = if quote {
        quoted = munge(name, trail);
        quoted.as_str()
    } else {
        name
    };
    let size = name.len();

    if col != 0 {
        if colmax != 0 && col + size > colmax {
            out.write_all(b" \\\n")?;
            col = 0;
        }
        col += 1;
        out.write_all(b" ")?;
    }

    col += size;
    out.write_all(name.as_bytes())?;

    Ok(col)
}

/// Write all of `names` via [`write_name`]; entries at or above
/// `quote_lwm` are quoted.
fn write_vec<W: Write>(
    names: &[String],
    out: &mut W,
    mut col: usize,
    colmax: usize,
    quote_lwm: usize,
    trail: Option<&str>,
) -> io::Result<usize> {
    for (ix, name) in names.iter().enumerate() {
        col = write_name(name, out, col, colmax, ix >= quote_lwm, trail)?;
    }
    Ok(col)
}

/// Write the dependency set as a Makefile fragment.
pub fn write_make<W: Write>(deps: &DepsSet, out: &mut W, opts: &MakeOptions) -> io::Result<()> {
    let colmax = if opts.columns != 0 && opts.columns < MIN_COLUMNS {
        MIN_COLUMNS
    } else {
        opts.columns
    };

    let mut column;
    if !deps.deps().is_empty() {
        column = write_vec(deps.targets(), out, 0, colmax, deps.quote_lwm(), None)?;
        if opts.modules {
            if let Some(mt) = deps.module_target() {
                column = write_name(&mt.cmi_name, out, column, colmax, true, None)?;
            }
        }
        out.write_all(b":")?;
        column += 1;
        write_vec(deps.deps(), out, column, colmax, 0, None)?;
        out.write_all(b"\n")?;

        if opts.phony_targets {
            for dep in deps.deps().iter().skip(1) {
                writeln!(out, "{}:", munge(dep, None))?;
            }
        }
    }

    if !opts.modules {
        return Ok(());
    }

    if !deps.modules().is_empty() {
        column = write_vec(deps.targets(), out, 0, colmax, deps.quote_lwm(), None)?;
        if let Some(mt) = deps.module_target() {
            column = write_name(&mt.cmi_name, out, column, colmax, true, None)?;
        }
        out.write_all(b":")?;
        column += 1;
        write_vec(deps.modules(), out, column, colmax, 0, Some(".c++m"))?;
        out.write_all(b"\n")?;
    }

    if let Some(mt) = deps.module_target() {
        // module-name.c++m : cmi-name
        column = write_name(&mt.name, out, 0, colmax, true, Some(".c++m"))?;
        out.write_all(b":")?;
        column += 1;
        write_name(&mt.cmi_name, out, column, colmax, true, None)?;
        out.write_all(b"\n")?;

        out.write_all(b".PHONY:")?;
        write_name(&mt.name, out, ".PHONY:".len(), colmax, true, Some(".c++m"))?;
        out.write_all(b"\n")?;

        if !mt.is_header_unit {
            if let Some(first_target) = deps.targets().first() {
                // An order-only dependency: the first build target must
                // exist before the CMI is considered usable.
                //   cmi-name :| first-target
                column = write_name(&mt.cmi_name, out, 0, colmax, true, None)?;
                out.write_all(b":|")?;
                column += 1;
                write_name(first_target, out, column, colmax, true, None)?;
                out.write_all(b"\n")?;
            }
        }
    }

    if !deps.modules().is_empty() {
        out.write_all(b"CXX_IMPORTS +=")?;
        write_vec(
            deps.modules(),
            out,
            "CXX_IMPORTS +=".len(),
            colmax,
            0,
            Some(".c++m"),
        )?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
