/// Apply Make quoting to `name`, appending `trail` (also quoted) when
/// given.
///
/// Note that it's not possible to quote all problematic characters —
/// e.g. `\n`, `%`, `*`, `?`, `[`, `\` (in some contexts), and `~` are
/// not properly handled. No current version of Make can get this right.
///
/// GNU make uses a weird quoting scheme for white space: a space or tab
/// preceded by 2N+1 backslashes represents N backslashes followed by the
/// space; a space or tab preceded by 2N backslashes represents N
/// backslashes at the end of a file name; backslashes in other contexts
/// must not be doubled.
pub fn munge(name: &str, trail: Option<&str>) -> String {
    let mut out = String::with_capacity(name.len() + trail.map_or(0, str::len) + 8);

    for part in std::iter::once(name).chain(trail) {
        let mut slashes = 0usize;
        for c in part.chars() {
            match c {
                '\\' => slashes += 1,
                '$' => {
                    out.push('$');
                    slashes = 0;
                }
                ' ' | '\t' => {
                    // Double the backslashes that precede the space,
                    // then quote the space itself.
                    for _ in 0..slashes {
                        out.push('\\');
                    }
                    out.push('\\');
                    slashes = 0;
                }
                '#' => {
                    out.push('\\');
                    slashes = 0;
                }
                _ => slashes = 0,
            }
            out.push(c);
        }
    }

    out
}
