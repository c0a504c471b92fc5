/// Check if a byte is a directory separator (handles both Unix and Windows).
#[inline]
fn is_dir_sep(c: u8) -> bool {
    c == b'/' || c == b'\\'
}

/// Return the filename portion of a path.
fn basename(path: &str) -> &str {
    match path.bytes().rposition(is_dir_sep) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// The one-per-compilation module target binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTarget {
    /// Module name as written in the interface unit.
    pub name: String,
    /// File name of the compiled module interface.
    pub cmi_name: String,
    /// Whether the module is a header unit rather than a named module.
    pub is_header_unit: bool,
}

/// The record of one compilation's targets, dependencies, path-remap
/// rules and module linkage.
///
/// Created empty, populated incrementally by the front end, consumed
/// once at end-of-compilation.
///
/// Targets are partitioned by the quoting low-water mark: entries below
/// `quote_lwm` are emitted unquoted, entries at or above it are quoted.
/// Pushing an unquoted target after quoted ones swaps it into the lowest
/// quoted slot so the unquoted prefix stays contiguous.
#[derive(Debug, Default)]
pub struct DepsSet {
    targets: Vec<String>,
    deps: Vec<String>,
    vpath: Vec<String>,
    modules: Vec<String>,
    module_target: Option<ModuleTarget>,
    quote_lwm: usize,
}

impl DepsSet {
    /// Create an empty dependency set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The target names, unquoted entries first.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// The dependency file paths, in discovery order. Duplicates are
    /// preserved.
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    /// The imported module names.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// The module target binding, if one was set.
    pub fn module_target(&self) -> Option<&ModuleTarget> {
        self.module_target.as_ref()
    }

    /// Index of the first quoted target.
    pub fn quote_lwm(&self) -> usize {
        self.quote_lwm
    }

    /// If `path` begins with any recorded vpath prefix, strip that prefix
    /// and the following separator. Rules are checked newest-first and
    /// only the first match applies. Leading `./` components are stripped
    /// in any case.
    fn apply_vpath<'a>(&self, path: &'a str) -> &'a str {
        let mut t = path;
        for rule in self.vpath.iter().rev() {
            if let Some(rest) = t.strip_prefix(rule.as_str()) {
                let bytes = rest.as_bytes();
                if bytes.is_empty() || !is_dir_sep(bytes[0]) {
                    continue;
                }
                // Do not simplify $(vpath)/../whatever.
                if bytes.len() >= 4
                    && bytes[1] == b'.'
                    && bytes[2] == b'.'
                    && is_dir_sep(bytes[3])
                {
                    continue;
                }
                t = &rest[1..];
                break;
            }
        }

        // Remove leading ./ in any case.
        let mut b = t.as_bytes();
        while b.len() >= 2 && b[0] == b'.' && is_dir_sep(b[1]) {
            b = &b[2..];
            // If we removed a leading ./, then also remove any /s after
            // the first.
            while !b.is_empty() && is_dir_sep(b[0]) {
                b = &b[1..];
            }
        }
        &t[t.len() - b.len()..]
    }

    /// Add a target name. `quote` selects whether the Makefile writer
    /// will apply Make-quoting to it.
    pub fn add_target(&mut self, target: &str, quote: bool) {
        let mut t = self.apply_vpath(target).to_string();

        if !quote {
            // Sometimes unquoted items are added after quoted ones.
            // Swap out the lowest quoted.
            if self.quote_lwm != self.targets.len() {
                std::mem::swap(&mut self.targets[self.quote_lwm], &mut t);
            }
            self.quote_lwm += 1;
        }

        self.targets.push(t);
    }

    /// Set the default target if none has been given already. An empty
    /// `source` means the input came from stdin and yields the target
    /// `-`; otherwise the target is the basename of `source` with its
    /// extension replaced by `.o`, added quoted.
    pub fn add_default_target(&mut self, source: &str) {
        if !self.targets.is_empty() {
            return;
        }

        if source.is_empty() {
            self.targets.push("-".to_string());
        } else {
            let base = basename(source);
            let stem = match base.rfind('.') {
                Some(pos) => &base[..pos],
                None => base,
            };
            self.add_target(&format!("{stem}.o"), true);
        }
    }

    /// Record a dependency file path.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty — the front end never produces an empty
    /// dependency name.
    pub fn add_dep(&mut self, path: &str) {
        assert!(!path.is_empty());

        let t = self.apply_vpath(path);
        self.deps.push(t.to_string());
    }

    /// Add vpath rewrite rules from a colon-delimited list.
    pub fn add_vpath(&mut self, vpath: &str) {
        let mut rest = vpath;
        while !rest.is_empty() {
            let (elem, tail) = match rest.find(':') {
                Some(pos) => (&rest[..pos], &rest[pos + 1..]),
                None => (rest, ""),
            };
            self.vpath.push(elem.to_string());
            rest = tail;
        }
    }

    /// Record an imported module dependency.
    pub fn add_module_dep(&mut self, module: &str) {
        self.modules.push(module.to_string());
    }

    /// Bind the module target. There can only be one per compilation.
    ///
    /// # Panics
    ///
    /// Panics if a module target was already bound — doing so is a
    /// front-end integration bug, not a recoverable condition.
    pub fn set_module_target(&mut self, name: &str, cmi_name: &str, is_header_unit: bool) {
        assert!(
            self.module_target.is_none(),
            "module target bound twice: {name}"
        );

        self.module_target = Some(ModuleTarget {
            name: name.to_string(),
            cmi_name: cmi_name.to_string(),
            is_header_unit,
        });
    }
}
