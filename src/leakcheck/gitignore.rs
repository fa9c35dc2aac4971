use std::fs;
use std::io;
use std::path::Path;

use globset::{GlobSet, GlobSetBuilder};

use crate::leakcheck::glob::build_glob;

/// Compiled `.gitignore` rules for one scan root.
///
/// Anchoring follows gitignore's documented rules: an entry without a `/`
/// (or whose only `/` is trailing) matches its name at any depth; an entry
/// with an interior or leading `/` is anchored to the scan root. A trailing
/// `/` marks a directory entry and also ignores everything beneath it.
/// Negation (`!`) is not interpreted; such lines compile as literal
/// patterns.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    set: GlobSet,
}

impl IgnoreRules {
    /// Empty rule set: nothing is ignored.
    pub fn empty() -> Self {
        IgnoreRules {
            set: GlobSet::empty(),
        }
    }

    /// Load rules from a `.gitignore` file. A missing file yields the empty
    /// rule set. An invalid glob line is a configuration error naming the
    /// offending pattern.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(IgnoreRules::empty());
        }
        let content = fs::read_to_string(path)?;
        IgnoreRules::parse(&content)
    }

    /// Parse `.gitignore` content into compiled rules.
    pub fn parse(content: &str) -> io::Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (body, dir_only) = match line.strip_suffix('/') {
                Some(body) => (body, true),
                None => (line, false),
            };

            // Leading `/` anchors to the root; an interior `/` anchors too.
            // Everything else matches its name at any depth.
            let anchored = if let Some(rooted) = body.strip_prefix('/') {
                rooted.to_string()
            } else if body.contains('/') {
                body.to_string()
            } else {
                format!("**/{}", body)
            };

            add_pattern(&mut builder, line, &anchored)?;
            if dir_only {
                add_pattern(&mut builder, line, &format!("{}/**", anchored))?;
            }
        }
        let set = builder.build().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(".gitignore: {}", e),
            )
        })?;
        Ok(IgnoreRules { set })
    }

    /// Whether a root-relative path is ignored.
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        self.set.is_match(rel_path)
    }
}

fn add_pattern(builder: &mut GlobSetBuilder, line: &str, pattern: &str) -> io::Result<()> {
    let glob = build_glob(pattern).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(".gitignore: invalid pattern {:?}: {}", line, e),
        )
    })?;
    builder.add(glob);
    Ok(())
}
