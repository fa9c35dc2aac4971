use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load finding fingerprints from a `.leakcheckignore` file, one per line.
/// Blank lines and `#` comments are skipped. A missing file yields the
/// empty set.
pub fn load_allowlist(path: &Path) -> io::Result<HashSet<String>> {
    if !path.exists() {
        return Ok(HashSet::new());
    }
    let content = fs::read_to_string(path)?;
    let mut fingerprints = HashSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        fingerprints.insert(line.to_string());
    }
    Ok(fingerprints)
}
