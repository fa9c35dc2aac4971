use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::leakcheck::gitignore::IgnoreRules;

/// Collect the files under `root` as root-relative paths, in sorted
/// depth-first order.
///
/// Ignored directories are pruned (never descended into), ignored files are
/// skipped, `.git` is always pruned, and symbolic links are neither
/// followed nor reported.
pub fn walk_files(root: &Path, rules: &IgnoreRules) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_into(root, &PathBuf::new(), rules, &mut files)?;
    Ok(files)
}

fn walk_into(
    dir: &Path,
    rel: &Path,
    rules: &IgnoreRules,
    files: &mut Vec<PathBuf>,
) -> io::Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name();
        let rel_path = rel.join(&name);
        let rel_str = rel_path.to_string_lossy().replace('\\', "/");

        // file_type() on the entry does not follow symlinks
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            if name == ".git" || rules.is_ignored(&rel_str) {
                continue;
            }
            walk_into(&entry.path(), &rel_path, rules, files)?;
        } else if file_type.is_file() {
            if rules.is_ignored(&rel_str) {
                continue;
            }
            files.push(rel_path);
        }
    }
    Ok(())
}
