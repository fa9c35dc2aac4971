use std::path::{Path, PathBuf};

/// Check if `base` looks like a git repository root
pub fn is_git_repo(base: &Path) -> bool {
    base.join(".git").is_dir()
}

/// Path to the pre-commit hook under `base`
pub fn hook_path(base: &Path) -> PathBuf {
    base.join(".git").join("hooks").join("pre-commit")
}

/// Path to the .gitignore file under `base`
pub fn gitignore_path(base: &Path) -> PathBuf {
    base.join(".gitignore")
}

/// Path to the allowlist file under `base`
pub fn allowlist_path(base: &Path) -> PathBuf {
    base.join(".leakcheckignore")
}
