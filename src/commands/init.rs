use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use crate::templates::{HOOK_TEMPLATE, IGNOREFILE_TEMPLATE};
use crate::utils::fs::{allowlist_path, hook_path, is_git_repo};

/// Exit codes
const EXIT_FAILURE: i32 = 1;
const EXIT_NOT_A_REPO: i32 = 2;

/// What init did, for reporting
#[derive(Debug)]
pub struct InitResult {
    pub hook_path: PathBuf,
    pub hook_overwritten: bool,
    pub allowlist_created: bool,
}

/// Error types for init failures
#[derive(Debug)]
pub enum InitError {
    /// The working directory has no .git directory
    NotGitRepo,
    /// The pre-commit hook already exists and --force was not given
    HookExists(PathBuf),
    /// I/O error
    IoError(io::Error),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::NotGitRepo => {
                write!(f, "Not a git repository (no .git directory)")
            }
            InitError::HookExists(path) => {
                write!(
                    f,
                    "Hook already exists: {}. Use --force to overwrite.",
                    path.display()
                )
            }
            InitError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

impl From<io::Error> for InitError {
    fn from(error: io::Error) -> Self {
        InitError::IoError(error)
    }
}

pub fn run(force: bool) -> io::Result<()> {
    match init_in_dir(Path::new("."), force) {
        Ok(result) => {
            if result.hook_overwritten {
                println!("Overwrote pre-commit hook: {}", result.hook_path.display());
            } else {
                println!("Installed pre-commit hook: {}", result.hook_path.display());
            }
            if result.allowlist_created {
                println!("Created .leakcheckignore");
            } else {
                println!("Kept existing .leakcheckignore");
            }
            println!();
            println!("Commits in this repository now run `leakcheck scan` first.");
            Ok(())
        }
        Err(InitError::NotGitRepo) => {
            eprintln!("Not a git repository (no .git directory).");
            eprintln!("Run `leakcheck init` from the repository root.");
            process::exit(EXIT_NOT_A_REPO);
        }
        Err(InitError::HookExists(path)) => {
            eprintln!("Hook already exists: {}", path.display());
            eprintln!("Use --force to overwrite it.");
            process::exit(EXIT_FAILURE);
        }
        Err(InitError::IoError(e)) => Err(e),
    }
}

/// Init logic with configurable base directory for testing
pub fn init_in_dir(base_dir: &Path, force: bool) -> Result<InitResult, InitError> {
    if !is_git_repo(base_dir) {
        return Err(InitError::NotGitRepo);
    }

    let hook = hook_path(base_dir);
    let hook_overwritten = hook.exists();
    if hook_overwritten && !force {
        return Err(InitError::HookExists(hook));
    }

    if let Some(hooks_dir) = hook.parent() {
        fs::create_dir_all(hooks_dir)?;
    }
    fs::write(&hook, HOOK_TEMPLATE)?;
    make_executable(&hook)?;

    let allowlist = allowlist_path(base_dir);
    let allowlist_created = !allowlist.exists();
    if allowlist_created {
        fs::write(&allowlist, IGNOREFILE_TEMPLATE)?;
    }

    Ok(InitResult {
        hook_path: hook,
        hook_overwritten,
        allowlist_created,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup_git_dir(base: &Path) {
        fs::create_dir_all(base.join(".git/hooks")).unwrap();
    }

    #[test]
    fn test_init_fails_outside_git_repo() {
        let dir = tempdir().unwrap();
        let result = init_in_dir(dir.path(), false);
        assert!(matches!(result, Err(InitError::NotGitRepo)));
    }

    #[test]
    fn test_init_installs_hook_and_allowlist() {
        let dir = tempdir().unwrap();
        setup_git_dir(dir.path());

        let result = init_in_dir(dir.path(), false).unwrap();
        assert!(!result.hook_overwritten);
        assert!(result.allowlist_created);

        let hook = fs::read_to_string(dir.path().join(".git/hooks/pre-commit")).unwrap();
        assert!(hook.starts_with("#!/bin/sh"));
        assert!(hook.contains("leakcheck scan"));
        assert!(dir.path().join(".leakcheckignore").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_init_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        setup_git_dir(dir.path());
        init_in_dir(dir.path(), false).unwrap();

        let perms = fs::metadata(dir.path().join(".git/hooks/pre-commit"))
            .unwrap()
            .permissions();
        assert_eq!(perms.mode() & 0o111, 0o111);
    }

    #[test]
    fn test_init_fails_when_hook_exists() {
        let dir = tempdir().unwrap();
        setup_git_dir(dir.path());
        fs::write(dir.path().join(".git/hooks/pre-commit"), "#!/bin/sh\n").unwrap();

        let result = init_in_dir(dir.path(), false);
        assert!(matches!(result, Err(InitError::HookExists(_))));
    }

    #[test]
    fn test_init_force_overwrites_hook() {
        let dir = tempdir().unwrap();
        setup_git_dir(dir.path());
        fs::write(dir.path().join(".git/hooks/pre-commit"), "#!/bin/sh\n# old\n").unwrap();

        let result = init_in_dir(dir.path(), true).unwrap();
        assert!(result.hook_overwritten);

        let hook = fs::read_to_string(dir.path().join(".git/hooks/pre-commit")).unwrap();
        assert!(hook.contains("leakcheck scan"));
    }

    #[test]
    fn test_init_keeps_existing_allowlist() {
        let dir = tempdir().unwrap();
        setup_git_dir(dir.path());
        fs::write(dir.path().join(".leakcheckignore"), "a1b2c3d4\n").unwrap();

        let result = init_in_dir(dir.path(), false).unwrap();
        assert!(!result.allowlist_created);

        let content = fs::read_to_string(dir.path().join(".leakcheckignore")).unwrap();
        assert_eq!(content, "a1b2c3d4\n");
    }

    #[test]
    fn test_init_creates_hooks_dir_when_missing() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        init_in_dir(dir.path(), false).unwrap();
        assert!(dir.path().join(".git/hooks/pre-commit").exists());
    }
}
