use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod leakcheck;
mod templates;
mod utils;

const LONG_ABOUT: &str = "\
Leakcheck keeps secrets out of your commits.

It scans a working tree two ways: file paths are checked against a fixed set
of sensitive-path glob patterns (.env files, key material, credential
stores), and file contents are checked line by line against a catalogue of
secret detectors (API keys, passwords, private keys, GitHub tokens, AWS
keys). Detected values are always masked in output.

Installed as a git pre-commit hook, a failing scan aborts the commit. Known
false positives can be suppressed by listing their fingerprints in a
.leakcheckignore file at the repository root.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Install the pre-commit hook in the current repository:
        $ leakcheck init

    Scan the current directory:
        $ leakcheck scan

    Scan with an extra pattern and commit despite findings:
        $ leakcheck scan --pattern '*.sqlite' --force

    Check whether paths are safe to display:
        $ leakcheck check .env src/main.go

    List the active sensitive-path patterns:
        $ leakcheck patterns

WORKFLOW:
    1. Run 'leakcheck init' once per repository to install the hook
    2. Commit as usual; the hook runs 'leakcheck scan' first
    3. Review any findings; real secrets should be removed and rotated
    4. Suppress confirmed false positives by adding their fingerprint
       (last table column) to .leakcheckignore

EXIT CODES:
    0  no findings (or continued with --force / interactive confirmation)
    1  findings present, or a command failed
    2  environment error (e.g. init outside a git repository)";

#[derive(Parser)]
#[command(name = "leakcheck")]
#[command(version)]
#[command(about = "Pre-commit scanner for secrets and sensitive file paths")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the pre-commit hook in the current repository
    #[command(
        long_about = "\
Install the pre-commit hook in the current repository.

Writes .git/hooks/pre-commit with a script that runs 'leakcheck scan' and
aborts the commit when the scan fails. The hook is marked executable on
Unix. Also seeds an empty, commented .leakcheckignore allowlist at the
repository root when none exists.

Fails if a pre-commit hook already exists, unless --force is given.",
        after_help = "\
EXAMPLES:
    Install the hook:
        $ leakcheck init

    Replace an existing hook:
        $ leakcheck init --force"
    )]
    Init {
        /// Overwrite an existing pre-commit hook
        #[arg(long, help = "Overwrite an existing pre-commit hook")]
        force: bool,
    },

    /// Scan a directory tree for secrets and sensitive file paths
    #[command(
        long_about = "\
Scan a directory tree for secrets and sensitive file paths.

Walks the directory (pruning .gitignore'd entries and .git itself, never
following symlinks), checks every file path against the sensitive-path
patterns, and scans every file's contents with the secret detectors.
Findings are reported as tables with every detected value masked, plus a
per-finding fingerprint for the .leakcheckignore allowlist.

When secrets are found the scan exits 1, aborting a commit when run from
the pre-commit hook. With --force it always exits 0. When attached to a
terminal it asks whether to continue instead.",
        after_help = "\
EXAMPLES:
    Scan the current directory:
        $ leakcheck scan

    Scan a specific directory:
        $ leakcheck scan ../other-repo

    Treat database dumps as sensitive too:
        $ leakcheck scan --pattern '*.sqlite' --pattern '*.dump'

    Commit anyway:
        $ leakcheck scan --force"
    )]
    Scan {
        /// The directory to scan (default: current directory)
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Always exit with 0, even if secrets are found
        #[arg(long, help = "Always exit with 0, even if secrets are found")]
        force: bool,

        /// Extra sensitive-path glob, appended after the defaults (repeatable)
        #[arg(long = "pattern", value_name = "GLOB")]
        patterns: Vec<String>,
    },

    /// Check whether the given paths match a sensitive-path pattern
    #[command(
        long_about = "\
Check whether the given paths match a sensitive-path pattern.

Classification is purely syntactic: the paths are matched against the
pattern set without touching the filesystem, so they need not exist. One
line is printed per path, then a summary count. Exits 1 when any path is
sensitive.

This is the check to run before displaying a file's contents, or against
a list of staged paths from your version-control tool.",
        after_help = "\
EXAMPLES:
    Check staged files:
        $ git diff --cached --name-only | xargs leakcheck check

    Check a single path:
        $ leakcheck check ~/.aws/credentials

OUTPUT:
    ✗ .env sensitive (.env)
    ✓ src/main.go

    1 of 2 paths sensitive"
    )]
    Check {
        /// Paths to classify
        #[arg(required = true)]
        paths: Vec<String>,

        /// Extra sensitive-path glob, appended after the defaults (repeatable)
        #[arg(long = "pattern", value_name = "GLOB")]
        patterns: Vec<String>,
    },

    /// List the active sensitive-path patterns in order
    #[command(long_about = "\
List the active sensitive-path patterns, one per line, in the order they
are consulted. The first matching pattern is the one a finding reports.")]
    Patterns,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => commands::init::run(force),
        Commands::Scan {
            directory,
            force,
            patterns,
        } => commands::scan::run(commands::scan::ScanOptions {
            directory,
            force,
            patterns,
        }),
        Commands::Check { paths, patterns } => commands::check::run(paths, patterns),
        Commands::Patterns => commands::patterns::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
