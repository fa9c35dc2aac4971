use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use crate::leakcheck::allowlist::load_allowlist;
use crate::leakcheck::gitignore::IgnoreRules;
use crate::leakcheck::report::{ContentFinding, PathFinding, ScanReport};
use crate::leakcheck::secrets::scan_file;
use crate::leakcheck::sensitive::PatternSet;
use crate::leakcheck::walk::walk_files;
use crate::utils::fs::{allowlist_path, gitignore_path};
use crate::utils::hash::fingerprint;

/// Exit codes
const EXIT_CLEAN: i32 = 0;
const EXIT_FINDINGS: i32 = 1;

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub directory: PathBuf,
    pub force: bool,
    pub patterns: Vec<String>,
}

pub fn run(options: ScanOptions) -> io::Result<()> {
    let scan_dir = options.directory.canonicalize()?;
    println!("Scanning directory: {}", scan_dir.display());

    let patterns = PatternSet::build(&options.patterns)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let report = scan_tree(&scan_dir, &patterns)?;

    if report.is_clean() {
        println!();
        println!("No secrets found.");
        return Ok(());
    }

    println!();
    print!("{}", report.render());

    if options.force {
        process::exit(EXIT_CLEAN);
    }

    // Prompt to continue only in interactive mode
    if io::stdin().is_terminal() {
        print!("\nDo you want to continue with the commit? (y/N) ");
        io::stdout().flush()?;
        let mut choice = String::new();
        io::stdin().lock().read_line(&mut choice)?;
        if choice.trim().eq_ignore_ascii_case("y") {
            println!("Continuing with commit...");
            process::exit(EXIT_CLEAN);
        }
    }

    println!();
    println!("Aborting commit.");
    process::exit(EXIT_FINDINGS);
}

/// Scan logic with no printing or prompting, for testing and reuse: walk
/// the tree, classify every file path, scan every file's contents, and
/// drop allowlisted findings.
pub fn scan_tree(root: &Path, patterns: &PatternSet) -> io::Result<ScanReport> {
    let rules = IgnoreRules::load(&gitignore_path(root))?;
    let allowlist = load_allowlist(&allowlist_path(root))?;
    let files = walk_files(root, &rules)?;

    let mut report = ScanReport {
        scanned_files: files.len(),
        ..ScanReport::default()
    };

    for rel_path in &files {
        let rel = rel_path.to_string_lossy().replace('\\', "/");

        if let Some(pattern) = patterns.first_match(&rel) {
            let fp = fingerprint(&rel, 0, pattern);
            if allowlist.contains(&fp) {
                report.suppressed += 1;
            } else {
                report.path_findings.push(PathFinding {
                    path: rel.clone(),
                    pattern: pattern.to_string(),
                    fingerprint: fp,
                });
            }
        }

        for finding in scan_file(&root.join(rel_path)) {
            let kinds = finding.kinds.join(", ");
            let fp = fingerprint(&rel, finding.line, &kinds);
            if allowlist.contains(&fp) {
                report.suppressed += 1;
            } else {
                report.content_findings.push(ContentFinding {
                    path: rel.clone(),
                    line: finding.line,
                    kinds,
                    masked: finding.masked,
                    fingerprint: fp,
                });
            }
        }
    }

    Ok(report)
}
