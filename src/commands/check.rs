use std::io;
use std::process;

use crate::leakcheck::sensitive::PatternSet;

/// Exit codes
const EXIT_SENSITIVE: i32 = 1;

/// Classification of one candidate path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Sensitive { pattern: String },
    Clean,
}

pub fn run(paths: Vec<String>, extra_patterns: Vec<String>) -> io::Result<()> {
    let patterns = PatternSet::build(&extra_patterns)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let verdicts = classify(&paths, &patterns);
    let mut sensitive = 0;
    for (path, verdict) in paths.iter().zip(&verdicts) {
        match verdict {
            Verdict::Sensitive { pattern } => {
                println!("✗ {} sensitive ({})", path, pattern);
                sensitive += 1;
            }
            Verdict::Clean => {
                println!("✓ {}", path);
            }
        }
    }

    println!();
    println!("{} of {} paths sensitive", sensitive, paths.len());

    if sensitive > 0 {
        process::exit(EXIT_SENSITIVE);
    }
    Ok(())
}

/// Pure classification, one verdict per path in input order. No filesystem
/// access; the paths need not exist.
pub fn classify(paths: &[String], patterns: &PatternSet) -> Vec<Verdict> {
    paths
        .iter()
        .map(|path| match patterns.first_match(path) {
            Some(pattern) => Verdict::Sensitive {
                pattern: pattern.to_string(),
            },
            None => Verdict::Clean,
        })
        .collect()
}
