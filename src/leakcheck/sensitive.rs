use std::env;

use globset::GlobMatcher;

use crate::leakcheck::glob::{anchor_pattern, build_glob, candidate_forms};

/// Default sensitive-path patterns, in reporting order.
///
/// `*` stays within one path segment, `**` crosses segment boundaries, and
/// `~/` means "under a home directory". Bare names match at any depth.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "~/.git-credentials",
    ".env",
    ".env.local",
    ".env.production",
    ".env.*",
    "**/credentials/**",
    "**/*token*",
    "**/*secret*",
    "*.pem",
    "*.key",
    "~/.ssh/id_*",
    "~/.netrc",
    "~/.aws/credentials",
    "**/*password*",
];

/// One compiled sensitive-path rule. The original pattern text is kept for
/// reporting which rule fired.
#[derive(Debug, Clone)]
pub struct SensitivePattern {
    text: String,
    matcher: GlobMatcher,
}

impl SensitivePattern {
    fn compile(text: &str) -> Result<Self, PatternError> {
        let anchored = anchor_pattern(text);
        let glob = build_glob(&anchored).map_err(|e| PatternError::InvalidPattern {
            pattern: text.to_string(),
            message: e.to_string(),
        })?;
        Ok(SensitivePattern {
            text: text.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_match(&self, form: &str) -> bool {
        self.matcher.is_match(form)
    }
}

/// Error types for pattern-set construction failures
#[derive(Debug)]
pub enum PatternError {
    /// A user-supplied glob did not compile
    InvalidPattern { pattern: String, message: String },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern {:?}: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// The immutable, ordered set of sensitive-path patterns.
///
/// Built once per process; extra user patterns are appended after the
/// defaults and participate in first-match reporting. The process home
/// directory is captured at construction so matching stays a pure function
/// of its inputs.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<SensitivePattern>,
    home: Option<String>,
}

impl PatternSet {
    /// Compile the default patterns plus any user-supplied extras, in order.
    pub fn build(extra: &[String]) -> Result<Self, PatternError> {
        let mut patterns = Vec::with_capacity(DEFAULT_PATTERNS.len() + extra.len());
        for text in DEFAULT_PATTERNS {
            patterns.push(SensitivePattern::compile(text)?);
        }
        for text in extra {
            patterns.push(SensitivePattern::compile(text)?);
        }
        Ok(PatternSet {
            patterns,
            home: env::var("HOME").ok(),
        })
    }

    /// The first pattern (in set order) matching any candidate form of
    /// `path`, or None. Purely syntactic; no filesystem access.
    pub fn first_match(&self, path: &str) -> Option<&str> {
        let forms = candidate_forms(path, self.home.as_deref());
        for pattern in &self.patterns {
            if forms.iter().any(|form| pattern.is_match(form)) {
                return Some(pattern.text());
            }
        }
        None
    }

    /// Pattern texts in set order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.text())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
