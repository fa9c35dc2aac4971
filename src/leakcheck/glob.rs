use globset::{Glob, GlobBuilder};

/// Normalize a candidate path for matching.
///
/// - Trims surrounding whitespace.
/// - Converts `\` to `/` so paths work consistently across platforms.
/// - Drops empty and `.` segments.
/// - Paths containing `..` are not resolved and yield None.
pub fn normalize_path_for_matching(path: &str) -> Option<String> {
    let trimmed = path.trim().replace('\\', "/");
    if trimmed.is_empty() {
        return None;
    }
    let absolute = trimmed.starts_with('/');

    let mut segments = Vec::new();
    for segment in trimmed.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            return None;
        }
        segments.push(segment);
    }
    if segments.is_empty() {
        return None;
    }

    let joined = segments.join("/");
    Some(if absolute {
        format!("/{}", joined)
    } else {
        joined
    })
}

/// Anchor a pattern for matching against relative candidate forms.
///
/// - A leading `/` roots the pattern at the scan root.
/// - `~/` patterns are matched against home-relative candidate forms as-is.
/// - Patterns containing `/` are already anchored.
/// - Bare names match their segment at any depth.
pub fn anchor_pattern(pattern: &str) -> String {
    if let Some(rooted) = pattern.strip_prefix('/') {
        return rooted.to_string();
    }
    if pattern.starts_with("~/") {
        return pattern.to_string();
    }
    if pattern.trim_end_matches('/').contains('/') {
        return pattern.to_string();
    }
    format!("**/{}", pattern)
}

/// Build a glob where `*` stays within one path segment and `**` crosses
/// segment boundaries.
pub fn build_glob(pattern: &str) -> Result<Glob, globset::Error> {
    let mut builder = GlobBuilder::new(pattern);
    builder.literal_separator(true);
    builder.build()
}

/// All forms of a path worth matching patterns against: the normalized
/// relative form, plus `~/`-prefixed forms when the path sits under a home
/// directory. Rewriting is string-only; no filesystem or user lookup.
pub fn candidate_forms(path: &str, home: Option<&str>) -> Vec<String> {
    let Some(normalized) = normalize_path_for_matching(path) else {
        return Vec::new();
    };

    let mut forms = Vec::new();
    let relative = normalized.trim_start_matches('/');
    if !relative.is_empty() {
        forms.push(relative.to_string());
    }
    if normalized.starts_with('/') {
        for form in home_forms(&normalized, home) {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
    }
    forms
}

/// Home-relative rewrites of an absolute path: the process home when known,
/// plus the conventional `/home/<user>`, `/Users/<user>` and `/root` roots.
fn home_forms(normalized: &str, home: Option<&str>) -> Vec<String> {
    let mut forms = Vec::new();

    if let Some(home) = home {
        let home = home.trim().trim_end_matches('/');
        if home.len() > 1 {
            if let Some(rest) = normalized
                .strip_prefix(home)
                .and_then(|rest| rest.strip_prefix('/'))
            {
                if !rest.is_empty() {
                    forms.push(format!("~/{}", rest));
                }
            }
        }
    }

    for prefix in ["/home/", "/Users/"] {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            if let Some((user, tail)) = rest.split_once('/') {
                if !user.is_empty() && !tail.is_empty() {
                    forms.push(format!("~/{}", tail));
                }
            }
        }
    }
    if let Some(rest) = normalized.strip_prefix("/root/") {
        if !rest.is_empty() {
            forms.push(format!("~/{}", rest));
        }
    }

    forms
}
