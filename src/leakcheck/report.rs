use chrono::Utc;

/// A walked file whose relative path matched the sensitive pattern set.
#[derive(Debug, Clone)]
pub struct PathFinding {
    pub path: String,
    /// The first pattern (in set order) that fired
    pub pattern: String,
    pub fingerprint: String,
}

/// A line in a scanned file that triggered at least one secret rule.
#[derive(Debug, Clone)]
pub struct ContentFinding {
    pub path: String,
    /// 1-based line number
    pub line: usize,
    /// Comma-joined names of the rules that fired
    pub kinds: String,
    /// The trimmed line with every detected value masked
    pub masked: String,
    pub fingerprint: String,
}

/// Everything one scan found, net of allowlisted fingerprints.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub path_findings: Vec<PathFinding>,
    pub content_findings: Vec<ContentFinding>,
    pub scanned_files: usize,
    pub suppressed: usize,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.path_findings.is_empty() && self.content_findings.is_empty()
    }

    pub fn total_findings(&self) -> usize {
        self.path_findings.len() + self.content_findings.len()
    }

    /// Render the findings as pipe tables with a verdict footer. A clean
    /// report renders nothing; the caller owns the "no secrets" message.
    pub fn render(&self) -> String {
        if self.is_clean() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str("[!] Secrets found!\n");

        if !self.path_findings.is_empty() {
            out.push('\n');
            out.push_str("Sensitive file paths\n");
            out.push_str("| File | Pattern | Fingerprint |\n");
            out.push_str("|------|---------|-------------|\n");
            for finding in &self.path_findings {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    finding.path, finding.pattern, finding.fingerprint
                ));
            }
        }

        if !self.content_findings.is_empty() {
            out.push('\n');
            out.push_str("Secrets in file contents\n");
            out.push_str("| File | Line | Kind | Masked | Fingerprint |\n");
            out.push_str("|------|------|------|--------|-------------|\n");
            for finding in &self.content_findings {
                out.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    finding.path, finding.line, finding.kinds, finding.masked, finding.fingerprint
                ));
            }
        }

        out.push('\n');
        out.push_str(&format!(
            "Scanned {} files at {}\n",
            self.scanned_files,
            Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
        ));
        out.push_str(&format!(
            "Findings: {} path, {} content ({} suppressed)\n",
            self.path_findings.len(),
            self.content_findings.len(),
            self.suppressed
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScanReport {
        ScanReport {
            path_findings: vec![PathFinding {
                path: ".env".to_string(),
                pattern: ".env".to_string(),
                fingerprint: "a1b2c3d4".to_string(),
            }],
            content_findings: vec![ContentFinding {
                path: "config.py".to_string(),
                line: 3,
                kinds: "API Key".to_string(),
                masked: "api_key = ***REDACTED***".to_string(),
                fingerprint: "e5f6a7b8".to_string(),
            }],
            scanned_files: 12,
            suppressed: 1,
        }
    }

    #[test]
    fn test_clean_report_renders_nothing() {
        let report = ScanReport::default();
        assert!(report.is_clean());
        assert_eq!(report.render(), "");
    }

    #[test]
    fn test_render_has_banner_and_tables() {
        let rendered = sample_report().render();
        assert!(rendered.starts_with("[!] Secrets found!\n"));
        assert!(rendered.contains("Sensitive file paths\n"));
        assert!(rendered.contains("| .env | .env | a1b2c3d4 |\n"));
        assert!(rendered.contains("Secrets in file contents\n"));
        assert!(rendered.contains("| config.py | 3 | API Key | api_key = ***REDACTED*** | e5f6a7b8 |\n"));
    }

    #[test]
    fn test_render_footer_totals() {
        let rendered = sample_report().render();
        assert!(rendered.contains("Scanned 12 files at "));
        assert!(rendered.contains("Findings: 1 path, 1 content (1 suppressed)\n"));
    }

    #[test]
    fn test_render_omits_empty_sections() {
        let mut report = sample_report();
        report.content_findings.clear();
        let rendered = report.render();
        assert!(rendered.contains("Sensitive file paths"));
        assert!(!rendered.contains("Secrets in file contents"));
    }

    #[test]
    fn test_total_findings() {
        assert_eq!(sample_report().total_findings(), 2);
    }
}
