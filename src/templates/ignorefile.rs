pub const IGNOREFILE_TEMPLATE: &str = r#"# leakcheck allowlist
#
# One finding fingerprint per line. Findings whose fingerprint appears
# here are suppressed from scan reports. Fingerprints are printed in the
# last column of `leakcheck scan` output.
"#;
