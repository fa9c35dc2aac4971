use sha2::{Digest, Sha256};

/// Compute SHA256 hash of content and return as lowercase hex string
pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Compute SHA256 hash and return the first 8 characters (short hash)
pub fn sha256_short(content: &str) -> String {
    sha256_hex(content)[..8].to_string()
}

/// Stable identifier for one finding: short hash of "path:line:kind".
/// Path findings use line 0.
pub fn fingerprint(path: &str, line: usize, kind: &str) -> String {
    sha256_short(&format!("{}:{}:{}", path, line, kind))
}
