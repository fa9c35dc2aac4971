pub mod allowlist;
pub mod gitignore;
pub mod glob;
pub mod report;
pub mod secrets;
pub mod sensitive;
pub mod walk;
