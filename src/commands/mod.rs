pub mod check;
pub mod init;
pub mod patterns;
pub mod scan;
