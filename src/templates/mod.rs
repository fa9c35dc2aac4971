pub mod hook;
pub mod ignorefile;

pub use hook::HOOK_TEMPLATE;
pub use ignorefile::IGNOREFILE_TEMPLATE;
