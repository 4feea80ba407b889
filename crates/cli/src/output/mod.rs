mod json;
mod report;
mod text;

pub use json::render_json;
pub use report::{diagnose, ChainVerdict, DomainReport};
pub use text::render_text;
