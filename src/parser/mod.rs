pub mod content;

pub use content::parse_content;
