//! Markdown processing: frontmatter extraction and text helpers.

pub mod excerpt;
pub mod frontmatter;

pub use excerpt::{first_heading, first_paragraph, plain_text};
pub use frontmatter::{split_frontmatter, Frontmatter};
