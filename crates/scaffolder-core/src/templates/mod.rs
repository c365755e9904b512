//! Template fetching and copying
//!
//! This module provides:
//! - degit-style template references (`owner/repo/subdir#ref`)
//! - Template fetching from GitHub archives or local directories
//! - Writing template files into the project tree

pub mod copier;
pub mod fetcher;
pub mod reference;

pub use copier::{write_template, TemplateFile};
pub use fetcher::{extract_archive, TemplateFetcher, TemplateSource};
pub use reference::{TemplateError, TemplateRef};
