//! Link extraction and normalization.
//!
//! This module provides:
//! - Content-link extraction from mixed HTML/plain-text post bodies
//! - Attachment resolution, including the filename-derived hi-res heuristic
//! - Link normalization (entry splitting, extension canonicalization)

pub mod attachments;
pub mod content;
pub mod normalize;

pub use attachments::{resolve_attachments, AttachmentLines};
pub use content::ContentExtractor;
pub use normalize::Normalizer;
