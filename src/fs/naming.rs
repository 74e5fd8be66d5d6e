//! Output stream naming.

use crate::error::{Error, Result};
use crate::identity::Identity;

/// Build the per-target output prefix, `<name>_<account>_<service>`.
///
/// `name` is the title-derived creator name; it is sanitized so the prefix is
/// always usable as a filename.
pub fn output_prefix(name: &str, identity: &Identity) -> Result<String> {
    let name = sanitize_component(name)?;
    Ok(format!("{}_{}_{}", name, identity.account, identity.service))
}

/// Name of the attachments output stream for a prefix.
pub fn attachments_stream(prefix: &str) -> String {
    format!("{}_attachments.txt", prefix)
}

/// Name of the discovered-links output stream for a prefix.
pub fn links_stream(prefix: &str) -> String {
    format!("{}_links.txt", prefix)
}

/// Sanitize a filename component by replacing problematic characters.
///
/// Title-derived names come from third-party HTML and may contain anything.
pub fn sanitize_component(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::Config(format!(
            "Path traversal detected in output name: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::Config(format!(
            "Null bytes not allowed in output name: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::Config(
            "Output name cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
