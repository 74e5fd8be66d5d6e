//! Filesystem module.
//!
//! Provides:
//! - Output stream naming
//! - Append-only link sinks

pub mod naming;
pub mod sink;

pub use naming::{attachments_stream, links_stream, output_prefix, sanitize_component};
pub use sink::{FileSink, LinkSink, MemorySink};
