//! Party API module.
//!
//! This module provides:
//! - HTTP client for the party listing API and landing pages
//! - Listing response types

pub mod client;
pub mod types;

pub use client::{PageSource, PartyApi, PAGE_SIZE};
pub use types::*;
