//! Document numbering module - sequences derived from stored documents.
//!
//! This module provides:
//! - Numbering schemes built from tenant settings
//! - Trailing-digit sequence extraction with zero padding
//! - Peek and reserve operations over a document index

pub mod error;
pub mod scheme;
pub mod service;

#[cfg(test)]
mod scheme_props;

pub use error::NumberingError;
pub use scheme::{DocumentKind, NumberingScheme};
pub use service::{DocumentIndex, DocumentNumberer, MemoryDocumentIndex};
