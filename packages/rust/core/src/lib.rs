//! Job posting structured data.
//!
//! Maps a populated [`JobPosting`](jobposting_shared::JobPosting) to a
//! schema.org `JobPosting` JSON-LD document, optionally wrapped in a
//! `<script type="application/ld+json">` element for embedding in a page.

pub mod builder;
pub mod document;
pub mod validate;

pub use builder::{BuildOptions, StructuredDataBuilder, build};
pub use document::JobPostingDocument;
pub use validate::{problems, require_fields, validate};
