//! Search-engine and social metadata.
//!
//! - `metadata` - [`PageMetadata`] assembled from `[site.info]` and the base URL
//! - `head` - `<head>` tags rendered from [`PageMetadata`]

pub mod head;
pub mod metadata;

pub use metadata::PageMetadata;
