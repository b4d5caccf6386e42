//! Domain layer - Documents, front-matter and query models

pub mod content_path;
pub mod document;
pub mod filter;
pub mod front_matter;
pub mod metadata;
pub mod pagination;
pub mod search;

pub use content_path::ContentPath;
pub use document::ContentDocument;
pub use filter::ListingFilter;
pub use metadata::{MetaValue, Metadata};
pub use pagination::{Page, Paginator};
