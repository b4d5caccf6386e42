//! annuaire - content repository for MDX directory sites
//!
//! Reads a `category/region/city/listing.mdx` content tree with YAML
//! front-matter and answers taxonomy, tag and search queries over it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AnnuaireError;
