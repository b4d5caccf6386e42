//! Infrastructure layer - File system access and configuration

pub mod config;
pub mod repository;
pub mod site;

pub use config::{DirectoryConfig, Features};
pub use repository::{ContentRepository, FileSystemRepository};
pub use site::Site;
