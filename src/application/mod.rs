//! Application layer - Use cases built on the content repository

pub mod browse;
pub mod init;
pub mod routes;
pub mod tags;

pub use browse::{BrowseRequest, BrowseResult, BrowseService};
pub use init::InitService;
pub use routes::{Route, StaticRoutes};
pub use tags::TagIndex;
