pub mod config;
pub mod imaging;
pub mod mimetype;
pub mod observability;
pub mod scheme;
pub mod store;
