//! Helper Proxy - local HTTP front for the Sleeper API
//!
//! Browser clients cannot always call Sleeper directly, so this service
//! forwards the handful of endpoints the league helper needs and keeps the
//! multi-megabyte player catalog in a file cache.

pub mod config;
pub mod routes;

pub use config::ProxyConfig;
pub use routes::create_routes;
