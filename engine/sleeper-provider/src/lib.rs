//! Sleeper data provider
//!
//! This crate fetches league data from the Sleeper API (users, leagues,
//! rosters, the player catalog and trending activity), keeps the large player
//! catalog in an on-disk cache, and falls back to a small demonstration
//! dataset when the API cannot be reached.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mock;
pub mod provider;

pub use cache::PlayerCatalogCache;
pub use client::SleeperClient;
pub use config::{HelperConfig, SessionSettings};
pub use error::ProviderError;
pub use mock::MockProvider;
pub use provider::{
    load_league_snapshot, load_user_leagues, select_provider, DataProvider, SelectedProvider,
};

// Result type alias
pub type Result<T> = std::result::Result<T, ProviderError>;
