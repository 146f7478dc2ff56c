//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Shared secret used to verify session tokens.
    pub secret: String,
}
