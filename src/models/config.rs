//! Configuration model loaded from the environment.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic server configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}
