//! Server configuration.

use std::path::PathBuf;

/// Runtime configuration for the catalog server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON catalog file loaded at startup
    pub data_path: PathBuf,
    /// Server bind address
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `REEL_SHELF_DATA`: catalog file path (default `movies.json`)
    /// - `REEL_SHELF_ADDR`: bind address (default `127.0.0.1:3000`)
    pub fn from_env() -> Self {
        let data_path = std::env::var("REEL_SHELF_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("movies.json"));
        let bind_addr =
            std::env::var("REEL_SHELF_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        Self {
            data_path,
            bind_addr,
        }
    }
}
