//! # Server Configuration
//!
//! The tracker has no configuration file and reads nothing from the
//! environment; everything the server needs is a fixed constant collected
//! here so tests can build their own `ServerConfig` pointing at a temp dir.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the HTTP server listens on
pub const DEFAULT_PORT: u16 = 8080;

/// Location of the persisted expense store, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/expenses.json";

/// Directory holding `index.html`, `style.css` and `app.js`
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
        }
    }
}
