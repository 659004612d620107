//! Server configuration.
//!
//! Configuration comes from an optional TOML file with per-field defaults;
//! the binary layers CLI flags and the `PORT` environment variable on top.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default listening port when neither config nor environment say otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Vitrine server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// Directory served at `/`
    pub site_root: PathBuf,
    /// Directory served at `/assets`
    pub assets_dir: PathBuf,
    /// Directory holding the flat JSON content documents, served at `/data`
    pub data_dir: PathBuf,
    /// Path of the contact submission log file
    pub contact_log: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            site_root: PathBuf::from("site/public"),
            assets_dir: PathBuf::from("site/assets"),
            data_dir: PathBuf::from("site/data"),
            contact_log: PathBuf::from("uploads/messages.json"),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields take their defaults; an unreadable or unparseable file
    /// is an error (misconfiguration should not silently become defaults).
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|error| {
            Error::config(format!("cannot read {}: {error}", path.display()))
        })?;
        toml::from_str(&text)
            .map_err(|error| Error::config(format!("cannot parse {}: {error}", path.display())))
    }

    /// The socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}
