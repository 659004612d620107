//! Vitrine server binary.
//!
//! Serves a portfolio site: static assets, the content API, the contact
//! endpoint, and health. Configuration comes from an optional TOML file,
//! overridden by flags and the `PORT` environment variable.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitrine_api::{Server, ServerConfig};

/// Vitrine - portfolio site content server
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Serve a portfolio site's assets, content API, and contact log", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Directory served at `/`
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Directory served at `/assets`
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Directory holding the JSON content documents
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Contact log file path
    #[arg(long)]
    contact_log: Option<PathBuf>,
}

impl Args {
    /// Resolves the effective configuration: file first, then flag overrides.
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(site_root) = self.site_root {
            config.site_root = site_root;
        }
        if let Some(assets_dir) = self.assets_dir {
            config.assets_dir = assets_dir;
        }
        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(contact_log) = self.contact_log {
            config.contact_log = contact_log;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = args.into_config()?;
    tracing::info!(port = config.port, "starting vitrine");
    Server::new(config).run().await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "vitrine",
            "--port",
            "8080",
            "--data-dir",
            "content",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("content"));
        assert_eq!(config.site_root, PathBuf::from("site/public"));
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::parse_from(["vitrine"]);
        let config = args.into_config().unwrap();
        assert_eq!(config.port, vitrine_api::config::DEFAULT_PORT);
    }
}
