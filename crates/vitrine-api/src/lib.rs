//! # vitrine-api
//!
//! HTTP surface for a Vitrine site:
//! - Content API endpoints that pass flat JSON documents through verbatim
//! - The contact submission endpoint backed by the append-only log
//! - A health endpoint
//! - Static serving for the site root, assets, and data directories

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use routes::AppState;
pub use server::Server;
