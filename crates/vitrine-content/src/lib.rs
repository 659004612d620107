//! # vitrine-content
//!
//! Read-only access to a site's flat JSON content documents.
//!
//! Content documents (`about.json`, `team.json`, ...) are created and edited
//! by hand outside the running system. [`ContentStore`] reads a document per
//! request and passes it through verbatim; it never writes, caches, or
//! validates document contents.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod store;

pub use error::{Error, Result};
pub use store::ContentStore;
