//! # vitrine-contact
//!
//! Append-only log of contact-form submissions.
//!
//! Submissions are persisted as a single pretty-printed JSON array file,
//! created on first write. The log is write-only from the application's
//! perspective: entries are never read back except to extend the array.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod log;

pub use error::{Error, Result};
pub use log::ContactLog;
