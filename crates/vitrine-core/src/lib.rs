//! # vitrine-core
//!
//! Core domain types for the Vitrine site platform.
//!
//! This crate provides:
//! - Content document addressing ([`ContentKey`])
//! - Contact submission types and validation
//! - The shared error type for domain-level failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::contact::{ContactMessage, ContactRequest};
pub use types::content::ContentKey;
