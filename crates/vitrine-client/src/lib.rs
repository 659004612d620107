//! # vitrine-client
//!
//! Client library for a Vitrine site.
//!
//! Mirrors what the site's frontend does on page load:
//! - fetch each content document and render it into a named page region,
//!   swallowing failures so one broken document never breaks the page
//!   ([`load_page`])
//! - drive the contact-form submission flow, including local validation and
//!   the success/failure status line ([`ContactForm`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod form;
pub mod page;
pub mod render;

pub use client::{ErrorHook, SiteClient, SubmitOutcome};
pub use error::{Error, Result};
pub use form::ContactForm;
pub use page::{PageView, load_page, regions};
