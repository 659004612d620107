//! # vitrine-theme
//!
//! Presentation state for Vitrine sites, modeled without a browser.
//!
//! Two concerns live here:
//! - [`ThemeEngine`]: derives the applied color scheme from a system
//!   preference plus an optional explicit override, and broadcasts changes
//!   to subscribers holding an explicit cancel handle.
//! - [`LogoCandidates`]: builds the ordered chain of candidate logo sources
//!   for a scheme and resolves the first one that actually loads, so a
//!   broken image is never shown.
//!
//! Nothing in this crate is load-bearing for content or correctness; every
//! operation degrades to "keep what is currently shown".

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod logo;
pub mod scheme;

pub use engine::{ThemeEngine, ThemeSubscription};
pub use logo::{HttpLogoProber, LogoCandidates, LogoConfig, LogoProber};
pub use scheme::ColorScheme;
