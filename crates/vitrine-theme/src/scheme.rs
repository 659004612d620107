//! Color scheme identification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two supported color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light backgrounds, dark foregrounds
    Light,
    /// Dark backgrounds, light foregrounds
    Dark,
}

impl ColorScheme {
    /// The CSS class applied to the document root for this scheme.
    pub fn class_name(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light-theme",
            ColorScheme::Dark => "dark-theme",
        }
    }

    /// The filename suffix used by per-scheme asset variants.
    pub fn suffix(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// The other scheme.
    pub fn opposite(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
