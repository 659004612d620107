//! Content document addressing.
//!
//! Content documents are flat JSON files edited outside the running system.
//! The application never enforces an internal schema on them; a document is
//! read per request and passed through verbatim. [`ContentKey`] is the only
//! coupling: it names the documents a site is expected to provide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifies one of the site's content documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKey {
    /// Company/about copy (`about.json`)
    About,
    /// Software tool listing (`software.json`)
    Software,
    /// Service descriptions (`services.json`)
    Services,
    /// Project portfolio (`projects.json`)
    Projects,
    /// Team roster (`team.json`)
    Team,
}

impl ContentKey {
    /// All known content keys, in page order.
    pub const ALL: [ContentKey; 5] = [
        ContentKey::About,
        ContentKey::Software,
        ContentKey::Services,
        ContentKey::Projects,
        ContentKey::Team,
    ];

    /// The key's canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKey::About => "about",
            ContentKey::Software => "software",
            ContentKey::Services => "services",
            ContentKey::Projects => "projects",
            ContentKey::Team => "team",
        }
    }

    /// The backing file name under the site's data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ContentKey::About => "about.json",
            ContentKey::Software => "software.json",
            ContentKey::Services => "services.json",
            ContentKey::Projects => "projects.json",
            ContentKey::Team => "team.json",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownKey {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_match_file_names() {
        for key in ContentKey::ALL {
            assert_eq!(key.file_name(), format!("{key}.json"));
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for key in ContentKey::ALL {
            assert_eq!(key.as_str().parse::<ContentKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "blog".parse::<ContentKey>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown content key: blog");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ContentKey::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        let key: ContentKey = serde_json::from_str("\"team\"").unwrap();
        assert_eq!(key, ContentKey::Team);
    }
}
