//! Logo source resolution.
//!
//! A logo element has per-scheme variants (`logo-dark.png`, `logo-light.png`)
//! that may or may not exist on a given deployment. Instead of assigning a
//! source and hoping, candidates are probed in preference order and the first
//! one that actually loads wins. If nothing loads, the existing source is
//! kept; a broken image is never shown.

use async_trait::async_trait;

use crate::scheme::ColorScheme;

/// Explicit default logo sources for each scheme.
#[derive(Debug, Clone)]
pub struct LogoConfig {
    /// Default source for the dark scheme
    pub dark: String,
    /// Default source for the light scheme
    pub light: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            dark: "/assets/images/logo-dark.png".to_string(),
            light: "/assets/images/logo-light.png".to_string(),
        }
    }
}

/// The ordered candidate sources for one logo element.
///
/// Built from the element's current source plus the configured defaults;
/// filename-derived guesses cover deployments that renamed the defaults but
/// kept the `-dark`/`-light` suffix convention.
#[derive(Debug, Clone)]
pub struct LogoCandidates {
    dark: String,
    light: String,
    derived_dark: String,
    derived_light: String,
    current: String,
}

impl LogoCandidates {
    /// Builds candidates from the element's current source and the defaults.
    pub fn new(current: impl Into<String>, config: &LogoConfig) -> Self {
        let current = current.into();
        let (derived_dark, derived_light) = derive_variants(&current);
        Self {
            dark: config.dark.clone(),
            light: config.light.clone(),
            derived_dark,
            derived_light,
            current,
        }
    }

    /// The preferred try order for the given scheme.
    ///
    /// Explicit default for the scheme first, then the derived guess, then
    /// the opposite scheme's pair, then the current source as a last resort.
    pub fn order(&self, scheme: ColorScheme) -> [&str; 5] {
        match scheme {
            ColorScheme::Light => [
                &self.light,
                &self.derived_light,
                &self.dark,
                &self.derived_dark,
                &self.current,
            ],
            ColorScheme::Dark => [
                &self.dark,
                &self.derived_dark,
                &self.light,
                &self.derived_light,
                &self.current,
            ],
        }
    }

    /// Probes candidates in order and returns the first that loads.
    ///
    /// `None` means no candidate loaded; the caller keeps the source it
    /// already has.
    pub async fn resolve(
        &self,
        scheme: ColorScheme,
        prober: &dyn LogoProber,
    ) -> Option<String> {
        for candidate in self.order(scheme) {
            if candidate.is_empty() {
                continue;
            }
            if prober.probe(candidate).await {
                tracing::debug!(scheme = %scheme, src = candidate, "logo source resolved");
                return Some(candidate.to_string());
            }
        }
        tracing::debug!(scheme = %scheme, "no logo candidate loaded, keeping current source");
        None
    }
}

/// Derives `-dark`/`-light` variant file names from a source path.
///
/// The directory and extension are preserved. A source that already carries
/// a scheme word keeps it for that scheme's variant; otherwise the first
/// `-light`/`-dark` suffix is stripped before appending the wanted one.
fn derive_variants(current: &str) -> (String, String) {
    let (dir, file_name) = match current.rfind('/') {
        Some(index) => current.split_at(index + 1),
        None => ("", current),
    };

    let (base, ext) = match file_name.split_once('.') {
        Some((base, ext)) if !ext.is_empty() => (base, ext),
        _ => (file_name, "png"),
    };
    let base = if base.is_empty() { "logo" } else { base };

    let variant = |scheme: ColorScheme| {
        let name = if base.contains(scheme.suffix()) {
            base.to_string()
        } else {
            format!("{}-{}", strip_first_suffix(base), scheme.suffix())
        };
        format!("{dir}{name}.{ext}")
    };

    (variant(ColorScheme::Dark), variant(ColorScheme::Light))
}

/// Removes the leftmost `-light` or `-dark` from a file stem, if any.
fn strip_first_suffix(base: &str) -> String {
    let light = base.find("-light");
    let dark = base.find("-dark");
    let (index, len) = match (light, dark) {
        (Some(l), Some(d)) if l <= d => (l, "-light".len()),
        (Some(l), None) => (l, "-light".len()),
        (_, Some(d)) => (d, "-dark".len()),
        (None, None) => return base.to_string(),
    };
    let mut stripped = String::with_capacity(base.len());
    stripped.push_str(&base[..index]);
    stripped.push_str(&base[index + len..]);
    stripped
}

/// Checks whether a candidate logo source actually loads.
#[async_trait]
pub trait LogoProber: Send + Sync {
    /// Returns `true` if the source is fetchable.
    async fn probe(&self, src: &str) -> bool;
}

/// Probes logo sources over HTTP against a site base URL.
///
/// Any transport error or non-success status counts as "does not load".
pub struct HttpLogoProber {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLogoProber {
    /// Creates a prober for the given site base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, src: &str) -> String {
        if src.starts_with("http://") || src.starts_with("https://") {
            src.to_string()
        } else {
            format!("{}/{}", self.base_url, src.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl LogoProber for HttpLogoProber {
    async fn probe(&self, src: &str) -> bool {
        match self.http.get(self.url(src)).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::debug!(src, %error, "logo probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Prober backed by a fixed set of available sources.
    struct SetProber(HashSet<&'static str>);

    #[async_trait]
    impl LogoProber for SetProber {
        async fn probe(&self, src: &str) -> bool {
            self.0.contains(src)
        }
    }

    #[test]
    fn test_derive_preserves_directory_and_extension() {
        let (dark, light) = derive_variants("/assets/images/logo.svg");
        assert_eq!(dark, "/assets/images/logo-dark.svg");
        assert_eq!(light, "/assets/images/logo-light.svg");
    }

    #[test]
    fn test_derive_swaps_existing_suffix() {
        let (dark, light) = derive_variants("img/logo-light.png");
        assert_eq!(dark, "img/logo-dark.png");
        // Already carries the scheme word, kept as-is.
        assert_eq!(light, "img/logo-light.png");
    }

    #[test]
    fn test_derive_bare_and_empty_names_fall_back() {
        let (dark, _) = derive_variants("logo");
        assert_eq!(dark, "logo-dark.png");

        let (dark, light) = derive_variants("img/.png");
        assert_eq!(dark, "img/logo-dark.png");
        assert_eq!(light, "img/logo-light.png");
    }

    #[test]
    fn test_derive_keeps_multi_dot_extension() {
        let (dark, _) = derive_variants("logo.fallback.png");
        assert_eq!(dark, "logo-dark.fallback.png");
    }

    #[test]
    fn test_order_prefers_scheme_then_derived_then_opposite() {
        let config = LogoConfig::default();
        let candidates = LogoCandidates::new("/img/mark.png", &config);

        assert_eq!(
            candidates.order(ColorScheme::Dark),
            [
                "/assets/images/logo-dark.png",
                "/img/mark-dark.png",
                "/assets/images/logo-light.png",
                "/img/mark-light.png",
                "/img/mark.png",
            ]
        );
        assert_eq!(candidates.order(ColorScheme::Light)[0], "/assets/images/logo-light.png");
    }

    #[tokio::test]
    async fn test_resolve_picks_first_available() {
        let config = LogoConfig::default();
        let candidates = LogoCandidates::new("/img/mark.png", &config);
        let prober = SetProber(HashSet::from(["/img/mark-dark.png", "/img/mark.png"]));

        let resolved = candidates.resolve(ColorScheme::Dark, &prober).await;
        assert_eq!(resolved.as_deref(), Some("/img/mark-dark.png"));
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_current() {
        let config = LogoConfig::default();
        let candidates = LogoCandidates::new("/img/mark.png", &config);
        let prober = SetProber(HashSet::from(["/img/mark.png"]));

        let resolved = candidates.resolve(ColorScheme::Light, &prober).await;
        assert_eq!(resolved.as_deref(), Some("/img/mark.png"));
    }

    #[tokio::test]
    async fn test_resolve_nothing_available_keeps_existing() {
        let config = LogoConfig::default();
        let candidates = LogoCandidates::new("/img/mark.png", &config);
        let prober = SetProber(HashSet::new());

        assert_eq!(candidates.resolve(ColorScheme::Dark, &prober).await, None);
    }

    #[test]
    fn test_http_prober_url_joining() {
        let prober = HttpLogoProber::new("http://127.0.0.1:3000/");
        assert_eq!(
            prober.url("/assets/images/logo-dark.png"),
            "http://127.0.0.1:3000/assets/images/logo-dark.png"
        );
        assert_eq!(
            prober.url("https://cdn.example.com/logo.png"),
            "https://cdn.example.com/logo.png"
        );
    }
}
