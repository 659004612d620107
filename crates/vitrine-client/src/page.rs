//! Page assembly: concurrent content loads into named regions.

use std::collections::BTreeMap;

use vitrine_core::ContentKey;

use crate::client::SiteClient;
use crate::render;

/// Region identifiers targeted by the known content documents.
pub mod regions {
    /// About summary text
    pub const ABOUT_TEXT: &str = "about-text";
    /// Full about copy
    pub const ABOUT_FULL: &str = "about-full";
    /// Software tool listing
    pub const SOFTWARE_LIST: &str = "software-list";
    /// Service descriptions
    pub const SERVICES_FULL: &str = "services-full";
    /// Project portfolio
    pub const PROJECTS_LIST: &str = "projects-list";
    /// Team roster
    pub const TEAM_LIST: &str = "team-list";
}

/// Rendered page regions, keyed by region id.
///
/// A region is present only if its content document loaded and rendered.
/// Failed loads leave the region absent; the caller shows whatever was
/// already there (usually nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    regions: BTreeMap<&'static str, String>,
}

impl PageView {
    /// The rendered fragment for a region, if its document loaded.
    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Whether a region rendered.
    pub fn is_rendered(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    /// Iterates over the rendered regions.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.regions.iter().map(|(id, html)| (*id, html.as_str()))
    }

    fn insert(&mut self, id: &'static str, html: String) {
        self.regions.insert(id, html);
    }
}

/// Loads every known content document and renders it into a page view.
///
/// The five fetches run concurrently and independently; a failure for one
/// key never affects another region.
pub async fn load_page(client: &SiteClient) -> PageView {
    let (about, software, services, projects, team) = futures::join!(
        client.fetch_content(ContentKey::About),
        client.fetch_content(ContentKey::Software),
        client.fetch_content(ContentKey::Services),
        client.fetch_content(ContentKey::Projects),
        client.fetch_content(ContentKey::Team),
    );

    let mut view = PageView::default();
    if let Some(document) = about {
        view.insert(regions::ABOUT_TEXT, render::about_summary(&document));
        view.insert(regions::ABOUT_FULL, render::about_full(&document));
    }
    if let Some(document) = software {
        view.insert(regions::SOFTWARE_LIST, render::software_list(&document));
    }
    if let Some(document) = services {
        view.insert(regions::SERVICES_FULL, render::services_list(&document));
    }
    if let Some(document) = projects {
        view.insert(regions::PROJECTS_LIST, render::projects_list(&document));
    }
    if let Some(document) = team {
        view.insert(regions::TEAM_LIST, render::team_list(&document));
    }
    view
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view_has_no_regions() {
        let view = PageView::default();
        assert!(!view.is_rendered(regions::TEAM_LIST));
        assert_eq!(view.region(regions::ABOUT_TEXT), None);
        assert_eq!(view.iter().count(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_site_renders_nothing() {
        let client = SiteClient::new("http://127.0.0.1:1");
        let view = load_page(&client).await;
        assert_eq!(view.iter().count(), 0);
    }
}
