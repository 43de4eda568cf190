//! App and widget catalog
//!
//! The catalog is the static input the home screen is built from: which
//! apps and widgets exist, and where each placed item should start out.
//! It is the crate's only configuration surface and is loaded from JSON:
//!
//! ```json
//! {
//!   "pages": 2,
//!   "apps": [{ "id": "notes", "name": "Notes" }],
//!   "widgets": [{ "id": "weather-widget", "kind": "weather", "size": "medium" }],
//!   "placements": [
//!     { "reference": { "widget": "weather-widget" }, "rule": { "mode": "at", "page": 0, "row": 0, "col": 0 } },
//!     { "reference": { "app": "notes" } }
//!   ]
//! }
//! ```
//!
//! Placements without a rule take the first free slot. See [`Catalog::seed`].

mod builtin;
mod seed;
mod types;

pub use types::{
    AppEntry, Launch, Placement, PlacementRule, Reference, WidgetEntry, WidgetKind, WidgetSize,
};

use serde::{Deserialize, Serialize};

use crate::error::GridResult;

/// Static app/widget catalog plus initial placements
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Number of pages created up front
    #[serde(default = "default_page_count")]
    pub pages: usize,
    /// Known apps
    #[serde(default)]
    pub apps: Vec<AppEntry>,
    /// Known widgets
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,
    /// Items to put on the grid, in priority order
    #[serde(default)]
    pub placements: Vec<Placement>,
}

/// Most pages a home screen may have
pub const MAX_PAGES: usize = 16;

/// Apps suggested when the search box is empty
const SUGGESTION_COUNT: usize = 8;

fn default_page_count() -> usize {
    1
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            pages: default_page_count(),
            apps: Vec::new(),
            widgets: Vec::new(),
            placements: Vec::new(),
        }
    }
}

impl Catalog {
    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog to JSON
    pub fn to_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Look up an app by ID
    pub fn app(&self, id: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// Look up a widget by ID
    pub fn widget(&self, id: &str) -> Option<&WidgetEntry> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Spotlight search over every app, grid and dock alike
    ///
    /// A blank query suggests the first few apps in catalog order. Otherwise
    /// apps whose name or ID contains the query, ignoring case, are returned
    /// in catalog order.
    pub fn search(&self, query: &str) -> impl Iterator<Item = &AppEntry> + '_ {
        let suggest = query.trim().is_empty();
        let query = query.to_lowercase();
        let limit = if suggest { SUGGESTION_COUNT } else { usize::MAX };
        self.apps
            .iter()
            .filter(move |app| suggest || app.matches(&query))
            .take(limit)
    }

    /// Apps pinned to the dock, which never appear on the grid
    pub fn dock_apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter().filter(|a| a.dock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog, Catalog::default());
        assert_eq!(catalog.pages, 1);
    }

    #[test]
    fn test_from_json_doc_example() {
        let json = r#"{
          "pages": 2,
          "apps": [{ "id": "notes", "name": "Notes" }],
          "widgets": [{ "id": "weather-widget", "kind": "weather", "size": "medium" }],
          "placements": [
            { "reference": { "widget": "weather-widget" }, "rule": { "mode": "at", "page": 0, "row": 0, "col": 0 } },
            { "reference": { "app": "notes" } }
          ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.pages, 2);
        assert_eq!(catalog.app("notes").map(|a| a.name.as_str()), Some("Notes"));
        assert_eq!(
            catalog.widget("weather-widget").map(|w| w.kind),
            Some(WidgetKind::Weather)
        );
        assert_eq!(
            catalog.placements[0].rule,
            PlacementRule::At {
                page: 0,
                row: 0,
                col: 0
            }
        );
        assert_eq!(catalog.placements[1].rule, PlacementRule::FirstAvailable);
    }

    #[test]
    fn test_from_json_rejects_bad_footprint() {
        let json = r#"{ "widgets": [{ "id": "w", "kind": "clock", "size": "small",
                        "footprint": { "width": 0, "height": 1 } }] }"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_json_round_trip_builtin() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    fn search_ids<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a str> {
        catalog.search(query).map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_search_empty_suggests_first_apps() {
        let catalog = Catalog::builtin();
        let ids = search_ids(&catalog, "");
        assert_eq!(
            ids,
            vec!["facetime", "calendar", "photos", "camera", "mail", "notes", "reminders", "clock"]
        );
        assert_eq!(search_ids(&catalog, "   "), ids);
    }

    #[test]
    fn test_search_ignores_case() {
        let catalog = Catalog::builtin();
        assert_eq!(search_ids(&catalog, "yOuT"), vec!["youtube"]);
        // matches names and ids, dock apps included
        assert_eq!(search_ids(&catalog, "SAFARI"), vec!["safari", "safari-dock"]);
        assert_eq!(search_ids(&catalog, "apple"), vec!["appletv"]);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.search("zzz").count(), 0);
        assert_eq!(Catalog::default().search("").count(), 0);
    }

    #[test]
    fn test_dock_apps() {
        let catalog = Catalog::builtin();
        let dock: Vec<_> = catalog.dock_apps().map(|a| a.id.as_str()).collect();
        assert_eq!(dock, vec!["phone", "safari-dock", "messages", "music"]);
    }
}
