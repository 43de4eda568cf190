//! Building the initial layout from a catalog

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::{Catalog, Placement, PlacementRule, Reference, MAX_PAGES};
use crate::error::{GridError, GridResult};
use crate::grid::{fits_at, GridPosition};
use crate::item::{GridItem, ItemKind};
use crate::layout::{PageLayout, RejectReason};

impl Catalog {
    /// Build the initial layout
    ///
    /// Explicit placements are applied first, in catalog order. The rest
    /// then take the first free slot scanning pages in order; when every
    /// page is full a new page is appended, up to [`MAX_PAGES`]. Any
    /// placement that cannot be honoured is a catalog bug and aborts seeding.
    pub fn seed(&self) -> GridResult<PageLayout> {
        if self.pages > MAX_PAGES {
            warn!(pages = self.pages, "catalog page count over limit");
            return Err(GridError::TooManyPages {
                requested: self.pages,
                max: MAX_PAGES,
            });
        }
        let mut layout = PageLayout::with_page_count(self.pages.max(1));
        let mut seen = BTreeSet::new();

        let (explicit, deferred): (Vec<&Placement>, Vec<&Placement>) = self
            .placements
            .iter()
            .partition(|p| matches!(p.rule, PlacementRule::At { .. }));

        for placement in explicit {
            let item = self.resolve(placement, &mut seen)?;
            if let PlacementRule::At { page, row, col } = placement.rule {
                let anchor = GridPosition::new(row, col);
                layout
                    .page_mut(page)
                    .map_err(|err| {
                        warn!(item = %item.id, page, "explicit placement on missing page");
                        err
                    })?
                    .place(item.with_anchor(anchor))
                    .map_err(|reason| placement_error(&item.id, page, anchor, reason))?;
            }
        }

        for placement in deferred {
            let item = self.resolve(placement, &mut seen)?;
            let footprint = item.footprint();
            let (page, anchor) = match layout.find_free_slot(footprint) {
                Some(slot) => slot,
                None if layout.page_count() >= MAX_PAGES => {
                    warn!(item = %item.id, "every page is full");
                    return Err(GridError::NoFreeSlot(item.id));
                }
                None if fits_at(GridPosition::ORIGIN, footprint) => {
                    (layout.push_page(), GridPosition::ORIGIN)
                }
                None => {
                    warn!(item = %item.id, %footprint, "footprint larger than a page");
                    return Err(GridError::NoFreeSlot(item.id));
                }
            };
            layout
                .page_mut(page)?
                .place(item.with_anchor(anchor))
                .map_err(|reason| placement_error(&item.id, page, anchor, reason))?;
        }

        debug!(
            pages = layout.page_count(),
            items = layout.item_count(),
            "seeded home screen layout"
        );
        Ok(layout)
    }

    /// Turn a placement into an item anchored at the origin
    fn resolve(&self, placement: &Placement, seen: &mut BTreeSet<String>) -> GridResult<GridItem> {
        let kind = match &placement.reference {
            Reference::App(id) => {
                self.app(id)
                    .ok_or_else(|| GridError::UnknownReference(placement.reference.to_string()))?;
                ItemKind::App
            }
            Reference::Widget(id) => {
                let widget = self
                    .widget(id)
                    .ok_or_else(|| GridError::UnknownReference(placement.reference.to_string()))?;
                ItemKind::Widget {
                    footprint: widget.footprint(),
                }
            }
        };

        let id = placement.item_id();
        if !seen.insert(id.clone()) {
            return Err(GridError::DuplicateItem(id));
        }

        Ok(GridItem {
            id,
            kind,
            anchor: GridPosition::ORIGIN,
            reference_id: placement.reference.id().to_string(),
        })
    }
}

fn placement_error(item_id: &str, page: usize, anchor: GridPosition, reason: RejectReason) -> GridError {
    match reason {
        RejectReason::Overlap { blocking } => GridError::PlacementConflict {
            item_id: item_id.to_string(),
            blocking,
        },
        RejectReason::OutOfBounds | RejectReason::ItemNotFound => GridError::PlacementOutOfBounds {
            item_id: item_id.to_string(),
            page,
            row: anchor.row,
            col: anchor.col,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AppEntry, WidgetEntry, WidgetKind, WidgetSize};
    use crate::grid::Footprint;

    fn catalog(placements: Vec<Placement>) -> Catalog {
        Catalog {
            pages: 1,
            apps: vec![
                AppEntry::new("notes", "Notes"),
                AppEntry::new("mail", "Mail"),
                AppEntry::new("maps", "Maps"),
            ],
            widgets: vec![
                WidgetEntry::new("weather-widget", WidgetKind::Weather, WidgetSize::Medium),
                WidgetEntry {
                    footprint: Some(Footprint::new(4, 4).unwrap()),
                    ..WidgetEntry::new("big-clock", WidgetKind::Clock, WidgetSize::Large)
                },
            ],
            placements,
        }
    }

    #[test]
    fn test_explicit_before_first_available() {
        let layout = catalog(vec![
            Placement::app("notes"),
            Placement::widget_at("weather-widget", 0, 0, 0),
        ])
        .seed()
        .unwrap();

        assert_eq!(
            layout.item("grid-weather-widget").unwrap().anchor,
            GridPosition::ORIGIN
        );
        // notes skips the widget's cells
        assert_eq!(
            layout.item("grid-app-notes").unwrap().anchor,
            GridPosition::new(0, 2)
        );
    }

    #[test]
    fn test_first_available_appends_pages() {
        let mut placements = vec![Placement::widget_at("big-clock", 0, 0, 0)];
        placements.push(Placement {
            item_id: Some("clock-2".to_string()),
            ..Placement::widget("big-clock")
        });
        let layout = catalog(placements).seed().unwrap();

        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.locate("clock-2").map(|(page, _)| page), Some(1));
        layout.validate().unwrap();
    }

    #[test]
    fn test_unknown_reference() {
        let err = catalog(vec![Placement::app("ghost")]).seed().unwrap_err();
        assert_eq!(err, GridError::UnknownReference("app:ghost".to_string()));

        let err = catalog(vec![Placement::widget_at("ghost", 0, 0, 0)])
            .seed()
            .unwrap_err();
        assert_eq!(err, GridError::UnknownReference("widget:ghost".to_string()));
    }

    #[test]
    fn test_duplicate_item() {
        let err = catalog(vec![Placement::app("notes"), Placement::app_at("notes", 0, 5, 3)])
            .seed()
            .unwrap_err();
        assert_eq!(err, GridError::DuplicateItem("grid-app-notes".to_string()));
    }

    #[test]
    fn test_explicit_conflict() {
        let err = catalog(vec![
            Placement::widget_at("weather-widget", 0, 2, 2),
            Placement::app_at("mail", 0, 3, 3),
        ])
        .seed()
        .unwrap_err();
        assert_eq!(
            err,
            GridError::PlacementConflict {
                item_id: "grid-app-mail".to_string(),
                blocking: "grid-weather-widget".to_string(),
            }
        );
    }

    #[test]
    fn test_explicit_out_of_bounds() {
        let err = catalog(vec![Placement::widget_at("weather-widget", 0, 5, 3)])
            .seed()
            .unwrap_err();
        assert_eq!(
            err,
            GridError::PlacementOutOfBounds {
                item_id: "grid-weather-widget".to_string(),
                page: 0,
                row: 5,
                col: 3,
            }
        );
    }

    #[test]
    fn test_explicit_missing_page() {
        let err = catalog(vec![Placement::app_at("maps", 3, 0, 0)])
            .seed()
            .unwrap_err();
        assert_eq!(err, GridError::PageIndexOutOfBounds { index: 3, count: 1 });
    }

    #[test]
    fn test_oversized_widget() {
        let mut cat = catalog(vec![Placement::widget("huge")]);
        cat.widgets.push(WidgetEntry {
            footprint: Some(Footprint::new(5, 1).unwrap()),
            ..WidgetEntry::new("huge", WidgetKind::Custom, WidgetSize::Large)
        });
        assert_eq!(
            cat.seed().unwrap_err(),
            GridError::NoFreeSlot("grid-huge".to_string())
        );
    }

    #[test]
    fn test_page_count_limit() {
        let mut cat = catalog(Vec::new());
        cat.pages = MAX_PAGES;
        assert_eq!(cat.seed().unwrap().page_count(), MAX_PAGES);

        cat.pages = 3_000_000;
        assert_eq!(
            cat.seed().unwrap_err(),
            GridError::TooManyPages {
                requested: 3_000_000,
                max: MAX_PAGES,
            }
        );
    }

    #[test]
    fn test_appending_stops_at_page_limit() {
        let mut placements = vec![Placement::widget_at("big-clock", 0, 0, 0)];
        for n in 0..MAX_PAGES {
            placements.push(Placement {
                item_id: Some(format!("clock-{}", n)),
                ..Placement::widget("big-clock")
            });
        }
        let err = catalog(placements).seed().unwrap_err();
        let last = format!("clock-{}", MAX_PAGES - 1);
        assert_eq!(err, GridError::NoFreeSlot(last));
    }

    #[test]
    fn test_empty_catalog_has_one_page() {
        let layout = Catalog {
            pages: 0,
            ..Catalog::default()
        }
        .seed()
        .unwrap();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.item_count(), 0);
    }
}
