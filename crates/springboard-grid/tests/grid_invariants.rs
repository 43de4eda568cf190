//! Grid Invariant Property Tests
//!
//! Randomized move sequences against the layout invariants.

use proptest::prelude::*;
use springboard_grid::{
    pixel_to_grid, Catalog, Footprint, GridItem, GridPosition, Page, PageLayout, COLUMNS, ROWS,
};

/// (item index, from page, to page, row, col)
type MoveRequest = (usize, usize, usize, u8, u8);

fn seeded() -> PageLayout {
    Catalog::builtin().seed().unwrap()
}

fn item_ids(layout: &PageLayout) -> Vec<String> {
    layout
        .pages()
        .iter()
        .flat_map(|page| page.items().iter().map(|item| item.id.clone()))
        .collect()
}

fn move_request() -> impl Strategy<Value = MoveRequest> {
    (0usize..64, 0usize..2, 0usize..2, 0u8..ROWS, 0u8..COLUMNS)
}

fn no_page_overlaps(layout: &PageLayout) -> bool {
    layout.pages().iter().all(|page| {
        let items = page.items();
        items.iter().enumerate().all(|(i, a)| {
            items[i + 1..]
                .iter()
                .all(|b| a.rect().cell_set().is_disjoint(&b.rect().cell_set()))
        })
    })
}

proptest! {
    #[test]
    fn prop_moves_never_overlap(moves in prop::collection::vec(move_request(), 1..40)) {
        let mut layout = seeded();
        let ids = item_ids(&layout);
        let count = layout.item_count();

        for (index, from, to, row, col) in moves {
            let id = &ids[index % ids.len()];
            let outcome = layout.move_item(id, from, to, GridPosition::new(row, col)).unwrap();
            layout = outcome.into_layout();
            prop_assert!(no_page_overlaps(&layout));
            prop_assert!(layout.validate().is_ok());
            prop_assert_eq!(layout.item_count(), count);
        }
    }

    #[test]
    fn prop_rejected_move_returns_input(request in move_request()) {
        let layout = seeded();
        let ids = item_ids(&layout);
        let (index, from, to, row, col) = request;
        let id = &ids[index % ids.len()];

        let outcome = layout.move_item(id, from, to, GridPosition::new(row, col)).unwrap();
        if !outcome.is_moved() {
            prop_assert_eq!(outcome.layout(), &layout);
        }
    }

    #[test]
    fn prop_rejection_is_idempotent(request in move_request()) {
        let layout = seeded();
        let ids = item_ids(&layout);
        let (index, from, to, row, col) = request;
        let id = &ids[index % ids.len()];
        let target = GridPosition::new(row, col);

        let first = layout.move_item(id, from, to, target).unwrap();
        let second = layout.move_item(id, from, to, target).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_find_free_position_advances(
        fills in prop::collection::vec((0u8..ROWS, 0u8..COLUMNS), 0..20),
        width in 1u8..=2,
        height in 1u8..=2,
    ) {
        let mut page = Page::new("page-1");
        for (n, (row, col)) in fills.into_iter().enumerate() {
            // occupied cells are simply skipped
            let _ = page.place(GridItem::app(format!("app-{}", n), "notes", GridPosition::new(row, col)));
        }
        let layout = PageLayout::from_pages(vec![page]).unwrap();

        let footprint = Footprint::new(width, height).unwrap();
        let once = layout.find_free_position(0, footprint).unwrap();
        let twice = layout.find_free_position(0, footprint).unwrap();
        prop_assert_eq!(once, twice);

        if let Some(pos) = once {
            let mut page = layout.pages()[0].clone();
            page.place(GridItem::widget("filler", "weather", pos, footprint)).unwrap();
            let after = page.find_free_position(footprint);
            prop_assert_ne!(after, Some(pos));
        }
    }

    #[test]
    fn prop_pixel_to_grid_always_on_page(
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
        cell_width in 1.0f32..200.0,
        cell_height in 1.0f32..200.0,
    ) {
        let pos = pixel_to_grid(x, y, cell_width, cell_height, 20.0, 0.0);
        prop_assert!(pos.is_valid());
        if x < 20.0 - cell_width {
            prop_assert_eq!(pos.col, 0);
        }
        if x > 20.0 + cell_width * f32::from(COLUMNS) {
            prop_assert_eq!(pos.col, COLUMNS - 1);
        }
        if y > cell_height * f32::from(ROWS) {
            prop_assert_eq!(pos.row, ROWS - 1);
        }
    }
}
