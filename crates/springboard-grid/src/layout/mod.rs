//! Multi-page home screen layout
//!
//! Provides pages, the ordered page sequence and the move transaction.
//!
//! ## Invariants
//!
//! - No two items on the same page cover a common cell
//! - Every covered cell lies inside the page
//! - Item IDs are unique across all pages
//!
//! All three hold for every `PageLayout` value that can be observed: the
//! constructors validate, and [`PageLayout::move_item`] builds a new layout
//! only after checking the target.

mod moves;
mod page;
mod pages;

pub use moves::{MoveOutcome, RejectReason};
pub use page::Page;
pub use pages::PageLayout;
