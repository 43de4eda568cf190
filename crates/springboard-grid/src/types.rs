//! Core type definitions for the grid engine
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique grid item identifier
///
/// Item IDs are unique across every page of a `PageLayout`, so an item can be
/// located without knowing which page holds it.
pub type ItemId = String;

/// Zero-based page index within a `PageLayout`
pub type PageIndex = usize;
