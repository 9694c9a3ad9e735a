//! # Sortable items and their sources.
//!
//! This module provides the data model the engine sorts:
//! - [`SortItem`] - immutable ordering key plus a shared, opaque payload
//! - [`Sequence`] - index-addressable view a strategy compares and swaps through
//! - [`Raster`], [`Slice`], [`Rect`], [`slice()`] - cutting a source image into ordered items

mod item;
mod sequence;
mod slicer;

pub use item::SortItem;
pub use sequence::Sequence;
pub use slicer::{Raster, Rect, Slice, slice};
