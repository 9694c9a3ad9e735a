//! # Image slicing.
//!
//! [`slice()`] cuts a source image into `count` vertical strips of equal width,
//! left to right, and returns them as [`SortItem`]s whose key is the strip's
//! original index. That index is the ground truth a finished sort must restore.
//!
//! The engine does not decode or render pixels. A source image is anything that
//! implements [`Raster`]; each [`Slice`] keeps a handle to it plus the rectangle
//! the presentation layer should draw.
//!
//! ```text
//! width = 100, count = 4
//! ┌─────┬─────┬─────┬─────┐
//! │  0  │  1  │  2  │  3  │   Rect { x: 25.0 * i, y: 0, width: 25.0, height }
//! └─────┴─────┴─────┴─────┘
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::SortError;
use crate::items::SortItem;

/// Source image dimensions, in pixels.
pub trait Raster: Send + Sync {
    /// Image width.
    fn width(&self) -> u32;
    /// Image height.
    fn height(&self) -> u32;
}

/// Axis-aligned rectangle in image space (origin at the left edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge (always `0` for slices).
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

/// One strip of a source image.
#[derive(Debug)]
pub struct Slice<I> {
    source: Arc<I>,
    rect: Rect,
}

impl<I> Slice<I> {
    /// The image this strip was cut from.
    pub fn source(&self) -> &Arc<I> {
        &self.source
    }

    /// Region of the source covered by this strip.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Cuts `image` into `count` equal-width strips.
///
/// Item `i` has key `i` and covers `x = i * width / count`.
///
/// ### Errors
/// - [`SortError::MissingImage`] if `image` is `None`
/// - [`SortError::InvalidSliceCount`] if `count <= 0`
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use sortvisor::{Raster, slice};
///
/// struct Canvas;
/// impl Raster for Canvas {
///     fn width(&self) -> u32 { 120 }
///     fn height(&self) -> u32 { 40 }
/// }
///
/// let items = slice(Some(Arc::new(Canvas)), 3).unwrap();
/// assert_eq!(items.len(), 3);
/// assert_eq!(*items[2].value(), 2);
/// assert_eq!(items[2].payload().rect().x, 80.0);
/// ```
pub fn slice<I: Raster>(
    image: Option<Arc<I>>,
    count: i64,
) -> Result<Vec<SortItem<usize, Slice<I>>>, SortError> {
    let Some(image) = image else {
        warn!("slice rejected: source image is missing");
        return Err(SortError::MissingImage);
    };
    let n = match usize::try_from(count) {
        Ok(n) if n > 0 => n,
        _ => {
            warn!(count, "slice rejected: count must be positive");
            return Err(SortError::InvalidSliceCount { count });
        }
    };

    let width = image.width() as f32;
    let height = image.height() as f32;
    let strip = width / n as f32;

    let items = (0..n)
        .map(|i| {
            let rect = Rect {
                x: i as f32 * strip,
                y: 0.0,
                width: strip,
                height,
            };
            let payload = Slice {
                source: Arc::clone(&image),
                rect,
            };
            SortItem::new(i, Arc::new(payload))
        })
        .collect();

    info!(count = n, "sliced image");
    Ok(items)
}
