//! Grid cell sizing for variable-aspect-ratio thumbnails.
//!
//! A results gallery lays frames out in rows of `items_per_row` cells. Cell
//! width comes from dividing the row; cell height either matches the width
//! (square cells) or follows the source image's aspect ratio, clamped so a
//! tall item never exceeds the container's visible height.
//!
//! Negative or otherwise degenerate container sizes are NOT validated — they
//! flow through the arithmetic unchanged. The only guarded failures are the
//! two division-by-zero sites and a zero `items_per_row`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Whether a cell is forced square or scaled to the source image's ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioMode {
    /// Cell height equals cell width regardless of the source image.
    Square,
    /// Cell height follows the source aspect ratio, clamped to the
    /// container's available height.
    PreserveAspect,
}

/// Source image dimensions used as an aspect ratio (only the width:height
/// proportion matters, not the absolute values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

/// Container edge insets. Left/right shrink the usable row width; top/bottom
/// shrink the height available to a single item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// One sizing query: the container geometry plus the per-item policy.
/// Consumed per call; nothing is retained between queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConstraint {
    pub container_width: f64,
    pub container_height: f64,
    pub items_per_row: u32,
    pub insets: Insets,
    pub source_aspect_ratio: Option<AspectRatio>,
    pub ratio_mode: RatioMode,
}

/// Computed cell dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("items_per_row must be greater than zero")]
    InvalidItemsPerRow,

    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Width available to a single cell: the container width minus horizontal
/// insets, split evenly across the row.
pub fn allowable_width(
    container_width: f64,
    items_per_row: u32,
    insets: &Insets,
) -> Result<f64, GridError> {
    if items_per_row == 0 {
        return Err(GridError::InvalidItemsPerRow);
    }
    Ok((container_width - insets.left - insets.right) / f64::from(items_per_row))
}

/// Computes the cell size for one grid item.
///
/// Two explicit passes: the row-width pass fixes the width (and, for aspect
/// mode, the proportional height); the height pass then uniformly shrinks the
/// tentative size whenever it would overflow the container's available
/// height. Width wins the tie — a height-clamped item comes out narrower than
/// its row slot rather than taller than the container.
pub fn item_size(constraint: &GridConstraint) -> Result<ItemSize, GridError> {
    let width = allowable_width(
        constraint.container_width,
        constraint.items_per_row,
        &constraint.insets,
    )?;

    let ratio = match (constraint.ratio_mode, constraint.source_aspect_ratio) {
        (RatioMode::Square, _) | (_, None) => {
            return Ok(ItemSize {
                width,
                height: width,
            })
        }
        (RatioMode::PreserveAspect, Some(ratio)) => ratio,
    };

    // Row-width pass: scale the source dimensions so the item fills its slot.
    if ratio.width == 0.0 {
        return Err(GridError::DivisionByZero("source aspect ratio width"));
    }
    let y_scale = width / ratio.width;
    let tentative = ItemSize {
        width,
        height: ratio.height * y_scale,
    };

    // Height pass: shrink uniformly if the item would overflow the visible
    // height; leave it untouched otherwise.
    if tentative.height == 0.0 {
        return Err(GridError::DivisionByZero("tentative item height"));
    }
    let available_height =
        constraint.container_height - constraint.insets.top - constraint.insets.bottom;
    let x_scale = available_height / tentative.height;

    if x_scale < 1.0 {
        Ok(ItemSize {
            width: tentative.width * x_scale,
            height: tentative.height * x_scale,
        })
    } else {
        Ok(tentative)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint() -> GridConstraint {
        GridConstraint {
            container_width: 300.0,
            container_height: 1000.0,
            items_per_row: 3,
            insets: Insets::default(),
            source_aspect_ratio: None,
            ratio_mode: RatioMode::Square,
        }
    }

    #[test]
    fn test_square_mode_yields_square_cells() {
        let size = item_size(&constraint()).unwrap();
        assert_eq!(
            size,
            ItemSize {
                width: 100.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn test_preserve_aspect_without_ratio_falls_back_to_square() {
        let c = GridConstraint {
            ratio_mode: RatioMode::PreserveAspect,
            ..constraint()
        };
        let size = item_size(&c).unwrap();
        assert_eq!(size.width, size.height);
    }

    #[test]
    fn test_preserve_aspect_scales_height_by_ratio() {
        // allowable width 100, 200x100 source → y_scale 0.5 → 100x50;
        // available height 1000 keeps x_scale ≥ 1, no clamp.
        let c = GridConstraint {
            ratio_mode: RatioMode::PreserveAspect,
            source_aspect_ratio: Some(AspectRatio {
                width: 200.0,
                height: 100.0,
            }),
            ..constraint()
        };
        let size = item_size(&c).unwrap();
        assert_eq!(
            size,
            ItemSize {
                width: 100.0,
                height: 50.0
            }
        );
    }

    #[test]
    fn test_height_clamp_shrinks_both_dimensions() {
        // Tentative 100x50 against available height 20 → x_scale 0.4 → 40x20.
        let c = GridConstraint {
            container_height: 20.0,
            ratio_mode: RatioMode::PreserveAspect,
            source_aspect_ratio: Some(AspectRatio {
                width: 200.0,
                height: 100.0,
            }),
            ..constraint()
        };
        let size = item_size(&c).unwrap();
        assert!((size.width - 40.0).abs() < 1e-9, "width: {}", size.width);
        assert!((size.height - 20.0).abs() < 1e-9, "height: {}", size.height);
    }

    #[test]
    fn test_height_clamp_preserves_aspect_ratio() {
        let c = GridConstraint {
            container_height: 30.0,
            ratio_mode: RatioMode::PreserveAspect,
            source_aspect_ratio: Some(AspectRatio {
                width: 640.0,
                height: 480.0,
            }),
            ..constraint()
        };
        let size = item_size(&c).unwrap();
        let ratio = size.width / size.height;
        assert!(
            (ratio - 640.0 / 480.0).abs() < 1e-9,
            "clamp must scale uniformly, got ratio {ratio}"
        );
        assert!(size.height <= 30.0);
    }

    #[test]
    fn test_horizontal_insets_shrink_allowable_width() {
        let insets = Insets {
            left: 10.0,
            right: 20.0,
            ..Insets::default()
        };
        let width = allowable_width(300.0, 3, &insets).unwrap();
        assert_eq!(width, 90.0);
    }

    #[test]
    fn test_zero_items_per_row_is_invalid() {
        assert_eq!(
            allowable_width(300.0, 0, &Insets::default()),
            Err(GridError::InvalidItemsPerRow)
        );
    }

    #[test]
    fn test_zero_ratio_width_is_division_by_zero() {
        let c = GridConstraint {
            ratio_mode: RatioMode::PreserveAspect,
            source_aspect_ratio: Some(AspectRatio {
                width: 0.0,
                height: 100.0,
            }),
            ..constraint()
        };
        assert!(matches!(item_size(&c), Err(GridError::DivisionByZero(_))));
    }

    #[test]
    fn test_zero_ratio_height_is_division_by_zero() {
        // A zero source height produces a zero tentative height, which would
        // otherwise turn the height pass into NaN/Infinity.
        let c = GridConstraint {
            ratio_mode: RatioMode::PreserveAspect,
            source_aspect_ratio: Some(AspectRatio {
                width: 200.0,
                height: 0.0,
            }),
            ..constraint()
        };
        assert!(matches!(item_size(&c), Err(GridError::DivisionByZero(_))));
    }

    #[test]
    fn test_negative_container_width_propagates_unvalidated() {
        // Degenerate container sizes are an accepted limitation, not an error.
        let width = allowable_width(-300.0, 3, &Insets::default()).unwrap();
        assert_eq!(width, -100.0);
    }
}
