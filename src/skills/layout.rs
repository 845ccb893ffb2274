//! Placement of tech icons inside a skill triangle.
//!
//! Coordinates are in the triangle artwork's SVG user space, where the
//! triangle's interior is centred around x = 700.

/// Edge length of a square tech icon.
pub const ICON_SIZE: f32 = 40.0;
/// Distance between neighbouring icons.
pub const ICON_SPACING: f32 = 60.0;

const CENTER_X: f32 = 700.0;
const SINGLE_ROW_Y: f32 = 350.0;
const GRID_TOP: f32 = 330.0;
const GRID_LEFT: f32 = 670.0;

/// Top-left corner of one icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPosition {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
}

/// Left edge of the first icon of a row of `count` icons centred on the
/// triangle.
fn row_start(count: usize) -> f32 {
    CENTER_X - (count.saturating_sub(1) as f32 * ICON_SPACING) / 2.0
}

/// Positions for `count` icons, in icon order.
#[must_use]
pub fn icon_positions(count: usize) -> Vec<IconPosition> {
    (0..count)
        .map(|index| {
            let (x, y) = match count {
                1 | 2 => (
                    row_start(count) + index as f32 * ICON_SPACING,
                    SINGLE_ROW_Y,
                ),
                3 if index < 2 => {
                    (GRID_LEFT + index as f32 * ICON_SPACING, GRID_TOP)
                }
                3 => (CENTER_X, GRID_TOP + ICON_SPACING),
                4 => {
                    let (row, col) = (index / 2, index % 2);
                    (
                        GRID_LEFT + col as f32 * ICON_SPACING,
                        GRID_TOP + row as f32 * ICON_SPACING,
                    )
                }
                _ => {
                    let cols = (count as f64).sqrt().ceil() as usize;
                    let (row, col) = (index / cols, index % cols);
                    let in_row = cols.min(count - row * cols);
                    (
                        row_start(in_row) + col as f32 * ICON_SPACING,
                        GRID_TOP + row as f32 * ICON_SPACING,
                    )
                }
            };
            IconPosition { x, y }
        })
        .collect()
}
