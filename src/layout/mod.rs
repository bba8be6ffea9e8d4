//! Grid bin-packing for comment cards around a reserved center panel.
//!
//! The canvas is divided into a rows x 5 grid. A 2x2 block at columns 2–3,
//! vertically centered, is reserved for the logo panel; every comment then
//! claims a tile (1x1 up to 2x2, chosen deterministically per index) at the
//! first free position in a row-major scan. Tiles that fit nowhere retry once
//! as 1x1; when even that fails, placement stops and the remaining comments
//! are reported as overflow instead of being drawn.
//!
//! The whole computation is pure and synchronous: a fresh occupancy grid per
//! call, no caches, identical inputs always produce identical placements.

mod grid;
mod size;

pub use self::grid::OccupancyGrid;
pub use self::size::{TileSize, pick_size, size_for_roll};

/// Fixed number of grid columns.
pub const GRID_COLS: usize = 5;
/// Initial row count; rows grow from here until capacity suffices.
pub const BASE_ROWS: usize = 4;
/// Canvas width at which padding and gap take their base values.
pub const REFERENCE_WIDTH: f32 = 1920.0;
/// Cell height at which cards render at full scale.
pub const BASE_CELL_H: f32 = 235.0;

/// Cells consumed by the reserved 2x2 logo block.
const CENTER_CELLS: usize = 4;

/// An axis-aligned rectangle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One placed comment card: its pixel rectangle plus the grid cell anchor and
/// footprint it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub rect: PixelRect,
    pub row: usize,
    pub col: usize,
    pub size: TileSize,
}

/// Result of a layout pass.
///
/// `placements` is index-aligned with the input comment list; comments past
/// its length did not fit.
#[derive(Debug, Clone)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub center_rect: PixelRect,
    pub rows: usize,
    pub cell_w: f32,
    pub cell_h: f32,
    pub padding: f32,
    pub gap: f32,
}

impl Layout {
    /// How many of `comment_count` comments found no placement.
    pub fn overflow(&self, comment_count: usize) -> usize {
        comment_count.saturating_sub(self.placements.len())
    }
}

/// Compute placements for `comment_count` cards on a `canvas_w` x `canvas_h`
/// canvas.
///
/// Padding and gap scale linearly with the canvas width relative to
/// [`REFERENCE_WIDTH`]. Rows start at [`BASE_ROWS`] and grow one at a time
/// until `rows * cols` minus the reserved center cells covers the comment
/// count. `comment_count = 0` still reserves the center block.
pub fn build_layout(comment_count: usize, canvas_w: u32, canvas_h: u32) -> Layout {
    let cols = GRID_COLS;
    let scale = canvas_w as f32 / REFERENCE_WIDTH;
    let padding = (40.0 * scale).round();
    let gap = (20.0 * scale).round();

    let total_w = canvas_w as f32 - padding * 2.0 - gap * (cols as f32 - 1.0);
    let cell_w = total_w / cols as f32;

    let mut rows = BASE_ROWS;
    while rows * cols - CENTER_CELLS < comment_count {
        rows += 1;
    }

    let available_h = canvas_h as f32 - padding * 2.0 - gap * (rows as f32 - 1.0);
    let cell_h = (available_h / rows as f32).max(1.0);

    // Reserve the logo block before any card placement. start_row + 2 <= rows
    // holds for every rows >= 2, so the block never leaves the grid.
    let start_row = (rows - 2) / 2;
    let mut grid = OccupancyGrid::new(rows, cols);
    grid.occupy(start_row, 2, TileSize { w: 2, h: 2 });

    let center_rect = PixelRect {
        x: padding + 2.0 * (cell_w + gap),
        y: padding + start_row as f32 * (cell_h + gap),
        w: cell_w * 2.0 + gap,
        h: cell_h * 2.0 + gap,
    };

    let placements = place_cards(comment_count, &mut grid, cell_w, cell_h, padding, gap);

    Layout {
        placements,
        center_rect,
        rows,
        cell_w,
        cell_h,
        padding,
        gap,
    }
}

fn place_cards(
    count: usize,
    grid: &mut OccupancyGrid,
    cell_w: f32,
    cell_h: f32,
    padding: f32,
    gap: f32,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    for index in 0..count {
        let tile = pick_size(index);
        match try_place(grid, tile, cell_w, cell_h, padding, gap) {
            Some(placement) => placements.push(placement),
            None if !tile.is_unit() => {
                // Oversized tile found no home: retry once at 1x1.
                match try_place(grid, TileSize::UNIT, cell_w, cell_h, padding, gap) {
                    Some(placement) => placements.push(placement),
                    None => break,
                }
            }
            None => break,
        }
    }
    placements
}

/// First-fit: scan row-major, top-left to bottom-right, and claim the first
/// position where the full footprint fits.
fn try_place(
    grid: &mut OccupancyGrid,
    tile: TileSize,
    cell_w: f32,
    cell_h: f32,
    padding: f32,
    gap: f32,
) -> Option<Placement> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.fits(row, col, tile) {
                grid.occupy(row, col, tile);
                let rect = cell_rect(row, col, tile, cell_w, cell_h, padding, gap);
                return Some(Placement {
                    rect,
                    row,
                    col,
                    size: tile,
                });
            }
        }
    }
    None
}

fn cell_rect(
    row: usize,
    col: usize,
    tile: TileSize,
    cell_w: f32,
    cell_h: f32,
    padding: f32,
    gap: f32,
) -> PixelRect {
    PixelRect {
        x: padding + col as f32 * (cell_w + gap),
        y: padding + row as f32 * (cell_h + gap),
        w: cell_w * tile.w as f32 + gap * (tile.w as f32 - 1.0),
        h: cell_h * tile.h as f32 + gap * (tile.h as f32 - 1.0),
    }
}
