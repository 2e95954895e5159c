use crate::core::data::point::Point;
use crate::core::data::render_tile::RenderTile;
use crate::core::data::surface_dimensions::SurfaceDimensions;
use std::error::Error;
use std::fmt;

/// Value every cell holds before a frame writes it. Reduced-quality frames leave
/// skipped cells at this value.
pub const BACKGROUND: u32 = 0x0000_0000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramebufferError {
    WidthMismatch {
        tile: RenderTile,
        surface_width: u32,
    },
    TilesDoNotCover {
        tile: RenderTile,
        expected_start_row: u32,
    },
    IncompleteCoverage {
        covered_rows: u32,
        height: u32,
    },
}

impl fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthMismatch {
                tile,
                surface_width,
            } => write!(
                f,
                "tile width {} does not match surface width {}",
                tile.width(),
                surface_width
            ),
            Self::TilesDoNotCover {
                tile,
                expected_start_row,
            } => write!(
                f,
                "tile rows {}..{} do not continue from row {}",
                tile.start_row(),
                tile.end_row(),
                expected_start_row
            ),
            Self::IncompleteCoverage {
                covered_rows,
                height,
            } => write!(
                f,
                "tiles cover {} rows but the surface has {}",
                covered_rows, height
            ),
        }
    }
}

impl Error for FramebufferError {}

/// Row-major packed ARGB cells, one `u32` per pixel, `width * height` long.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    surface: SurfaceDimensions,
    cells: Vec<u32>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(surface: SurfaceDimensions) -> Self {
        Self {
            surface,
            cells: vec![BACKGROUND; surface.pixel_count()],
        }
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceDimensions {
        self.surface
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<u32> {
        if !self.surface.contains(point) {
            return None;
        }

        let index = point.y as usize * self.surface.width() as usize + point.x as usize;
        Some(self.cells[index])
    }

    pub fn clear(&mut self) {
        self.cells.fill(BACKGROUND);
    }

    /// Splits the cells into one exclusive view per tile.
    ///
    /// The tiles must be in row order, contiguous, full width and together
    /// cover every row of the surface. Empty tiles get an empty view.
    pub fn tile_views(
        &mut self,
        tiles: &[RenderTile],
    ) -> Result<Vec<TileView<'_>>, FramebufferError> {
        let width = self.surface.width();
        let height = self.surface.height();
        let mut remaining: &mut [u32] = &mut self.cells;
        let mut next_row = 0;
        let mut views = Vec::with_capacity(tiles.len());

        for &tile in tiles {
            if tile.width() != width {
                return Err(FramebufferError::WidthMismatch {
                    tile,
                    surface_width: width,
                });
            }

            if tile.start_row() != next_row
                || tile.end_row() < tile.start_row()
                || tile.end_row() > height
            {
                return Err(FramebufferError::TilesDoNotCover {
                    tile,
                    expected_start_row: next_row,
                });
            }

            let (head, tail) = std::mem::take(&mut remaining).split_at_mut(tile.cell_count());
            views.push(TileView { tile, cells: head });
            remaining = tail;
            next_row = tile.end_row();
        }

        if next_row != height {
            return Err(FramebufferError::IncompleteCoverage {
                covered_rows: next_row,
                height,
            });
        }

        Ok(views)
    }
}

/// Exclusive write access to the rows of one tile. Addressed with absolute
/// surface coordinates.
#[derive(Debug)]
pub struct TileView<'a> {
    tile: RenderTile,
    cells: &'a mut [u32],
}

impl TileView<'_> {
    #[must_use]
    pub fn tile(&self) -> RenderTile {
        self.tile
    }

    pub fn set(&mut self, x: u32, y: u32, argb: u32) {
        debug_assert!(self.tile.rows().contains(&y) && x < self.tile.width());

        let index = (y - self.tile.start_row()) as usize * self.tile.width() as usize + x as usize;
        self.cells[index] = argb;
    }
}
