use std::ops::Range;

/// A horizontal band of rows `[start_row, end_row)` spanning the full surface width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderTile {
    start_row: u32,
    end_row: u32,
    width: u32,
}

impl RenderTile {
    #[must_use]
    pub fn new(start_row: u32, end_row: u32, width: u32) -> Self {
        debug_assert!(start_row <= end_row);

        Self {
            start_row,
            end_row,
            width,
        }
    }

    #[must_use]
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    #[must_use]
    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.row_count() as usize * self.width as usize
    }
}
