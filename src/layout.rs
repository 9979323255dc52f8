//! Mapping between screen coordinates and board cells.

use crate::puzzle::Pos;

/// Drawable surface in screen units. `aspect` is how many horizontal units
/// make one vertical unit look square: 1 for pixels, 2 for terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub margin: u16,
    pub aspect: u16,
}

impl Viewport {
    pub fn pixels(width: u16, height: u16, margin: u16) -> Self {
        Self {
            width,
            height,
            margin,
            aspect: 1,
        }
    }

    pub fn terminal(cols: u16, rows: u16, margin: u16) -> Self {
        Self {
            width: cols,
            height: rows,
            margin,
            aspect: 2,
        }
    }
}

/// Tile geometry for one board size on one viewport, board centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_size: usize,
    pub tile_w: u16,
    pub tile_h: u16,
    pub offset_x: u16,
    pub offset_y: u16,
}

impl Layout {
    pub fn new(view: Viewport, board_size: usize) -> Self {
        let aspect = view.aspect.max(1);
        let n = board_size.max(1) as u16;
        let area = (view.width / aspect).min(view.height);
        let tile_h = area.saturating_sub(view.margin) / n;
        let tile_w = tile_h * aspect;

        Self {
            board_size,
            tile_w,
            tile_h,
            offset_x: view.width.saturating_sub(tile_w * n) / 2,
            offset_y: view.height.saturating_sub(tile_h * n) / 2,
        }
    }

    /// False when the viewport cannot fit even one-unit tiles.
    pub fn fits(&self) -> bool {
        self.tile_h > 0
    }

    pub fn board_width(&self) -> u16 {
        self.tile_w * self.board_size as u16
    }

    pub fn board_height(&self) -> u16 {
        self.tile_h * self.board_size as u16
    }

    pub fn screen_to_board(&self, sx: u16, sy: u16) -> Option<Pos> {
        if !self.fits() || sx < self.offset_x || sy < self.offset_y {
            return None;
        }
        let x = ((sx - self.offset_x) / self.tile_w) as usize;
        let y = ((sy - self.offset_y) / self.tile_h) as usize;
        (x < self.board_size && y < self.board_size).then_some((x, y))
    }

    /// Top-left screen coordinate of a cell.
    pub fn board_to_screen(&self, x: usize, y: usize) -> (u16, u16) {
        (
            self.offset_x + x as u16 * self.tile_w,
            self.offset_y + y as u16 * self.tile_h,
        )
    }
}
