//! Optional text art for tiles and screens.
//!
//! Missing or unreadable files are logged and skipped; the renderer falls
//! back to flat-coloured tiles and plain text screens.

use std::fs;
use std::path::Path;

/// Tile art is looked up for values `1..MAX_TILES`.
pub const MAX_TILES: usize = 25;

#[derive(Debug, Clone, Default)]
pub struct Assets {
    tiles: Vec<Option<Vec<String>>>,
    menu: Option<Vec<String>>,
    win: Option<Vec<String>>,
}

fn read_art(path: &Path) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s.lines().map(str::to_owned).collect()),
        Err(e) => {
            log::warn!("failed to load {}: {e}", path.display());
            None
        }
    }
}

impl Assets {
    /// No art at all; everything renders with the fallback.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let tiles = (1..MAX_TILES)
            .map(|k| read_art(&dir.join("numbers").join(format!("N{k}.txt"))))
            .collect::<Vec<_>>();
        let loaded = tiles.iter().filter(|t| t.is_some()).count();
        log::info!("loaded {loaded}/{} tile images from {}", MAX_TILES - 1, dir.display());

        Self {
            tiles,
            menu: read_art(&dir.join("interface").join("menu.txt")),
            win: read_art(&dir.join("interface").join("win.txt")),
        }
    }

    /// Art for `value` if it exists and fits inside `w`×`h` cells.
    pub fn tile(&self, value: u8, w: u16, h: u16) -> Option<&[String]> {
        let art = self.tiles.get((value as usize).checked_sub(1)?)?.as_ref()?;
        let fits = art.len() <= h as usize
            && art.iter().all(|line| line.chars().count() <= w as usize);
        fits.then_some(art.as_slice())
    }

    pub fn menu(&self) -> Option<&[String]> {
        self.menu.as_deref()
    }

    pub fn win(&self) -> Option<&[String]> {
        self.win.as_deref()
    }
}
