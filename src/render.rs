//! Terminal presentation of a [`Session`]. Reads the session, never
//! changes it.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::assets::Assets;
use crate::layout::Layout;
use crate::session::{GameState, Session};

const BACKGROUND: Color = Color::Rgb { r: 30, g: 30, b: 30 };
const TILE: Color = Color::Rgb { r: 70, g: 130, b: 180 };
const EMPTY: Color = Color::Rgb { r: 50, g: 50, b: 50 };
const BORDER: Color = Color::Rgb { r: 200, g: 200, b: 200 };
const TEXT: Color = Color::White;
const ACCENT: Color = Color::Rgb { r: 135, g: 206, b: 250 };

pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub struct Renderer<W: Write> {
    out: W,
    assets: Assets,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, assets: Assets) -> Self {
        Self { out, assets }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, session: &Session) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(BACKGROUND), Clear(ClearType::All))?;
        match session.state() {
            GameState::Playing => self.draw_game(session)?,
            GameState::Win => self.draw_win(session)?,
            GameState::Menu | GameState::Paused | GameState::Settings => self.draw_menu(session)?,
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn text(&mut self, x: u16, y: u16, s: &str, fg: Color, bg: Color) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(s)
        )
    }

    fn centered(&mut self, width: u16, y: u16, s: &str, fg: Color) -> io::Result<()> {
        let len = s.chars().count() as u16;
        self.text(width.saturating_sub(len) / 2, y, s, fg, BACKGROUND)
    }

    fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Color) -> io::Result<()> {
        let blank = " ".repeat(w as usize);
        for row in y..y + h {
            self.text(x, row, &blank, TEXT, bg)?;
        }
        Ok(())
    }

    /// Draws one tile with its top-left corner at `(x, y)`. The last column
    /// and row are left as the grid line.
    fn draw_tile(&mut self, layout: &Layout, x: u16, y: u16, value: u8) -> io::Result<()> {
        let (w, h) = (layout.tile_w, layout.tile_h);
        let (inner_w, inner_h) = if w > 2 && h > 1 { (w - 1, h - 1) } else { (w, h) };

        if value == 0 {
            return self.fill(x, y, inner_w, inner_h, EMPTY);
        }

        self.fill(x, y, inner_w, inner_h, TILE)?;
        let art = self.assets.tile(value, inner_w, inner_h).map(<[String]>::to_vec);
        match art {
            Some(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    self.text(x, y + i as u16, line, TEXT, TILE)?;
                }
            }
            None => {
                let label = value.to_string();
                let lx = x + inner_w.saturating_sub(label.len() as u16) / 2;
                self.text(lx, y + inner_h / 2, &label, TEXT, TILE)?;
            }
        }
        Ok(())
    }

    fn draw_game(&mut self, session: &Session) -> io::Result<()> {
        let view = session.viewport();
        let layout = session.layout();
        if !layout.fits() {
            return self.text(0, 0, "Terminal too small", TEXT, BACKGROUND);
        }

        let board = session.board();
        let anim = session.animation();
        let animating =
            anim.is_active() && board.tile_at(anim.to().0, anim.to().1) == Some(anim.tile());

        self.fill(
            layout.offset_x,
            layout.offset_y,
            layout.board_width(),
            layout.board_height(),
            BORDER,
        )?;
        for (y, row) in board.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let (sx, sy) = layout.board_to_screen(x, y);
                let value = if animating && (x, y) == anim.to() { 0 } else { value };
                self.draw_tile(&layout, sx, sy, value)?;
            }
        }
        if animating {
            let (fx, fy) = layout.board_to_screen(anim.from().0, anim.from().1);
            let (tx, ty) = layout.board_to_screen(anim.to().0, anim.to().1);
            self.draw_tile(&layout, anim.lerp(fx, tx), anim.lerp(fy, ty), anim.tile())?;
        }

        let status_y = layout.offset_y + layout.board_height();
        if status_y < view.height {
            let size = board.size();
            let stats = session.stats();
            let best = match session.best().best_moves(size) {
                Some(m) => m.to_string(),
                None => "-".to_string(),
            };
            let line = format!(
                "Moves {}  Time {}  Best {}   [Esc] menu  [r] reset  [n] shuffle",
                stats.moves,
                format_time(stats.seconds),
                best
            );
            self.centered(view.width, status_y, &line, TEXT)?;
        }
        Ok(())
    }

    fn draw_menu(&mut self, session: &Session) -> io::Result<()> {
        let view = session.viewport();
        let mut y = view.height.saturating_sub(12) / 2;

        if let Some(art) = self.assets.menu().map(<[String]>::to_vec) {
            for line in &art {
                self.centered(view.width, y, line, ACCENT)?;
                y += 1;
            }
        } else {
            self.centered(view.width, y, "T A Q U I N", ACCENT)?;
            y += 2;
            self.centered(view.width, y, "Press 3, 4 or 5 to choose a grid size", TEXT)?;
            y += 1;
            self.centered(view.width, y, "Click or use the arrow keys to slide tiles", TEXT)?;
            y += 1;
            self.centered(view.width, y, "Esc or q to quit", TEXT)?;
        }

        y += 2;
        for (size, moves, seconds) in session.best().iter() {
            let line = match (moves, seconds) {
                (None, None) => format!("{size}x{size}   no record"),
                _ => format!(
                    "{size}x{size}   best {} moves  {}",
                    moves.map_or("-".to_string(), |m| m.to_string()),
                    seconds.map_or("-".to_string(), format_time)
                ),
            };
            self.centered(view.width, y, &line, TEXT)?;
            y += 1;
        }
        Ok(())
    }

    fn draw_win(&mut self, session: &Session) -> io::Result<()> {
        let view = session.viewport();
        let stats = session.stats();
        let size = session.board().size();
        let mut y = view.height.saturating_sub(8) / 2;

        if let Some(art) = self.assets.win().map(<[String]>::to_vec) {
            for line in &art {
                self.centered(view.width, y, line, ACCENT)?;
                y += 1;
            }
        } else {
            self.centered(view.width, y, "Solved!", ACCENT)?;
            y += 1;
        }

        y += 1;
        let line = format!(
            "{size}x{size} in {} moves, {}",
            stats.moves,
            format_time(stats.seconds)
        );
        self.centered(view.width, y, &line, TEXT)?;
        y += 2;
        self.centered(view.width, y, "[Space/Enter] menu   [r] play again", TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Input, Key};

    fn draw(session: &Session) -> String {
        let mut r = Renderer::new(Vec::new(), Assets::none());
        r.render(session).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn menu_lists_every_size() {
        let out = draw(&Session::seeded(0));
        assert!(out.contains("Press 3, 4 or 5"));
        assert!(out.contains("3x3   no record"));
        assert!(out.contains("5x5   no record"));
    }

    #[test]
    fn board_without_art_still_shows_every_tile() {
        let mut s = Session::seeded(3);
        s.handle(Input::Key(Key::Digit(4)));
        let out = draw(&s);
        for v in 1..16 {
            assert!(out.contains(&v.to_string()), "tile {v} missing");
        }
        assert!(out.contains("Moves 0"));
    }

    #[test]
    fn tiny_terminal_gets_a_notice() {
        let mut s = Session::seeded(3);
        s.handle(Input::Key(Key::Digit(5)));
        s.handle(Input::Resize { width: 10, height: 5 });
        assert!(draw(&s).contains("Terminal too small"));
    }
}
