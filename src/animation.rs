use crate::puzzle::{Pos, Slide};

pub const DEFAULT_ANIMATION_SPEED: u8 = 8;

/// Single-slot linear animation of the most recently moved tile.
///
/// Progress runs from 0 to 100 in fixed steps of `speed` per tick. Starting
/// a new animation overwrites whatever is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    active: bool,
    progress: u8,
    from: Pos,
    to: Pos,
    tile: u8,
    speed: u8,
}

impl Animation {
    pub fn new(speed: u8) -> Self {
        Self {
            active: false,
            progress: 0,
            from: (0, 0),
            to: (0, 0),
            tile: 0,
            speed: speed.max(1),
        }
    }

    pub fn start(&mut self, from: Pos, to: Pos, tile: u8) {
        self.active = true;
        self.progress = 0;
        self.from = from;
        self.to = to;
        self.tile = tile;
    }

    pub fn start_slide(&mut self, slide: Slide) {
        self.start(slide.from, slide.to, slide.tile);
    }

    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        let next = self.progress as u16 + self.speed as u16;
        if next >= 100 {
            self.active = false;
            self.progress = 0;
        } else {
            self.progress = next as u8;
        }
    }

    /// Drops any in-flight animation.
    pub fn cancel(&mut self) {
        self.active = false;
        self.progress = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn from(&self) -> Pos {
        self.from
    }

    pub fn to(&self) -> Pos {
        self.to
    }

    pub fn tile(&self) -> u8 {
        self.tile
    }

    /// Linear interpolation between two screen coordinates at the current
    /// progress.
    pub fn lerp(&self, a: u16, b: u16) -> u16 {
        let (a, b, p) = (a as i32, b as i32, self.progress as i32);
        (a + (b - a) * p / 100) as u16
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_after_enough_ticks() {
        let mut a = Animation::default();
        a.start((1, 2), (2, 2), 8);
        assert!(a.is_active());
        // 8 * 12 = 96, the 13th tick crosses 100.
        for _ in 0..12 {
            a.advance();
        }
        assert!(a.is_active());
        assert_eq!(a.progress(), 96);
        a.advance();
        assert!(!a.is_active());
        assert_eq!(a.progress(), 0);
    }

    #[test]
    fn new_start_overwrites_in_flight() {
        let mut a = Animation::default();
        a.start((0, 0), (1, 0), 1);
        a.advance();
        a.advance();
        a.start((2, 1), (2, 2), 6);
        assert!(a.is_active());
        assert_eq!(a.progress(), 0);
        assert_eq!((a.from(), a.to(), a.tile()), ((2, 1), (2, 2), 6));
    }

    #[test]
    fn idle_advance_is_noop() {
        let mut a = Animation::new(50);
        a.advance();
        assert_eq!(a, Animation::new(50));
    }

    #[test]
    fn lerp_moves_in_both_directions() {
        let mut a = Animation::new(25);
        a.start((0, 0), (1, 0), 3);
        a.advance();
        assert_eq!(a.lerp(10, 30), 15);
        assert_eq!(a.lerp(30, 10), 25);
    }

    #[test]
    fn zero_speed_is_clamped() {
        let mut a = Animation::new(0);
        a.start((0, 0), (0, 1), 2);
        a.advance();
        assert_eq!(a.progress(), 1);
    }
}
