use crate::puzzle::{MAX_SIZE, MIN_SIZE};

const SLOTS: usize = MAX_SIZE - MIN_SIZE + 1;

/// Counters for the game in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub moves: u32,
    pub seconds: u64,
}

impl GameStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-size record of the fewest moves and shortest time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScores {
    moves: [Option<u32>; SLOTS],
    seconds: [Option<u64>; SLOTS],
}

/// Which fields a finished game improved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Improvement {
    pub moves: bool,
    pub seconds: bool,
}

impl Improvement {
    pub fn any(&self) -> bool {
        self.moves || self.seconds
    }
}

fn slot(size: usize) -> Option<usize> {
    (MIN_SIZE..=MAX_SIZE)
        .contains(&size)
        .then(|| size - MIN_SIZE)
}

impl BestScores {
    pub fn best_moves(&self, size: usize) -> Option<u32> {
        slot(size).and_then(|i| self.moves[i])
    }

    pub fn best_seconds(&self, size: usize) -> Option<u64> {
        slot(size).and_then(|i| self.seconds[i])
    }

    /// Folds a finished game into the table. A field only ever moves to a
    /// strictly smaller value.
    pub fn record(&mut self, size: usize, stats: GameStats) -> Improvement {
        let Some(i) = slot(size) else {
            return Improvement::default();
        };
        let mut improved = Improvement::default();
        if self.moves[i].map_or(true, |best| stats.moves < best) {
            self.moves[i] = Some(stats.moves);
            improved.moves = true;
        }
        if self.seconds[i].map_or(true, |best| stats.seconds < best) {
            self.seconds[i] = Some(stats.seconds);
            improved.seconds = true;
        }
        improved
    }

    /// Restores a stored entry verbatim. Out-of-range sizes are ignored and
    /// reported as false.
    pub fn set(&mut self, size: usize, moves: Option<u32>, seconds: Option<u64>) -> bool {
        match slot(size) {
            Some(i) => {
                self.moves[i] = moves;
                self.seconds[i] = seconds;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.moves.iter().all(Option::is_none) && self.seconds.iter().all(Option::is_none)
    }

    /// `(size, best moves, best seconds)` for every size, set or not.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<u32>, Option<u64>)> + '_ {
        (0..SLOTS).map(move |i| (i + MIN_SIZE, self.moves[i], self.seconds[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(moves: u32, seconds: u64) -> GameStats {
        GameStats { moves, seconds }
    }

    #[test]
    fn first_win_sets_record() {
        let mut best = BestScores::default();
        assert_eq!(best.best_moves(3), None);
        let imp = best.record(3, game(42, 90));
        assert!(imp.moves && imp.seconds);
        assert_eq!(best.best_moves(3), Some(42));
        assert_eq!(best.best_seconds(3), Some(90));
        assert_eq!(best.best_moves(4), None);
    }

    #[test]
    fn worse_game_does_not_regress() {
        let mut best = BestScores::default();
        best.record(3, game(42, 90));
        let imp = best.record(3, game(50, 60));
        assert!(!imp.moves);
        assert!(imp.seconds);
        assert_eq!(best.best_moves(3), Some(42));
        assert_eq!(best.best_seconds(3), Some(60));
    }

    #[test]
    fn equal_score_is_not_an_improvement() {
        let mut best = BestScores::default();
        best.record(5, game(300, 200));
        assert!(!best.record(5, game(300, 200)).any());
    }

    #[test]
    fn out_of_range_sizes_are_ignored() {
        let mut best = BestScores::default();
        assert!(!best.record(7, game(1, 1)).any());
        assert!(!best.set(2, Some(1), None));
        assert!(best.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut best = BestScores::default();
        best.record(4, game(80, 40));
        best.clear();
        assert!(best.is_empty());
        assert_eq!(best.iter().count(), 3);
    }
}
