use alloc::collections::{BTreeSet, VecDeque};

use rand::RngCore;

use super::{random_unfired, Shot, Strategy};
use crate::{
    board::Board,
    common::{Coord, GameError},
};

/// Hunt/target search: random shots until something is hit, then a
/// breadth-first sweep over the neighbours of every hit before going back
/// to random search.
#[derive(Debug, Default)]
pub struct HuntingStrategy {
    fired: BTreeSet<Coord>,
    queue: VecDeque<Coord>,
}

impl HuntingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending target candidates, front first.
    pub fn queue(&self) -> impl Iterator<Item = Coord> + '_ {
        self.queue.iter().copied()
    }

    fn next_target(&mut self, rng: &mut dyn RngCore) -> Option<Coord> {
        while let Some(coord) = self.queue.pop_front() {
            if !self.fired.contains(&coord) {
                return Some(coord);
            }
        }
        random_unfired(rng, &self.fired)
    }

    fn enqueue_neighbors(&mut self, coord: Coord) {
        for n in coord.neighbors() {
            if !self.fired.contains(&n) && !self.queue.contains(&n) {
                self.queue.push_back(n);
            }
        }
    }
}

impl Strategy for HuntingStrategy {
    fn name(&self) -> &'static str {
        "hunting"
    }

    fn fire(&mut self, rng: &mut dyn RngCore, target: &mut Board) -> Result<Shot, GameError> {
        let coord = self.next_target(rng).ok_or(GameError::NoTargetsLeft)?;
        self.fired.insert(coord);
        let outcome = target.fire(coord);
        if outcome.is_hit() {
            self.enqueue_neighbors(coord);
        }
        log::debug!(
            "hunting strategy fired at {} -> {:?} ({} queued)",
            coord,
            outcome,
            self.queue.len()
        );
        Ok(Shot { coord, outcome })
    }

    fn has_fired(&self, coord: Coord) -> bool {
        self.fired.contains(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Side;
    use crate::ship::Direction;
    use alloc::vec::Vec;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn stale_queue_entries_are_skipped() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut board = Board::new(Side::Human);
        board.place_ship(Coord::new(5, 3), Direction::Right).unwrap();
        let mut hunter = HuntingStrategy::new();
        hunter.queue.push_back(Coord::new(0, 0));
        hunter.queue.push_back(Coord::new(0, 0));
        hunter.queue.push_back(Coord::new(0, 1));
        let shots: Vec<_> = (0..2)
            .map(|_| hunter.fire(&mut rng, &mut board).unwrap().coord)
            .collect();
        assert_eq!(shots, [Coord::new(0, 0), Coord::new(0, 1)]);
    }
}
