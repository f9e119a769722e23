use alloc::collections::BTreeSet;

use rand::RngCore;

use super::{random_unfired, Shot, Strategy};
use crate::{
    board::Board,
    common::{Coord, GameError},
};

/// Fires at uniformly random unfired cells and never learns from hits.
#[derive(Debug, Default)]
pub struct RandomStrategy {
    fired: BTreeSet<Coord>,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn fire(&mut self, rng: &mut dyn RngCore, target: &mut Board) -> Result<Shot, GameError> {
        let coord = random_unfired(rng, &self.fired).ok_or(GameError::NoTargetsLeft)?;
        self.fired.insert(coord);
        let outcome = target.fire(coord);
        log::debug!("random strategy fired at {} -> {:?}", coord, outcome);
        Ok(Shot { coord, outcome })
    }

    fn has_fired(&self, coord: Coord) -> bool {
        self.fired.contains(&coord)
    }
}
