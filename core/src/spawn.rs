use rand::prelude::*;

use crate::*;

/// Produces the next board for a spawn cycle.
pub trait TargetSpawner {
    fn spawn_board(&mut self) -> Board;
}

/// Fills each hole independently: empty with probability 1/2, otherwise one
/// target drawn uniformly from the fixed variant set.
#[derive(Clone, Debug)]
pub struct RandomTargetSpawner {
    rng: SmallRng,
}

impl RandomTargetSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetSpawner for RandomTargetSpawner {
    fn spawn_board(&mut self) -> Board {
        let mut slots = [None; HOLE_COUNT];
        for slot in slots.iter_mut() {
            if self.rng.random_bool(SPAWN_CHANCE) {
                let pick = self.rng.random_range(0..Target::ALL.len());
                *slot = Some(Target::ALL[pick]);
            }
        }
        Board::from_slots(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_boards_always_have_nine_slots() {
        let mut spawner = RandomTargetSpawner::new(7);
        for _ in 0..100 {
            assert_eq!(spawner.spawn_board().len(), HOLE_COUNT);
        }
    }

    #[test]
    fn same_seed_gives_the_same_cycle_of_boards() {
        let mut a = RandomTargetSpawner::new(42);
        let mut b = RandomTargetSpawner::new(42);
        for _ in 0..20 {
            assert_eq!(a.spawn_board(), b.spawn_board());
        }
    }

    #[test]
    fn every_kind_and_the_empty_hole_show_up_eventually() {
        let mut spawner = RandomTargetSpawner::new(1);
        let mut saw_empty = false;
        let mut saw = [false; 3];

        for _ in 0..200 {
            for slot in spawner.spawn_board().iter() {
                match slot {
                    None => saw_empty = true,
                    Some(Target::MoleLow) => saw[0] = true,
                    Some(Target::MoleHigh) => saw[1] = true,
                    Some(Target::Bomb) => saw[2] = true,
                }
            }
        }

        assert!(saw_empty);
        assert!(saw.iter().all(|&seen| seen));
    }
}
