use serde::{Deserialize, Serialize};

use crate::{GameError, Result, Target};

/// Number of holes on the board.
pub const HOLE_COUNT: usize = 9;

/// The holes and their current occupants. The spawn cycle replaces the whole
/// thing; a whack clears a single slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    slots: [Option<Target>; HOLE_COUNT],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            slots: [None; HOLE_COUNT],
        }
    }

    pub const fn from_slots(slots: [Option<Target>; HOLE_COUNT]) -> Self {
        Self { slots }
    }

    pub fn validate_slot(&self, slot: usize) -> Result<usize> {
        if slot < self.slots.len() {
            Ok(slot)
        } else {
            Err(GameError::InvalidSlot)
        }
    }

    /// Occupant of `slot`, `None` when the hole is empty or out of range.
    pub fn target_at(&self, slot: usize) -> Option<Target> {
        self.slots.get(slot).copied().flatten()
    }

    pub(crate) fn clear(&mut self, slot: usize) {
        if let Some(occupant) = self.slots.get_mut(slot) {
            *occupant = None;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Target>> + '_ {
        self.slots.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub const fn len(&self) -> usize {
        HOLE_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_nine_vacant_holes() {
        let board = Board::empty();
        assert_eq!(board.len(), 9);
        assert!(board.is_empty());
        assert!(board.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn validate_slot_rejects_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.validate_slot(0), Ok(0));
        assert_eq!(board.validate_slot(HOLE_COUNT - 1), Ok(HOLE_COUNT - 1));
        assert_eq!(board.validate_slot(HOLE_COUNT), Err(GameError::InvalidSlot));
    }

    #[test]
    fn clear_empties_a_single_slot() {
        let mut slots = [None; HOLE_COUNT];
        slots[3] = Some(Target::MoleHigh);
        slots[4] = Some(Target::Bomb);
        let mut board = Board::from_slots(slots);

        board.clear(3);

        assert_eq!(board.target_at(3), None);
        assert_eq!(board.target_at(4), Some(Target::Bomb));
    }
}
