#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use session::*;
pub use spawn::*;
pub use target::*;

mod board;
mod error;
mod session;
mod spawn;
mod target;

/// Length of a play-through in seconds.
pub const SESSION_SECS: u32 = 90;

/// Chance that a hole is occupied after a spawn cycle.
pub const SPAWN_CHANCE: f64 = 0.5;

/// Spawn speed presets. The interval is read when a session starts, so a
/// pending change only applies to the next session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    /// How often the spawn cycle refills the board, in milliseconds.
    pub const fn spawn_interval_ms(self) -> u32 {
        use Difficulty::*;
        match self {
            Easy => 1000,
            Medium => 800,
            Hard => 500,
            Insane => 300,
        }
    }

    /// Stable identifier, used for option values and the share message.
    pub const fn id(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
            Insane => "insane",
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
            Insane => "Insane",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|difficulty| difficulty.id() == id)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

/// Outcome of a countdown clock tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClockOutcome {
    NoChange,
    Ticked,
    TimedOut,
}

impl ClockOutcome {
    /// Whether this outcome could have caused an update to the session
    pub const fn has_update(self) -> bool {
        use ClockOutcome::*;
        match self {
            NoChange => false,
            Ticked => true,
            TimedOut => true,
        }
    }

    pub const fn timed_out(self) -> bool {
        matches!(self, Self::TimedOut)
    }
}

/// Outcome of a spawn cycle tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpawnOutcome {
    NoChange,
    Refilled,
}

impl SpawnOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Refilled => true,
        }
    }
}

/// Outcome of whacking a hole
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WhackOutcome {
    NoChange,
    Hit(Target),
}

impl WhackOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Hit(_) => true,
        }
    }
}

/// Outcome of a difficulty change
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DifficultyOutcome {
    NoChange,
    Changed,
}

impl DifficultyOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_intervals_match_presets() {
        assert_eq!(Difficulty::Easy.spawn_interval_ms(), 1000);
        assert_eq!(Difficulty::Medium.spawn_interval_ms(), 800);
        assert_eq!(Difficulty::Hard.spawn_interval_ms(), 500);
        assert_eq!(Difficulty::Insane.spawn_interval_ms(), 300);
    }

    #[test]
    fn difficulty_ids_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_id(difficulty.id()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_id("impossible"), None);
    }
}
