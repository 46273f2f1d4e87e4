use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Running
/// - Running -> Over
/// - Over -> Running (restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Initial state, nothing is spawning yet
    NotStarted,
    /// Countdown and spawn cycle are live
    Running,
    /// Countdown reached zero, board is frozen
    Over,
}

impl Phase {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Represents one play-through from start to game over
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    score: i32,
    board: Board,
    time_remaining: u32,
    phase: Phase,
    difficulty: Difficulty,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            score: 0,
            board: Board::empty(),
            time_remaining: SESSION_SECS,
            phase: Default::default(),
            difficulty,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Begin a fresh play-through. Valid from any phase; doubles as restart.
    pub fn start(&mut self) {
        self.score = 0;
        self.board = Board::empty();
        self.time_remaining = SESSION_SECS;
        self.phase = Phase::Running;
        log::debug!("session started on {}", self.difficulty.id());
    }

    /// Advance the countdown clock by one second. Reaching zero ends the
    /// session on the same tick. Ticks outside the running phase do nothing,
    /// so a stale timer callback is harmless.
    pub fn clock_tick(&mut self) -> ClockOutcome {
        if !self.phase.is_running() {
            return ClockOutcome::NoChange;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = Phase::Over;
            log::debug!("time up, final score {}", self.score);
            ClockOutcome::TimedOut
        } else {
            ClockOutcome::Ticked
        }
    }

    /// Apply one spawn cycle: the previous board is discarded wholesale.
    /// Targets have no lifetime of their own, an unwhacked mole simply gets
    /// redrawn away.
    pub fn respawn(&mut self, board: Board) -> SpawnOutcome {
        if !self.phase.is_running() {
            return SpawnOutcome::NoChange;
        }

        self.board = board;
        SpawnOutcome::Refilled
    }

    /// Whack the hole at `slot`. Hitting a target scores its points (the
    /// bomb's are negative, the score is unbounded below) and empties the
    /// slot; an empty hole is a no-op.
    pub fn whack(&mut self, slot: usize) -> Result<WhackOutcome> {
        let slot = self.board.validate_slot(slot)?;
        self.check_not_over()?;

        Ok(match self.board.target_at(slot) {
            None => WhackOutcome::NoChange,
            Some(target) => {
                self.board.clear(slot);
                self.score += target.points();
                log::debug!(
                    "whacked {} at slot {}, {:+} points, score {}",
                    target.id(),
                    slot,
                    target.points(),
                    self.score
                );
                WhackOutcome::Hit(target)
            }
        })
    }

    /// Change the spawn speed preset. Locked while a session is running; the
    /// new interval takes effect on the next start.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> Result<DifficultyOutcome> {
        if self.phase.is_running() {
            return Err(GameError::SessionRunning);
        }

        Ok(if self.difficulty == difficulty {
            DifficultyOutcome::NoChange
        } else {
            self.difficulty = difficulty;
            DifficultyOutcome::Changed
        })
    }

    /// Text for the clipboard share button.
    pub fn share_message(&self) -> String {
        format!(
            "I scored {} points on {} mode in Whack-a-Mole! See if you can score higher!",
            self.score,
            self.difficulty.id()
        )
    }

    fn check_not_over(&self) -> Result<()> {
        if self.phase.is_over() {
            Err(GameError::SessionOver)
        } else {
            Ok(())
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Default::default())
    }
}
