use serde::{Deserialize, Serialize};

/// A spawned entity occupying a hole. Two mole kinds score points, the bomb
/// costs them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    MoleLow,
    MoleHigh,
    Bomb,
}

impl Target {
    /// The fixed variant set, in drawing order.
    pub const ALL: [Target; 3] = [Target::MoleLow, Target::MoleHigh, Target::Bomb];

    /// Score delta for whacking this target.
    pub const fn points(self) -> i32 {
        use Target::*;
        match self {
            MoleLow => 10,
            MoleHigh => 20,
            Bomb => -30,
        }
    }

    /// Stable kind identifier, also used for CSS hooks and alt text.
    pub const fn id(self) -> &'static str {
        use Target::*;
        match self {
            MoleLow => "mole10",
            MoleHigh => "mole20",
            Bomb => "bomb",
        }
    }

    pub const fn image_src(self) -> &'static str {
        use Target::*;
        match self {
            MoleLow => "/mole10.png",
            MoleHigh => "/mole20.png",
            Bomb => "/bomb.png",
        }
    }

    pub const fn sound_src(self) -> &'static str {
        use Target::*;
        match self {
            MoleLow => "/mole10.mp3",
            MoleHigh => "/mole20.mp3",
            Bomb => "/bomb.mp3",
        }
    }
}
