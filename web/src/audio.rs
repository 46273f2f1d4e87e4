use marreta_core::Target;
use web_sys::HtmlAudioElement;

/// Sound effect keyed by game event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Cue {
    Hit(Target),
    GameOver,
}

/// One audio element per cue, created once at mount. Audio is cosmetic: any
/// element that fails to load or play degrades to a console warning.
pub(crate) struct SoundBank {
    mole_low: Option<HtmlAudioElement>,
    mole_high: Option<HtmlAudioElement>,
    bomb: Option<HtmlAudioElement>,
    game_over: Option<HtmlAudioElement>,
}

impl SoundBank {
    const GAME_OVER_SRC: &'static str = "/game-over.mp3";

    pub(crate) fn new() -> Self {
        Self {
            mole_low: load(Target::MoleLow.sound_src()),
            mole_high: load(Target::MoleHigh.sound_src()),
            bomb: load(Target::Bomb.sound_src()),
            game_over: load(Self::GAME_OVER_SRC),
        }
    }

    pub(crate) fn play(&self, cue: Cue) {
        let element = match cue {
            Cue::Hit(Target::MoleLow) => &self.mole_low,
            Cue::Hit(Target::MoleHigh) => &self.mole_high,
            Cue::Hit(Target::Bomb) => &self.bomb,
            Cue::GameOver => &self.game_over,
        };
        if let Some(element) = element {
            // rewind so rapid hits retrigger instead of overlapping silence
            element.set_current_time(0.0);
            if let Err(err) = element.play() {
                log::warn!("audio playback failed: {:?}", err);
            }
        }
    }
}

fn load(src: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(element) => Some(element),
        Err(err) => {
            log::warn!("could not create audio element for {}: {:?}", src, err);
            None
        }
    }
}
