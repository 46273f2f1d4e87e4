use gloo::timers::callback::{Interval, Timeout};
use marreta_core as game;
use marreta_core::TargetSpawner as _;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::audio::{Cue, SoundBank};
use crate::utils::{copy_to_clipboard, js_random_seed};

/// How long the share banner stays on screen.
const SHARE_CLEAR_MS: u32 = 8_000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Whack(usize),
    ClockTick,
    SpawnTick,
    Start,
    SelectDifficulty(game::Difficulty),
    Share,
    ClearShareMessage,
}

#[derive(Properties, Clone, Debug, PartialEq, Default)]
pub(crate) struct GameProps {
    /// Forced spawn RNG seed, for reproducible sessions.
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// The two periodic producers for one running session. Replacing or dropping
/// the pair cancels both intervals, so each start leaves exactly one live
/// countdown clock and one live spawn cycle.
struct SessionTimers {
    _countdown: Interval,
    _spawn: Interval,
}

impl SessionTimers {
    fn start(ctx: &Context<GameView>, difficulty: game::Difficulty) -> Self {
        let countdown_link = ctx.link().clone();
        let spawn_link = ctx.link().clone();
        Self {
            _countdown: Interval::new(1000, move || countdown_link.send_message(Msg::ClockTick)),
            _spawn: Interval::new(difficulty.spawn_interval_ms(), move || {
                spawn_link.send_message(Msg::SpawnTick)
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct HoleProps {
    index: usize,
    #[prop_or_default]
    target: Option<game::Target>,
    #[prop_or_default]
    disabled: bool,
    on_whack: Callback<usize>,
}

#[function_component(Hole)]
fn hole_component(props: &HoleProps) -> Html {
    let HoleProps {
        index,
        target,
        disabled,
        on_whack,
    } = props.clone();
    let class = classes!("hole", disabled.then_some("disabled"));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("hole {} clicked", index);
        on_whack.emit(index);
    });

    html! {
        <div {class} {onclick}>
            if let Some(target) = target {
                <img src={target.image_src()} alt={target.id()} class="mole"/>
            }
        </div>
    }
}

pub(crate) struct GameView {
    session: game::Session,
    spawner: game::RandomTargetSpawner,
    seed_override: Option<u64>,
    timers: Option<SessionTimers>,
    share_message: Option<String>,
    share_clear: Option<Timeout>,
    sounds: SoundBank,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.seed_override.unwrap_or_else(js_random_seed)
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed_override = ctx.props().seed;
        let spawner = game::RandomTargetSpawner::new(seed_override.unwrap_or_else(js_random_seed));
        Self {
            session: game::Session::new(Default::default()),
            spawner,
            seed_override,
            timers: None,
            share_message: None,
            share_clear: None,
            sounds: SoundBank::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.session.start();
                self.spawner = game::RandomTargetSpawner::new(self.next_seed());
                // replacing the handles drops any previous pair first, so a
                // restart never leaves a second clock ticking
                self.timers = Some(SessionTimers::start(ctx, self.session.difficulty()));
                self.share_message = None;
                self.share_clear = None;
                true
            }
            ClockTick => match self.session.clock_tick() {
                game::ClockOutcome::TimedOut => {
                    self.timers = None;
                    self.sounds.play(Cue::GameOver);
                    true
                }
                outcome => outcome.has_update(),
            },
            SpawnTick => self
                .session
                .respawn(self.spawner.spawn_board())
                .has_update(),
            Whack(slot) => match self.session.whack(slot) {
                Ok(game::WhackOutcome::Hit(target)) => {
                    self.sounds.play(Cue::Hit(target));
                    true
                }
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::debug!("whack ignored: {}", err);
                    false
                }
            },
            SelectDifficulty(difficulty) => match self.session.change_difficulty(difficulty) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::debug!("difficulty change ignored: {}", err);
                    false
                }
            },
            Share => {
                let message = self.session.share_message();
                copy_to_clipboard(&message);
                self.share_message = Some(message);
                let link = ctx.link().clone();
                self.share_clear = Some(Timeout::new(SHARE_CLEAR_MS, move || {
                    link.send_message(ClearShareMessage)
                }));
                true
            }
            ClearShareMessage => {
                self.share_clear = None;
                self.share_message.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let phase = self.session.phase();
        let score = self.session.score();

        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_share = ctx.link().callback(|_: MouseEvent| Share);
        let on_difficulty = ctx.link().batch_callback(|e: Event| {
            let select = e.target_dyn_into::<HtmlSelectElement>()?;
            game::Difficulty::from_id(&select.value()).map(SelectDifficulty)
        });

        html! {
            <div class="marreta">
                if let Some(message) = &self.share_message {
                    <div class="message">{ message.clone() }</div>
                }
                <h1>{ "Whack-a-Mole" }</h1>
                <div class="stats">
                    <div class="scorecard">
                        <p>{ "Score" }</p>
                        <h2>{ score }</h2>
                    </div>
                    <div class="countdown">
                        <p>{ "Time Left" }</p>
                        <h2>{ format!("{} seconds", self.session.time_remaining()) }</h2>
                    </div>
                </div>
                <div class="selectlevels">
                    <label for="difficulty">{ "Select Difficulty: " }</label>
                    <select id="difficulty" onchange={on_difficulty} disabled={phase.is_running()}>
                        {
                            for game::Difficulty::ALL.into_iter().map(|difficulty| html! {
                                <option
                                    value={difficulty.id()}
                                    selected={difficulty == self.session.difficulty()}
                                >
                                    { difficulty.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="holes">
                    {
                        for (0..game::HOLE_COUNT).map(|index| {
                            let target = self.session.board().target_at(index);
                            let on_whack = ctx.link().callback(Whack);
                            html! {
                                <Hole {index} {target} disabled={phase.is_over()} {on_whack}/>
                            }
                        })
                    }
                </div>
                if phase.is_initial() {
                    <button onclick={cb_start}>{ "Start Game" }</button>
                } else if phase.is_over() {
                    <div>
                        <h2>{ format!("Game Over! Final Score: {}", score) }</h2>
                        <div class="buttons">
                            <button onclick={cb_start.clone()}>{ "Restart Game" }</button>
                            <button onclick={cb_share}>{ "Share Score" }</button>
                        </div>
                    </div>
                }
            </div>
        }
    }
}
