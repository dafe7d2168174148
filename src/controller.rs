//! Single owner of the run.
//!
//! The controller holds the game state, the held-key sampler and the RNG.
//! Front-ends feed it key events and call [`GameController::tick`] on a
//! fixed cadence; rendering reads [`GameController::state`].

use log::info;
use rand::Rng;

use crate::compute;
use crate::entities::{GameState, GameStatus};
use crate::input::{InputSampler, Key};
use crate::theme::Theme;

pub struct GameController<R: Rng> {
    state: GameState,
    input: InputSampler,
    rng: R,
}

impl<R: Rng> GameController<R> {
    pub fn new(theme: Theme, rng: R) -> Self {
        GameController {
            state: compute::init_state(theme),
            input: InputSampler::new(),
            rng,
        }
    }

    /// Take over an existing state.  Held keys start empty.
    pub fn with_state(state: GameState, rng: R) -> Self {
        GameController {
            state,
            input: InputSampler::new(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.status == GameStatus::Playing
    }

    /// Start from the menu or restart after game over.  Ignored mid-run.
    pub fn start(&mut self) {
        if self.is_playing() {
            return;
        }
        info!("starting run (from {:?})", self.state.status);
        self.state = compute::start_run(&self.state);
        self.input.clear();
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key, self.state.frame);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Forget keys that have not been re-pressed for `window` ticks.
    pub fn release_stale(&mut self, window: u64) {
        self.input.release_stale(self.state.frame, window);
    }

    /// Run one update.  Returns `true` while the run is still going.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let input = self.input.sample();
        let (next, fired) = compute::tick_with_shot(&self.state, &input, &mut self.rng);
        // A shot consumes the press; a full laser cap leaves it pending.
        if fired {
            self.input.clear_fire();
        }
        self.state = next;
        self.is_playing()
    }
}
