//! Cheonja application UI.
//!
//! # Design Notes
//! - Four screens: range input, quiz, block viewer and the tile game.
//! - All state changes go through [`Action`]s handled once per frame.
//! - The game timer is driven by the frame clock; a repaint is scheduled for
//!   the next second while a game runs.

use std::time::Duration;

use cheonja_game::{GameAction, MemoryStore};
use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, Action, ActionRequestQueue},
    clock::TickClock,
    dataset, fonts, message, persistence,
    state::{AppState, Settings},
    ui,
};

#[derive(Debug)]
pub struct CheonjaApp {
    app_state: AppState,
    clock: TickClock,
}

impl CheonjaApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        fonts::install(&cc.egui_ctx);

        let (settings, best_times) = cc.storage.map_or_else(
            || (Settings::default(), MemoryStore::new()),
            |storage| {
                (
                    persistence::load_settings(storage),
                    persistence::load_best_times(storage),
                )
            },
        );

        let (dataset, error) = match dataset::load_bundled() {
            Ok(dataset) => (dataset, None),
            Err(e) => {
                log::error!("failed to load the bundled dataset: {e}");
                (Default::default(), Some(message::dataset_error(&e)))
            }
        };

        let mut app_state = AppState::new(dataset, settings, best_times);
        app_state.message = error;
        Self {
            app_state,
            clock: TickClock::default(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for CheonjaApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        let now = ctx.input(|i| i.time);
        let ticks = self.clock.advance(now, self.app_state.is_game_running());
        for _ in 0..ticks {
            action_queue.request(Action::Game(GameAction::Tick));
        }
        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        CentralPanel::default().show(ctx, |ui| {
            ui::show(ui, &self.app_state, &mut action_queue);
        });

        if let Some(message) = &self.app_state.message {
            ui::dialogs::show_message(ctx, message, &mut action_queue);
        }

        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        // the clock may have started or stopped with this frame's actions
        self.clock.advance(now, self.app_state.is_game_running());
        if let Some(wait) = self.clock.until_next_tick(now) {
            ctx.request_repaint_after(wait);
        }

        self.apply_persistence(frame);
    }
}
