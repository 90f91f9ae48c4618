use eframe::egui::Ui;

use crate::{
    action::ActionRequestQueue,
    state::{AppState, Screen},
};

pub mod board;
pub mod dialogs;
pub mod game_screen;
pub mod quiz_screen;
pub mod range_screen;
pub mod viewer_screen;

pub(crate) fn show(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    match app_state.screen {
        Screen::RangeInput => range_screen::show(ui, app_state, action_queue),
        Screen::Quiz => quiz_screen::show(ui, app_state.quiz.as_ref(), action_queue),
        Screen::Viewer => viewer_screen::show(ui, &app_state.selected(), action_queue),
        Screen::Game => game_screen::show(ui, app_state, action_queue),
    }
}
