use cheonja_core::IdRange;
use cheonja_game::{GameAction, GameEvent, QuizSession};
use cheonja_generator::SeededRandom;

use crate::{
    action::{Action, ActionRequestQueue, QuizAction},
    message,
    state::{AppState, RangeInput, Screen, WinSummary},
};

pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    match action {
        Action::UpdateRangeInput(input) => app_state.range_input = input,
        Action::UsePreset(range) => app_state.range_input = RangeInput::from_range(range),
        Action::OpenScreen(screen) => open_screen(app_state, screen),
        Action::BackToRangeInput => back_to_range_input(app_state),
        Action::Quiz(action) => handle_quiz(app_state, action),
        Action::StartGame => {
            let config = app_state.settings.board;
            handle_game(app_state, GameAction::Start(config));
        }
        Action::Game(action) => handle_game(app_state, action),
        Action::UpdateSettings(settings) => {
            if app_state.settings != settings {
                app_state.settings = settings;
                app_state.mark_dirty();
            }
        }
        Action::DismissMessage => app_state.message = None,
    }
}

fn open_screen(app_state: &mut AppState, screen: Screen) {
    if screen.is_range_input() {
        back_to_range_input(app_state);
        return;
    }
    let input = &app_state.range_input;
    let range = match IdRange::parse(&input.start, &input.end) {
        Ok(range) => range,
        Err(e) => {
            app_state.message = Some(message::range_error(&e));
            return;
        }
    };
    app_state.range = Some(range);
    let selected = app_state.selected();
    log::debug!(
        "opening {screen:?} for {range} ({} characters)",
        selected.len()
    );

    match screen {
        Screen::Quiz => {
            app_state.quiz = Some(QuizSession::new(
                selected.records(),
                SeededRandom::from_entropy(),
            ));
        }
        Screen::Game => {
            app_state.game.replace_pool(selected);
            app_state.win = None;
        }
        Screen::Viewer | Screen::RangeInput => {}
    }
    app_state.screen = screen;
}

fn back_to_range_input(app_state: &mut AppState) {
    if app_state.tile_game().is_some() {
        handle_game(app_state, GameAction::Exit);
    }
    app_state.screen = Screen::RangeInput;
    app_state.range = None;
    app_state.range_input = RangeInput::default();
    app_state.quiz = None;
    app_state.win = None;
}

fn handle_quiz(app_state: &mut AppState, action: QuizAction) {
    let Some(quiz) = &mut app_state.quiz else {
        return;
    };
    let result = match action {
        QuizAction::Answer(index) => quiz.answer(index).map(|_| ()),
        QuizAction::Next => quiz.next(),
        QuizAction::Restart => {
            quiz.restart();
            Ok(())
        }
        QuizAction::Exit => {
            quiz.exit();
            Ok(())
        }
    };
    if let Err(e) = result {
        log::debug!("ignored quiz action {action:?}: {e}");
    }
}

fn handle_game(app_state: &mut AppState, action: GameAction) {
    match app_state.game.dispatch(action) {
        Ok(GameEvent::Started { .. }) => app_state.win = None,
        Ok(GameEvent::Won {
            elapsed_secs, rank, ..
        }) => {
            app_state.win = Some(WinSummary { elapsed_secs, rank });
            if rank.is_some() {
                app_state.mark_dirty();
            }
        }
        Ok(_) => {}
        Err(e) => {
            log::warn!("game action {action:?} failed: {e}");
            app_state.message = Some(message::session_error(&e));
        }
    }
}
