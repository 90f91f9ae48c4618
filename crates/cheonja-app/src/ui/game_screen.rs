use cheonja_game::{GameAction, GameState, TileGame, format_elapsed};
use cheonja_generator::{BoardConfig, Difficulty};
use eframe::egui::{ComboBox, RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, Settings, WinSummary},
    ui::board::{self, BoardViewModel},
};

pub(crate) fn show(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.heading(RichText::new("짝 맞추기 학습게임").size(28.0));
        ui.add_space(8.0);
    });

    show_settings(ui, &app_state.settings, action_queue);
    ui.separator();
    show_controls(ui, app_state, action_queue);
    ui.separator();

    if let Some(win) = app_state.win {
        show_win(ui, win);
    }

    let Some(game) = app_state.tile_game() else {
        ui.label("시작 버튼을 눌러 게임을 시작하세요.");
        return;
    };
    let vm = BoardViewModel::new(game, app_state.settings.highlight_correct);
    let board_width = f32::min(ui.available_width(), board::max_width());

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(board_width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ScrollArea::vertical().show(ui, |ui| board::show(ui, &vm, action_queue));
            });
            strip.empty();
        });
}

fn show_settings(ui: &mut Ui, settings: &Settings, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = *settings;
    let Settings {
        board,
        highlight_correct,
    } = &mut settings;

    ui.horizontal_wrapped(|ui| {
        let mut sequential = board.sequential_blocks();
        if ui.checkbox(&mut sequential, "모두연속").changed() {
            *board = board.with_sequential_blocks(sequential);
            changed = true;
        }

        let mut difficulty = board.difficulty();
        ComboBox::from_id_salt("difficulty")
            .selected_text(difficulty_label(difficulty))
            .show_ui(ui, |ui| {
                for level in Difficulty::ALL {
                    changed |= ui
                        .selectable_value(&mut difficulty, level, difficulty_label(level))
                        .changed();
                }
            });
        *board = board.with_difficulty(difficulty);

        let mut block_count = board.block_count();
        ComboBox::from_id_salt("block_count")
            .selected_text(block_count_label(block_count))
            .show_ui(ui, |ui| {
                for count in BoardConfig::BLOCK_COUNT_PRESETS {
                    changed |= ui
                        .selectable_value(&mut block_count, count, block_count_label(count))
                        .changed();
                }
            });
        *board = board.with_block_count(block_count);

        changed |= ui.checkbox(highlight_correct, "맞춘글자색표시").changed();
    });

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
}

fn difficulty_label(difficulty: Difficulty) -> String {
    format!("{}단계", difficulty.level())
}

fn block_count_label(block_count: usize) -> String {
    format!("{block_count}묶음 ({}자)", block_count * cheonja_core::BLOCK_LEN)
}

fn show_controls(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    let game = app_state.tile_game();
    let state = game.map_or(GameState::Stopped, TileGame::state);

    ui.horizontal(|ui| {
        let (label, action) = match state {
            GameState::Stopped => ("시작", Action::StartGame),
            GameState::Paused => ("재시작", Action::Game(GameAction::PauseResume)),
            GameState::Running => ("멈춤", Action::Game(GameAction::PauseResume)),
        };
        if ui.button(label).clicked() {
            action_queue.request(action);
        }
        if ui.button("나가기").clicked() {
            action_queue.request(Action::BackToRangeInput);
        }

        ui.separator();

        let elapsed = game.map_or(0, TileGame::elapsed_secs);
        let (correct, total) = game.map_or((0, app_state.settings.board.tile_count()), |game| {
            (game.correct_count(), game.tile_count())
        });
        let config = game.map_or(app_state.settings.board, |game| *game.config());
        let best_times = app_state.game.best_times(&config);
        let best = format_elapsed(best_times.best().unwrap_or(0));
        let ranking = best_times
            .as_slice()
            .iter()
            .enumerate()
            .map(|(rank, &secs)| format!("{}위 {}", rank + 1, format_elapsed(secs)))
            .collect::<Vec<_>>()
            .join("\n");

        ui.label(format!("시간: {}", format_elapsed(elapsed)));
        ui.label(format!("정답수: {correct} / {total}"));
        let best_label = ui.label(format!("베스트 랭킹: {best}"));
        if !ranking.is_empty() {
            best_label.on_hover_text(ranking);
        }
    });
}

fn show_win(ui: &mut Ui, win: WinSummary) {
    let color = ui.visuals().warn_fg_color;
    let text = match win.rank {
        Some(rank) => format!(
            "완성! 기록 {} ({}위)",
            format_elapsed(win.elapsed_secs),
            rank + 1
        ),
        None => format!("완성! 기록 {}", format_elapsed(win.elapsed_secs)),
    };
    ui.label(RichText::new(text).size(20.0).color(color));
}
