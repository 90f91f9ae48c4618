use cheonja_game::QuizSession;
use eframe::egui::{Button, Grid, RichText, Ui, Vec2};

use crate::action::{Action, ActionRequestQueue, QuizAction};

pub(crate) fn show(ui: &mut Ui, quiz: Option<&QuizSession>, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        match quiz {
            Some(quiz) if !quiz.is_finished() => show_question(ui, quiz, action_queue),
            _ => show_result(ui, quiz, action_queue),
        }
    });
}

fn show_question(ui: &mut Ui, quiz: &QuizSession, action_queue: &mut ActionRequestQueue) {
    let Some(question) = quiz.current() else {
        return;
    };
    ui.label(format!("{} / {}", quiz.position() + 1, quiz.question_count()));
    ui.label(RichText::new(&question.record().glyph).size(96.0));
    ui.add_space(16.0);

    let visuals = ui.visuals().clone();
    let size = Vec2::new(220.0, 40.0);
    Grid::new("quiz_options")
        .num_columns(2)
        .spacing(Vec2::splat(8.0))
        .show(ui, |ui| {
            for (index, option) in question.options().iter().enumerate() {
                let mut text = RichText::new(option.to_string()).size(18.0);
                if question.is_answered() {
                    if index == question.correct_option() {
                        text = text.color(visuals.warn_fg_color).strong();
                    } else if question.chosen() == Some(index) {
                        text = text.color(visuals.error_fg_color);
                    }
                }
                let button = ui.add_enabled(!question.is_answered(), Button::new(text).min_size(size));
                if button.clicked() {
                    action_queue.request(Action::Quiz(QuizAction::Answer(index)));
                }
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(16.0);
    match question.is_correct() {
        Some(true) => {
            ui.label(RichText::new("정답입니다!").size(20.0).color(visuals.warn_fg_color));
        }
        Some(false) => {
            ui.label(
                RichText::new(format!(
                    "오답입니다. 정답은 {} 입니다.",
                    question.record().reading()
                ))
                .size(20.0)
                .color(visuals.error_fg_color),
            );
        }
        None => {}
    }

    ui.horizontal(|ui| {
        if question.is_answered() && ui.button("다음 문제").clicked() {
            action_queue.request(Action::Quiz(QuizAction::Next));
        }
        if ui.button("퀴즈 종료").clicked() {
            action_queue.request(Action::Quiz(QuizAction::Exit));
        }
    });
}

fn show_result(ui: &mut Ui, quiz: Option<&QuizSession>, action_queue: &mut ActionRequestQueue) {
    let (correct, total) = quiz.map(QuizSession::score).unwrap_or_default();
    ui.heading(RichText::new("퀴즈 종료!").size(28.0));
    ui.add_space(8.0);
    ui.label(RichText::new(format!("총 {total} 문제 중 {correct} 문제 정답!")).size(20.0));
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        if ui.button("다시 시작").clicked() {
            action_queue.request(Action::Quiz(QuizAction::Restart));
        }
        if ui.button("돌아가기").clicked() {
            action_queue.request(Action::BackToRangeInput);
        }
    });
}
