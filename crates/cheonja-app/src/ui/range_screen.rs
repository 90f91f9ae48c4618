use eframe::egui::{Button, Key, RichText, TextEdit, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, Screen},
};

pub(crate) fn show(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading(RichText::new("천자문 마스터").size(32.0));
        ui.add_space(16.0);

        ui.group(|ui| {
            ui.set_max_width(360.0);
            ui.label(RichText::new("학습 범위 설정").size(20.0));
            ui.add_space(8.0);

            let mut input = app_state.range_input.clone();
            let mut changed = false;
            let mut submitted = false;
            for (label, value) in [("시작 번호:", &mut input.start), ("끝 번호:", &mut input.end)] {
                ui.horizontal(|ui| {
                    ui.label(label);
                    let response = ui.add(TextEdit::singleline(value).desired_width(120.0));
                    changed |= response.changed();
                    submitted |=
                        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                });
            }
            if changed {
                action_queue.request(Action::UpdateRangeInput(input));
            }

            if let Some(span) = app_state.dataset.id_span() {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for bucket in span.preset_buckets() {
                        if ui.small_button(bucket.to_string()).clicked() {
                            action_queue.request(Action::UsePreset(bucket));
                        }
                    }
                });
            }

            ui.add_space(8.0);
            let size = Vec2::new(ui.available_width(), 28.0);
            for (label, screen) in [
                ("학습 시작", Screen::Quiz),
                ("열람하기", Screen::Viewer),
                ("짝 맞추기 게임", Screen::Game),
            ] {
                let clicked = ui.add_sized(size, Button::new(label)).clicked();
                if clicked || (submitted && screen.is_quiz()) {
                    action_queue.request(Action::OpenScreen(screen));
                }
            }
        });
    });
}
