use cheonja_core::{BLOCK_LEN, CharacterPool, viewer_rows};
use eframe::egui::{Frame, Grid, RichText, ScrollArea, Ui, Vec2};

use crate::action::{Action, ActionRequestQueue};

const SLOT_WIDTH: f32 = 72.0;

pub(crate) fn show(ui: &mut Ui, selected: &CharacterPool, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading(RichText::new("천자문 열람").size(28.0));
        ui.add_space(8.0);

        if selected.is_empty() {
            ui.label("표시할 한자가 없습니다.");
        } else {
            let back_button_height = 40.0;
            ScrollArea::vertical()
                .max_height(ui.available_height() - back_button_height)
                .show(ui, |ui| show_rows(ui, selected));
        }

        ui.add_space(8.0);
        if ui.button("돌아가기").clicked() {
            action_queue.request(Action::BackToRangeInput);
        }
    });
}

fn show_rows(ui: &mut Ui, selected: &CharacterPool) {
    let stroke = ui.visuals().widgets.noninteractive.bg_stroke;
    Grid::new("viewer_rows")
        .num_columns(BLOCK_LEN)
        .spacing(Vec2::splat(6.0))
        .show(ui, |ui| {
            for row in viewer_rows(selected.records()) {
                for slot in row.slots {
                    let frame = match slot {
                        Some(_) => Frame::group(ui.style()).stroke(stroke),
                        None => Frame::NONE,
                    };
                    frame.show(ui, |ui| {
                        ui.set_width(SLOT_WIDTH);
                        ui.vertical_centered(|ui| {
                            if let Some(record) = slot {
                                ui.label(RichText::new(&record.glyph).size(36.0).strong());
                                ui.label(format!("음: {}", record.sound));
                                ui.label(format!("훈: {}", record.meaning));
                            }
                        });
                    });
                }
                ui.end_row();
            }
        });
}
