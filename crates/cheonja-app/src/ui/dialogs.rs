use eframe::egui::{Context, Id, Modal, Sides};

use crate::action::{Action, ActionRequestQueue};

pub(crate) fn show_message(ctx: &Context, message: &str, action_queue: &mut ActionRequestQueue) {
    let modal = Modal::new(Id::new("message")).show(ctx, |ui| {
        ui.heading("알림");
        ui.add_space(4.0);
        ui.label(message);
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                let ok = ui.button("확인");
                if ui.memory(|memory| memory.focused().is_none()) {
                    ok.request_focus();
                }
                if ok.clicked() {
                    ui.close();
                }
            },
        );
    });
    if modal.should_close() {
        action_queue.request(Action::DismissMessage);
    }
}
