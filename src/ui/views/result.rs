use egui::{Context, Id, Modal, RichText};

use crate::QuizApp;
use crate::ui::layout::{ACCENT_PINK, pill_button};

/// Aviso modal con la puntuación. Bloquea el resto de la pantalla hasta
/// que el usuario lo cierra (botón o clic fuera).
pub fn ui_resultado(app: &mut QuizApp, ctx: &Context) {
    let result = match app.result {
        Some(result) => result,
        None => return,
    };

    let mut cerrar = false;
    let modal = Modal::new(Id::new("quiz_result")).show(ctx, |ui| {
        ui.set_width(260.0);
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.heading(RichText::new("Quiz Result").color(ACCENT_PINK).strong());
            ui.add_space(10.0);
            ui.label(result.message());
            ui.add_space(14.0);
            if pill_button(ui, "OK", 120.0) {
                cerrar = true;
            }
            ui.add_space(4.0);
        });
    });

    if cerrar || modal.should_close() {
        app.cerrar_resultado();
    }
}
