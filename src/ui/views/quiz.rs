use egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::QuizApp;
use crate::ui::layout::{ACCENT_PINK, pill_button};
use crate::ui::views::question::question_card;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 480.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.heading(
                        RichText::new("🐶 Creature Quiz 🐱")
                            .color(ACCENT_PINK)
                            .strong()
                            .size(28.0),
                    );
                    ui.add_space(16.0);

                    // Las tarjetas solo leen; el cambio se aplica al salir del bucle.
                    let mut cambio: Option<(usize, String)> = None;
                    for (index, question) in app.questions.iter().enumerate() {
                        if let Some(valor) =
                            question_card(ui, index, question, &app.answers[index], panel_width)
                        {
                            cambio = Some((index, valor));
                        }
                        ui.add_space(14.0);
                    }
                    if let Some((index, valor)) = cambio {
                        app.seleccionar_respuesta(index, valor);
                    }

                    ui.add_space(6.0);
                    if pill_button(ui, "Submit Answers", panel_width * 0.6) {
                        app.enviar_respuestas();
                    }
                    ui.add_space(24.0);
                });
            });
    });
}
