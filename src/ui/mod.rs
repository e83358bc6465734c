pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Pantalla única del quiz
        views::quiz::ui_quiz(self, ctx);

        // Aviso de resultado por encima, mientras esté abierto
        if self.result.is_some() {
            views::result::ui_resultado(self, ctx);
        }
    }
}
