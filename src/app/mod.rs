use crate::data::read_questions_embedded;
use crate::model::{Question, ScoreResult};

// Submódulos
pub mod actions;
pub mod queries;

pub struct QuizApp {
    pub questions: Vec<Question>,
    pub answers: Vec<String>, // una ranura por pregunta; "" = sin responder
    pub result: Option<ScoreResult>, // Some mientras el aviso de resultado está abierto
}

impl QuizApp {
    pub fn new() -> Self {
        let questions = read_questions_embedded();
        let answers = vec![String::new(); questions.len()];
        Self {
            questions,
            answers,
            result: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::QuizApp;

    fn correct_answer(app: &QuizApp, index: usize) -> String {
        app.questions[index].correct_answer.clone()
    }

    #[test]
    fn answers_start_empty_and_aligned_with_the_bank() {
        let app = QuizApp::new();
        assert_eq!(app.answers.len(), app.questions.len());
        assert!(app.answers.iter().all(|a| a.is_empty()));
        assert!(app.result.is_none());
    }

    #[test]
    fn selecting_an_answer_only_touches_its_own_slot() {
        let mut app = QuizApp::new();
        app.seleccionar_respuesta(1, "Jittleyang".to_string());
        assert_eq!(app.answers[1], "Jittleyang");
        assert!(app.answers[0].is_empty());
        assert!(app.answers[2].is_empty());
    }

    #[test]
    fn reselecting_overwrites_the_previous_choice() {
        let mut app = QuizApp::new();
        app.seleccionar_respuesta(0, "Dog".to_string());
        app.seleccionar_respuesta(0, "Pom Pom Purin".to_string());
        assert_eq!(app.answers[0], "Pom Pom Purin");
    }

    #[test]
    fn answer_count_is_invariant_across_any_selection_sequence() {
        let mut app = QuizApp::new();
        let total = app.questions.len();
        for i in 0..total {
            app.seleccionar_respuesta(i, "Dog".to_string());
            app.seleccionar_respuesta(i, String::new());
        }
        // Un índice fuera de rango se ignora sin tocar nada
        app.seleccionar_respuesta(999, "Dog".to_string());
        assert_eq!(app.answers.len(), total);
        assert!(app.answers.iter().all(|a| a.is_empty()));
    }

    #[test]
    fn a_full_sheet_of_correct_answers_scores_everything() {
        let mut app = QuizApp::new();
        for i in 0..app.questions.len() {
            let answer = correct_answer(&app, i);
            app.seleccionar_respuesta(i, answer);
        }
        let score = app.score();
        assert_eq!(score.correct, 3);
        assert_eq!(score.total, 3);
        assert_eq!(score.message(), "You got 3 correct answers! 🎉 Great job!");
    }

    #[test]
    fn an_untouched_sheet_scores_zero() {
        let app = QuizApp::new();
        let score = app.score();
        assert_eq!(score.correct, 0);
        assert_eq!(score.message(), "You got 0 correct answers! 😢 Try again!");
    }

    #[test]
    fn one_correct_selection_yields_a_singular_message() {
        let mut app = QuizApp::new();
        let answer = correct_answer(&app, 0);
        app.seleccionar_respuesta(0, answer);
        app.seleccionar_respuesta(1, "Dog".to_string());
        app.seleccionar_respuesta(2, "Hello Kitty".to_string());
        let score = app.score();
        assert_eq!(score.correct, 1);
        assert_eq!(score.message(), "You got 1 correct answer!");
    }

    #[test]
    fn two_correct_selections_yield_a_plural_message() {
        let mut app = QuizApp::new();
        for i in [0, 1] {
            let answer = correct_answer(&app, i);
            app.seleccionar_respuesta(i, answer);
        }
        let score = app.score();
        assert_eq!(score.correct, 2);
        assert_eq!(score.message(), "You got 2 correct answers!");
    }

    #[test]
    fn out_of_domain_values_are_stored_verbatim_and_never_score() {
        let mut app = QuizApp::new();
        app.seleccionar_respuesta(0, "Godzilla".to_string());
        assert_eq!(app.answers[0], "Godzilla");
        assert_eq!(app.score().correct, 0);
    }

    #[test]
    fn comparison_is_case_sensitive_and_untrimmed() {
        let mut app = QuizApp::new();
        app.seleccionar_respuesta(0, "pom pom purin".to_string());
        app.seleccionar_respuesta(1, " Kuri Manju".to_string());
        assert_eq!(app.score().correct, 0);
    }

    #[test]
    fn submitting_opens_the_result_and_closing_discards_it() {
        let mut app = QuizApp::new();
        app.enviar_respuestas();
        let result = app.result.expect("el envío debe dejar un resultado");
        assert_eq!(result.correct, 0);
        assert_eq!(result.total, 3);
        app.cerrar_resultado();
        assert!(app.result.is_none());
    }

    #[test]
    fn submitting_does_not_disturb_the_answer_sheet() {
        let mut app = QuizApp::new();
        app.seleccionar_respuesta(2, "Hello Kitty".to_string());
        app.enviar_respuestas();
        assert_eq!(app.answers, ["", "", "Hello Kitty"]);
    }
}
