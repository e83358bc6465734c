use super::*;

impl QuizApp {
    /// Cuenta los aciertos comparando cada ranura con su respuesta correcta.
    /// Igualdad exacta de cadenas: sensible a mayúsculas y sin recortes.
    pub fn score(&self) -> ScoreResult {
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| answer.as_str() == question.correct_answer)
            .count();
        ScoreResult {
            correct,
            total: self.questions.len(),
        }
    }
}
