// src/data.rs

use crate::model::Question;

/// Carga el banco de preguntas desde el YAML embebido.
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/quiz_questions.yaml");
    let questions: Vec<Question> =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML");

    // Invariante de autoría: la respuesta correcta es siempre una opción no vacía.
    // Así una pregunta sin responder ("") nunca puede puntuar como acierto.
    for (i, q) in questions.iter().enumerate() {
        assert!(
            !q.correct_answer.is_empty() && q.options.contains(&q.correct_answer),
            "Pregunta {}: la respuesta correcta {:?} no está entre las opciones",
            i + 1,
            q.correct_answer
        );
    }

    log::debug!("Banco de preguntas cargado: {} preguntas", questions.len());
    questions
}
