use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub image_uri: String,    // localizador opaco; la carga es cosa del loader de imágenes
    pub options: Vec<String>, // en el orden en que se muestran
    pub correct_answer: String,
}

/// Resultado de una corrección. Se calcula en cada envío a partir de las
/// respuestas actuales y se descarta al cerrar el aviso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
}

impl ScoreResult {
    /// Mensaje del aviso de resultado. Plural salvo con exactamente 1 acierto;
    /// sufijo de celebración con pleno y de ánimo con cero.
    pub fn message(&self) -> String {
        let mut message = format!(
            "You got {} correct answer{}!",
            self.correct,
            if self.correct == 1 { "" } else { "s" }
        );
        if self.correct == self.total {
            message.push_str(" 🎉 Great job!");
        } else if self.correct == 0 {
            message.push_str(" 😢 Try again!");
        }
        message
    }
}
