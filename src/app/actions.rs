use super::*;

impl QuizApp {
    /// Guarda la selección de una pregunta. El valor no se valida contra las
    /// opciones de esa pregunta: uno fuera de la lista se guarda tal cual y
    /// simplemente nunca puntuará.
    pub fn seleccionar_respuesta(&mut self, index: usize, valor: String) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = valor;
        }
    }

    /// Corrige todas las respuestas y abre el aviso con el resultado.
    pub fn enviar_respuestas(&mut self) {
        let resultado = self.score();
        log::info!(
            "Respuestas enviadas: {}/{} aciertos",
            resultado.correct,
            resultado.total
        );
        self.result = Some(resultado);
    }

    pub fn cerrar_resultado(&mut self) {
        self.result = None;
    }
}
