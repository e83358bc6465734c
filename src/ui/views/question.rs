use egui::{ComboBox, CornerRadius, Image, RichText, Ui};

use crate::model::Question;
use crate::ui::layout::{PROMPT_GREY, card_frame};

/// Etiqueta de la entrada centinela "sin selección" (su valor es la cadena vacía).
pub const SIN_SELECCION: &str = "Select an item...";

// Enunciado fijo de todas las tarjetas, como en el quiz original.
const PROMPT: &str = "What little guy is this?";

/// Tarjeta de una pregunta: imagen, enunciado fijo y desplegable de opciones.
///
/// Puramente presentacional: la entrada mostrada refleja siempre `seleccion`
/// (la cadena vacía muestra la centinela) y el valor devuelto es `Some(valor)`
/// exactamente cuando el usuario ha cambiado la entrada en este frame.
/// Repintar con la misma selección devuelve `None`.
pub fn question_card(
    ui: &mut Ui,
    index: usize,
    question: &Question,
    seleccion: &str,
    width: f32,
) -> Option<String> {
    let mut actual = seleccion.to_owned();

    card_frame().show(ui, |ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui| {
            // La carga (y el fallo de carga) son cosa del loader de imágenes;
            // aquí solo se entrega el localizador.
            ui.add(
                Image::new(question.image_uri.as_str())
                    .max_size(egui::vec2(width - 30.0, 200.0))
                    .corner_radius(CornerRadius::same(10)),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(PROMPT).color(PROMPT_GREY).strong().size(16.0));
            ui.add_space(8.0);

            let mostrado = if actual.is_empty() {
                SIN_SELECCION.to_owned()
            } else {
                actual.clone()
            };
            ComboBox::from_id_salt(("pregunta", index))
                .width(width - 30.0)
                .selected_text(mostrado)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut actual, String::new(), SIN_SELECCION);
                    for opcion in &question.options {
                        ui.selectable_value(&mut actual, opcion.clone(), opcion.as_str());
                    }
                });
        });
    });

    // Solo hay evento si la entrada mostrada ha cambiado de verdad
    if actual != seleccion { Some(actual) } else { None }
}
