use egui::{Button, Color32, CornerRadius, Frame, Margin, RichText, Shadow, Stroke, Ui, Visuals};

// Paleta del quiz original: fondo rosa pálido y acentos rosa fuerte.
pub const PANEL_PINK: Color32 = Color32::from_rgb(0xff, 0xe4, 0xe1);
pub const ACCENT_PINK: Color32 = Color32::from_rgb(0xff, 0x6f, 0x91);
pub const BORDER_PINK: Color32 = Color32::from_rgb(0xff, 0xc0, 0xcb);
pub const PROMPT_GREY: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);

/// Visuals pastel de toda la app; se aplican una vez al crearla.
pub fn pastel_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = PANEL_PINK;
    visuals.window_fill = Color32::WHITE; // el aviso de resultado va sobre blanco
    visuals.selection.bg_fill = ACCENT_PINK;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_PINK);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_PINK);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(8);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(8);
    visuals.widgets.active.corner_radius = CornerRadius::same(8);
    visuals.widgets.open.corner_radius = CornerRadius::same(8);
    visuals
}

/// Tarjeta blanca con esquinas redondeadas y sombra, como las del quiz original.
pub fn card_frame() -> Frame {
    Frame::default()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(15))
        .inner_margin(Margin::same(15))
        .shadow(Shadow {
            offset: [0, 4],
            blur: 4,
            spread: 0,
            color: Color32::from_black_alpha(77),
        })
}

/// Botón rosa tipo píldora, centrado en el ancho dado. Devuelve si se ha pulsado.
pub fn pill_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    let text = RichText::new(label)
        .color(Color32::WHITE)
        .strong()
        .size(18.0);
    ui.add_sized(
        [width, 48.0],
        Button::new(text)
            .fill(ACCENT_PINK)
            .corner_radius(CornerRadius::same(24)),
    )
    .clicked()
}
