use creature_quiz::QuizApp;
use creature_quiz::ui::layout::pastel_visuals;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando Creature Quiz v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Creature Quiz",
        options,
        Box::new(|cc| {
            // Sin esto las imágenes remotas no se cargan
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(pastel_visuals());
            Ok(Box::new(QuizApp::new()))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirige los mensajes de `log` a console.log y compañía
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");

        let canvas = document
            .get_element_by_id("creature_quiz_canvas")
            .expect("No se encontró el canvas creature_quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("creature_quiz_canvas no es un HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    egui_extras::install_image_loaders(&cc.egui_ctx);
                    cc.egui_ctx.set_visuals(pastel_visuals());
                    Ok(Box::new(QuizApp::new()))
                }),
            )
            .await;

        // Quitar el texto de carga una vez arrancada la app
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => loading_text.remove(),
                Err(e) => {
                    loading_text.set_inner_html("<p>La app no ha podido arrancar.</p>");
                    panic!("Fallo al arrancar eframe: {e:?}");
                }
            }
        }
    });
}
