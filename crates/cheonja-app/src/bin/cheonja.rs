//! Cheonja desktop and web entry point.
//!
//! Native builds open a window; wasm32 builds attach to the page canvas with
//! the id `the_canvas_id`.

use cheonja_app::CheonjaApp;
use eframe::CreationContext;

#[cfg(not(target_arch = "wasm32"))]
const TITLE: &str = "천자문";

fn create_app(cc: &CreationContext<'_>) -> Box<dyn eframe::App> {
    log::debug!("creating app (persistence: {})", cc.storage.is_some());
    Box::new(CheonjaApp::new(cc))
}

#[cfg(not(target_arch = "wasm32"))]
fn native_options() -> eframe::NativeOptions {
    const APP_ID: &str = "io.github.gifnksm.cheonja";

    eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(TITLE)
            .with_inner_size((900.0, 720.0))
            .with_min_inner_size((480.0, 400.0)),
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("cheonja {} starting", env!("CARGO_PKG_VERSION"));
    eframe::run_native(TITLE, native_options(), Box::new(|cc| Ok(create_app(cc))))
}

#[cfg(target_arch = "wasm32")]
mod web {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};
    use web_sys::{Document, HtmlCanvasElement};

    pub(crate) const CANVAS_ID: &str = "the_canvas_id";
    const LOADING_ID: &str = "loading_text";

    pub(crate) fn document() -> Result<Document, JsValue> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    pub(crate) fn canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("canvas element is not a <canvas>"))
    }

    /// Replaces the loading text once startup has finished or failed.
    pub(crate) fn report_start(document: &Document, result: &Result<(), JsValue>) {
        let Some(loading_text) = document.get_element_by_id(LOADING_ID) else {
            return;
        };
        match result {
            Ok(()) => loading_text.remove(),
            Err(e) => {
                log::error!("failed to start: {e:?}");
                loading_text.set_inner_html("<p>천자문을 시작하지 못했습니다. 개발자 콘솔을 확인해 주세요.</p>");
            }
        }
    }

    pub(crate) fn install_panic_alert_hook() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            previous(panic_info);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!("cheonja crashed:\n\n{panic_info}"));
            }
        }));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    web::install_panic_alert_hook();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("cheonja {} starting (web)", env!("CARGO_PKG_VERSION"));

    wasm_bindgen_futures::spawn_local(async {
        let document = match web::document() {
            Ok(document) => document,
            Err(e) => {
                log::error!("failed to start: {e:?}");
                return;
            }
        };
        let result = match web::canvas(&document) {
            Ok(canvas) => {
                eframe::WebRunner::new()
                    .start(
                        canvas,
                        eframe::WebOptions::default(),
                        Box::new(|cc| Ok(create_app(cc))),
                    )
                    .await
            }
            Err(e) => Err(e),
        };
        web::report_start(&document, &result);
    });
}
