// ============================================================================
// GOOGLE FFI - Google Identity Services (script cargado en index.html)
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use crate::config::CONFIG;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize, catch)]
    fn gis_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton, catch)]
    fn gis_render_button(parent: &Element, options: &JsValue) -> Result<(), JsValue>;
}

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// `google.accounts.id.initialize` una sola vez; el callback entrega la credencial
fn initialize() -> Result<(), JsValue> {
    if INITIALIZED.with(Cell::get) {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string());
        match credential {
            Some(credential) => crate::handle_google_credential(credential),
            None => log::error!("❌ [GOOGLE] Respuesta sin credencial"),
        }
    }) as Box<dyn FnMut(JsValue)>);

    let config = js_sys::Object::new();
    set(&config, "client_id", &JsValue::from_str(&CONFIG.google_client_id))?;
    set(&config, "callback", callback.as_ref())?;
    gis_initialize(&config)?;

    // Vive mientras viva la página
    callback.forget();
    INITIALIZED.with(|flag| flag.set(true));
    log::info!("✅ [GOOGLE] Identity Services inicializado");
    Ok(())
}

/// Dibuja el botón de Google dentro de `#google-signin` si está en pantalla
pub fn render_google_button() {
    if CONFIG.google_client_id.is_empty() {
        log::debug!("🔕 [GOOGLE] Sin GOOGLE_CLIENT_ID, se omite el botón");
        return;
    }
    let container = match crate::dom::get_element_by_id("google-signin") {
        Some(el) => el,
        None => return,
    };

    let result = initialize().and_then(|_| {
        let options = js_sys::Object::new();
        set(&options, "theme", &JsValue::from_str("outline"))?;
        set(&options, "size", &JsValue::from_str("large"))?;
        set(&options, "text", &JsValue::from_str("signin_with"))?;
        gis_render_button(&container, &options)
    });
    if let Err(e) = result {
        log::warn!("⚠️ [GOOGLE] No se pudo dibujar el botón: {:?}", e);
    }
}
