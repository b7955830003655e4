use wasm_bindgen::prelude::*;

pub mod chords;
pub mod error;
pub mod notation;
pub mod theory;

pub use chords::types::{ChordRequest, ChordResult, ScaleInfo};
pub use error::ChordError;
pub use theory::scales::ScaleType;

fn js_err(e: ChordError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn profile_from_js(profile: &[u32]) -> Vec<usize> {
    profile.iter().map(|&o| o as usize).collect()
}

/// Installs the panic hook and routes `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        // A second init (e.g. module re-instantiated) keeps the first logger.
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// Generate a chord from a `ChordRequest` object, returning a `ChordResult`.
#[wasm_bindgen]
pub fn generate_chord(request_js: JsValue) -> Result<JsValue, JsValue> {
    let request: ChordRequest = serde_wasm_bindgen::from_value(request_js)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let result = request.generate().map_err(js_err)?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn build_chord(
    scale_type: &str,
    tonic: &str,
    root_degree: u32,
    profile: &[u32],
) -> Result<JsValue, JsValue> {
    let scale_type: ScaleType = scale_type.parse().map_err(js_err)?;
    let chord = chords::builder::build_chord(
        scale_type,
        tonic,
        root_degree as usize,
        &profile_from_js(profile),
    )
    .map_err(js_err)?;
    serde_wasm_bindgen::to_value(&chord).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn build_chord_with_inversion(
    scale_type: &str,
    tonic: &str,
    root_degree: u32,
    profile: &[u32],
    inversion: i32,
) -> Result<JsValue, JsValue> {
    let scale_type: ScaleType = scale_type.parse().map_err(js_err)?;
    let chord = chords::builder::build_chord_with_inversion(
        scale_type,
        tonic,
        root_degree as usize,
        &profile_from_js(profile),
        inversion as i64,
    )
    .map_err(js_err)?;
    serde_wasm_bindgen::to_value(&chord).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate an array of note names.
#[wasm_bindgen]
pub fn invert_chord(chord_js: JsValue, inversion: i32) -> Result<JsValue, JsValue> {
    let chord: Vec<String> =
        serde_wasm_bindgen::from_value(chord_js).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let inverted = chords::inversion::invert(&chord, inversion as i64);
    serde_wasm_bindgen::to_value(&inverted).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn lookup_scale(tonic: &str, scale_type: &str) -> Result<JsValue, JsValue> {
    let scale = theory::scales::lookup_scale_named(tonic, scale_type).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&scale.to_vec()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn verify_scale(scale_type: &str, tonic: &str) -> Result<(), JsValue> {
    theory::verify::verify_named(scale_type, tonic).map_err(js_err)
}

/// Check every catalog row; returns the failure messages (empty when clean).
#[wasm_bindgen]
pub fn verify_catalog() -> Result<JsValue, JsValue> {
    let failures: Vec<String> = theory::verify::verify_catalog()
        .iter()
        .map(|e| e.to_string())
        .collect();
    serde_wasm_bindgen::to_value(&failures).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn list_scale_types() -> js_sys::Array {
    ScaleType::ALL
        .iter()
        .map(|t| JsValue::from_str(t.name()))
        .collect()
}

/// Intervals and stored tonics for every scale type.
#[wasm_bindgen]
pub fn get_catalog() -> Result<JsValue, JsValue> {
    let catalog: Vec<ScaleInfo> = ScaleType::ALL
        .iter()
        .map(|&t| ScaleInfo {
            scale_type: t.to_string(),
            intervals: t.intervals().to_vec(),
            tonics: theory::scales::catalog_entries(t)
                .iter()
                .map(|(key, _)| key.to_string())
                .collect(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&catalog).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn chord_to_musicxml(chord_js: JsValue) -> Result<String, JsValue> {
    let chord: Vec<String> =
        serde_wasm_bindgen::from_value(chord_js).map_err(|e| JsValue::from_str(&e.to_string()))?;
    notation::musicxml::chord_to_musicxml(&chord).map_err(js_err)
}

#[wasm_bindgen]
pub fn read_chords(xml: &str) -> Result<JsValue, JsValue> {
    let chords = notation::musicxml::read_chords(xml).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&chords).map_err(|e| JsValue::from_str(&e.to_string()))
}
