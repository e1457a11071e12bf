//! WASM bindings for the calq evaluator.
//!
//! Exposes `evaluate()`, `compute()` and `evaluateDetailed()` to JavaScript
//! via wasm-bindgen.

use wasm_bindgen::prelude::*;

/// Evaluate an expression. Throws a JS error carrying the message on failure.
#[wasm_bindgen]
pub fn evaluate(expr: &str) -> Result<f64, JsError> {
    calq_engine::evaluate(expr).map_err(|e| JsError::new(&e.to_string()))
}

/// Evaluate an expression and return either the result or the error
/// message as a string. Never throws.
#[wasm_bindgen]
pub fn compute(expr: &str) -> String {
    calq_engine::compute(expr)
}

/// Evaluate an expression into a plain JS object
/// `{ ok: boolean, value: number | null, error: string | null, kind: string | null }`.
#[wasm_bindgen(js_name = evaluateDetailed)]
pub fn evaluate_detailed(expr: &str) -> Result<JsValue, JsError> {
    let outcome = Outcome::from_source(expr);

    let js_obj = js_sys::Object::new();
    set(&js_obj, "ok", outcome.ok.into())?;
    set(
        &js_obj,
        "value",
        outcome.value.map(JsValue::from).unwrap_or(JsValue::NULL),
    )?;
    set(
        &js_obj,
        "error",
        outcome.error.map(JsValue::from).unwrap_or(JsValue::NULL),
    )?;
    set(
        &js_obj,
        "kind",
        outcome.kind.map(JsValue::from).unwrap_or(JsValue::NULL),
    )?;

    Ok(js_obj.into())
}

/// Get the evaluator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn set(target: &js_sys::Object, key: &str, value: JsValue) -> Result<(), JsError> {
    js_sys::Reflect::set(target, &key.into(), &value)
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("Failed to set {key} property")))
}

/// Native form of the object returned by `evaluateDetailed`.
#[derive(Debug, Clone, PartialEq)]
struct Outcome {
    ok: bool,
    value: Option<f64>,
    error: Option<String>,
    kind: Option<&'static str>,
}

impl Outcome {
    fn from_source(expr: &str) -> Self {
        match calq_engine::evaluate(expr) {
            Ok(value) => Self {
                ok: true,
                value: Some(value),
                error: None,
                kind: None,
            },
            Err(e) => Self {
                ok: false,
                value: None,
                error: Some(e.to_string()),
                kind: Some(e.kind().as_str()),
            },
        }
    }
}
