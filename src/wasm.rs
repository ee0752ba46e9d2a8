//! WebAssembly bindings for browser front-ends.
//!
//! Points cross the boundary as arrays of `[x, y]` arrays and options as a
//! plain object `{strategy, closed, time_budget_s}` (all optional). Errors are
//! thrown as strings prefixed with the error kind.

use wasm_bindgen::prelude::*;

use crate::error::TourError;
use crate::solver::{self, PathSteps, SolveOptions};

fn to_js_error(e: TourError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn read_points(points_js: &JsValue) -> Result<Vec<Vec<f64>>, JsValue> {
    serde_wasm_bindgen::from_value(points_js.clone())
        .map_err(|e| to_js_error(TourError::invalid_input(format!("points: {e}"))))
}

fn read_options(options_js: &JsValue) -> Result<SolveOptions, JsValue> {
    if options_js.is_undefined() || options_js.is_null() {
        return Ok(SolveOptions::default());
    }
    serde_wasm_bindgen::from_value(options_js.clone())
        .map_err(|e| to_js_error(TourError::invalid_argument(e.to_string())))
}

fn write<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-orders `points` into a route. See [`solver::find_path`].
#[wasm_bindgen(js_name = findPath)]
pub fn find_path_js(points_js: &JsValue, options_js: &JsValue) -> Result<JsValue, JsValue> {
    let points = read_points(points_js)?;
    let options = read_options(options_js)?;
    let route = solver::find_path(&points, &options).map_err(to_js_error)?;
    write(&route)
}

/// Minimum spanning tree edges as `[parent, child]` index pairs.
#[wasm_bindgen(js_name = computeMst)]
pub fn compute_mst_js(points_js: &JsValue) -> Result<JsValue, JsValue> {
    let points = read_points(points_js)?;
    let edges = crate::spanning::compute_mst(&points).map_err(to_js_error)?;
    write(&edges)
}

/// Pull-based step-wise search. Call `next()` once per animation frame.
#[wasm_bindgen]
pub struct PathStepper {
    inner: PathSteps,
}

#[wasm_bindgen]
impl PathStepper {
    #[wasm_bindgen(constructor)]
    pub fn new(points_js: &JsValue, options_js: &JsValue) -> Result<PathStepper, JsValue> {
        let points = read_points(points_js)?;
        let options = read_options(options_js)?;
        let inner = solver::find_path_step(&points, &options).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// The next intermediate route, or `undefined` when the search is done.
    #[wasm_bindgen(js_name = next)]
    pub fn next_frame(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.next() {
            Some(frame) => write(&frame),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Name of the strategy actually running (`auto` resolved).
    #[wasm_bindgen(getter)]
    pub fn strategy(&self) -> String {
        self.inner.strategy().to_string()
    }
}
