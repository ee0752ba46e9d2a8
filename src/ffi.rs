//! C ABI bindings for native front-ends.
//!
//! Requests and responses are JSON strings:
//!
//! ```text
//! request:  {"points": [[x, y], ...], "strategy": "auto", "closed": true, "time_budget_s": null}
//! response: {"points": [[x, y], ...]}
//!           {"edges": [[parent, child], ...]}
//!           {"error": {"kind": "invalid_input", "message": "..."}}
//! ```
//!
//! Every string returned across the boundary must be released with
//! [`u_tour_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Result, TourError};
use crate::models::{AsPoint, Point};
use crate::solver::{find_path, SolveOptions};
use crate::spanning::compute_mst;

impl AsPoint for Value {
    fn to_point(&self) -> Result<Point> {
        let coords = self
            .as_array()
            .ok_or_else(|| TourError::invalid_input(format!("expected an [x, y] array, got {self}")))?;
        let xy = coords
            .iter()
            .map(|c| {
                c.as_f64()
                    .ok_or_else(|| TourError::invalid_input(format!("coordinate {c} is not a number")))
            })
            .collect::<Result<Vec<f64>>>()?;
        xy.to_point()
    }
}

fn error_json(e: &TourError) -> String {
    json!({ "error": { "kind": e.kind(), "message": e.to_string() } }).to_string()
}

#[derive(Deserialize)]
struct Request {
    points: Vec<Value>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    closed: Option<bool>,
    #[serde(default)]
    time_budget_s: Option<f64>,
}

fn parse_request(request: &str) -> Result<Request> {
    serde_json::from_str(request)
        .map_err(|e| TourError::invalid_input(format!("malformed request: {e}")))
}

fn solve(request: &str) -> Result<Vec<Point>> {
    let request = parse_request(request)?;
    let options = SolveOptions::from_parts(
        request.strategy.as_deref(),
        request.closed,
        request.time_budget_s,
    )?;
    find_path(&request.points, &options)
}

/// Handles a `find_path` request; see the module docs for the format.
pub fn find_path_json(request: &str) -> String {
    match solve(request) {
        Ok(route) => json!({ "points": route }).to_string(),
        Err(e) => error_json(&e),
    }
}

/// Handles a `compute_mst` request; only `points` is read.
pub fn compute_mst_json(request: &str) -> String {
    match parse_request(request).and_then(|r| compute_mst(&r.points)) {
        Ok(edges) => json!({ "edges": edges }).to_string(),
        Err(e) => error_json(&e),
    }
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// # Safety
///
/// `request` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
unsafe fn respond(request: *const c_char, handler: fn(&str) -> String) -> *mut c_char {
    if request.is_null() {
        return into_c_string(error_json(&TourError::invalid_input("null request")));
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let text = unsafe { CStr::from_ptr(request) };
    match text.to_str() {
        Ok(text) => into_c_string(handler(text)),
        Err(_) => into_c_string(error_json(&TourError::invalid_input(
            "request is not valid UTF-8",
        ))),
    }
}

/// Runs [`find_path_json`] on a C string.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string. The result must
/// be released with [`u_tour_free_string`].
#[no_mangle]
pub unsafe extern "C" fn u_tour_find_path_json(request: *const c_char) -> *mut c_char {
    unsafe { respond(request, find_path_json) }
}

/// Runs [`compute_mst_json`] on a C string.
///
/// # Safety
///
/// Same contract as [`u_tour_find_path_json`].
#[no_mangle]
pub unsafe extern "C" fn u_tour_compute_mst_json(request: *const c_char) -> *mut c_char {
    unsafe { respond(request, compute_mst_json) }
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a pointer returned by one of the `u_tour_*_json`
/// functions that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_tour_free_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: allocated by `CString::into_raw` in `into_c_string`.
        drop(unsafe { CString::from_raw(s) });
    }
}
