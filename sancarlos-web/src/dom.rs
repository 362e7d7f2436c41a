//! Small DOM helpers shared by the navbar and weather units.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Collect every element matching `selector`. Missing matches or an invalid
/// selector yield an empty list; per-operation absence is never an error.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
