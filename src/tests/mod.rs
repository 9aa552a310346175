use layout21::raw::{Cell, Rect, Shape};
use layout21::utils::Ptr;

use crate::PdkLib;


/// Collects the rectangles a cell draws on the named layer.
pub(crate) fn layer_rects(lib: &PdkLib, cell: &Ptr<Cell>, layer: &str) -> Vec<Rect> {
    let key = lib.pdk.get_layerkey(layer).unwrap();
    let cell = cell.read().unwrap();
    let layout = cell.layout.as_ref().unwrap();
    layout
        .elems
        .iter()
        .filter(|e| e.layer == key)
        .filter_map(|e| match &e.inner {
            Shape::Rect(r) => Some(r.clone()),
            _ => None,
        })
        .collect()
}

/// Finds the rectangle on the named layer carrying the given label text.
pub(crate) fn labeled_rect(lib: &PdkLib, cell: &Ptr<Cell>, layer: &str, text: &str) -> Option<Rect> {
    let key = lib.pdk.get_layerkey(layer).unwrap();
    let cell = cell.read().unwrap();
    let layout = cell.layout.as_ref().unwrap();
    layout
        .elems
        .iter()
        .find(|e| e.layer == key && e.net.as_deref() == Some(text))
        .and_then(|e| match &e.inner {
            Shape::Rect(r) => Some(r.clone()),
            _ => None,
        })
}
