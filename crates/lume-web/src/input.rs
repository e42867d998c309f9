// Pure math and formatting helpers shared by the event wiring and DOM
// application code. Kept free of web-sys so the host-side tests can include
// this file directly.

/// Canvas backing size for a CSS size and device pixel ratio, never zero.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    (((css_w * dpr) as u32).max(1), ((css_h * dpr) as u32).max(1))
}

/// Top-left offset of a marker centered on the click point, relative to the
/// element edge it is appended to.
#[inline]
pub fn marker_offset(client: f64, rect_edge: f64, marker_size: f64) -> f64 {
    client - rect_edge - marker_size / 2.0
}

#[inline]
pub fn px_value(v: f32) -> String {
    format!("{v:.2}px")
}

#[inline]
pub fn opacity_value(o: f32) -> String {
    format!("{o:.3}")
}

#[inline]
pub fn translate_x(px: f32) -> String {
    format!("translateX({px:.2}px)")
}

#[inline]
pub fn translate_y(px: f32) -> String {
    format!("translateY({px:.2}px)")
}

/// Percentage translation, relative to the element's own height.
#[inline]
pub fn translate_y_percent(pct: f32) -> String {
    format!("translateY({pct:.2}%)")
}
