// Host-side tests for pure helper functions.
// The crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn backing_size_applies_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(1024.5, 768.25, 1.0), (1024, 768));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
    assert_eq!(backing_size(0.4, 0.4, 1.0), (1, 1));
}

#[test]
fn marker_offset_centers_the_marker_on_the_click() {
    // Click at 100 over an element edge at 40 with a 60px marker: the
    // marker's top-left lands 30px in, putting its center on the click.
    assert_eq!(marker_offset(100.0, 40.0, 60.0), 30.0);
    assert_eq!(marker_offset(10.0, 40.0, 60.0), -60.0);
}

#[test]
fn transform_and_style_formatting() {
    assert_eq!(px_value(12.5), "12.50px");
    assert_eq!(opacity_value(0.5), "0.500");
    assert_eq!(translate_x(-3000.0), "translateX(-3000.00px)");
    assert_eq!(translate_y(20.0), "translateY(20.00px)");
    assert_eq!(translate_y_percent(-100.0), "translateY(-100.00%)");
}
