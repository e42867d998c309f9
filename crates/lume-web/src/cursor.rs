//! Applies cursor follower state to the two marker elements.

use crate::dom;
use crate::input;
use glam::Vec2;
use web_sys as web;

pub const CLICK_EFFECT_CLASS: &str = "click-effect";

#[inline]
pub fn place(el: &web::HtmlElement, pos: Vec2) {
    dom::set_style(el, "left", &input::px_value(pos.x));
    dom::set_style(el, "top", &input::px_value(pos.y));
}

/// Press feedback on both markers.
pub fn set_click_effect(inner: &web::HtmlElement, outer: &web::HtmlElement, pressed: bool) {
    if pressed {
        dom::add_class(inner, CLICK_EFFECT_CLASS);
        dom::add_class(outer, CLICK_EFFECT_CLASS);
    } else {
        dom::remove_class(inner, CLICK_EFFECT_CLASS);
        dom::remove_class(outer, CLICK_EFFECT_CLASS);
    }
}
