//! Scroll parallax: three transforms scrubbed from the live scroll position.
//!
//! Recomputed every frame rather than on scroll events, so the transforms
//! stay a pure function of the current position and reverse exactly.

use crate::dom;
use crate::input;
use lume_core::{column_offset_y, scroll_progress, text_offset_x, ColumnSide};
use web_sys as web;

pub struct ScrollParallax {
    pub wrapper: web::HtmlElement,
    pub text: web::HtmlElement,
    pub column_left: web::HtmlElement,
    pub column_right: web::HtmlElement,
}

impl ScrollParallax {
    pub fn frame(&self, window: &web::Window) {
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
        let (screen_w, viewport_h) = dom::viewport_size(window);

        // Document-absolute top of the bound region.
        let rect = self.wrapper.get_bounding_client_rect();
        let wrapper_top = rect.top() as f32 + scroll_y;
        let wrapper_height = rect.height() as f32;

        let p = scroll_progress(scroll_y, wrapper_top, wrapper_height, viewport_h);

        let text_w = self.text.offset_width() as f32;
        dom::set_style(
            &self.text,
            "transform",
            &input::translate_x(text_offset_x(p, text_w, screen_w)),
        );
        dom::set_style(
            &self.column_left,
            "transform",
            &input::translate_y(column_offset_y(p, ColumnSide::Left)),
        );
        dom::set_style(
            &self.column_right,
            "transform",
            &input::translate_y(column_offset_y(p, ColumnSide::Right)),
        );
    }
}
