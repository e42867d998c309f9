//! Pointer wiring: raw position tracking, click feedback, ripple UV.

use crate::cursor;
use crate::dom;
use glam::Vec2;
use lume_core::{CursorFollower, RippleState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub cursor: Rc<RefCell<CursorFollower>>,
    pub ripple: Rc<RefCell<RippleState>>,
    pub cursor_inner: web::HtmlElement,
    pub cursor_outer: web::HtmlElement,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
    wire_mousedown(&w);
    wire_mouseup(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    dom::add_window_mouse_listener("mousemove", move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.cursor.borrow_mut().set_pointer(pos.x, pos.y);
        // The inner marker snaps to the pointer; only the outer one trails.
        cursor::place(&w.cursor_inner, pos);
        if let Some(wnd) = web::window() {
            let (vw, vh) = dom::viewport_size(&wnd);
            w.ripple.borrow_mut().set_pointer_client(pos.x, pos.y, vw, vh);
        }
    });
}

fn wire_mousedown(w: &PointerWiring) {
    let w = w.clone();
    dom::add_window_mouse_listener("mousedown", move |_ev: web::MouseEvent| {
        w.cursor.borrow_mut().set_pressed(true);
        cursor::set_click_effect(&w.cursor_inner, &w.cursor_outer, true);
    });
}

fn wire_mouseup(w: &PointerWiring) {
    let w = w.clone();
    dom::add_window_mouse_listener("mouseup", move |_ev: web::MouseEvent| {
        w.cursor.borrow_mut().set_pressed(false);
        cursor::set_click_effect(&w.cursor_inner, &w.cursor_outer, false);
    });
}
