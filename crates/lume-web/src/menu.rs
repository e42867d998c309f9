//! Maps timeline output onto the menu DOM.

use crate::dom;
use crate::input;
use lume_core::{MenuController, Sample, Target, TweenEvent};
use web_sys as web;

pub const BURGER_OPEN_CLASS: &str = "open";

pub struct MenuDom {
    pub panel: web::HtmlElement,
    pub logo: web::HtmlElement,
    pub items: Vec<web::HtmlElement>,
}

impl MenuDom {
    /// Initial pose: panel parked off-screen and inert, items below their
    /// slots and invisible.
    pub fn init(&self) {
        self.apply(Target::MenuPanel, MenuController::closed_panel_rest());
        dom::set_style(&self.panel, "pointer-events", "none");
        for i in 0..self.items.len() {
            self.apply(
                Target::MenuItem(i),
                Sample {
                    offset_y: lume_core::MENU_ITEM_REST_OFFSET_Y,
                    opacity: 0.0,
                },
            );
        }
    }

    /// Write one tween sample. The panel's offset is a percentage of its own
    /// height; logo and items move in pixels.
    pub fn apply(&self, target: Target, sample: Sample) {
        match target {
            Target::MenuPanel => {
                dom::set_style(
                    &self.panel,
                    "transform",
                    &input::translate_y_percent(sample.offset_y),
                );
                dom::set_style(&self.panel, "opacity", &input::opacity_value(sample.opacity));
            }
            Target::Logo => {
                dom::set_style(&self.logo, "transform", &input::translate_y(sample.offset_y));
                dom::set_style(&self.logo, "opacity", &input::opacity_value(sample.opacity));
            }
            Target::MenuItem(i) => {
                if let Some(el) = self.items.get(i) {
                    dom::set_style(el, "transform", &input::translate_y(sample.offset_y));
                    dom::set_style(el, "opacity", &input::opacity_value(sample.opacity));
                }
            }
        }
    }

    /// Interactivity gating: the panel accepts pointer events from the moment
    /// its opening tween starts until its closing tween completes.
    pub fn on_event(&self, event: TweenEvent, open: bool) {
        match event {
            TweenEvent::Started(Target::MenuPanel) if open => {
                dom::set_style(&self.panel, "pointer-events", "auto");
            }
            TweenEvent::Completed(Target::MenuPanel) if !open => {
                dom::set_style(&self.panel, "pointer-events", "none");
            }
            _ => {}
        }
    }
}
