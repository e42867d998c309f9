//! Audio toggle side effects: element playback, wave path writes, and the
//! transient click marker.

use crate::dom;
use crate::input;
use anyhow::{anyhow, Result};
use lume_core::{CLICK_MARKER_LIFETIME_MS, CLICK_MARKER_SIZE_PX, FLAT_WAVE_PATH};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PLAYING_CLASS: &str = "playing";
pub const RIPPLE_MARKER_CLASS: &str = "ripple";

struct MarkerHandle {
    el: web::Element,
    timer_id: i32,
    // Owning the closure keeps the callback alive until the timer fires or
    // is cancelled; dropping the handle cancels cleanly with no leak.
    _closure: Closure<dyn FnMut()>,
}

pub struct AudioDom {
    pub toggle: web::HtmlElement,
    pub audio: web::HtmlAudioElement,
    pub wave_path: web::Element,
    marker: Option<MarkerHandle>,
}

impl AudioDom {
    /// The wave icon starts flat.
    pub fn new(
        toggle: web::HtmlElement,
        audio: web::HtmlAudioElement,
        wave_path: web::Element,
    ) -> Self {
        let this = Self {
            toggle,
            audio,
            wave_path,
            marker: None,
        };
        this.set_flat();
        this
    }

    pub fn set_flat(&self) {
        let _ = self.wave_path.set_attribute("d", FLAT_WAVE_PATH);
    }

    pub fn set_path(&self, d: &str) {
        let _ = self.wave_path.set_attribute("d", d);
    }

    pub fn start_playback(&self) {
        if let Err(e) = self.audio.play() {
            log::warn!("[audio] play rejected: {:?}", e);
        }
        dom::add_class(&self.toggle, PLAYING_CLASS);
    }

    pub fn stop_playback(&self) {
        let _ = self.audio.pause();
        dom::remove_class(&self.toggle, PLAYING_CLASS);
        self.set_flat();
    }

    /// Spawn the transient click marker at the event position. Any pending
    /// marker is cancelled and removed first, so rapid toggling never
    /// accumulates markers or orphaned timers.
    pub fn spawn_marker(
        &mut self,
        document: &web::Document,
        window: &web::Window,
        ev: &web::MouseEvent,
    ) -> Result<()> {
        self.clear_marker(window);

        let el = document
            .create_element("span")
            .map_err(|e| anyhow!(format!("marker: {:?}", e)))?;
        dom::add_class(&el, RIPPLE_MARKER_CLASS);
        let rect = self.toggle.get_bounding_client_rect();
        let left = input::marker_offset(ev.client_x() as f64, rect.left(), CLICK_MARKER_SIZE_PX);
        let top = input::marker_offset(ev.client_y() as f64, rect.top(), CLICK_MARKER_SIZE_PX);
        let size = input::px_value(CLICK_MARKER_SIZE_PX as f32);
        let style = format!(
            "width:{size};height:{size};left:{};top:{}",
            input::px_value(left as f32),
            input::px_value(top as f32),
        );
        let _ = el.set_attribute("style", &style);
        self.toggle
            .append_child(&el)
            .map_err(|e| anyhow!(format!("marker: {:?}", e)))?;

        let el_rm = el.clone();
        let closure = Closure::wrap(Box::new(move || el_rm.remove()) as Box<dyn FnMut()>);
        let timer_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                CLICK_MARKER_LIFETIME_MS,
            )
            .map_err(|e| anyhow!(format!("marker timer: {:?}", e)))?;
        self.marker = Some(MarkerHandle {
            el,
            timer_id,
            _closure: closure,
        });
        Ok(())
    }

    fn clear_marker(&mut self, window: &web::Window) {
        if let Some(m) = self.marker.take() {
            window.clear_timeout_with_handle(m.timer_id);
            m.el.remove();
        }
    }
}
