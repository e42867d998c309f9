//! Click wiring for the two state toggles: the burger and the music button.

use crate::audio::AudioDom;
use crate::dom;
use crate::frame;
use crate::menu::BURGER_OPEN_CLASS;
use lume_core::{AudioToggle, MenuController, PlaybackState, Timeline};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct MenuWiring {
    pub burger: web::Element,
    pub menu_ctl: Rc<RefCell<MenuController>>,
    pub timeline: Rc<RefCell<Timeline>>,
}

pub fn wire_burger(w: MenuWiring) {
    let burger_el = w.burger.clone();
    dom::add_click_listener(&burger_el, move |_ev| {
        dom::toggle_class(&w.burger, BURGER_OPEN_CLASS);
        let batch = w.menu_ctl.borrow_mut().toggle();
        if let Err(e) = w.timeline.borrow_mut().play(batch) {
            log::error!("[menu] tween rejected: {e}");
        }
    });
}

#[derive(Clone)]
pub struct MusicWiring {
    pub toggle_el: web::HtmlElement,
    pub audio_toggle: Rc<RefCell<AudioToggle>>,
    pub audio_dom: Rc<RefCell<AudioDom>>,
    pub wave_raf: Rc<RefCell<Option<i32>>>,
}

pub fn wire_music_toggle(w: MusicWiring) {
    let toggle_el = w.toggle_el.clone();
    dom::add_click_listener(&toggle_el, move |ev: web::MouseEvent| {
        let state = w.audio_toggle.borrow_mut().toggle();
        match state {
            PlaybackState::Playing => {
                w.audio_dom.borrow().start_playback();
                frame::start_wave_loop(
                    w.audio_toggle.clone(),
                    w.audio_dom.clone(),
                    w.wave_raf.clone(),
                );
            }
            PlaybackState::Paused => {
                frame::cancel_wave_loop(&w.wave_raf);
                w.audio_dom.borrow().stop_playback();
            }
        }
        // Transient marker at the click point, playing or pausing alike.
        if let (Ok(document), Ok(window)) = (dom::document(), dom::window()) {
            if let Err(e) = w.audio_dom.borrow_mut().spawn_marker(&document, &window, &ev) {
                log::warn!("[audio] marker: {e}");
            }
        }
    });
}
