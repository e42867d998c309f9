//! Page-visibility handling: the audio element pauses while the page is
//! hidden and resumes when it returns, but only when the toggle is in
//! Playing. The wave and ripple loops are deliberately left running.

use crate::dom;
use lume_core::AudioToggle;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_visibility(audio_toggle: Rc<RefCell<AudioToggle>>, audio: web::HtmlAudioElement) {
    dom::add_document_listener("visibilitychange", move || {
        if !audio_toggle.borrow().is_playing() {
            return;
        }
        let Ok(document) = dom::document() else {
            return;
        };
        if document.hidden() {
            let _ = audio.pause();
        } else if let Err(e) = audio.play() {
            log::warn!("[audio] resume rejected: {:?}", e);
        }
    });
}
