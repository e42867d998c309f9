#![cfg(target_arch = "wasm32")]

mod audio;
mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod menu;
mod render;
mod scroll;

use audio::AudioDom;
use events::{MenuWiring, MusicWiring, PointerWiring};
use instant::Instant;
use lume_core::{AudioToggle, CursorFollower, MenuController, RippleState, Timeline};
use menu::MenuDom;
use scroll::ScrollParallax;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lume-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::document()?;
    let els = dom::PageElements::resolve(&document)?;

    // Keep the canvas backing store at CSS size * devicePixelRatio.
    dom::sync_canvas_backing_size(&els.canvas);
    {
        let canvas_resize = els.canvas.clone();
        dom::add_window_listener("resize", move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }

    // Shared effect state
    let cursor = Rc::new(RefCell::new(CursorFollower::new()));
    let ripple = Rc::new(RefCell::new(RippleState::new()));
    let menu_ctl = Rc::new(RefCell::new(MenuController::new(els.menu_items.len())));
    let timeline = Rc::new(RefCell::new(Timeline::new()));
    let audio_toggle = Rc::new(RefCell::new(AudioToggle::new()));
    let wave_raf: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

    let menu_dom = MenuDom {
        panel: els.menu.clone(),
        logo: els.logo.clone(),
        items: els.menu_items.clone(),
    };
    menu_dom.init();

    let audio_dom = Rc::new(RefCell::new(AudioDom::new(
        els.music_toggle.clone(),
        els.audio.clone(),
        els.wave_path.clone(),
    )));

    events::wire_pointer_handlers(PointerWiring {
        cursor: cursor.clone(),
        ripple: ripple.clone(),
        cursor_inner: els.cursor_inner.clone(),
        cursor_outer: els.cursor_outer.clone(),
    });
    events::wire_burger(MenuWiring {
        burger: els.burger.clone(),
        menu_ctl: menu_ctl.clone(),
        timeline: timeline.clone(),
    });
    events::wire_music_toggle(MusicWiring {
        toggle_el: els.music_toggle.clone(),
        audio_toggle: audio_toggle.clone(),
        audio_dom: audio_dom.clone(),
        wave_raf: wave_raf.clone(),
    });
    events::wire_visibility(audio_toggle.clone(), els.audio.clone());

    let gpu = frame::init_gpu(&els.canvas).await;

    let parallax = ScrollParallax {
        wrapper: els.scroll_wrapper.clone(),
        text: els.scroll_text.clone(),
        column_left: els.column_left.clone(),
        column_right: els.column_right.clone(),
    };

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        cursor,
        cursor_outer: els.cursor_outer.clone(),
        menu_ctl,
        timeline,
        menu_dom,
        parallax,
        ripple,
        canvas: els.canvas.clone(),
        gpu,
        last_instant: Instant::now(),
        samples: Vec::new(),
        events: Vec::new(),
    }));
    frame::start_loop(ctx, frame::RunFlag::new());
    Ok(())
}
