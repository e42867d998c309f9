//! Per-frame loops: the main effects loop and the wave icon loop.
//!
//! The main loop drives cursor smoothing, menu tweens, the parallax scrub,
//! and the ripple pass. It reschedules itself while its [`RunFlag`] is
//! active, so teardown is a flag flip rather than an orphaned callback. The
//! wave loop is separate and is cancelled by its rAF handle when playback
//! stops.

use crate::audio::AudioDom;
use crate::cursor;
use crate::menu::MenuDom;
use crate::render;
use crate::scroll::ScrollParallax;
use instant::Instant;
use lume_core::{
    AudioToggle, CursorFollower, MenuController, RippleState, Sample, Target, Timeline, TweenEvent,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared stop condition for the self-rescheduling main loop.
#[derive(Clone)]
pub struct RunFlag(Rc<Cell<bool>>);

impl RunFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn stop(&self) {
        self.0.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

pub struct FrameContext {
    pub cursor: Rc<RefCell<CursorFollower>>,
    pub cursor_outer: web::HtmlElement,

    pub menu_ctl: Rc<RefCell<MenuController>>,
    pub timeline: Rc<RefCell<Timeline>>,
    pub menu_dom: MenuDom,

    pub parallax: ScrollParallax,

    pub ripple: Rc<RefCell<RippleState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    pub last_instant: Instant,
    pub samples: Vec<(Target, Sample)>,
    pub events: Vec<TweenEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Trailing cursor
        let outer = self.cursor.borrow_mut().step();
        cursor::place(&self.cursor_outer, outer);

        // Menu tweens
        self.samples.clear();
        self.events.clear();
        self.timeline
            .borrow_mut()
            .tick(dt_sec, &mut self.samples, &mut self.events);
        for (target, sample) in &self.samples {
            self.menu_dom.apply(*target, *sample);
        }
        let open = self.menu_ctl.borrow().is_open();
        for ev in &self.events {
            self.menu_dom.on_event(*ev, open);
        }

        // Parallax scrub
        if let Some(w) = web::window() {
            self.parallax.frame(&w);
        }

        // Ripple pass
        self.ripple.borrow_mut().step_time();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(self.ripple.borrow().uniforms()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, run: RunFlag) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !run.is_active() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Schedule the wave redraw loop. Each tick renders the waveform for the
/// rAF timestamp and reschedules while the toggle stays in Playing; the
/// pending handle is stored so `cancel_wave_loop` can stop it by id.
pub fn start_wave_loop(
    toggle: Rc<RefCell<AudioToggle>>,
    audio_dom: Rc<RefCell<AudioDom>>,
    raf_id: Rc<RefCell<Option<i32>>>,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let path = toggle.borrow_mut().frame(timestamp_ms);
        match path {
            Some(d) => {
                audio_dom.borrow().set_path(&d);
                if let Some(w) = web::window() {
                    if let Ok(id) = w.request_animation_frame(
                        tick_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_tick.borrow_mut() = Some(id);
                    }
                }
            }
            None => {
                *raf_id_tick.borrow_mut() = None;
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            *raf_id.borrow_mut() = Some(id);
        }
    }
}

pub fn cancel_wave_loop(raf_id: &Rc<RefCell<Option<i32>>>) {
    if let Some(id) = raf_id.borrow_mut().take() {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(id);
        }
    }
}
