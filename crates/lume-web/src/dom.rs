use crate::input;
use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
pub fn document() -> Result<web::Document> {
    window()?.document().ok_or_else(|| anyhow!("no document"))
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!(format!("#{id}: {:?}", e)))
}

pub fn html_element_by_selector(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!(format!("{selector}: {:?}", e)))?
        .ok_or_else(|| anyhow!("missing {selector}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!(format!("{selector}: {:?}", e)))
}

pub fn html_elements_by_selector(
    document: &web::Document,
    selector: &str,
) -> Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!(format!("{selector}: {:?}", e)))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// All page elements the effects touch, resolved once at startup.
pub struct PageElements {
    pub cursor_inner: web::HtmlElement,
    pub cursor_outer: web::HtmlElement,
    pub burger: web::Element,
    pub menu: web::HtmlElement,
    pub logo: web::HtmlElement,
    pub menu_items: Vec<web::HtmlElement>,
    pub scroll_wrapper: web::HtmlElement,
    pub scroll_text: web::HtmlElement,
    pub column_left: web::HtmlElement,
    pub column_right: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub music_toggle: web::HtmlElement,
    pub audio: web::HtmlAudioElement,
    pub wave_path: web::Element,
}

impl PageElements {
    pub fn resolve(document: &web::Document) -> Result<Self> {
        let canvas = element_by_id(document, "ripple-canvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!(format!("#ripple-canvas: {:?}", e)))?;
        let audio = element_by_id(document, "bgAudio")?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow!(format!("#bgAudio: {:?}", e)))?;
        Ok(Self {
            cursor_inner: html_element_by_id(document, "cursor-inner")?,
            cursor_outer: html_element_by_id(document, "cursor-outer")?,
            burger: element_by_id(document, "burger")?,
            menu: html_element_by_id(document, "menu")?,
            logo: html_element_by_id(document, "logo")?,
            menu_items: html_elements_by_selector(document, ".menu nav ul li")?,
            scroll_wrapper: html_element_by_selector(document, ".scroll-wrapper")?,
            scroll_text: html_element_by_selector(document, ".scroll-text")?,
            column_left: html_element_by_selector(document, ".column-left")?,
            column_right: html_element_by_selector(document, ".column-right")?,
            canvas,
            music_toggle: html_element_by_id(document, "musicToggle")?,
            audio,
            wave_path: element_by_id(document, "wavePath")?,
        })
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_window_mouse_listener(
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(w) = web::window() {
        let closure =
            Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
        let _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_document_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Ok(d) = document() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = d.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
