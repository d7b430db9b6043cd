//! Thin wrappers over the `web_sys` calls the widgets share.
//!
//! Everything here degrades to a logged no-op when the DOM is unavailable,
//! so components never unwrap a `window()` or `document()` themselves.

use chrono::NaiveDate;
use common::model::theme::ThemePreference;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};
use yew::platform::spawn_local;

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("Could not show alert: {message}");
            }
        }
        None => log::warn!("No window to alert: {message}"),
    }
}

/// Local calendar date of the browser.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or(NaiveDate::MIN)
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `(scroll_top, scroll_height, client_height)` of the document element.
pub fn page_metrics() -> (f64, f64, f64) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => (
            scroll_y(),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        ),
        None => (0.0, 0.0, 0.0),
    }
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Document offset of the element with `id`, if it is on the page.
pub fn element_offset_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(f64::from(element.offset_top()))
}

/// Mirrors the theme onto `<html data-theme="...">` so the stylesheet can react.
pub fn apply_theme(theme: ThemePreference) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if root.set_attribute("data-theme", theme.as_str()).is_err() {
                log::warn!("Could not apply theme {}", theme.as_str());
            }
        }
        None => log::warn!("No document element to apply theme to"),
    }
}

/// Short-lived message pinned to the bottom of the viewport.
pub fn show_toast(message: &str, duration_ms: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// A `window` event listener that is detached when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<H>(event: &'static str, handler: H) -> Option<Self>
    where
        H: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Could not listen for {event}");
            return None;
        }
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// Trailing-edge debounce: only the last call within `wait_ms` runs.
pub struct Debouncer {
    wait_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the previous timeout cancels it.
        self.pending = Some(Timeout::new(self.wait_ms, action));
    }
}

/// Fires `on_visible` once, the first time `element` enters the viewport.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn observe_once<V>(element: &Element, threshold: f64, on_visible: V) -> Option<Self>
    where
        V: FnOnce() + 'static,
    {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    observer.disconnect();
                    if let Some(notify) = on_visible.take() {
                        notify();
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(_) => {
                log::warn!("IntersectionObserver is unavailable");
                return None;
            }
        };
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
