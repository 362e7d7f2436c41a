//! Navbar controller: mobile menu toggle, scroll-triggered styling, mobile
//! dropdowns, and the bilingual language switcher.
//!
//! All wiring attaches to markup owned by the host pages. The navbar fragment
//! is injected by an external loader, which dispatches [`NAVBAR_READY_EVENT`]
//! on the document once the markup exists; [`install`] initializes on that
//! signal (and immediately when the markup is already present). Every
//! listener that initialization binds is tracked in a registry so that a
//! repeat signal detaches the stale handler before attaching a fresh one.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, console};

use crate::dom::query_all;
use crate::language::{self, Lang};

/// Scroll offset (in CSS pixels) past which the navigation gets the
/// `scrolled` style class.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport width at or below which dropdowns toggle on click instead of
/// navigating.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Event the navbar loader dispatches on the document once the fragment is in
/// the DOM.
pub const NAVBAR_READY_EVENT: &str = "navbar:ready";

const MENU_ID: &str = "navLinks";
const HAMBURGER_SELECTOR: &str = ".hamburger";
const NAV_SELECTOR: &str = "nav";
const DROPDOWN_TOGGLE_SELECTOR: &str = ".dropdown > a";
const DROPDOWN_ITEM_SELECTOR: &str = ".dropdown-content a";
const ACTIVE_CLASS: &str = "active";
const SCROLLED_CLASS: &str = "scrolled";

/// Parameters distinguishing the desktop and mobile language switchers. Both
/// run through the same routine; only the anchor selector and the menu-close
/// behavior differ.
#[derive(Debug, Clone, Copy)]
pub struct SwitcherOptions {
    /// Selector of the switcher anchor.
    pub selector: &'static str,
    /// Close the mobile menu before navigating.
    pub close_menu_on_switch: bool,
}

/// Desktop and mobile switcher variants, in initialization order.
const SWITCHERS: [SwitcherOptions; 2] = [
    SwitcherOptions {
        selector: ".language-switcher",
        close_menu_on_switch: false,
    },
    SwitcherOptions {
        selector: ".mobile-language-switcher",
        close_menu_on_switch: true,
    },
];

struct ListenerSlot {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

thread_local! {
    static LISTENERS: RefCell<HashMap<String, ListenerSlot>> = RefCell::new(HashMap::new());
}

/// Detach whatever listener is registered under `key`, then attach `closure`
/// to `target` and record it. Keeps repeated initialization from stacking
/// handlers.
fn rebind_listener(
    key: String,
    target: &EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
) -> Result<(), JsValue> {
    LISTENERS.with(|cell| {
        let mut slots = cell.borrow_mut();
        if let Some(previous) = slots.remove(&key) {
            previous.target.remove_event_listener_with_callback_and_bool(
                previous.event,
                previous.closure.as_ref().unchecked_ref(),
                previous.capture,
            )?;
        }
        target.add_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            capture,
        )?;
        slots.insert(
            key,
            ListenerSlot {
                target: target.clone(),
                event,
                capture,
                closure,
            },
        );
        Ok(())
    })
}

/// Whether the navigation should carry the scrolled style at this offset.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Whether dropdowns use click-to-toggle at this viewport width.
pub fn is_mobile_width(inner_width: f64) -> bool {
    inner_width <= MOBILE_MAX_WIDTH
}

fn with_menu(apply: impl Fn(&Element, &Element)) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(links) = document.get_element_by_id(MENU_ID) else {
        return;
    };
    let Some(hamburger) = document.query_selector(HAMBURGER_SELECTOR).ok().flatten() else {
        return;
    };
    apply(&links, &hamburger);
}

/// Flip the mobile menu open or closed. No-op when the menu markup is absent.
/// Exported so inline `onclick` handlers in the navbar fragment keep working.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() {
    with_menu(|links, hamburger| {
        let _ = links.class_list().toggle(ACTIVE_CLASS);
        let _ = hamburger.class_list().toggle(ACTIVE_CLASS);
    });
}

/// Close the mobile menu. No-op when the menu markup is absent.
#[wasm_bindgen(js_name = closeMenu)]
pub fn close_menu() {
    with_menu(|links, hamburger| {
        let _ = links.class_list().remove_1(ACTIVE_CLASS);
        let _ = hamburger.class_list().remove_1(ACTIVE_CLASS);
    });
}

/// Set or clear the scrolled style on `nav` for the given offset. Idempotent.
pub fn apply_scroll_state(nav: &Element, scroll_y: f64) {
    if is_scrolled(scroll_y) {
        let _ = nav.class_list().add_1(SCROLLED_CLASS);
    } else {
        let _ = nav.class_list().remove_1(SCROLLED_CLASS);
    }
}

/// Install the controller: initialize now if the navbar markup is already in
/// the document, and (re)initialize whenever the loader signals readiness.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let ready_document = document.clone();
    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(err) = init(&ready_document) {
            console::error_1(&err);
        }
    });
    let target: &EventTarget = document.as_ref();
    target.add_event_listener_with_callback(NAVBAR_READY_EVENT, on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();

    if document.query_selector(NAV_SELECTOR)?.is_some() {
        init(document)?;
    }
    Ok(())
}

/// Wire every navbar behavior. Safe to call again after the fragment is
/// re-injected; stale handlers are detached through the listener registry.
pub fn init(document: &Document) -> Result<(), JsValue> {
    init_scroll_state(document)?;
    init_dropdowns(document)?;
    for options in SWITCHERS {
        init_switcher(document, options)?;
    }
    Ok(())
}

fn init_scroll_state(document: &Document) -> Result<(), JsValue> {
    let Some(nav) = document.query_selector(NAV_SELECTOR)? else {
        return Ok(());
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let scroll_window = window.clone();
    let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        apply_scroll_state(&nav, scroll_y);
    });
    let target: &EventTarget = window.as_ref();
    rebind_listener("nav-scroll".to_string(), target, "scroll", false, on_scroll)
}

fn init_dropdowns(document: &Document) -> Result<(), JsValue> {
    for (index, toggle) in query_all(document, DROPDOWN_TOGGLE_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mobile = web_sys::window()
                .and_then(|window| window.inner_width().ok())
                .and_then(|width| width.as_f64())
                .is_some_and(is_mobile_width);
            if !mobile {
                return;
            }
            event.prevent_default();
            let dropdown = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|link| link.parent_element());
            if let Some(dropdown) = dropdown {
                let _ = dropdown.class_list().toggle(ACTIVE_CLASS);
            }
        });
        let target: &EventTarget = toggle.as_ref();
        rebind_listener(
            format!("dropdown-toggle-{index}"),
            target,
            "click",
            false,
            on_click,
        )?;
    }

    for (index, item) in query_all(document, DROPDOWN_ITEM_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| close_menu());
        let target: &EventTarget = item.as_ref();
        rebind_listener(
            format!("dropdown-item-{index}"),
            target,
            "click",
            false,
            on_click,
        )?;
    }
    Ok(())
}

/// Point the switcher anchor at the translated counterpart of the current
/// `location.pathname` and bind the navigation handler.
fn init_switcher(document: &Document, options: SwitcherOptions) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let current_path = window.location().pathname()?;
    init_switcher_at(document, options, &current_path)
}

/// Switcher wiring for an explicit current path. A path outside the
/// translation table leaves the anchor untouched and binds nothing.
fn init_switcher_at(
    document: &Document,
    options: SwitcherOptions,
    current_path: &str,
) -> Result<(), JsValue> {
    let Some(anchor) = document.query_selector(options.selector)? else {
        return Ok(());
    };
    let Some(target_path) = language::translate_path(current_path) else {
        return Ok(());
    };

    anchor.set_attribute("href", target_path)?;
    anchor.remove_attribute("onclick")?;

    let lang = Lang::for_path(target_path);
    let close_first = options.close_menu_on_switch;
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        language::save_preference(lang);
        if close_first {
            close_menu();
        }
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(target_path) {
                console::error_1(&err);
            }
        }
    });
    let target: &EventTarget = anchor.as_ref();
    rebind_listener(options.selector.to_string(), target, "click", true, on_click)
}
