//! Bilingual path translation and the persisted language preference.
//!
//! The site publishes every page under `/en/` and `/es/` roots; the switcher
//! maps the current path to its counterpart through a closed table.

use std::collections::HashMap;

use web_sys::console;

/// LocalStorage key holding the visitor's language choice. Written here,
/// consumed at page render outside this crate.
pub const STORAGE_KEY: &str = "preferredLanguage";

/// Root path prefix of the Spanish half of the site.
pub const SPANISH_ROOT: &str = "/es/";

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Lang {
    /// Two-letter code, the exact value persisted to storage.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Infer the language from a site path: Spanish under `/es/`, English
    /// everywhere else.
    pub fn for_path(path: &str) -> Self {
        if path.starts_with(SPANISH_ROOT) {
            Lang::Es
        } else {
            Lang::En
        }
    }
}

/// Map of translated route pairs. Every key and value carries a trailing
/// slash; lookups must normalize first.
pub fn path_map() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("/en/", "/es/"),
        ("/en/places-to-stay/", "/es/lugares-para-hospedarse/"),
        ("/es/", "/en/"),
        ("/es/lugares-para-hospedarse/", "/en/places-to-stay/"),
    ])
}

/// Append a trailing slash when absent, matching the table's key form.
pub fn normalize_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Translated counterpart of `path`, or `None` when the page has no pair and
/// the switcher must be left alone.
pub fn translate_path(path: &str) -> Option<&'static str> {
    path_map().get(normalize_path(path).as_str()).copied()
}

/// Persist the language choice. Storage being unavailable or full is logged
/// and swallowed; navigation proceeds regardless.
pub fn save_preference(lang: Lang) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    let Some(storage) = storage else {
        console::warn_1(&"Could not save language preference: storage unavailable".into());
        return;
    };
    if let Err(err) = storage.set_item(STORAGE_KEY, lang.code()) {
        console::warn_2(&"Could not save language preference:".into(), &err);
    }
}
