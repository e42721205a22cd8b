//! URL Fragment Access
//!
//! The active project lives in `location.hash` so views can be bookmarked.

use taskboard_core::fragment;

/// Decoded project name from the current fragment, empty if none.
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| fragment::decode(&hash))
        .unwrap_or_default()
}

pub fn set_fragment(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_hash(&fragment::encode(name)) {
        log::warn!("could not update location hash: {:?}", err);
    }
}
