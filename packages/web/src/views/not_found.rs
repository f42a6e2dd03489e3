use dioxus::prelude::*;

use crate::Route;

/// Catch-all: unknown paths are replaced with the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    let nav = use_navigator();
    nav.replace(Route::Hero {});
    rsx! {}
}
