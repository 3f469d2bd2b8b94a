use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "p-8 text-center",
            h1 { class: "text-xl font-semibold", "Page not found" }
            p { class: "text-sm text-neutral-500 my-4", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to the store" }
        }
    }
}
