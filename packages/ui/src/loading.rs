use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center min-h-[50vh] text-neutral-500 text-sm",
            div { class: "spinner mr-2" }
            "{label}"
        }
    }
}
