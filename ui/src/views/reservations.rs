use dioxus::prelude::*;

/// Landing page for every reservation call-to-action in the header and the
/// destination cards.
#[component]
pub fn Reservations() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-reservations",
            div { style: "display:none", "{_lang_marker}" }
            h1 { {crate::t!("reservations-title")} }
            p { class: "page__lead", {crate::t!("reservations-intro")} }
            p { class: "page__notice", {crate::t!("reservations-note")} }
        }
    }
}
