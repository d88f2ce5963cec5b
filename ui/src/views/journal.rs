use dioxus::prelude::*;

#[component]
pub fn Journal() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-journal",
            div { style: "display:none", "{_lang_marker}" }
            h1 { {crate::t!("journal-title")} }
            p { class: "page__lead", {crate::t!("journal-intro")} }
        }
    }
}
