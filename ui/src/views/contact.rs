use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let email = crate::t!("contact-email");

    rsx! {
        section { class: "page page-contact",
            div { style: "display:none", "{_lang_marker}" }
            h1 { {crate::t!("contact-title")} }
            p { class: "page__lead", {crate::t!("contact-intro")} }
            p {
                a { class: "page__mail", href: "mailto:{email}", "{email}" }
            }
        }
    }
}
