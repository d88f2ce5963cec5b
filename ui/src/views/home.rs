use dioxus::prelude::*;

use crate::browse::DestinationBrowser;
use crate::core::nav::{self, NavTarget};

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__title", {crate::t!("home-title")} }
                p { class: "hero__lead", {crate::t!("home-lead")} }
                button {
                    r#type: "button",
                    class: "button button--accent hero__cta",
                    onclick: move |_| nav::navigate(NavTarget::Reservations),
                    {crate::t!("nav-reserve-cta")}
                }
            }

            DestinationBrowser {}
        }
    }
}
