use dioxus::prelude::*;

use crate::browse::destination_card;
use crate::core::catalog;
use crate::core::nav::{self, NavTarget};

/// The full catalogue page: every destination as a plain grid, no entrance
/// choreography. "See more" from the home browser lands here.
#[component]
pub fn Destinations() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-destinations",
            div { style: "display:none", "{_lang_marker}" }
            h1 { {crate::t!("destinations-title")} }
            p { class: "page__lead", {crate::t!("destinations-intro")} }

            div { class: "catalog-grid",
                for dest in catalog::destinations().iter() {
                    div { key: "{dest.id}", class: "catalog-grid__slot",
                        {destination_card(
                            dest,
                            |id| nav::navigate(NavTarget::DestinationInfo { id }),
                            || nav::navigate(NavTarget::Reservations),
                        )}
                    }
                }
            }
        }
    }
}
