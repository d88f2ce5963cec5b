use dioxus::prelude::*;

use crate::browse::rating::StarRating;
use crate::browse::star_row;
use crate::core::catalog;
use crate::core::nav::{self, NavTarget};

#[cfg(debug_assertions)]
fn log_detail(dest: &catalog::Destination) {
    println!(
        "[views] destination detail: {}",
        serde_json::to_string(dest).unwrap_or_default()
    );
}

/// Detail page for a single destination, addressed by its routing id. An id
/// with no catalog entry renders a notice instead; resolution is the routing
/// collaborator's concern, not validated here.
#[component]
pub fn DestinationInfo(id: u32) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let dest = catalog::destination_by_id(id);

    #[cfg(debug_assertions)]
    if let Some(dest) = dest {
        log_detail(dest);
    }

    rsx! {
        section { class: "page page-destination-info",
            div { style: "display:none", "{_lang_marker}" }
            if let Some(dest) = dest {
                article { class: "destination-detail",
                    img {
                        class: "destination-detail__image",
                        src: "{dest.image}",
                        alt: "{dest.name}",
                    }
                    div { class: "destination-detail__body",
                        h1 { "{dest.name}" }
                        p { class: "destination-detail__location", "{dest.location}" }
                        div { class: "destination-detail__rating",
                            {star_row(StarRating::from_score(dest.reviews))}
                            span { class: "destination-detail__score", "{dest.reviews}" }
                        }
                        p { class: "destination-detail__price", "{dest.price}" }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| nav::navigate(NavTarget::Reservations),
                            {crate::t!("browse-reserve")}
                        }
                    }
                }
            } else {
                p { class: "page__notice", {crate::t!("destination-missing")} }
            }
        }
    }
}
