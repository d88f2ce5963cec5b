use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::core::catalog::{self, Destination};
use crate::core::nav;
use crate::t;

use super::rating::StarRating;
use super::reveal::card_stagger_style;
use super::state::{BrowseEvent, BrowseState};

#[cfg(debug_assertions)]
fn log_dispatch(target: &nav::NavTarget) {
    println!(
        "[browse] dispatching {target:?} on {}",
        crate::core::platform::platform_string()
    );
}

/// Destination catalog section: every card rendered twice, once on the
/// narrow-viewport slide strip and once on the wide-viewport grid. The theme
/// gates which layout shows; both live in the tree.
#[component]
pub fn DestinationBrowser() -> Element {
    let destinations = catalog::destinations();
    let state = use_signal(move || BrowseState::new(destinations.len()));

    // Subscribe to the global language code (if provided) so labels refresh
    // on locale change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let coroutine = {
        let mut state_signal = state.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<BrowseEvent>| async move {
            while let Some(event) = rx.next().await {
                let target = state_signal.with_mut(|browse| browse.reduce(event));
                if let Some(target) = target {
                    #[cfg(debug_assertions)]
                    log_dispatch(&target);
                    nav::navigate(target);
                }
            }
        })
    };

    let browse = state();
    let current = browse.current_index();
    let track_offset = current * 100;
    let grid_class = format!(
        "browse-grid {}",
        if browse.grid_revealed() {
            "browse-grid--visible"
        } else {
            ""
        }
    );

    rsx! {
        section { class: "browse",
            // Hidden marker keeps a reactive dependency on the language signal.
            div { style: "display:none", "{_lang_marker}" }
            h2 { class: "browse__title", {t!("browse-title")} }

            // Narrow viewports: one card per slide plus the dot indicator.
            div { class: "browse__narrow",
                div {
                    class: "browse-strip",
                    onmounted: move |evt| async move {
                        if let Ok(rect) = evt.data().get_client_rect().await {
                            coroutine.send(BrowseEvent::StripResized(rect.size.width));
                        }
                    },
                    onpointerdown: move |evt| {
                        coroutine.send(BrowseEvent::DragStarted(evt.data().client_coordinates().x));
                    },
                    onpointerup: move |evt| {
                        coroutine.send(BrowseEvent::DragReleased(evt.data().client_coordinates().x));
                    },
                    onpointercancel: move |_| coroutine.send(BrowseEvent::DragCancelled),
                    div {
                        class: "browse-strip__track",
                        style: "transform: translateX(-{track_offset}%)",
                        for dest in destinations.iter() {
                            div { key: "{dest.id}", class: "browse-strip__slide",
                                {destination_card(
                                    dest,
                                    move |id| coroutine.send(BrowseEvent::CardPressed(id)),
                                    move || coroutine.send(BrowseEvent::ReservePressed),
                                )}
                            }
                        }
                    }
                }
                div { class: "browse-dots",
                    for (index, _) in destinations.iter().enumerate() {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: format!(
                                "browse-dots__dot {}",
                                if current == index { "browse-dots__dot--active" } else { "" }
                            ),
                            aria_label: t!("browse-dot-label", index = (index + 1).to_string()),
                            onclick: move |_| coroutine.send(BrowseEvent::DotPressed(index)),
                        }
                    }
                }
            }

            // Wide viewports: staggered grid behind the visibility observer.
            div { class: "browse__wide",
                div {
                    class: "{grid_class}",
                    onvisible: move |evt| {
                        if let Ok(ratio) = evt.data().get_intersection_ratio() {
                            coroutine.send(BrowseEvent::GridVisibility(ratio));
                        }
                    },
                    for (index, dest) in destinations.iter().enumerate() {
                        div {
                            key: "{dest.id}",
                            class: "browse-grid__slot",
                            style: card_stagger_style(index),
                            {destination_card(
                                dest,
                                move |id| coroutine.send(BrowseEvent::CardPressed(id)),
                                move || coroutine.send(BrowseEvent::ReservePressed),
                            )}
                        }
                    }
                }
            }

            div { class: "browse__footer",
                button {
                    r#type: "button",
                    class: "button button--accent browse__see-more",
                    onclick: move |_| coroutine.send(BrowseEvent::SeeMorePressed),
                    {t!("browse-see-more")}
                }
            }
        }
    }
}

/// One destination card. Shared between both browser layouts and the
/// catalog page; the callers decide where a card press goes.
pub(crate) fn destination_card(
    dest: &'static Destination,
    mut on_select: impl FnMut(u32) + 'static,
    mut on_reserve: impl FnMut() + 'static,
) -> Element {
    let id = dest.id;
    let badge_label = t!("browse-rating-label", score = format!("{:.1}", dest.reviews));

    rsx! {
        article {
            class: "destination-card",
            onclick: move |_| on_select(id),
            div { class: "destination-card__media",
                img {
                    class: "destination-card__image",
                    src: "{dest.image}",
                    alt: "{dest.name}",
                    draggable: "false",
                }
                span { class: "destination-card__badge", aria_label: badge_label,
                    {star_row(StarRating::from_score(dest.reviews))}
                }
            }
            div { class: "destination-card__body",
                h3 { class: "destination-card__name", "{dest.name}" }
                p { class: "destination-card__location",
                    span { class: "destination-card__pin", aria_hidden: "true", "📍" }
                    "{dest.location}"
                }
            }
            div { class: "destination-card__footer",
                span { class: "destination-card__price", "{dest.price}" }
                button {
                    r#type: "button",
                    class: "button button--primary destination-card__reserve",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_reserve();
                    },
                    {t!("browse-reserve")}
                }
            }
        }
    }
}

/// The five star slots, in badge order.
pub(crate) fn star_row(rating: StarRating) -> Element {
    rsx! {
        span { class: "star-row",
            for (position, slot) in rating.slots().enumerate() {
                span { key: "{position}", class: "{slot.css_class()}", "{slot.glyph()}" }
            }
        }
    }
}
