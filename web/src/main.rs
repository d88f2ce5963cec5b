use dioxus::prelude::*;

use ui::components::site_header::{register_nav, NavBuilder};
use ui::components::SiteHeader;
use ui::core::nav::{register_navigator, NavTarget};
use ui::views::{Contact, DestinationInfo, Destinations, Home, Journal, Reservations};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/destinations")]
    Destinations {},
    #[route("/destinations/:id")]
    DestinationInfo { id: u32 },
    #[route("/journal")]
    Journal {},
    #[route("/contact")]
    Contact {},
    #[route("/reservations")]
    Reservations {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_destinations(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Destinations {},
        "{label}"
    })
}
fn nav_journal(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Journal {},
        "{label}"
    })
}
fn nav_contact(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Contact {},
        "{label}"
    })
}

/// Programmatic navigation for the ui crate's fire-and-forget dispatches
/// (reserve CTAs, card selection, "see more").
fn dispatch(target: NavTarget) {
    let route = match target {
        NavTarget::Home => Route::Home {},
        NavTarget::Destinations => Route::Destinations {},
        NavTarget::DestinationInfo { id } => Route::DestinationInfo { id },
        NavTarget::Journal => Route::Journal {},
        NavTarget::Contact => Route::Contact {},
        NavTarget::Reservations => Route::Reservations {},
    };
    let _ = navigator().push(route);
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_navigator(dispatch);
        // Register the localized navigation link builder
        register_nav(NavBuilder {
            home: nav_home,
            destinations: nav_destinations,
            journal: nav_journal,
            contact: nav_contact,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: ui::LOGO }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout wrapping every page in the shared `SiteHeader`,
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteHeader { }
        Outlet::<Route> {}
    }
}
