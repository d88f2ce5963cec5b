#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::site_header::{register_nav, NavBuilder};
use ui::components::SiteHeader;
use ui::core::nav::{register_navigator, NavTarget};
use ui::views::{Contact, DestinationInfo, Destinations, Home, Journal, Reservations};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Wayfarer – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_destinations(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Destinations {}, "{label}" })
}
fn nav_journal(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Journal {}, "{label}" })
}
fn nav_contact(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Contact {}, "{label}" })
}

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

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide a global reactive language code signal (mirrors the web
    // approach). The shared SiteHeader updates this via context on language
    // selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register navigation (links + programmatic dispatch) for this shell
    register_navigator(dispatch);
    register_nav(NavBuilder {
        home: nav_home,
        destinations: nav_destinations,
        journal: nav_journal,
        contact: nav_contact,
    });

    // Runtime maximize fallback (in case the initial builder maximize is
    // ignored by the window manager)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline the embedded theme (no external file dependency for
        // desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div forces a full remount on language change; the
        // hidden marker keeps an explicit reactive dependency on the signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

/// A desktop-specific layout wrapping every page in the shared `SiteHeader`,
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        SiteHeader { }

        Outlet::<Route> {}
    }
}
