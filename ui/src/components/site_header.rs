use crate::core::nav::{self, NavTarget};
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Header stylesheet (linked on every platform, inlined in release native)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand mark, shown in the header and reused by the shells as page icon.
pub const LOGO: Asset = asset!("/assets/logo.svg");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// Each closure receives the localized label and returns a link that already
/// contains that label as its child. Field order is menu display order.
///
/// Registration (in the platform crate, before rendering the root):
/// ```ignore
/// use ui::components::site_header::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     ...
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub destinations: fn(label: &str) -> Element,
    pub journal: fn(label: &str) -> Element,
    pub contact: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Two-valued mobile menu state. `toggle` alternates it; applied twice it is
/// back where it started. Above the viewport breakpoint the theme hides the
/// panel regardless of this flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

fn build_links(builder: &NavBuilder) -> Element {
    let home = (builder.home)(&t!("nav-home"));
    let destinations = (builder.destinations)(&t!("nav-destinations"));
    let journal = (builder.journal)(&t!("nav-journal"));
    let contact = (builder.contact)(&t!("nav-contact"));

    rsx! {
        {home}
        {destinations}
        {journal}
        {contact}
    }
}

#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let mut menu = use_signal(MenuState::closed);
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain the global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] SiteHeader render lang={}", code());
        } else {
            println!("[i18n] SiteHeader render lang=<none>");
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Propagate to the global language code signal if present.
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let nav_links: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        rsx! {
            nav { class: "navbar__links", {build_links(builder)} }
        }
        .expect("SiteHeader: rsx render failed")
    });
    let panel_links: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        rsx! {
            nav { class: "navbar__mobile-links", {build_links(builder)} }
        }
        .expect("SiteHeader: rsx render failed")
    });

    let tagline = t!("tagline");
    let is_open = menu().is_open();
    let panel_class = format!(
        "navbar__mobile {}",
        if is_open { "navbar__mobile--open" } else { "" }
    );

    rsx! {
        // Include the header stylesheet (and inline it in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures the header re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    img { class: "navbar__logo", src: LOGO, alt: "" }
                    span { class: "navbar__brand-mark", "Wayfarer" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                // Horizontal navigation (hidden below the breakpoint)
                if let Some(links) = nav_links {
                    {links}
                }

                div { class: "navbar__actions",
                    // Locale switcher
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }

                    // Desktop call-to-action (hidden below the breakpoint)
                    button {
                        r#type: "button",
                        class: "button button--accent navbar__reserve",
                        onclick: move |_| nav::navigate(NavTarget::Reservations),
                        {t!("nav-reserve-cta")}
                    }

                    // Hamburger (hidden at or above the breakpoint)
                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_expanded: if is_open { "true" } else { "false" },
                        onclick: move |_| menu.with_mut(|m| m.toggle()),
                        span { class: "visually-hidden", {t!("nav-menu-toggle")} }
                        span { class: "navbar__toggle-glyph", aria_hidden: "true",
                            if is_open { "✕" } else { "☰" }
                        }
                    }
                }
            }

            // Stacked mobile panel, gated by `MenuState` (and by the theme's
            // breakpoint rule above it).
            div { class: "{panel_class}",
                if let Some(links) = panel_links {
                    {links}
                }
                button {
                    r#type: "button",
                    class: "button button--primary navbar__mobile-reserve",
                    onclick: move |_| nav::navigate(NavTarget::Reservations),
                    {t!("nav-reserve-cta")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MenuState;

    #[test]
    fn toggle_alternates_and_double_toggle_returns_to_closed() {
        let mut menu = MenuState::closed();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }
}
