//! Shared UI crate for Wayfarer. Cross-platform views, components and the
//! static destination catalog live here.

use dioxus::prelude::*;

pub mod browse;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Site header with navigation, locale switcher and reservation CTA
    pub mod site_header;
    pub use site_header::register_nav;
    pub use site_header::NavBuilder;
    pub use site_header::SiteHeader;
}

/// Shared unified theme: linked by the web shell, embedded by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Brand mark, reused by the shells as the page icon.
pub use components::site_header::LOGO;
