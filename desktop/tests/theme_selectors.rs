#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the browse
  section, the destination cards and the header collapse) remain present in
  the unified shared theme (ui/assets/theme/main.css) and the header
  stylesheet (ui/assets/styling/navbar.css).
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

How it works:
- We compile‑time embed both stylesheets using `include_str!` pointing to the
  shared `ui/` locations (mirrors the constants in `desktop/src/main.rs` and
  `ui/src/components/site_header.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust the required-selector list here accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_THEME_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__lead",
    ".page__notice",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    // Hero
    ".hero__title",
    ".hero__cta",
    // Browse: narrow strip & indicator
    ".browse-strip",
    ".browse-strip__track",
    ".browse-strip__slide",
    ".browse-dots__dot",
    ".browse-dots__dot--active",
    // Browse: wide grid & entrance animation
    ".browse-grid",
    ".browse-grid__slot",
    ".browse-grid--visible .browse-grid__slot",
    // Destination cards & rating badge
    ".destination-card",
    ".destination-card__badge",
    ".destination-card__price",
    ".star-row",
    ".star-row__star--empty",
    // Catalog & detail pages
    ".catalog-grid",
    ".destination-detail",
    // Breakpoint gates (sanity check both sides of the switch exist)
    "@media (max-width: 768px)",
    "@media (min-width: 769px)",
];

/// Selectors the header component relies on.
const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
    ".navbar__reserve",
    ".navbar__toggle",
    ".navbar__mobile",
    ".navbar__mobile--open",
    ".navbar__mobile-reserve",
    ".visually-hidden",
    "@media (max-width: 768px)",
];

fn assert_selectors_present(css: &str, required: &[&str], file: &str) {
    let missing: Vec<&str> = required.iter().copied().filter(|sel| !css.contains(sel)).collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in {file}:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_contains_required_selectors() {
    assert_selectors_present(THEME_CSS, REQUIRED_THEME_SELECTORS, "ui/assets/theme/main.css");
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    assert_selectors_present(
        NAVBAR_CSS,
        REQUIRED_NAVBAR_SELECTORS,
        "ui/assets/styling/navbar.css",
    );
}

#[test]
fn stylesheets_not_trivially_empty() {
    let theme_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        theme_len > 4_000,
        "Embedded theme appears unexpectedly small ({theme_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );

    let navbar_len = NAVBAR_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        navbar_len > 1_500,
        "Navbar stylesheet appears unexpectedly small ({navbar_len} non-whitespace chars)"
    );
}
