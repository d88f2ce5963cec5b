//! Navigation dispatch capability.
//!
//! The `ui` crate never touches a platform `Route` enum. Instead each shell
//! registers a dispatcher mapping [`NavTarget`] onto its own router, and
//! components request navigation through [`navigate`]. Dispatch is
//! fire-and-forget: nothing here observes whether the push landed.

use once_cell::sync::OnceCell;

/// Every route the ui crate can ask the surrounding application to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Destinations,
    DestinationInfo { id: u32 },
    Journal,
    Contact,
    Reservations,
}

impl NavTarget {
    /// Canonical URL path for the target; both shells route on these.
    pub fn path(&self) -> String {
        match self {
            NavTarget::Home => "/".to_string(),
            NavTarget::Destinations => "/destinations".to_string(),
            NavTarget::DestinationInfo { id } => format!("/destinations/{id}"),
            NavTarget::Journal => "/journal".to_string(),
            NavTarget::Contact => "/contact".to_string(),
            NavTarget::Reservations => "/reservations".to_string(),
        }
    }
}

static NAVIGATOR: OnceCell<fn(NavTarget)> = OnceCell::new();

/// Install the shell's dispatcher. First registration wins; later calls are
/// ignored (mirrors how the nav link builder registers).
pub fn register_navigator(dispatch: fn(NavTarget)) {
    let _ = NAVIGATOR.set(dispatch);
}

/// Fire-and-forget navigation request. With no dispatcher registered (unit
/// tests, headless builds) the request is dropped.
pub fn navigate(target: NavTarget) {
    if let Some(dispatch) = NAVIGATOR.get() {
        dispatch(target);
    } else {
        #[cfg(debug_assertions)]
        println!("[nav] no navigator registered, dropping {target:?}");
    }
}
