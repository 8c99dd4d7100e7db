//! Shared UI crate for llmbench. The benchmark logic and every view live here; the
//! platform crates only launch it.

use dioxus::prelude::*;

pub mod benchmark;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared theme (ui/assets/theme/main.css).
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
