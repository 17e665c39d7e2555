#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! AstralAgent admin console front-end.
//!
//! A Yew application rendering the platform dashboard (health + metrics),
//! placeholder agent/workflow pages and a settings form. State, error
//! taxonomy and formatting helpers live in portable modules so they compile
//! and test natively; everything touching the browser is gated on wasm32.

pub mod breakpoints;
pub mod core;
pub mod features;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::breakpoints::{self, for_width};
    use crate::core::logic::{nav_layout, NavLayout};

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(for_width(0).name, breakpoints::XS.name);
        assert_eq!(for_width(480).name, breakpoints::SM.name);
        assert_eq!(for_width(768).name, breakpoints::MD.name);
        assert_eq!(for_width(1280).name, breakpoints::LG.name);
        assert_eq!(for_width(2000).name, breakpoints::LG.name);
    }

    #[test]
    fn narrow_widths_use_the_tab_bar() {
        assert_eq!(nav_layout(for_width(390)), NavLayout::TabBar);
        assert_eq!(nav_layout(for_width(768)), NavLayout::Sidebar);
        assert_eq!(nav_layout(for_width(1440)), NavLayout::Sidebar);
    }
}
