//! Pure UI helpers extracted from components for non-wasm testing.

use crate::breakpoints::Breakpoint;
use astral_api_models::HealthState;

/// Navigation chrome selected from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLayout {
    /// Desktop/tablet sidebar.
    Sidebar,
    /// Mobile bottom tab bar.
    TabBar,
}

/// Pick the navigation layout for a breakpoint. Tablet (`md`) and up get the
/// sidebar; phones get the bottom tab bar.
#[must_use]
pub fn nav_layout(breakpoint: Breakpoint) -> NavLayout {
    if breakpoint.min_width >= crate::breakpoints::MD.min_width {
        NavLayout::Sidebar
    } else {
        NavLayout::TabBar
    }
}

/// CSS tone class for a health state pill.
#[must_use]
pub const fn status_tone(state: HealthState) -> &'static str {
    match state {
        HealthState::Healthy => "ok",
        HealthState::Degraded => "warn",
        HealthState::Unhealthy => "error",
        HealthState::Unknown => "subtle",
    }
}

/// Format a duration in seconds as whole milliseconds, e.g. `32 ms`.
#[must_use]
pub fn format_millis(seconds: f64) -> String {
    format!("{:.0} ms", seconds * 1000.0)
}

/// Format a duration in seconds as milliseconds with two decimals,
/// e.g. `31.68 ms`.
#[must_use]
pub fn format_millis_precise(seconds: f64) -> String {
    format!("{:.2} ms", seconds * 1000.0)
}

/// Group a count with thin separators for stat cards, e.g. `12 304`.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('\u{2009}');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints;

    #[test]
    fn sidebar_from_tablet_up() {
        assert_eq!(nav_layout(breakpoints::XS), NavLayout::TabBar);
        assert_eq!(nav_layout(breakpoints::SM), NavLayout::TabBar);
        assert_eq!(nav_layout(breakpoints::MD), NavLayout::Sidebar);
        assert_eq!(nav_layout(breakpoints::LG), NavLayout::Sidebar);
    }

    #[test]
    fn tones_cover_every_state() {
        assert_eq!(status_tone(HealthState::Healthy), "ok");
        assert_eq!(status_tone(HealthState::Degraded), "warn");
        assert_eq!(status_tone(HealthState::Unhealthy), "error");
        assert_eq!(status_tone(HealthState::Unknown), "subtle");
    }

    #[test]
    fn millis_formatting_rounds_as_displayed() {
        assert_eq!(format_millis(0.032), "32 ms");
        assert_eq!(format_millis(0.0), "0 ms");
        assert_eq!(format_millis_precise(0.031_68), "31.68 ms");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1204), "1\u{2009}204");
        assert_eq!(format_count(1_000_000), "1\u{2009}000\u{2009}000");
    }
}
