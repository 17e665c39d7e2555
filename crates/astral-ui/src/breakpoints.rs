//! Viewport tiers for the console's responsive chrome.
//!
//! The shell only switches layout at the tablet boundary (see
//! `core::logic::nav_layout`); the finer tiers are stamped on the document as
//! a `data-bp` attribute for stylesheet use.

/// Width tier with an inclusive minimum and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short identifier emitted as a `data-bp` attribute.
    pub name: &'static str,
    /// Inclusive minimum viewport width in CSS pixels.
    pub min_width: u16,
    /// Inclusive maximum width, open-ended for the widest tier.
    pub max_width: Option<u16>,
}

/// Phone portrait.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(479),
};
/// Phone landscape.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 480,
    max_width: Some(767),
};
/// Tablet; first tier with the sidebar layout.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1279),
};
/// Desktop.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1280,
    max_width: None,
};

/// Ordered tiers used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 4] = [XS, SM, MD, LG];

/// Find the tier matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.map_or(true, |max| width <= max))
        .unwrap_or(LG)
}
