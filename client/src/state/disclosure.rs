//! Two-state open/closed model for dropdowns, the mobile panel, and mobile
//! submenus.
//!
//! Input modality is decoupled from the transition: pointer, focus, and
//! keyboard handlers all map to a [`DisclosureTrigger`] and the state machine
//! decides the result.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Whether a dropdown, panel, or submenu is currently revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

/// User gestures that can change a [`Disclosure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureTrigger {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    /// Click, tap, Enter, or Space on the control.
    Activate,
    /// Escape or an explicit close control.
    Dismiss,
}

impl Disclosure {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Next state after `trigger`.
    #[must_use]
    pub fn apply(self, trigger: DisclosureTrigger) -> Self {
        match trigger {
            DisclosureTrigger::PointerEnter | DisclosureTrigger::FocusIn => Self::Open,
            DisclosureTrigger::PointerLeave | DisclosureTrigger::FocusOut | DisclosureTrigger::Dismiss => Self::Closed,
            DisclosureTrigger::Activate => self.toggled(),
        }
    }

    /// Direction indicator shown next to a label with a submenu.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Open => "▲",
            Self::Closed => "▼",
        }
    }

    /// Value for `aria-expanded`.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}
