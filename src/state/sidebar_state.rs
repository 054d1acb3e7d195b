use std::fmt;

/// Persisted sidebar layout preference
///
/// Only one value is stored at a time. `Unset` is never written; it is
/// represented by the absence of the storage key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SidebarState {
    #[default]
    Unset,
    DesktopCollapsed,
    MobileOpen,
    MobileClosed,
}

impl SidebarState {
    pub const ALL: [SidebarState; 4] = [
        SidebarState::Unset,
        SidebarState::DesktopCollapsed,
        SidebarState::MobileOpen,
        SidebarState::MobileClosed,
    ];

    /// Storage label, or `None` for `Unset`
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::DesktopCollapsed => Some("desktop_collapsed"),
            Self::MobileOpen => Some("mobile_open"),
            Self::MobileClosed => Some("mobile_closed"),
        }
    }

    /// Parse a stored label. Anything unrecognized reads as `Unset`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "desktop_collapsed" => Self::DesktopCollapsed,
            "mobile_open" => Self::MobileOpen,
            "mobile_closed" => Self::MobileClosed,
            _ => Self::Unset,
        }
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("default"))
    }
}

/// Viewport classification relative to the mobile breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    /// A width equal to the breakpoint still counts as mobile
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for state in SidebarState::ALL {
            let parsed = state
                .label()
                .map(SidebarState::from_label)
                .unwrap_or_default();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn test_unrecognized_label_is_unset() {
        assert_eq!(SidebarState::from_label(""), SidebarState::Unset);
        assert_eq!(SidebarState::from_label("collapsed"), SidebarState::Unset);
        assert_eq!(
            SidebarState::from_label("DESKTOP_COLLAPSED"),
            SidebarState::Unset
        );
    }

    #[test]
    fn test_display_uses_default_for_unset() {
        assert_eq!(SidebarState::Unset.to_string(), "default");
        assert_eq!(SidebarState::MobileOpen.to_string(), "mobile_open");
    }

    #[test]
    fn test_viewport_breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::from_width(1024.0, 1024.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(1024.5, 1024.0), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(800.0, 1024.0), ViewportMode::Mobile);
        assert!(ViewportMode::from_width(375.0, 1024.0).is_mobile());
        assert!(!ViewportMode::from_width(1280.0, 1024.0).is_mobile());
    }
}
