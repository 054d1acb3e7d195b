//! Pure layout planning.
//!
//! Every handler in the store is split in two: a function here that maps
//! (viewport mode, stored state, current classes) to a [`LayoutPlan`] and the
//! state to persist, and the store code that writes the plan to the page.

use crate::state::{SidebarState, ViewportMode};

/// Class changes for one reconciliation; `None` leaves a target untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutPlan {
    /// `collapsed` on the sidebar
    pub collapsed: Option<bool>,
    /// `active` on the sidebar
    pub active: Option<bool>,
    /// `sidebar-collapsed` on navbar and main content
    pub frame_collapsed: Option<bool>,
    pub overlay_visible: Option<bool>,
}

/// The sidebar classes a user toggle reads before flipping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarClasses {
    pub collapsed: bool,
    pub active: bool,
}

/// Layout for a stored preference in the given viewport mode
pub fn plan(mode: ViewportMode, state: SidebarState) -> LayoutPlan {
    match mode {
        ViewportMode::Desktop => {
            let collapsed = state == SidebarState::DesktopCollapsed;
            LayoutPlan {
                collapsed: Some(collapsed),
                active: Some(false),
                frame_collapsed: Some(collapsed),
                overlay_visible: Some(false),
            }
        }
        ViewportMode::Mobile => {
            let open = state == SidebarState::MobileOpen;
            LayoutPlan {
                collapsed: Some(false),
                active: Some(open),
                frame_collapsed: None,
                overlay_visible: Some(open),
            }
        }
    }
}

/// Layout after a resize settles: on mobile the desktop frame classes are
/// cleared as well, so a collapsed desktop frame never survives on mobile.
pub fn plan_after_resize(mode: ViewportMode, state: SidebarState) -> LayoutPlan {
    let mut plan = plan(mode, state);
    if mode.is_mobile() {
        plan.frame_collapsed = Some(false);
    }
    plan
}

/// Flip the flag of the current mode only
pub fn toggle(mode: ViewportMode, current: SidebarClasses) -> (LayoutPlan, SidebarState) {
    match mode {
        ViewportMode::Desktop => {
            let collapsed = !current.collapsed;
            let plan = LayoutPlan {
                collapsed: Some(collapsed),
                frame_collapsed: Some(collapsed),
                ..LayoutPlan::default()
            };
            let state = if collapsed {
                SidebarState::DesktopCollapsed
            } else {
                SidebarState::Unset
            };
            (plan, state)
        }
        ViewportMode::Mobile => {
            let open = !current.active;
            let plan = LayoutPlan {
                active: Some(open),
                overlay_visible: Some(open),
                ..LayoutPlan::default()
            };
            let state = if open {
                SidebarState::MobileOpen
            } else {
                SidebarState::MobileClosed
            };
            (plan, state)
        }
    }
}

/// Overlay click or outside click
pub fn close_mobile() -> (LayoutPlan, SidebarState) {
    let plan = LayoutPlan {
        active: Some(false),
        overlay_visible: Some(false),
        ..LayoutPlan::default()
    };
    (plan, SidebarState::MobileClosed)
}
