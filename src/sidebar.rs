// Sidebar layout store - persisted preference reconciled against the page

mod events;
pub mod reconcile;

pub use events::{ClickTarget, Readiness, SidebarEvent};

use std::time::Duration;

use crate::config::Config;
use crate::page::{self, Page, PageElement};
use crate::state::{SidebarState, Storage, ViewportMode};
use crate::timer::{Timer, TimerId};
use reconcile::LayoutPlan;

/// Single source of truth for the sidebar layout preference
///
/// Owns the storage key and the capabilities it works through. Hosts feed
/// lifecycle events into [`SidebarStore::handle`]; other components use
/// [`get`](Self::get), [`set`](Self::set), [`apply`](Self::apply) and
/// [`is_mobile`](Self::is_mobile) directly.
pub struct SidebarStore<S, P, T> {
    storage: S,
    page: P,
    timer: T,
    key: String,
    mobile_breakpoint: f64,
    resize_debounce: Duration,
    transition_restore: Duration,
    /// Last value `set` could not persist, valid for this page view only
    fallback: Option<SidebarState>,
    pending_resize: Option<TimerId>,
    pending_restore: Option<TimerId>,
    /// Elements currently carrying `no-transition`
    suspended: Vec<PageElement>,
}

impl<S: Storage, P: Page, T: Timer> SidebarStore<S, P, T> {
    pub fn new(storage: S, page: P, timer: T, config: &Config) -> Self {
        Self {
            storage,
            page,
            timer,
            key: config.storage.key.clone(),
            mobile_breakpoint: config.layout.mobile_breakpoint,
            resize_debounce: config.layout.resize_debounce(),
            transition_restore: config.layout.transition_restore(),
            fallback: None,
            pending_resize: None,
            pending_restore: None,
            suspended: Vec::new(),
        }
    }

    /// Read the persisted preference
    ///
    /// Absent or unrecognized values read as `Unset`. A value a failed `set`
    /// kept in memory wins over storage until a later `set` succeeds.
    pub fn get(&self) -> SidebarState {
        if let Some(state) = self.fallback {
            return state;
        }
        match self.storage.get_item(&self.key) {
            Ok(Some(label)) => SidebarState::from_label(&label),
            Ok(None) => SidebarState::Unset,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Failed to read sidebar state");
                SidebarState::Unset
            }
        }
    }

    /// Persist the preference; `Unset` removes the key
    pub fn set(&mut self, state: SidebarState) {
        let result = match state.label() {
            Some(label) => self.storage.set_item(&self.key, label),
            None => self.storage.remove_item(&self.key),
        };
        match result {
            Ok(()) => {
                self.fallback = None;
                tracing::debug!(%state, "Sidebar state saved");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    %state,
                    "Failed to save sidebar state, keeping it for this page view only"
                );
                self.fallback = Some(state);
            }
        }
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        ViewportMode::from_width(self.page.viewport_width(), self.mobile_breakpoint)
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_mode().is_mobile()
    }

    /// Reconcile the page with the stored preference without animation
    pub fn apply(&mut self) {
        let mode = self.viewport_mode();
        let state = self.get();
        self.apply_instantly(reconcile::plan(mode, state));
        tracing::debug!(%state, ?mode, "Sidebar state applied");
    }

    /// Forget the stored preference and fall back to the default layout
    pub fn reset(&mut self) {
        self.set(SidebarState::Unset);
        self.apply();
    }

    /// Debounced resize reconciliation
    fn apply_after_resize(&mut self) {
        let mode = self.viewport_mode();
        let state = self.get();
        self.apply_instantly(reconcile::plan_after_resize(mode, state));
        tracing::debug!(%state, ?mode, "Sidebar state applied after resize");
    }

    /// Suspend transitions, write the plan, then schedule the restore
    fn apply_instantly(&mut self, plan: LayoutPlan) {
        if !self.page.exists(PageElement::Sidebar) {
            tracing::debug!("Sidebar element missing, skipping reconciliation");
            return;
        }

        self.suspend_transitions();
        self.write_plan(plan);
        if let Some(id) = self.pending_restore.take() {
            self.timer.cancel(id);
        }
        self.pending_restore = Some(self.timer.schedule(self.transition_restore));
    }

    /// Write the plan with transitions enabled
    fn animate(&mut self, plan: LayoutPlan, state: SidebarState) {
        if !self.page.exists(PageElement::Sidebar) {
            tracing::debug!("Sidebar element missing, ignoring sidebar action");
            return;
        }

        self.resume_transitions();
        self.write_plan(plan);
        self.set(state);
    }

    fn suspend_transitions(&mut self) {
        for element in PageElement::ANIMATED {
            if self.page.exists(element) {
                self.page.add_class(element, page::NO_TRANSITION);
                if !self.suspended.contains(&element) {
                    self.suspended.push(element);
                }
            }
        }
    }

    fn resume_transitions(&mut self) {
        if let Some(id) = self.pending_restore.take() {
            self.timer.cancel(id);
        }
        for element in std::mem::take(&mut self.suspended) {
            self.page.remove_class(element, page::NO_TRANSITION);
        }
    }

    fn write_plan(&mut self, plan: LayoutPlan) {
        let target = &mut self.page;
        if let Some(collapsed) = plan.collapsed {
            target.set_class(PageElement::Sidebar, page::COLLAPSED, collapsed);
        }
        if let Some(active) = plan.active {
            target.set_class(PageElement::Sidebar, page::ACTIVE, active);
        }
        if let Some(collapsed) = plan.frame_collapsed {
            for element in PageElement::FRAME {
                if target.exists(element) {
                    target.set_class(element, page::SIDEBAR_COLLAPSED, collapsed);
                }
            }
        }
        if let Some(visible) = plan.overlay_visible {
            if target.exists(PageElement::Overlay) {
                target.set_visible(PageElement::Overlay, visible);
            }
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[cfg(test)]
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    #[cfg(test)]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
